use hotel_desk::hotel::Hotel;
use hotel_desk::menu;

fn main() {
  env_logger::init();

  let mut hotel = Hotel::new();
  if let Err(err) = menu::run(&mut hotel) {
    eprintln!("terminal error: {}", err);
    std::process::exit(1);
  }
}
