use std::io::{self, BufRead, Write};

use log::warn;

use crate::error::HotelError;
use crate::export;
use crate::hotel::Hotel;
use crate::proto::BookingRequest;

const DEFAULT_SNAPSHOT_FILE: &str = "estado_habitaciones.csv";

const BOOKING_PROMPTS: [&str; 6] = [
  "Room code to book (e.g. 13, 34, 58): ",
  "Guest first name: ",
  "Guest last name: ",
  "Guest national id: ",
  "Check-in (YYYY-MM-DD HH:MM): ",
  "Check-out (YYYY-MM-DD HH:MM): ",
];

// Interactive loop over stdin/stdout. Failures are reported and the loop
// continues; it ends on option 6 or when the input stream is closed.
pub fn run(hotel: &mut Hotel) -> io::Result<()> {
  let stdin = io::stdin();
  let mut input = stdin.lock();

  loop {
    print_menu();
    let option = match prompt(&mut input, "Choose an option: ")? {
      Some(option) => option,
      None => return Ok(()),
    };

    match option.as_str() {
      "1" => {
        if let Err(err) = book_flow(hotel, &mut input)? {
          println!("{}", err);
        }
      }
      "2" => {
        let code = match prompt(&mut input, "Room code (e.g. 13, 34, 58): ")? {
          Some(code) => code,
          None => return Ok(()),
        };
        match hotel.find_room(&code) {
          Ok(room) => {
            println!("{}", room);
            if let Some(reservation) = &room.reservation {
              println!("Current reservation:");
              println!("{}", serde_json::to_string_pretty(reservation).unwrap_or_default());
            }
          }
          Err(err) => println!("{}", err),
        }
      }
      "3" => {
        println!("Current status of all rooms:");
        for line in hotel.list_status() {
          println!("{}", line);
        }
      }
      "4" => {
        let total = hotel.daily_sales();
        println!("Total sales for today: ${}", total);
      }
      "5" => {
        let destination = match prompt(
          &mut input,
          &format!("Destination file [{}]: ", DEFAULT_SNAPSHOT_FILE),
        )? {
          Some(destination) => destination,
          None => return Ok(()),
        };
        let destination = if destination.is_empty() {
          DEFAULT_SNAPSHOT_FILE
        } else {
          destination.as_str()
        };
        match export::write_snapshot(hotel, destination) {
          Ok(()) => println!("Snapshot saved to {}", destination),
          Err(err) => println!("{}", err),
        }
      }
      "6" => {
        println!("Goodbye!");
        return Ok(());
      }
      other => {
        warn!("invalid menu option: {:?}", other);
        println!("Invalid option, enter a number from 1 to 6.");
      }
    }
  }
}

// Quote, confirm, commit. The confirmation prompt sits between the two core
// calls so the registry never mutates on a declined booking. Input closing
// mid-flow counts as a decline; the outer loop then exits on its next prompt.
fn book_flow<R: BufRead>(
  hotel: &mut Hotel,
  input: &mut R,
) -> io::Result<Result<(), HotelError>> {
  let mut fields = Vec::with_capacity(BOOKING_PROMPTS.len());
  for label in &BOOKING_PROMPTS {
    match prompt(input, label)? {
      Some(value) => fields.push(value),
      None => return Ok(Err(HotelError::BookingDeclined)),
    }
  }

  let request = BookingRequest::new(
    &fields[0], &fields[1], &fields[2], &fields[3], &fields[4], &fields[5],
  );
  let quote = match hotel.quote_booking(&request) {
    Ok(quote) => quote,
    Err(err) => return Ok(Err(err)),
  };

  println!("Total cost of the booking: ${}", quote.total_cost);
  let confirmed = match prompt(input, "Confirm the booking? (y/n): ")? {
    Some(answer) => answer.eq_ignore_ascii_case("y"),
    None => false,
  };
  if !confirmed {
    return Ok(Err(HotelError::BookingDeclined));
  }

  match hotel.commit_booking(quote) {
    Ok(()) => {
      println!("Booking confirmed!");
      Ok(Ok(()))
    }
    Err(err) => Ok(Err(err)),
  }
}

fn print_menu() {
  println!();
  println!("Welcome to the hotel room management system.");
  println!("1. Book a room");
  println!("2. Find a room");
  println!("3. Room status");
  println!("4. Daily sales");
  println!("5. Save snapshot");
  println!("6. Exit");
}

// A 0-byte read means the stream is closed; `None` tells the caller to stop
// prompting instead of spinning on empty lines.
fn prompt<R: BufRead>(input: &mut R, label: &str) -> io::Result<Option<String>> {
  print!("{}", label);
  io::stdout().flush()?;

  let mut line = String::new();
  if input.read_line(&mut line)? == 0 {
    return Ok(None);
  }
  Ok(Some(String::from(line.trim())))
}

#[cfg(test)]
mod tests {
  use std::io::Cursor;

  use super::*;

  #[test]
  fn test001_prompt_signals_end_of_input() {
    let mut input = Cursor::new("");
    assert_eq!(prompt(&mut input, "> ").unwrap(), None);
  }

  #[test]
  fn test002_declined_booking_leaves_room_available() {
    let mut hotel = Hotel::new();
    let mut input = Cursor::new(
      "13\nAna\nRojas\n12.345.678-9\n2024-06-01 14:00\n2024-06-03 11:00\nn\n",
    );

    let result = book_flow(&mut hotel, &mut input).unwrap();
    assert_eq!(result.unwrap_err(), HotelError::BookingDeclined);
    let room = hotel.find_room("13").unwrap();
    assert!(room.is_available());
    assert!(room.reservation.is_none());
  }

  #[test]
  fn test003_input_closing_mid_flow_declines_without_mutation() {
    let mut hotel = Hotel::new();
    let mut input = Cursor::new("13\nAna\n");

    let result = book_flow(&mut hotel, &mut input).unwrap();
    assert_eq!(result.unwrap_err(), HotelError::BookingDeclined);
    assert!(hotel.find_room("13").unwrap().is_available());
  }

  #[test]
  fn test004_confirmed_flow_commits_the_quote() {
    let mut hotel = Hotel::new();
    let mut input = Cursor::new(
      "13\nAna\nRojas\n12.345.678-9\n2024-06-01 14:00\n2024-06-03 11:00\ny\n",
    );

    let result = book_flow(&mut hotel, &mut input).unwrap();
    assert!(result.is_ok());
    assert!(!hotel.find_room("13").unwrap().is_available());
  }
}
