pub mod room;
pub mod reservation;
