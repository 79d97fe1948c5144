use thiserror::Error;

#[derive(Error, Debug)]
pub enum HotelError {
  #[error("room not found: {0}")]
  NotFound(String),

  #[error("room {0} is not available")]
  AlreadyReserved(String),

  #[error("invalid date format: {0}")]
  InvalidDateFormat(String),

  #[error("booking declined")]
  BookingDeclined,

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}

impl PartialEq for HotelError {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Self::NotFound(v1), Self::NotFound(v2)) => v1 == v2,
      (Self::AlreadyReserved(v1), Self::AlreadyReserved(v2)) => v1 == v2,
      (Self::InvalidDateFormat(v1), Self::InvalidDateFormat(v2)) => v1 == v2,
      (Self::BookingDeclined, Self::BookingDeclined) => true,
      (Self::Io(v1), Self::Io(v2)) => v1.kind() == v2.kind(),
      _ => false,
    }
  }
}
