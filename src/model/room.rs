use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::reservation::Reservation;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RoomStatus {
  Available,
  Reserved,
}

impl RoomStatus {
  pub fn label(self) -> &'static str {
    match self {
      RoomStatus::Available => "Disponible",
      RoomStatus::Reserved => "Reservada",
    }
  }
}

// `reservation` is `Some` exactly when `status` is `Reserved`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
  pub floor: u8,
  pub number: u8,
  pub code: String,
  pub status: RoomStatus,
  pub daily_rate: i64,
  pub reservation: Option<Reservation>,
}

impl Room {
  pub fn new(floor: u8, number: u8, daily_rate: i64) -> Self {
    Room {
      floor,
      number,
      code: format!("{}{}", floor, number),
      status: RoomStatus::Available,
      daily_rate,
      reservation: None,
    }
  }

  // A prior reservation is overwritten silently.
  pub fn reserve(
    &mut self,
    first_name: &str,
    last_name: &str,
    national_id: &str,
    check_in: NaiveDateTime,
    check_out: NaiveDateTime,
  ) {
    self.status = RoomStatus::Reserved;
    self.reservation = Some(Reservation::new(
      first_name,
      last_name,
      national_id,
      check_in,
      check_out,
    ));
  }

  pub fn cancel(&mut self) {
    self.status = RoomStatus::Available;
    self.reservation = None;
  }

  pub fn is_available(&self) -> bool {
    self.status == RoomStatus::Available
  }

  pub fn describe(&self) -> String {
    format!(
      "Habitación {}{} - Estado: {}, Costo diario: ${}",
      self.floor,
      self.number,
      self.status.label(),
      self.daily_rate
    )
  }
}

impl fmt::Display for Room {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}", self.describe())
  }
}
