use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// Layout used everywhere a date crosses a text boundary.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
  pub first_name: String,
  pub last_name: String,
  pub national_id: String,
  pub check_in: NaiveDateTime,
  pub check_out: NaiveDateTime,
}

impl Reservation {
  pub fn new(
    first_name: &str,
    last_name: &str,
    national_id: &str,
    check_in: NaiveDateTime,
    check_out: NaiveDateTime,
  ) -> Self {
    Reservation {
      first_name: String::from(first_name),
      last_name: String::from(last_name),
      national_id: String::from(national_id),
      check_in,
      check_out,
    }
  }

  /// Whole-day length of the stay. Time of day is ignored; a stay shorter
  /// than 24 hours counts as zero days and a reversed range goes negative.
  pub fn stay_days(&self) -> i64 {
    (self.check_out.date() - self.check_in.date()).num_days()
  }
}
