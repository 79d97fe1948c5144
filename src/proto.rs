use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// Raw booking fields as collected at the CLI boundary; dates are still text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
  pub code: String,
  pub first_name: String,
  pub last_name: String,
  pub national_id: String,
  pub check_in: String,
  pub check_out: String,
}

impl BookingRequest {
  pub fn new(
    code: &str,
    first_name: &str,
    last_name: &str,
    national_id: &str,
    check_in: &str,
    check_out: &str,
  ) -> Self {
    BookingRequest {
      code: String::from(code),
      first_name: String::from(first_name),
      last_name: String::from(last_name),
      national_id: String::from(national_id),
      check_in: String::from(check_in),
      check_out: String::from(check_out),
    }
  }
}

// Priced booking, committed only after the caller confirms out of band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingQuote {
  pub code: String,
  pub first_name: String,
  pub last_name: String,
  pub national_id: String,
  pub check_in: NaiveDateTime,
  pub check_out: NaiveDateTime,
  pub total_cost: i64,
}
