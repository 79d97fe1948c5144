use std::collections::BTreeMap;

use chrono::{Local, NaiveDate, NaiveDateTime};
use log::info;
use regex::Regex;

use crate::error::HotelError;
use crate::model::reservation::DATE_FORMAT;
use crate::model::room::Room;
use crate::proto::{BookingQuote, BookingRequest};

const FLOORS: u8 = 5;
const ROOMS_PER_FLOOR: u8 = 8;

lazy_static! {
  static ref ROOM_CODE_REGEX: Regex = Regex::new("^[1-5][1-8]$").unwrap();
}

// Codes are two digits (floor then number), so the map's lexicographic
// order is exactly the floor-major, number-minor construction order.
pub struct Hotel {
  rooms: BTreeMap<String, Room>,
  daily_sales_total: i64,
}

impl Hotel {
  pub fn new() -> Self {
    let mut rooms = BTreeMap::new();
    for floor in 1..=FLOORS {
      for number in 1..=ROOMS_PER_FLOOR {
        let room = Room::new(floor, number, daily_rate_for(floor));
        rooms.insert(room.code.clone(), room);
      }
    }

    Hotel {
      rooms,
      daily_sales_total: 0,
    }
  }

  // Prices the booking without touching any state; the caller confirms and
  // commits the quote separately.
  pub fn quote_booking(&self, request: &BookingRequest) -> Result<BookingQuote, HotelError> {
    let room = self.lookup(&request.code)?;
    if !room.is_available() {
      return Err(HotelError::AlreadyReserved(room.code.clone()));
    }

    let check_in = parse_date(&request.check_in)?;
    let check_out = parse_date(&request.check_out)?;

    // Whole-day difference; time of day does not enter the price.
    let days = (check_out.date() - check_in.date()).num_days();

    Ok(BookingQuote {
      code: room.code.clone(),
      first_name: request.first_name.clone(),
      last_name: request.last_name.clone(),
      national_id: request.national_id.clone(),
      check_in,
      check_out,
      total_cost: days * room.daily_rate,
    })
  }

  // Availability is checked again here since the room may have been taken
  // between quoting and confirming.
  pub fn commit_booking(&mut self, quote: BookingQuote) -> Result<(), HotelError> {
    let room = self
      .rooms
      .get_mut(&quote.code)
      .ok_or_else(|| HotelError::NotFound(quote.code.clone()))?;
    if !room.is_available() {
      return Err(HotelError::AlreadyReserved(quote.code.clone()));
    }

    room.reserve(
      &quote.first_name,
      &quote.last_name,
      &quote.national_id,
      quote.check_in,
      quote.check_out,
    );
    info!("room {} reserved until {}", quote.code, quote.check_out);
    Ok(())
  }

  pub fn cancel_reservation(&mut self, code: &str) -> Result<(), HotelError> {
    if !ROOM_CODE_REGEX.is_match(code) {
      return Err(HotelError::NotFound(String::from(code)));
    }
    let room = self
      .rooms
      .get_mut(code)
      .ok_or_else(|| HotelError::NotFound(String::from(code)))?;

    room.cancel();
    info!("room {} released", code);
    Ok(())
  }

  pub fn find_room(&self, code: &str) -> Result<&Room, HotelError> {
    self.lookup(code)
  }

  pub fn list_status(&self) -> impl Iterator<Item = String> + '_ {
    self
      .rooms
      .values()
      .map(|room| format!("{}: {}", room.code, room))
  }

  pub fn daily_sales(&mut self) -> i64 {
    self.daily_sales_on(Local::now().date_naive())
  }

  /// Rescans every room; a reservation counts in full on the day its
  /// checkout date falls, regardless of when the stay began.
  pub fn daily_sales_on(&mut self, today: NaiveDate) -> i64 {
    let mut total = 0;
    for room in self.rooms.values() {
      if let Some(reservation) = &room.reservation {
        if reservation.check_out.date() == today {
          total += reservation.stay_days() * room.daily_rate;
        }
      }
    }

    self.daily_sales_total = total;
    total
  }

  pub fn daily_sales_total(&self) -> i64 {
    self.daily_sales_total
  }

  pub fn rooms(&self) -> impl Iterator<Item = &Room> {
    self.rooms.values()
  }

  fn lookup(&self, code: &str) -> Result<&Room, HotelError> {
    if !ROOM_CODE_REGEX.is_match(code) {
      return Err(HotelError::NotFound(String::from(code)));
    }
    self
      .rooms
      .get(code)
      .ok_or_else(|| HotelError::NotFound(String::from(code)))
  }
}

impl Default for Hotel {
  fn default() -> Self {
    Hotel::new()
  }
}

fn daily_rate_for(floor: u8) -> i64 {
  match floor {
    5 => 100000,
    4 => 60000,
    _ => 30000,
  }
}

fn parse_date(text: &str) -> Result<NaiveDateTime, HotelError> {
  NaiveDateTime::parse_from_str(text, DATE_FORMAT)
    .map_err(|_| HotelError::InvalidDateFormat(String::from(text)))
}
