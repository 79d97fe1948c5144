use std::fs;

use hotel_desk::export::{write_snapshot, SNAPSHOT_HEADER};
use hotel_desk::hotel::Hotel;
use hotel_desk::model::reservation::DATE_FORMAT;
use hotel_desk::proto::BookingRequest;

fn book(hotel: &mut Hotel, code: &str, check_in: &str, check_out: &str) {
  let quote = hotel
    .quote_booking(&BookingRequest::new(
      code,
      "Ana",
      "Rojas",
      "12.345.678-9",
      check_in,
      check_out,
    ))
    .unwrap();
  hotel.commit_booking(quote).unwrap();
}

#[test]
fn test001_snapshot_round_trip_recovers_every_field() {
  let mut hotel = Hotel::new();
  book(&mut hotel, "13", "2024-06-01 14:00", "2024-06-03 11:00");
  book(&mut hotel, "47", "2024-06-02 09:00", "2024-06-05 12:00");

  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("estado_habitaciones.csv");
  write_snapshot(&hotel, &path).unwrap();

  let text = fs::read_to_string(&path).unwrap();
  let mut lines = text.lines();
  assert_eq!(lines.next().unwrap(), SNAPSHOT_HEADER);

  let rows: Vec<Vec<&str>> = lines.map(|line| line.split(',').collect()).collect();
  assert_eq!(rows.len(), 40);

  for (row, room) in rows.iter().zip(hotel.rooms()) {
    assert_eq!(row.len(), 9);
    assert_eq!(row[0], room.floor.to_string());
    assert_eq!(row[1], room.number.to_string());
    assert_eq!(row[2], room.status.label());
    assert_eq!(row[3], room.daily_rate.to_string());

    match &room.reservation {
      Some(reservation) => {
        assert_eq!(row[4], reservation.first_name);
        assert_eq!(row[5], reservation.last_name);
        assert_eq!(row[6], reservation.national_id);
        assert_eq!(row[7], reservation.check_in.format(DATE_FORMAT).to_string());
        assert_eq!(row[8], reservation.check_out.format(DATE_FORMAT).to_string());
      }
      None => {
        assert!(row[4..].iter().all(|field| field.is_empty()));
      }
    }
  }

  let reserved: Vec<&Vec<&str>> = rows.iter().filter(|row| row[2] == "Reservada").collect();
  assert_eq!(reserved.len(), 2);
}
