use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::error::HotelError;
use crate::hotel::Hotel;
use crate::model::reservation::DATE_FORMAT;
use crate::model::room::Room;

pub const SNAPSHOT_HEADER: &str =
  "Piso,Número,Estado,Costo diario,Nombre,Apellido,Rut,Fecha ingreso,Fecha salida";

// Fixed header plus one row per room, in the same order as the status
// listing.
pub fn write_snapshot<P: AsRef<Path>>(hotel: &Hotel, destination: P) -> Result<(), HotelError> {
  let file = File::create(destination.as_ref())?;
  let mut writer = BufWriter::new(file);
  write_snapshot_to(hotel, &mut writer)?;
  writer.flush()?;
  info!("snapshot written to {}", destination.as_ref().display());
  Ok(())
}

pub fn write_snapshot_to<W: Write>(hotel: &Hotel, writer: &mut W) -> Result<(), HotelError> {
  writeln!(writer, "{}", SNAPSHOT_HEADER)?;
  for room in hotel.rooms() {
    writeln!(writer, "{}", snapshot_row(room))?;
  }
  Ok(())
}

fn snapshot_row(room: &Room) -> String {
  match &room.reservation {
    Some(reservation) => format!(
      "{},{},{},{},{},{},{},{},{}",
      room.floor,
      room.number,
      room.status.label(),
      room.daily_rate,
      reservation.first_name,
      reservation.last_name,
      reservation.national_id,
      reservation.check_in.format(DATE_FORMAT),
      reservation.check_out.format(DATE_FORMAT),
    ),
    None => format!(
      "{},{},{},{},,,,,",
      room.floor,
      room.number,
      room.status.label(),
      room.daily_rate
    ),
  }
}
