//! Pseudo-NMEA sentence output.
//!
//! The consumer side of a feed expects GGA-style sentences with the position
//! in `ddmm.mmmm` fields and the usual XOR checksum, followed by the route
//! labels after a `;` separator.  This is close enough to NMEA 0183 for line
//! parsers without pretending to be a real GPS fix.
//!
use chrono::{DateTime, Utc};

use navette_geo::Position;

/// XOR of all payload bytes, the NMEA frame checksum.
///
pub fn checksum(payload: &str) -> u8 {
    payload.bytes().fold(0, |acc, b| acc ^ b)
}

/// Split an absolute angle into whole degrees and decimal minutes.
///
/// Minutes are rounded to the displayed 1e-4 precision first, 59.99999
/// carries into the degrees instead of formatting as `60.0000`.
///
fn degrees_minutes(value: f64) -> (u32, f64) {
    let whole = value.trunc();
    let mut degrees = whole as u32;
    let mut minutes = ((value - whole) * 60. * 10_000.).round() / 10_000.;
    if minutes >= 60. {
        minutes -= 60.;
        degrees += 1;
    }
    (degrees, minutes)
}

/// `ddmm.mmmm` plus hemisphere for a latitude.
///
fn lat_field(latitude: f64) -> (String, char) {
    let hemi = if latitude >= 0. { 'N' } else { 'S' };
    let (degrees, minutes) = degrees_minutes(latitude.abs());
    (format!("{:02}{:07.4}", degrees, minutes), hemi)
}

/// `dddmm.mmmm` plus hemisphere for a longitude.
///
fn lon_field(longitude: f64) -> (String, char) {
    let hemi = if longitude >= 0. { 'E' } else { 'W' };
    let (degrees, minutes) = degrees_minutes(longitude.abs());
    (format!("{:03}{:07.4}", degrees, minutes), hemi)
}

/// One GGA sentence for a position at the given time.
///
pub fn gga(at: &DateTime<Utc>, position: &Position) -> String {
    let (lat, lat_hemi) = lat_field(position.latitude);
    let (lon, lon_hemi) = lon_field(position.longitude);
    let payload = format!(
        "GPGGA,{},{},{},{},{},1,08,0.9,{:.4},M,0.0,M,,",
        at.format("%H%M%S"),
        lat,
        lat_hemi,
        lon,
        lon_hemi,
        position.altitude,
    );
    format!("${}*{:02X}", payload, checksum(&payload))
}

/// The full feed line, sentence then origin and destination labels.
///
pub fn feed_line(
    at: &DateTime<Utc>,
    position: &Position,
    origin: &str,
    destination: &str,
) -> String {
    format!("{};{},{}", gga(at, position), origin, destination)
}
