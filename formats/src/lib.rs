//! Boundary formats around the trajectory engine: scenario files on the way
//! in, pseudo-NMEA sentences on the way out.
//!

pub mod nmea;
mod scenario;

use clap::{crate_name, crate_version};
pub use scenario::*;

const NAME: &str = crate_name!();
const VERSION: &str = crate_version!();

pub fn version() -> String {
    format!("{}/{}", NAME, VERSION)
}
