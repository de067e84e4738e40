//! Geodesic distances and closed-route trajectories over WGS-84.
//!
//! The crate turns a closed polyline of turn points, each with a target
//! ground speed, into a time-parameterized position function: distances come
//! from the Vincenty inverse solver, legs get whole-second durations, and a
//! [`PositionFeed`] maps wall-clock time onto the loop.
//!

mod distance;
mod error;
mod feed;
mod trajectory;

use clap::{crate_name, crate_version};
pub use distance::*;
pub use error::*;
pub use feed::*;
pub use trajectory::*;

const NAME: &str = crate_name!();
const VERSION: &str = crate_version!();

pub fn version() -> String {
    format!("{}/{}", NAME, VERSION)
}
