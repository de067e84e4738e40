//! Legs and closed routes.
//!
//! A route is an ordered list of turn points flown in a loop, last turn back
//! to the first.  Every leg gets its length from the Vincenty solver and its
//! duration from the speed at the leg's starting turn, so a route is also a
//! time parameterization: any elapsed time maps to one position on the loop.
//!
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::distance::vincenty_km;
use crate::GeoError;

/// 1 kt in m/s
pub const KNOTS_TO_MPS: f64 = 0.514444444;

/// Convert a speed in knots into m/s.
///
#[inline]
pub fn knots_to_mps(knots: f64) -> f64 {
    knots * KNOTS_TO_MPS
}

/// One turn point of a route.
///
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Waypoint {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Altitude
    pub altitude: f64,
    /// Ground speed out of this turn, in knots
    pub speed: f64,
}

/// An interpolated point on a leg.
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

/// A straight course between two turns, flown at the speed of the starting
/// turn.  Length and duration are fixed at construction.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Leg {
    /// Starting turn
    pub start: Waypoint,
    /// Ending turn
    pub end: Waypoint,
    /// Length in metres, from the Vincenty solver
    pub length: f64,
    /// Speed over the leg in m/s
    pub speed: f64,
    /// Time to fly the leg, in whole seconds
    pub duration: u64,
}

impl Leg {
    /// Build a leg between two turns.
    ///
    /// The duration is truncated to whole seconds, downstream consumers feed
    /// on 1 Hz ticks.
    ///
    #[tracing::instrument]
    pub fn new(start: Waypoint, end: Waypoint) -> Result<Self, GeoError> {
        if start.speed <= 0. {
            return Err(GeoError::InvalidSpeed(start.speed));
        }
        let length =
            1000. * vincenty_km(start.latitude, start.longitude, end.latitude, end.longitude)?;
        let speed = knots_to_mps(start.speed);
        let duration = (length / speed) as u64;
        Ok(Leg {
            start,
            end,
            length,
            speed,
            duration,
        })
    }

    /// Position at the given fraction of the leg.
    ///
    /// Each coordinate is interpolated on its own, a chord approximation and
    /// not a great-circle track.  Good enough at leg scale.
    ///
    pub fn position_at(&self, ratio: f64) -> Position {
        Position {
            latitude: self.start.latitude + (self.end.latitude - self.start.latitude) * ratio,
            longitude: self.start.longitude + (self.end.longitude - self.start.longitude) * ratio,
            altitude: self.start.altitude + (self.end.altitude - self.start.altitude) * ratio,
        }
    }

    /// Position `seconds` after the start of the leg.
    ///
    /// The offset must land inside the leg, nothing is clamped.
    ///
    pub fn position_after(&self, seconds: f64) -> Result<Position, GeoError> {
        let ratio = seconds / self.duration as f64;
        if !(0.0..=1.0).contains(&ratio) {
            return Err(GeoError::OutOfRange {
                offset: seconds,
                duration: self.duration,
            });
        }
        Ok(self.position_at(ratio))
    }

    /// Sample the leg every `seconds_per_point` seconds, start included, end
    /// excluded.  The step must divide the leg duration evenly.
    ///
    pub fn stages(&self, seconds_per_point: u64) -> Result<Vec<Position>, GeoError> {
        if seconds_per_point == 0 || self.duration % seconds_per_point != 0 {
            return Err(GeoError::NotDivisible {
                duration: self.duration,
                step: seconds_per_point,
            });
        }
        let count = self.duration / seconds_per_point;
        Ok((0..count)
            .map(|i| self.position_at(i as f64 / count as f64))
            .collect())
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.length < 1000. {
            write!(
                f,
                "{:8.2} m from ({:6.2},{:7.2}) at {:6.2} to ({:6.2},{:7.2}) at {:6.2}",
                self.length,
                self.start.latitude,
                self.start.longitude,
                self.start.altitude,
                self.end.latitude,
                self.end.longitude,
                self.end.altitude,
            )
        } else {
            write!(
                f,
                "{:8.2}km from ({:6.2},{:7.2}) at {:6.2} to ({:6.2},{:7.2}) at {:6.2}",
                self.length / 1000.,
                self.start.latitude,
                self.start.longitude,
                self.start.altitude,
                self.end.latitude,
                self.end.longitude,
                self.end.altitude,
            )
        }
    }
}

/// A closed route over a list of turns, with the closing leg back to the
/// first turn built in.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Trajectory {
    origin: String,
    destination: String,
    turns: Vec<Waypoint>,
    legs: Vec<Leg>,
    cycle: u64,
}

impl Trajectory {
    /// Build the closed route from its turns.
    ///
    /// Needs at least 2 turns and a strictly positive total cycle time, a
    /// route all of whose legs round down to 0 seconds has no position for
    /// any time.
    ///
    #[tracing::instrument]
    pub fn new(turns: Vec<Waypoint>, origin: &str, destination: &str) -> Result<Self, GeoError> {
        if turns.len() < 2 {
            return Err(GeoError::EmptyRoute(turns.len()));
        }

        let mut legs = Vec::with_capacity(turns.len());
        for pair in turns.windows(2) {
            legs.push(Leg::new(pair[0], pair[1])?);
        }
        legs.push(Leg::new(turns[turns.len() - 1], turns[0])?);

        // A near-zero speed saturates a leg duration to u64::MAX, the sum
        // must not wrap past it.
        let cycle = legs
            .iter()
            .try_fold(0u64, |total, leg| total.checked_add(leg.duration))
            .ok_or(GeoError::CycleOverflow)?;
        if cycle == 0 {
            return Err(GeoError::DegenerateRoute);
        }
        trace!("route of {} legs, cycle {}s", legs.len(), cycle);

        Ok(Trajectory {
            origin: origin.to_owned(),
            destination: destination.to_owned(),
            turns,
            legs,
            cycle,
        })
    }

    /// Position after `seconds` on the loop, any real offset wraps into the
    /// cycle, negatives included.
    ///
    pub fn position_after(&self, seconds: f64) -> Result<Position, GeoError> {
        let mut remainder = seconds.rem_euclid(self.cycle as f64);
        for leg in &self.legs {
            let duration = leg.duration as f64;
            if remainder < duration {
                return leg.position_after(remainder);
            }
            remainder -= duration;
        }
        // rem_euclid of a tiny negative offset can round up to the full
        // cycle, which wraps to the start of the loop.  Resolve through the
        // scan again, the first leg can have a zero duration.
        self.position_after(0.)
    }

    /// Sample the whole loop every `seconds_per_point` seconds, legs in
    /// order, each start included and end excluded.
    ///
    pub fn stages(&self, seconds_per_point: u64) -> Result<Vec<Position>, GeoError> {
        let mut result = vec![];
        for leg in &self.legs {
            result.extend(leg.stages(seconds_per_point)?);
        }
        Ok(result)
    }

    /// Label of the route's starting point.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Label of the route's end point.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// The turns the route was built from.
    pub fn turns(&self) -> &[Waypoint] {
        &self.turns
    }

    /// All legs, closing leg last.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Time to fly the complete loop, in seconds.
    pub fn cycle_seconds(&self) -> u64 {
        self.cycle
    }

    /// Total length of the loop in metres.
    pub fn length_meters(&self) -> f64 {
        self.legs.iter().map(|l| l.length).sum()
    }
}

impl fmt::Display for Trajectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} turns from {} to {}",
            self.turns.len(),
            self.origin,
            self.destination
        )
    }
}
