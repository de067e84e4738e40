//! Wall-clock driven position source over a closed route.
//!
use std::time::Instant;

use tracing::trace;

use crate::{GeoError, Position, Trajectory};

/// Serves the position on a route as a function of real elapsed time.
///
/// The clock is anchored at construction.  An optional rate multiplier runs
/// the scenario clock faster or slower than the wall clock, 1.0 means real
/// time.
///
#[derive(Clone, Debug)]
pub struct PositionFeed {
    trajectory: Trajectory,
    started: Instant,
    rate: f64,
}

impl PositionFeed {
    /// Anchor a feed on the given route, the clock starts now.
    ///
    pub fn new(trajectory: Trajectory) -> Self {
        PositionFeed {
            trajectory,
            started: Instant::now(),
            rate: 1.,
        }
    }

    /// Scale the scenario clock by `rate`.
    ///
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    /// Scenario seconds elapsed since the feed was anchored.
    ///
    pub fn elapsed(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * self.rate
    }

    /// Where the mover is right now.
    ///
    #[tracing::instrument(skip(self))]
    pub fn current_position(&self) -> Result<Position, GeoError> {
        let elapsed = self.elapsed();
        trace!("elapsed {:.3}s", elapsed);
        self.trajectory.position_after(elapsed)
    }

    /// The route this feed runs on.
    ///
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }
}
