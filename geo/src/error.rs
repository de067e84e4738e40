use thiserror::Error;

/// Custom error type for the geodesic engine, allow us to differentiate between errors.
///
#[derive(Debug, Error, PartialEq)]
pub enum GeoError {
    #[error("Vincenty did not converge after {0} iterations")]
    NoConvergence(u32),
    #[error("Leg speed must be positive, got {0} kt")]
    InvalidSpeed(f64),
    #[error("A route needs at least 2 turns, got {0}")]
    EmptyRoute(usize),
    #[error("Route cycle time is zero")]
    DegenerateRoute,
    #[error("Route cycle time overflows")]
    CycleOverflow,
    #[error("Offset {offset} s is outside a leg lasting {duration} s")]
    OutOfRange { offset: f64, duration: u64 },
    #[error("Leg duration {duration} s is not divisible into {step} s stages")]
    NotDivisible { duration: u64, step: u64 },
}
