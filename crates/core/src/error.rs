//! Error kinds reported by the booking core.

use thiserror::Error;

use crate::models::{SeatNumber, MAX_SEATS};

/// Failures surfaced to callers of the registry and booking system.
///
/// None of these are fatal; the caller decides how to report them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// The requested seat count was outside `1..=MAX_SEATS`.
    #[error("invalid configuration: seat count must be between 1 and {}, got {0}", MAX_SEATS)]
    InvalidConfiguration(i64),
    /// The seat number lies outside `1..=total`.
    #[error("seat {seat_number} does not exist (valid seats are 1..={total})")]
    SeatNotFound {
        /// Seat number as supplied by the caller.
        seat_number: i64,
        /// Number of seats in the registry.
        total: SeatNumber,
    },
    /// The passenger name was empty or only whitespace.
    #[error("passenger name must not be empty")]
    EmptyName,
}
