//! Shared domain models.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::BookingError;

/// Seat identifier, numbered from 1.
pub type SeatNumber = u32;

/// Largest seat pool the registry will create.
pub const MAX_SEATS: SeatNumber = 1_000_000;

/// Trim a passenger name, rejecting names that are blank.
pub(crate) fn passenger_name(passenger: &str) -> Result<&str, BookingError> {
    let trimmed = passenger.trim();
    if trimmed.is_empty() {
        warn!("Rejected empty passenger name");
        return Err(BookingError::EmptyName);
    }
    Ok(trimmed)
}

/// Booking state of a single seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatStatus {
    /// No passenger holds the seat.
    Available,
    /// A passenger holds the seat.
    Booked,
}

impl SeatStatus {
    /// Returns a user-facing label for the status.
    pub fn label(self) -> &'static str {
        match self {
            SeatStatus::Available => "Available",
            SeatStatus::Booked => "Booked",
        }
    }
}

/// A reservable seat. The status is derived from the occupant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    /// Seat number, immutable after creation.
    pub number: SeatNumber,
    /// Current occupant, if booked.
    pub passenger: Option<String>,
}

impl Seat {
    pub(crate) fn available(number: SeatNumber) -> Self {
        Self {
            number,
            passenger: None,
        }
    }

    /// Current booking status.
    pub fn status(&self) -> SeatStatus {
        if self.passenger.is_some() {
            SeatStatus::Booked
        } else {
            SeatStatus::Available
        }
    }

    /// Whether the seat can be assigned.
    pub fn is_available(&self) -> bool {
        self.passenger.is_none()
    }

    /// Occupant name, if any.
    pub fn passenger(&self) -> Option<&str> {
        self.passenger.as_deref()
    }
}

/// Result of a booking request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingOutcome {
    /// The passenger was given a seat.
    Assigned {
        /// Seat that was assigned.
        seat_number: SeatNumber,
    },
    /// No seat was free; the passenger joined the waiting queue.
    Waitlisted {
        /// 1-based position in the queue.
        position: usize,
    },
}

/// Result of a cancellation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CancelOutcome {
    /// The seat was released.
    Cancelled {
        /// Seat that was released.
        seat_number: SeatNumber,
        /// Passenger whose booking was cancelled.
        previous_passenger: String,
        /// Waiting passenger moved into the freed seat.
        promoted: Option<String>,
    },
    /// The seat held no booking; nothing changed.
    AlreadyAvailable {
        /// Seat that was already free.
        seat_number: SeatNumber,
    },
}

/// Aggregate counts for the seat map and queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupancy {
    /// Number of seats in the registry.
    pub total: usize,
    /// Seats holding a passenger.
    pub booked: usize,
    /// Seats free for assignment.
    pub available: usize,
    /// Passengers in the waiting queue.
    pub waiting: usize,
}

impl Occupancy {
    /// Fraction of seats currently booked.
    pub fn utilization(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.booked as f64 / self.total as f64
        }
    }
}
