//! User-facing wording for booking outcomes and input parsing.

use anyhow::{anyhow, Result};
use seatline_core::{BookingError, BookingOutcome, CancelOutcome};

/// Parse a whole number typed into a prompt. Signs are accepted so that the
/// core can reject out-of-range values itself.
pub fn parse_number(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("Please enter a number"));
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| anyhow!("'{trimmed}' is not a valid number"))
}

pub fn booking_message(passenger: &str, outcome: &BookingOutcome) -> String {
    let passenger = passenger.trim();
    match outcome {
        BookingOutcome::Assigned { seat_number } => {
            format!("Seat {seat_number} has been booked for {passenger}")
        }
        BookingOutcome::Waitlisted { position } => format!(
            "All seats are booked. {passenger} has been added to the waiting list (position {position})"
        ),
    }
}

pub fn cancel_message(outcome: &CancelOutcome) -> String {
    match outcome {
        CancelOutcome::Cancelled {
            seat_number,
            previous_passenger,
            promoted: None,
        } => format!("Seat {seat_number} booking cancelled for {previous_passenger}"),
        CancelOutcome::Cancelled {
            seat_number,
            previous_passenger,
            promoted: Some(next),
        } => format!(
            "Seat {seat_number} booking cancelled for {previous_passenger}; \
             seat {seat_number} has been automatically assigned to {next} from waiting list"
        ),
        CancelOutcome::AlreadyAvailable { seat_number } => {
            format!("Seat {seat_number} is already available!")
        }
    }
}

pub fn error_message(err: &BookingError) -> String {
    match err {
        BookingError::SeatNotFound { .. } => format!("Invalid seat number! ({err})"),
        BookingError::InvalidConfiguration(_) => format!("Invalid number of seats! ({err})"),
        BookingError::EmptyName => "Passenger name cannot be empty".to_string(),
    }
}
