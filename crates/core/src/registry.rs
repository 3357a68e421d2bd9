//! Seat registry: fixed pool of numbered seats and their booking state.

use tracing::{debug, info};

use crate::{
    error::BookingError,
    models::{passenger_name, CancelOutcome, Seat, SeatNumber, MAX_SEATS},
};

/// Owns every seat, indexed by `seat_number - 1`.
#[derive(Debug, Clone)]
pub struct SeatRegistry {
    seats: Vec<Seat>,
}

impl SeatRegistry {
    /// Create `num_seats` available seats numbered `1..=num_seats`.
    pub fn new(num_seats: i64) -> Result<Self, BookingError> {
        let total = SeatNumber::try_from(num_seats)
            .ok()
            .filter(|total| (1..=MAX_SEATS).contains(total))
            .ok_or(BookingError::InvalidConfiguration(num_seats))?;

        let mut seats = Vec::new();
        seats
            .try_reserve_exact(total as usize)
            .map_err(|_| BookingError::InvalidConfiguration(num_seats))?;
        seats.extend((1..=total).map(Seat::available));
        info!(total, "Seat registry initialised");
        Ok(Self { seats })
    }

    /// Number of seats in the registry.
    pub fn total(&self) -> SeatNumber {
        self.seats.len() as SeatNumber
    }

    /// Lowest-numbered available seat, if any.
    pub fn find_first_available(&self) -> Option<&Seat> {
        self.seats.iter().find(|seat| seat.is_available())
    }

    /// Assign the lowest-numbered available seat to `passenger`.
    ///
    /// Returns `Ok(None)` when every seat is booked; the caller is responsible
    /// for queueing the passenger in that case. Blank names are rejected.
    pub fn book(&mut self, passenger: &str) -> Result<Option<SeatNumber>, BookingError> {
        let passenger = passenger_name(passenger)?;
        let Some(seat) = self.seats.iter_mut().find(|seat| seat.is_available()) else {
            return Ok(None);
        };
        seat.passenger = Some(passenger.to_string());
        info!(seat = seat.number, passenger, "Seat assigned");
        Ok(Some(seat.number))
    }

    /// Release the booking on `seat_number`.
    ///
    /// `promoted` is always `None` here; promotion is the booking system's job.
    pub fn cancel(&mut self, seat_number: i64) -> Result<CancelOutcome, BookingError> {
        let index = self.index_of(seat_number)?;
        let seat = &mut self.seats[index];
        match seat.passenger.take() {
            Some(previous_passenger) => {
                info!(seat = seat.number, passenger = %previous_passenger, "Booking cancelled");
                Ok(CancelOutcome::Cancelled {
                    seat_number: seat.number,
                    previous_passenger,
                    promoted: None,
                })
            }
            None => {
                debug!(seat = seat.number, "Cancel requested for available seat");
                Ok(CancelOutcome::AlreadyAvailable {
                    seat_number: seat.number,
                })
            }
        }
    }

    /// Book a specific, currently available seat. Used to promote a waiting
    /// passenger into the seat that was just freed.
    pub(crate) fn assign(&mut self, seat_number: SeatNumber, passenger: String) -> bool {
        let slot = (seat_number as usize)
            .checked_sub(1)
            .and_then(|index| self.seats.get_mut(index));
        match slot {
            Some(seat) if seat.is_available() => {
                info!(seat = seat_number, passenger = %passenger, "Seat assigned from waiting list");
                seat.passenger = Some(passenger);
                true
            }
            _ => false,
        }
    }

    /// Look up a seat by number.
    pub fn get(&self, seat_number: i64) -> Option<&Seat> {
        self.index_of(seat_number)
            .ok()
            .and_then(|index| self.seats.get(index))
    }

    /// All seats in ascending seat-number order.
    pub fn list_all(&self) -> &[Seat] {
        &self.seats
    }

    /// Number of booked seats.
    pub fn booked_count(&self) -> usize {
        self.seats.iter().filter(|seat| !seat.is_available()).count()
    }

    fn index_of(&self, seat_number: i64) -> Result<usize, BookingError> {
        let total = self.total();
        if seat_number < 1 || seat_number > i64::from(total) {
            return Err(BookingError::SeatNotFound { seat_number, total });
        }
        Ok((seat_number - 1) as usize)
    }
}
