//! Booking system: couples the seat registry with the waiting queue.
//!
//! Booking hands out the lowest free seat or queues the passenger. Cancelling
//! a booked seat immediately promotes the head of the queue into that same
//! seat, so a free seat and a non-empty queue never coexist once an operation
//! returns.

use tracing::info;

use crate::{
    error::BookingError,
    models::{BookingOutcome, CancelOutcome, Occupancy, Seat},
    registry::SeatRegistry,
    waitlist::WaitingQueue,
};

/// Single-owner controller for one seat pool and its waiting list.
#[derive(Debug, Clone)]
pub struct BookingSystem {
    registry: SeatRegistry,
    waiting: WaitingQueue,
}

impl BookingSystem {
    /// Create a system with `num_seats` available seats and an empty queue.
    pub fn new(num_seats: i64) -> Result<Self, BookingError> {
        Ok(Self {
            registry: SeatRegistry::new(num_seats)?,
            waiting: WaitingQueue::new(),
        })
    }

    /// Discard all bookings and queued passengers and start over with
    /// `num_seats` seats. On error the current state is left untouched.
    pub fn initialize(&mut self, num_seats: i64) -> Result<(), BookingError> {
        *self = Self::new(num_seats)?;
        Ok(())
    }

    /// Give `passenger` the lowest free seat, or queue them when full.
    pub fn book(&mut self, passenger: &str) -> Result<BookingOutcome, BookingError> {
        if let Some(seat_number) = self.registry.book(passenger)? {
            return Ok(BookingOutcome::Assigned { seat_number });
        }
        let position = self.waiting.enqueue(passenger)?;
        Ok(BookingOutcome::Waitlisted { position })
    }

    /// Cancel the booking on `seat_number` and promote the next waiting
    /// passenger into the freed seat.
    pub fn cancel(&mut self, seat_number: i64) -> Result<CancelOutcome, BookingError> {
        match self.registry.cancel(seat_number)? {
            CancelOutcome::Cancelled {
                seat_number,
                previous_passenger,
                ..
            } => {
                let promoted = self.waiting.dequeue();
                if let Some(next) = promoted.as_ref() {
                    let assigned = self.registry.assign(seat_number, next.clone());
                    debug_assert!(assigned, "freed seat must accept the promoted passenger");
                    info!(seat = seat_number, passenger = %next, "Waiting passenger promoted");
                }
                Ok(CancelOutcome::Cancelled {
                    seat_number,
                    previous_passenger,
                    promoted,
                })
            }
            outcome @ CancelOutcome::AlreadyAvailable { .. } => Ok(outcome),
        }
    }

    /// Seats in ascending seat-number order.
    pub fn list_seats(&self) -> &[Seat] {
        self.registry.list_all()
    }

    /// Waiting passengers from head to tail.
    pub fn list_waiting_queue(&self) -> Vec<String> {
        self.waiting.peek_all()
    }

    /// Read access to the underlying queue.
    pub fn waiting_queue(&self) -> &WaitingQueue {
        &self.waiting
    }

    /// Counts of booked, free and waiting entries.
    pub fn occupancy(&self) -> Occupancy {
        let total = self.registry.list_all().len();
        let booked = self.registry.booked_count();
        Occupancy {
            total,
            booked,
            available: total - booked,
            waiting: self.waiting.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeatStatus;

    fn booked(system: &BookingSystem) -> Vec<(u32, Option<String>)> {
        system
            .list_seats()
            .iter()
            .map(|seat| (seat.number, seat.passenger.clone()))
            .collect()
    }

    #[test]
    fn initialize_creates_available_seats() {
        for total in [1_i64, 2, 7, 50] {
            let system = BookingSystem::new(total).unwrap();
            let seats = system.list_seats();
            assert_eq!(seats.len(), total as usize);
            for (idx, seat) in seats.iter().enumerate() {
                assert_eq!(seat.number as usize, idx + 1);
                assert_eq!(seat.status(), SeatStatus::Available);
            }
            assert!(system.list_waiting_queue().is_empty());
        }
    }

    #[test]
    fn initialize_rejects_non_positive_counts() {
        assert_eq!(
            BookingSystem::new(0).unwrap_err(),
            BookingError::InvalidConfiguration(0)
        );
        assert_eq!(
            BookingSystem::new(-1).unwrap_err(),
            BookingError::InvalidConfiguration(-1)
        );
    }

    #[test]
    fn reinitialize_resets_state() {
        let mut system = BookingSystem::new(1).unwrap();
        system.book("Alice").unwrap();
        system.book("Bob").unwrap();

        assert!(system.initialize(0).is_err());
        assert_eq!(system.occupancy().booked, 1);

        system.initialize(3).unwrap();
        assert_eq!(system.list_seats().len(), 3);
        assert_eq!(system.occupancy().booked, 0);
        assert!(system.list_waiting_queue().is_empty());
    }

    #[test]
    fn bookings_fill_seats_in_ascending_order() {
        let mut system = BookingSystem::new(3).unwrap();
        for (expected, name) in [(1, "Alice"), (2, "Bob"), (3, "Carol")] {
            assert_eq!(
                system.book(name).unwrap(),
                BookingOutcome::Assigned {
                    seat_number: expected
                }
            );
        }
    }

    #[test]
    fn overflow_booking_is_waitlisted() {
        let mut system = BookingSystem::new(2).unwrap();
        system.book("Alice").unwrap();
        system.book("Bob").unwrap();

        assert_eq!(
            system.book("Carol").unwrap(),
            BookingOutcome::Waitlisted { position: 1 }
        );
        assert_eq!(
            system.book("Dave").unwrap(),
            BookingOutcome::Waitlisted { position: 2 }
        );
        assert!(system
            .list_seats()
            .iter()
            .all(|seat| seat.status() == SeatStatus::Booked));
        assert_eq!(system.list_waiting_queue(), vec!["Carol", "Dave"]);
    }

    #[test]
    fn blank_names_are_rejected() {
        let mut system = BookingSystem::new(2).unwrap();
        assert_eq!(system.book("").unwrap_err(), BookingError::EmptyName);
        assert_eq!(system.book("   ").unwrap_err(), BookingError::EmptyName);
        assert_eq!(system.occupancy().booked, 0);

        system.book("  Alice ").unwrap();
        assert_eq!(system.list_seats()[0].passenger(), Some("Alice"));
    }

    #[test]
    fn cancel_with_empty_queue_frees_seat() {
        let mut system = BookingSystem::new(2).unwrap();
        system.book("Alice").unwrap();

        let outcome = system.cancel(1).unwrap();
        assert_eq!(
            outcome,
            CancelOutcome::Cancelled {
                seat_number: 1,
                previous_passenger: "Alice".to_string(),
                promoted: None,
            }
        );
        assert_eq!(system.list_seats()[0].status(), SeatStatus::Available);
        assert!(system.list_waiting_queue().is_empty());
    }

    #[test]
    fn cancel_promotes_head_of_queue_into_freed_seat() {
        let mut system = BookingSystem::new(2).unwrap();
        system.book("Alice").unwrap();
        system.book("Bob").unwrap();
        system.book("Carol").unwrap();

        let outcome = system.cancel(1).unwrap();
        assert_eq!(
            outcome,
            CancelOutcome::Cancelled {
                seat_number: 1,
                previous_passenger: "Alice".to_string(),
                promoted: Some("Carol".to_string()),
            }
        );
        assert_eq!(
            booked(&system),
            vec![
                (1, Some("Carol".to_string())),
                (2, Some("Bob".to_string()))
            ]
        );
        assert!(system.list_waiting_queue().is_empty());
    }

    #[test]
    fn promotion_targets_freed_seat_not_lowest() {
        let mut system = BookingSystem::new(3).unwrap();
        system.book("Alice").unwrap();
        system.book("Bob").unwrap();
        system.book("Carol").unwrap();
        system.book("Dave").unwrap();

        let outcome = system.cancel(3).unwrap();
        assert!(matches!(
            outcome,
            CancelOutcome::Cancelled { seat_number: 3, ref promoted, .. }
                if promoted.as_deref() == Some("Dave")
        ));
        assert_eq!(system.list_seats()[2].passenger(), Some("Dave"));
    }

    #[test]
    fn cancel_unknown_seat_changes_nothing() {
        let mut system = BookingSystem::new(1).unwrap();
        system.book("Alice").unwrap();
        system.book("Bob").unwrap();
        let before = booked(&system);

        for seat_number in [0, 2, -5] {
            assert_eq!(
                system.cancel(seat_number).unwrap_err(),
                BookingError::SeatNotFound {
                    seat_number,
                    total: 1
                }
            );
        }
        assert_eq!(booked(&system), before);
        assert_eq!(system.list_waiting_queue(), vec!["Bob"]);
    }

    #[test]
    fn cancel_available_seat_is_a_no_op() -> Result<(), BookingError> {
        let mut system = BookingSystem::new(2)?;
        system.book("Alice")?;
        let before = booked(&system);

        let outcome = system.cancel(2)?;
        assert_eq!(outcome, CancelOutcome::AlreadyAvailable { seat_number: 2 });
        assert_eq!(booked(&system), before);
        assert!(system.list_waiting_queue().is_empty());
        Ok(())
    }

    #[test]
    fn successive_promotions_follow_queue_order() -> Result<(), BookingError> {
        let mut system = BookingSystem::new(1)?;
        system.book("Zed")?;
        for name in ["Alice", "Bob", "Carol"] {
            system.book(name)?;
        }

        let mut promoted = Vec::new();
        for _ in 0..3 {
            if let CancelOutcome::Cancelled {
                promoted: Some(name),
                ..
            } = system.cancel(1)?
            {
                promoted.push(name);
            }
        }
        assert_eq!(promoted, vec!["Alice", "Bob", "Carol"]);
        assert_eq!(system.list_seats()[0].passenger(), Some("Carol"));
        assert!(system.list_waiting_queue().is_empty());
        Ok(())
    }

    #[test]
    fn occupancy_tracks_counts() {
        let mut system = BookingSystem::new(2).unwrap();
        system.book("Alice").unwrap();
        let occupancy = system.occupancy();
        assert_eq!(occupancy.total, 2);
        assert_eq!(occupancy.booked, 1);
        assert_eq!(occupancy.available, 1);
        assert_eq!(occupancy.waiting, 0);
    }
}
