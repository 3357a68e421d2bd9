//! Thread-safe handle around a [`BookingSystem`].

use std::sync::Arc;

use parking_lot::Mutex;

use crate::{
    error::BookingError,
    models::{BookingOutcome, CancelOutcome, Occupancy, Seat},
    system::BookingSystem,
};

/// Cloneable handle serialising every operation on one booking system.
///
/// The lock is held for the whole of each call, so a cancellation and the
/// promotion that follows it are observed as a single step.
#[derive(Debug, Clone)]
pub struct SharedBookingSystem {
    inner: Arc<Mutex<BookingSystem>>,
}

impl SharedBookingSystem {
    /// Create a shared system with `num_seats` seats.
    pub fn new(num_seats: i64) -> Result<Self, BookingError> {
        Ok(Self::from(BookingSystem::new(num_seats)?))
    }

    /// Reset to `num_seats` fresh seats and an empty queue.
    pub fn initialize(&self, num_seats: i64) -> Result<(), BookingError> {
        self.inner.lock().initialize(num_seats)
    }

    /// See [`BookingSystem::book`].
    pub fn book(&self, passenger: &str) -> Result<BookingOutcome, BookingError> {
        self.inner.lock().book(passenger)
    }

    /// See [`BookingSystem::cancel`].
    pub fn cancel(&self, seat_number: i64) -> Result<CancelOutcome, BookingError> {
        self.inner.lock().cancel(seat_number)
    }

    /// Snapshot of all seats in ascending order.
    pub fn list_seats(&self) -> Vec<Seat> {
        self.inner.lock().list_seats().to_vec()
    }

    /// Snapshot of the waiting queue, head first.
    pub fn list_waiting_queue(&self) -> Vec<String> {
        self.inner.lock().list_waiting_queue()
    }

    /// Current occupancy counts.
    pub fn occupancy(&self) -> Occupancy {
        self.inner.lock().occupancy()
    }

    /// Run `f` with exclusive access, for callers that need several reads
    /// from one consistent state.
    pub fn with<R>(&self, f: impl FnOnce(&BookingSystem) -> R) -> R {
        f(&*self.inner.lock())
    }
}

impl From<BookingSystem> for SharedBookingSystem {
    fn from(system: BookingSystem) -> Self {
        Self {
            inner: Arc::new(Mutex::new(system)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::models::SeatStatus;

    #[test]
    fn concurrent_bookings_never_double_assign() {
        let shared = SharedBookingSystem::new(8).unwrap();
        let handles = (0..4)
            .map(|worker| {
                let shared = shared.clone();
                thread::spawn(move || {
                    (0..4)
                        .map(|n| shared.book(&format!("p{worker}-{n}")).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect::<Vec<_>>();

        let mut assigned = Vec::new();
        let mut waitlisted = 0;
        for handle in handles {
            for outcome in handle.join().unwrap() {
                match outcome {
                    BookingOutcome::Assigned { seat_number } => assigned.push(seat_number),
                    BookingOutcome::Waitlisted { .. } => waitlisted += 1,
                }
            }
        }

        assigned.sort_unstable();
        assert_eq!(assigned, (1..=8).collect::<Vec<_>>());
        assert_eq!(waitlisted, 8);
        assert_eq!(shared.list_waiting_queue().len(), 8);
    }

    #[test]
    fn concurrent_cancels_keep_queue_settled() {
        let shared = SharedBookingSystem::new(4).unwrap();
        for n in 0..10 {
            shared.book(&format!("p{n}")).unwrap();
        }

        let handles = (1..=4_i64)
            .map(|seat| {
                let shared = shared.clone();
                thread::spawn(move || shared.cancel(seat).unwrap())
            })
            .collect::<Vec<_>>();
        for handle in handles {
            handle.join().unwrap();
        }

        shared.with(|system| {
            assert_eq!(system.waiting_queue().len(), 2);
            assert!(system
                .list_seats()
                .iter()
                .all(|seat| seat.status() == SeatStatus::Booked));
        });
        assert_eq!(shared.occupancy().booked, 4);
    }

    #[test]
    fn initialize_resets_shared_state() {
        let shared = SharedBookingSystem::new(1).unwrap();
        shared.book("Alice").unwrap();
        shared.initialize(2).unwrap();
        assert_eq!(shared.list_seats().len(), 2);
        assert_eq!(
            shared.initialize(-4).unwrap_err(),
            BookingError::InvalidConfiguration(-4)
        );
    }
}
