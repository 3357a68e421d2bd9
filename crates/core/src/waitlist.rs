//! FIFO waiting list for passengers who arrive when every seat is taken.

use std::collections::VecDeque;

use tracing::info;

use crate::{error::BookingError, models::passenger_name};

/// Ordered queue of passenger names, head first.
///
/// Entries are positional: the same name may appear more than once.
#[derive(Debug, Clone, Default)]
pub struct WaitingQueue {
    entries: VecDeque<String>,
}

impl WaitingQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a passenger to the tail and return their 1-based position.
    /// Blank names are rejected.
    pub fn enqueue(&mut self, passenger: &str) -> Result<usize, BookingError> {
        let passenger = passenger_name(passenger)?;
        info!(passenger, position = self.entries.len() + 1, "Passenger waitlisted");
        self.entries.push_back(passenger.to_string());
        Ok(self.entries.len())
    }

    /// Remove and return the head of the queue.
    pub fn dequeue(&mut self) -> Option<String> {
        self.entries.pop_front()
    }

    /// Whether nobody is waiting.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of waiting passengers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Copy of the queue from head to tail.
    pub fn peek_all(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    /// Borrowing iterator from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}
