#![warn(clippy::all, missing_docs)]

//! Core booking logic for Seatline.
//!
//! This crate hosts the seat registry, the waiting queue, the booking
//! system that ties them together, and configuration handling used by
//! the terminal UI and any future frontends.

pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod shared;
pub mod system;
pub mod waitlist;

pub use config::AppConfig;
pub use error::BookingError;
pub use models::{BookingOutcome, CancelOutcome, Occupancy, Seat, SeatNumber, SeatStatus, MAX_SEATS};
pub use registry::SeatRegistry;
pub use shared::SharedBookingSystem;
pub use system::BookingSystem;
pub use waitlist::WaitingQueue;
