#![warn(clippy::all, missing_docs)]

//! Core domain logic for the busfleet console application.
//!
//! This crate hosts the fleet configuration, the seat availability
//! grid with its booking operations, input validation, pagination,
//! and configuration handling used by the terminal frontend.

pub mod config;
pub mod fleet;
pub mod models;
pub mod page;
pub mod validate;

pub use config::AppConfig;
pub use fleet::{BookingError, SeatGrid};
pub use models::{FleetConfig, FleetConfigError, SeatSummary};
pub use page::{PageError, Pager};
