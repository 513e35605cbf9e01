//! Shared domain models.

use thiserror::Error;

/// Largest fleet size accepted at startup.
pub const MAX_BUSES: usize = 50;
/// Largest per-bus seat count accepted at startup.
pub const MAX_SEATS_PER_BUS: usize = 100;

/// Fixed fleet dimensions chosen once at startup.
///
/// Construction is the only place the bounds are enforced; a value of
/// this type always describes a non-empty fleet within the limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetConfig {
    bus_count: usize,
    seats_per_bus: usize,
}

/// Rejected fleet dimensions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FleetConfigError {
    /// Bus count outside the accepted range.
    #[error("bus count {0} outside 1..={max}", max = MAX_BUSES)]
    BusCount(usize),
    /// Seats-per-bus outside the accepted range.
    #[error("seats per bus {0} outside 1..={max}", max = MAX_SEATS_PER_BUS)]
    SeatsPerBus(usize),
}

impl FleetConfig {
    /// Validate and freeze the fleet dimensions.
    pub fn new(bus_count: usize, seats_per_bus: usize) -> Result<Self, FleetConfigError> {
        if !(1..=MAX_BUSES).contains(&bus_count) {
            return Err(FleetConfigError::BusCount(bus_count));
        }
        if !(1..=MAX_SEATS_PER_BUS).contains(&seats_per_bus) {
            return Err(FleetConfigError::SeatsPerBus(seats_per_bus));
        }
        Ok(Self {
            bus_count,
            seats_per_bus,
        })
    }

    /// Number of buses in the fleet.
    pub fn bus_count(&self) -> usize {
        self.bus_count
    }

    /// Number of seats on every bus.
    pub fn seats_per_bus(&self) -> usize {
        self.seats_per_bus
    }
}

/// Per-bus availability counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatSummary {
    /// Seats currently free.
    pub available: usize,
    /// Seats currently booked.
    pub unavailable: usize,
}
