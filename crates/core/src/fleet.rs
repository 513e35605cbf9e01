//! The in-memory seat availability grid and its booking operations.

use std::ops::Range;

use thiserror::Error;

use crate::models::{FleetConfig, SeatSummary};

/// Conflict raised by a booking operation.
///
/// Both variants leave the grid untouched; the caller reports the
/// conflict once and continues without retrying.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BookingError {
    /// The target seat is already booked.
    #[error("Seat number {seat} is already booked")]
    AlreadyBooked {
        /// 1-based seat number that was requested.
        seat: usize,
    },
    /// The target seat is already available.
    #[error("Seat number {seat} is already available")]
    AlreadyAvailable {
        /// 1-based seat number that was requested.
        seat: usize,
    },
}

/// Seat availability for the whole fleet, one row per bus.
///
/// Cells are booking flags (`true` = booked) stored row-major. The grid
/// is owned by the console loop and mutated in place through `&mut`;
/// it lives for the process lifetime and is never persisted.
///
/// All public operations take 1-based bus and seat identifiers, the
/// form shown to users. Callers validate identifiers against the fleet
/// dimensions before invoking an operation; passing an out-of-range
/// identifier is a programming error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatGrid {
    config: FleetConfig,
    cells: Vec<bool>,
}

impl SeatGrid {
    /// Build a grid with every seat available.
    pub fn new(config: FleetConfig) -> Self {
        Self {
            config,
            cells: vec![false; config.bus_count() * config.seats_per_bus()],
        }
    }

    /// Fleet dimensions this grid was built with.
    pub fn config(&self) -> FleetConfig {
        self.config
    }

    fn row_range(&self, bus: usize) -> Range<usize> {
        debug_assert!((1..=self.config.bus_count()).contains(&bus));
        let width = self.config.seats_per_bus();
        let start = (bus - 1) * width;
        start..start + width
    }

    fn cell_index(&self, bus: usize, seat: usize) -> usize {
        debug_assert!((1..=self.config.seats_per_bus()).contains(&seat));
        self.row_range(bus).start + (seat - 1)
    }

    /// Mark a seat booked.
    ///
    /// Mutates exactly one cell on success; an already-booked seat is
    /// reported as a conflict with no effect.
    pub fn book(&mut self, bus: usize, seat: usize) -> Result<(), BookingError> {
        let index = self.cell_index(bus, seat);
        if self.cells[index] {
            return Err(BookingError::AlreadyBooked { seat });
        }
        self.cells[index] = true;
        Ok(())
    }

    /// Mark a booked seat available again. Mirror image of [`book`].
    ///
    /// [`book`]: SeatGrid::book
    pub fn cancel(&mut self, bus: usize, seat: usize) -> Result<(), BookingError> {
        let index = self.cell_index(bus, seat);
        if !self.cells[index] {
            return Err(BookingError::AlreadyAvailable { seat });
        }
        self.cells[index] = false;
        Ok(())
    }

    /// Make every seat on the given bus available. Idempotent.
    pub fn reset_bus(&mut self, bus: usize) {
        let range = self.row_range(bus);
        self.cells[range].fill(false);
    }

    /// Count the bus's seats by state.
    pub fn summarize(&self, bus: usize) -> SeatSummary {
        let row = &self.cells[self.row_range(bus)];
        let unavailable = row.iter().filter(|&&booked| booked).count();
        SeatSummary {
            available: row.len() - unavailable,
            unavailable,
        }
    }

    /// Booking flags for the bus's seats, in seat order.
    pub fn seat_states(&self, bus: usize) -> &[bool] {
        &self.cells[self.row_range(bus)]
    }
}
