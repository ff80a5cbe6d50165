//! Weekly time-grid scheduling.
//!
//! # Responsibility
//! - Keep task placements independent from task ownership.
//! - Expose the grid as an explicit state machine with total operations.

pub mod grid;
