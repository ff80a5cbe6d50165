//! Domain model for capture, goals and weekly scheduling.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep task ownership (list/goal) separate from grid placement.
//!
//! # Invariants
//! - Every domain object is identified by a stable UUID.
//! - Placements refer to tasks by ID only.

pub mod goal;
pub mod inbox;
pub mod placement;
pub mod task;
