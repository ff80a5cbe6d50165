//! Core use-case services.
//!
//! # Responsibility
//! - Own task/goal collections and inbox capture for one session.
//! - Keep presentation layers decoupled from model invariants.

pub mod capture_service;
pub mod entity_store;
pub mod progress;
