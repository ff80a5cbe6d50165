//! Core domain logic for LazyPlan.
//! This crate is the single source of truth for capture, goal and weekly
//! scheduling invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod schedule;
pub mod service;
pub mod session;

pub use config::{PromotionPolicy, SessionConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::goal::{Goal, GoalDraft, GoalError, GoalId, MAX_PROGRESS};
pub use model::inbox::{InboxItem, InboxItemError, InboxItemId};
pub use model::placement::{Placement, Slot, SlotError, DAY_LABELS, DAYS_PER_WEEK, HOURS_PER_DAY};
pub use model::task::{Task, TaskId, TaskKind, TaskStatus};
pub use schedule::grid::{DragPayload, DropOutcome, EditState, SchedulingGrid, TaskLookup};
pub use service::capture_service::{CaptureError, CapturePipeline, ToggleOutcome};
pub use service::entity_store::{sample_goals, EntityStore};
pub use service::progress::{progress, progress_fill, progress_label};
pub use session::{EventOutcome, Session, SessionEvent, SessionSnapshot};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
