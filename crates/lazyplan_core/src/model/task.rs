//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record shared by list, goal and grid views.
//! - Provide creation helpers with stable identity and capture timestamp.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `created_at_ms` is set once at creation and never changes.
//! - A task is owned by exactly one container (flat list or goal); the
//!   scheduling grid only refers to it by id.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Classification of a captured task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// Something the user can act on and schedule.
    Actionable,
    /// Kept for reference only.
    Reference,
}

/// Where a task currently sits in the capture/plan lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Captured, not yet triaged.
    Inbox,
    /// Tracked task.
    Task,
    /// Attached to a goal.
    Goal,
}

/// Canonical task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    /// Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub kind: TaskKind,
    pub status: TaskStatus,
    /// Unix epoch milliseconds at creation.
    pub created_at_ms: i64,
}

impl Task {
    /// Creates an actionable task with status `task` and a fresh ID.
    pub fn actionable(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title, TaskKind::Actionable, TaskStatus::Task)
    }

    /// Creates a task with caller-provided identity and classification.
    ///
    /// Used by fixtures and import paths where identity already exists.
    /// The creation timestamp is still taken from the current clock.
    pub fn with_id(
        id: TaskId,
        title: impl Into<String>,
        kind: TaskKind,
        status: TaskStatus,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            kind,
            status,
            created_at_ms: now_epoch_ms(),
        }
    }

    /// Returns whether this task is classified as actionable rather than reference.
    pub fn is_actionable(&self) -> bool {
        self.kind == TaskKind::Actionable
    }
}

/// Current wall clock in Unix epoch milliseconds.
///
/// Falls back to `0` if the clock reads earlier than the epoch.
pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{Task, TaskKind, TaskStatus};

    #[test]
    fn actionable_sets_defaults() {
        let task = Task::actionable("Write report");

        assert!(!task.id.is_nil());
        assert_eq!(task.title, "Write report");
        assert_eq!(task.kind, TaskKind::Actionable);
        assert_eq!(task.status, TaskStatus::Task);
        assert!(task.created_at_ms > 0);
        assert!(task.is_actionable());
    }

    #[test]
    fn actionable_generates_distinct_ids() {
        let first = Task::actionable("same");
        let second = Task::actionable("same");
        assert_ne!(first.id, second.id);
    }
}
