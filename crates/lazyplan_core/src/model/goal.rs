//! SMART goal domain model.
//!
//! # Responsibility
//! - Define the goal record with its SMART narrative and owned tasks.
//! - Guard the stored progress value range.
//!
//! # Invariants
//! - `progress` is always within `0..=100`.
//! - `progress` changes only through [`Goal::set_progress`].
//! - `title` is non-blank after trim.
//! - Tasks in `tasks` are owned by this goal and dropped with it.

use crate::model::task::{Task, TaskId, TaskKind, TaskStatus};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a goal.
pub type GoalId = Uuid;

/// Upper bound for stored goal progress.
pub const MAX_PROGRESS: u8 = 100;

/// Validation and lookup errors for goal operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalError {
    /// Goal title is blank after trim.
    BlankTitle,
    /// Progress value is above [`MAX_PROGRESS`].
    ProgressOutOfRange(u8),
    /// Target goal does not exist.
    NotFound(GoalId),
}

impl Display for GoalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "goal title must not be blank"),
            Self::ProgressOutOfRange(value) => {
                write!(f, "goal progress ({value}) must be within 0..={MAX_PROGRESS}")
            }
            Self::NotFound(id) => write!(f, "goal not found: {id}"),
        }
    }
}

impl Error for GoalError {}

/// Creation input for a goal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalDraft {
    pub title: String,
    pub description: String,
    pub specific: String,
    pub measurable: String,
    pub attainable: String,
    pub relevant: String,
    /// Target completion date as Unix epoch milliseconds.
    pub target_date_ms: i64,
    /// Titles of tasks created together with the goal, in order.
    pub task_titles: Vec<String>,
    pub progress: u8,
}

/// SMART goal with its owned task collection.
///
/// Deserialization goes through [`GoalRecord`] so a blank title or
/// out-of-range progress is rejected instead of loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GoalRecord")]
pub struct Goal {
    pub id: GoalId,
    pub title: String,
    pub description: String,
    pub specific: String,
    pub measurable: String,
    pub attainable: String,
    pub relevant: String,
    /// The "time-bound" part of SMART, Unix epoch milliseconds.
    pub target_date_ms: i64,
    pub tasks: Vec<Task>,
    progress: u8,
}

impl Goal {
    /// Builds a goal from a draft, creating its initial tasks.
    ///
    /// # Errors
    /// - [`GoalError::BlankTitle`] when the draft title is blank.
    /// - [`GoalError::ProgressOutOfRange`] when draft progress exceeds 100.
    pub fn from_draft(draft: GoalDraft) -> Result<Self, GoalError> {
        validate_title(&draft.title)?;
        validate_progress(draft.progress)?;

        let tasks = draft
            .task_titles
            .into_iter()
            .map(goal_task)
            .collect::<Vec<_>>();

        Ok(Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            specific: draft.specific,
            measurable: draft.measurable,
            attainable: draft.attainable,
            relevant: draft.relevant,
            target_date_ms: draft.target_date_ms,
            tasks,
            progress: draft.progress,
        })
    }

    /// Returns the stored progress value.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Overwrites stored progress.
    ///
    /// # Errors
    /// - [`GoalError::ProgressOutOfRange`] when `value > 100`; progress is unchanged.
    pub fn set_progress(&mut self, value: u8) -> Result<(), GoalError> {
        validate_progress(value)?;
        self.progress = value;
        Ok(())
    }

    /// Appends a new actionable task to this goal and returns its ID.
    pub fn push_task(&mut self, title: impl Into<String>) -> TaskId {
        let task = goal_task(title.into());
        let id = task.id;
        self.tasks.push(task);
        id
    }

    /// Finds an owned task by ID.
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }
}

/// Unvalidated wire shape of [`Goal`].
#[derive(Deserialize)]
struct GoalRecord {
    id: GoalId,
    title: String,
    description: String,
    specific: String,
    measurable: String,
    attainable: String,
    relevant: String,
    target_date_ms: i64,
    tasks: Vec<Task>,
    progress: u8,
}

impl TryFrom<GoalRecord> for Goal {
    type Error = GoalError;

    fn try_from(value: GoalRecord) -> Result<Self, Self::Error> {
        validate_title(&value.title)?;
        validate_progress(value.progress)?;
        Ok(Self {
            id: value.id,
            title: value.title,
            description: value.description,
            specific: value.specific,
            measurable: value.measurable,
            attainable: value.attainable,
            relevant: value.relevant,
            target_date_ms: value.target_date_ms,
            tasks: value.tasks,
            progress: value.progress,
        })
    }
}

fn goal_task(title: String) -> Task {
    Task::with_id(Uuid::new_v4(), title, TaskKind::Actionable, TaskStatus::Task)
}

fn validate_title(title: &str) -> Result<(), GoalError> {
    if title.trim().is_empty() {
        return Err(GoalError::BlankTitle);
    }
    Ok(())
}

fn validate_progress(value: u8) -> Result<(), GoalError> {
    if value > MAX_PROGRESS {
        return Err(GoalError::ProgressOutOfRange(value));
    }
    Ok(())
}
