//! Planning session: single owner of all mutable planner state.
//!
//! # Responsibility
//! - Own the entity store, capture pipeline and scheduling grid together.
//! - Dispatch presentation-layer input events to the owning component.
//! - Produce serializable snapshots for rendering.
//!
//! # Invariants
//! - Every event is total; invalid or stale references yield no-op outcomes.
//! - Events run to completion in call order; no state is shared across
//!   sessions.

use crate::config::SessionConfig;
use crate::model::goal::Goal;
use crate::model::inbox::{InboxItem, InboxItemId};
use crate::model::placement::Placement;
use crate::model::task::{Task, TaskId};
use crate::schedule::grid::{DropOutcome, EditState, SchedulingGrid};
use crate::service::capture_service::{CaptureError, CapturePipeline, ToggleOutcome};
use crate::service::entity_store::EntityStore;
use log::info;
use serde::{Deserialize, Serialize};

/// Input events accepted from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SubmitThought { text: String },
    ToggleActionable { inbox_id: InboxItemId },
    RemoveInboxItem { inbox_id: InboxItemId },
    AddTask { title: String },
    RemoveTask { task_id: TaskId },
    DropAt { task_id: TaskId, day: u8, hour: u8 },
    BeginEdit { task_id: TaskId },
    UpdatePendingTitle { text: String },
    CommitEdit,
    CancelEdit,
    RemovePlacement { task_id: TaskId },
}

/// What an event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    ThoughtCaptured(InboxItemId),
    ThoughtRejected(CaptureError),
    Toggled(ToggleOutcome),
    TaskAdded(TaskId),
    Dropped(DropOutcome),
    EditCommitted(TaskId),
    /// A state change that carries no extra data.
    Applied,
    /// Valid event against a stale or missing target.
    Ignored,
}

/// Rendering data for one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub tasks: Vec<Task>,
    pub goals: Vec<Goal>,
    pub inbox: Vec<InboxItem>,
    pub placements: Vec<Placement>,
    pub editing: Option<EditState>,
}

/// One user's planning session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: SessionConfig,
    store: EntityStore,
    capture: CapturePipeline,
    grid: SchedulingGrid,
}

impl Session {
    /// Starts a session from configuration.
    pub fn new(config: SessionConfig) -> Self {
        let store = if config.seed_sample_goals {
            EntityStore::with_sample_goals()
        } else {
            EntityStore::new()
        };
        info!(
            "event=session_start module=session status=ok policy={} goal_count={}",
            config.promotion_policy.as_str(),
            store.goals().len()
        );
        Self {
            config,
            store,
            capture: CapturePipeline::new(config.promotion_policy),
            grid: SchedulingGrid::new(),
        }
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Mutable store access for goal management.
    pub fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }

    pub fn capture(&self) -> &CapturePipeline {
        &self.capture
    }

    pub fn grid(&self) -> &SchedulingGrid {
        &self.grid
    }

    /// Dispatches one input event.
    pub fn apply(&mut self, event: SessionEvent) -> EventOutcome {
        match event {
            SessionEvent::SubmitThought { text } => match self.submit_thought(text) {
                Ok(id) => EventOutcome::ThoughtCaptured(id),
                Err(err) => EventOutcome::ThoughtRejected(err),
            },
            SessionEvent::ToggleActionable { inbox_id } => {
                EventOutcome::Toggled(self.toggle_actionable(inbox_id))
            }
            SessionEvent::RemoveInboxItem { inbox_id } => {
                applied_if(self.remove_inbox_item(inbox_id).is_some())
            }
            SessionEvent::AddTask { title } => EventOutcome::TaskAdded(self.add_task(title).id),
            SessionEvent::RemoveTask { task_id } => {
                applied_if(self.remove_task(task_id).is_some())
            }
            SessionEvent::DropAt { task_id, day, hour } => {
                EventOutcome::Dropped(self.drop_at(task_id, day, hour))
            }
            SessionEvent::BeginEdit { task_id } => applied_if(self.begin_edit(task_id)),
            SessionEvent::UpdatePendingTitle { text } => {
                applied_if(self.update_pending_title(text))
            }
            SessionEvent::CommitEdit => match self.commit_edit() {
                Some(task_id) => EventOutcome::EditCommitted(task_id),
                None => EventOutcome::Ignored,
            },
            SessionEvent::CancelEdit => applied_if(self.cancel_edit()),
            SessionEvent::RemovePlacement { task_id } => {
                applied_if(self.remove_placement(task_id).is_some())
            }
        }
    }

    pub fn submit_thought(&mut self, text: impl Into<String>) -> Result<InboxItemId, CaptureError> {
        self.capture.submit_thought(text, &mut self.store)
    }

    pub fn toggle_actionable(&mut self, inbox_id: InboxItemId) -> ToggleOutcome {
        self.capture.toggle_actionable(inbox_id, &mut self.store)
    }

    pub fn remove_inbox_item(&mut self, inbox_id: InboxItemId) -> Option<InboxItem> {
        self.capture.remove_item(inbox_id)
    }

    pub fn add_task(&mut self, title: impl Into<String>) -> Task {
        self.store.add_task(title)
    }

    /// Removes a flat-list task; its placement, if any, stays on the grid.
    pub fn remove_task(&mut self, task_id: TaskId) -> Option<Task> {
        self.store.remove_task(task_id)
    }

    /// Drops a sidebar-visible task (flat list or goal task) on the grid.
    pub fn drop_at(&mut self, task_id: TaskId, day: u8, hour: u8) -> DropOutcome {
        self.grid.drop_at(task_id, day, hour, &self.store)
    }

    pub fn begin_edit(&mut self, task_id: TaskId) -> bool {
        self.grid.begin_edit(task_id)
    }

    pub fn update_pending_title(&mut self, text: impl Into<String>) -> bool {
        self.grid.update_pending_title(text)
    }

    pub fn commit_edit(&mut self) -> Option<TaskId> {
        self.grid.commit_edit()
    }

    pub fn cancel_edit(&mut self) -> bool {
        self.grid.cancel_edit()
    }

    pub fn remove_placement(&mut self, task_id: TaskId) -> Option<Placement> {
        self.grid.remove_placement(task_id)
    }

    pub fn placements_at(&self, day: u8, hour: u8) -> Vec<&Placement> {
        self.grid.placements_at(day, hour)
    }

    /// Copies current state into a rendering snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            tasks: self.store.tasks().to_vec(),
            goals: self.store.goals().to_vec(),
            inbox: self.capture.items().to_vec(),
            placements: self.grid.placements().to_vec(),
            editing: self.grid.editing().cloned(),
        }
    }
}

fn applied_if(changed: bool) -> EventOutcome {
    if changed {
        EventOutcome::Applied
    } else {
        EventOutcome::Ignored
    }
}
