//! Weekly scheduling grid state machine.
//!
//! # Responsibility
//! - Map task IDs to `(day, hour)` slots through placement records.
//! - Own drop, in-place rename, and removal of placements.
//! - Track the single active title edit.
//!
//! # Invariants
//! - At most one placement per task ID; a new drop replaces the old one.
//! - A slot may hold several placements, kept in insertion order.
//! - At most one edit is active; starting another discards the pending one.
//! - Committing an edit changes the title only, never the slot.
//! - Placements outlive their tasks; the grid never consults the task
//!   store after a drop.
//! - Every operation is total: stale IDs and bad coordinates are no-ops.

use crate::model::placement::{Placement, Slot, SlotError};
use crate::model::task::{Task, TaskId};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Read access to the tasks a drop may name.
pub trait TaskLookup {
    fn find_task(&self, id: TaskId) -> Option<&Task>;
}

impl TaskLookup for [Task] {
    fn find_task(&self, id: TaskId) -> Option<&Task> {
        self.iter().find(|task| task.id == id)
    }
}

/// Payload carried by a drag gesture from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragPayload {
    pub task_id: TaskId,
}

/// Result of a drop gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// First placement for this task.
    Placed(Slot),
    /// Existing placement replaced.
    Moved { from: Slot, to: Slot },
    /// Task is not visible to the sidebar; nothing changed.
    UnknownTask,
    /// Coordinates are outside the grid; nothing changed.
    InvalidSlot(SlotError),
}

impl DropOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Placed(_) | Self::Moved { .. })
    }
}

/// Pending rename of one placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditState {
    pub task_id: TaskId,
    pub pending_title: String,
}

/// Placement set plus edit state for one session.
#[derive(Debug, Clone, Default)]
pub struct SchedulingGrid {
    placements: Vec<Placement>,
    editing: Option<EditState>,
}

impl SchedulingGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a drag. Pure; the grid is unchanged.
    pub fn begin_drag(&self, task_id: TaskId) -> DragPayload {
        DragPayload { task_id }
    }

    /// Places a task at `(day, hour)`, replacing its previous placement.
    ///
    /// # Contract
    /// - Out-of-range coordinates return `InvalidSlot` and change nothing.
    /// - A task not found through `tasks` returns `UnknownTask` and changes
    ///   nothing, even if the task still has a placement.
    /// - Otherwise the placement is appended with a title snapshot taken now.
    pub fn drop_at<L>(&mut self, task_id: TaskId, day: u8, hour: u8, tasks: &L) -> DropOutcome
    where
        L: TaskLookup + ?Sized,
    {
        let slot = match Slot::new(day, hour) {
            Ok(slot) => slot,
            Err(err) => {
                debug!(
                    "event=grid_drop module=schedule status=noop reason=invalid_slot task_id={task_id} day={day} hour={hour}"
                );
                return DropOutcome::InvalidSlot(err);
            }
        };

        let Some(task) = tasks.find_task(task_id) else {
            debug!(
                "event=grid_drop module=schedule status=noop reason=unknown_task task_id={task_id}"
            );
            return DropOutcome::UnknownTask;
        };
        let title = task.title.clone();

        let previous = self.take_placement(task_id).map(|placement| placement.slot);
        self.placements.push(Placement::new(task_id, slot, title));

        info!(
            "event=grid_drop module=schedule status=ok task_id={} slot=\"{}\" moved={} placement_count={}",
            task_id,
            slot,
            previous.is_some(),
            self.placements.len()
        );
        match previous {
            Some(from) => DropOutcome::Moved { from, to: slot },
            None => DropOutcome::Placed(slot),
        }
    }

    /// Opens an edit on an existing placement.
    ///
    /// Returns `false` when the task has no placement; any current edit is
    /// then left as is. Otherwise a current edit is discarded unsaved.
    pub fn begin_edit(&mut self, task_id: TaskId) -> bool {
        let Some(placement) = self.placement_for(task_id) else {
            debug!("event=grid_edit_begin module=schedule status=noop task_id={task_id}");
            return false;
        };

        let next = EditState {
            task_id,
            pending_title: placement.title.clone(),
        };
        if let Some(abandoned) = self.editing.replace(next) {
            debug!(
                "event=grid_edit_abandon module=schedule status=ok task_id={}",
                abandoned.task_id
            );
        }
        info!("event=grid_edit_begin module=schedule status=ok task_id={task_id}");
        true
    }

    /// Replaces the pending title. Returns `false` when no edit is active.
    pub fn update_pending_title(&mut self, text: impl Into<String>) -> bool {
        match self.editing.as_mut() {
            Some(edit) => {
                edit.pending_title = text.into();
                true
            }
            None => false,
        }
    }

    /// Writes the pending title into the edited placement and closes the edit.
    ///
    /// Returns the edited task ID, or `None` when no edit was active.
    pub fn commit_edit(&mut self) -> Option<TaskId> {
        let edit = self.editing.take()?;
        match self
            .placements
            .iter_mut()
            .find(|placement| placement.task_id == edit.task_id)
        {
            Some(placement) => {
                placement.title = edit.pending_title;
                info!(
                    "event=grid_edit_commit module=schedule status=ok task_id={}",
                    edit.task_id
                );
                Some(edit.task_id)
            }
            None => {
                debug!(
                    "event=grid_edit_commit module=schedule status=noop reason=missing_placement task_id={}",
                    edit.task_id
                );
                None
            }
        }
    }

    /// Closes the active edit without writing. Returns whether one was open.
    pub fn cancel_edit(&mut self) -> bool {
        self.editing.take().is_some()
    }

    /// Deletes the placement for `task_id`, if any.
    ///
    /// The task itself is untouched. An edit on that placement is closed.
    pub fn remove_placement(&mut self, task_id: TaskId) -> Option<Placement> {
        let Some(removed) = self.take_placement(task_id) else {
            debug!("event=grid_remove module=schedule status=noop task_id={task_id}");
            return None;
        };
        if self
            .editing
            .as_ref()
            .is_some_and(|edit| edit.task_id == task_id)
        {
            self.editing = None;
        }
        info!(
            "event=grid_remove module=schedule status=ok task_id={} placement_count={}",
            task_id,
            self.placements.len()
        );
        Some(removed)
    }

    /// Placements in one cell, insertion order. Empty for out-of-range input.
    pub fn placements_at(&self, day: u8, hour: u8) -> Vec<&Placement> {
        let Ok(slot) = Slot::new(day, hour) else {
            return Vec::new();
        };
        self.placements_in(slot)
    }

    pub fn placements_in(&self, slot: Slot) -> Vec<&Placement> {
        self.placements
            .iter()
            .filter(|placement| placement.is_at(slot))
            .collect()
    }

    pub fn placement_for(&self, task_id: TaskId) -> Option<&Placement> {
        self.placements
            .iter()
            .find(|placement| placement.task_id == task_id)
    }

    /// All placements in insertion order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn editing(&self) -> Option<&EditState> {
        self.editing.as_ref()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    fn take_placement(&mut self, task_id: TaskId) -> Option<Placement> {
        let index = self
            .placements
            .iter()
            .position(|placement| placement.task_id == task_id)?;
        Some(self.placements.remove(index))
    }
}
