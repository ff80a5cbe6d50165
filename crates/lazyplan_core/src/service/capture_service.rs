//! Thought capture and actionable promotion.
//!
//! # Responsibility
//! - Turn submitted free text into inbox items.
//! - Emit tasks into the entity store when an item becomes actionable.
//!
//! # Invariants
//! - Blank/whitespace-only text never creates an item.
//! - Item text is stored verbatim (no trim).
//! - A `captured -> promoted` transition emits exactly one task.
//! - Turning `actionable` off never retracts an emitted task.
//! - Under `PromotionPolicy::Once` an item emits at most one task.

use crate::config::PromotionPolicy;
use crate::model::inbox::{InboxItem, InboxItemId};
use crate::model::task::TaskId;
use crate::service::entity_store::EntityStore;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from capture submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// Submitted text is empty after trim.
    BlankThought,
}

impl Display for CaptureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankThought => write!(f, "thought text must not be blank"),
        }
    }
}

impl Error for CaptureError {}

/// Result of toggling an inbox item's actionable flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Flag turned on and one task was emitted.
    Promoted(TaskId),
    /// Flag turned on, but the policy suppressed a second emission.
    AlreadyPromoted,
    /// Flag turned off; emitted tasks are kept.
    Demoted,
    /// No inbox item with that ID.
    NotFound,
}

/// Inbox state plus promotion rules for one session.
#[derive(Debug, Clone, Default)]
pub struct CapturePipeline {
    items: Vec<InboxItem>,
    policy: PromotionPolicy,
}

impl CapturePipeline {
    pub fn new(policy: PromotionPolicy) -> Self {
        Self {
            items: Vec::new(),
            policy,
        }
    }

    pub fn policy(&self) -> PromotionPolicy {
        self.policy
    }

    /// Inbox items in capture order.
    pub fn items(&self) -> &[InboxItem] {
        &self.items
    }

    pub fn item(&self, id: InboxItemId) -> Option<&InboxItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Captures a non-actionable thought.
    ///
    /// # Errors
    /// - [`CaptureError::BlankThought`] for blank input; nothing is created.
    pub fn submit_thought(
        &mut self,
        text: impl Into<String>,
        store: &mut EntityStore,
    ) -> Result<InboxItemId, CaptureError> {
        self.capture(text, false, store)
    }

    /// Captures a thought, promoting it immediately when `actionable` is set.
    ///
    /// # Errors
    /// - [`CaptureError::BlankThought`] for blank input; nothing is created.
    pub fn capture(
        &mut self,
        text: impl Into<String>,
        actionable: bool,
        store: &mut EntityStore,
    ) -> Result<InboxItemId, CaptureError> {
        let text = text.into();
        if text.trim().is_empty() {
            debug!("event=thought_submit module=capture status=rejected reason=blank");
            return Err(CaptureError::BlankThought);
        }

        let mut item = InboxItem::new(text);
        let id = item.id;
        if actionable {
            item.actionable = true;
            let task_id = promote(&mut item, store);
            info!("event=thought_promote module=capture status=ok inbox_id={id} task_id={task_id}");
        }
        self.items.push(item);
        info!(
            "event=thought_submit module=capture status=ok inbox_id={} actionable={} inbox_count={}",
            id,
            actionable,
            self.items.len()
        );
        Ok(id)
    }

    /// Flips the actionable flag of one item.
    ///
    /// # Contract
    /// - `false -> true` emits one task titled with the item's current text,
    ///   unless the policy is `Once` and the item already emitted.
    /// - `true -> false` only changes the flag.
    /// - Unknown ID is a no-op.
    pub fn toggle_actionable(&mut self, id: InboxItemId, store: &mut EntityStore) -> ToggleOutcome {
        let policy = self.policy;
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            debug!("event=thought_toggle module=capture status=noop inbox_id={id}");
            return ToggleOutcome::NotFound;
        };

        item.actionable = !item.actionable;
        if !item.actionable {
            info!("event=thought_toggle module=capture status=ok inbox_id={id} actionable=false");
            return ToggleOutcome::Demoted;
        }

        if policy == PromotionPolicy::Once && item.was_promoted() {
            info!(
                "event=thought_toggle module=capture status=suppressed inbox_id={id} policy={}",
                policy.as_str()
            );
            return ToggleOutcome::AlreadyPromoted;
        }

        let task_id = promote(item, store);
        info!(
            "event=thought_promote module=capture status=ok inbox_id={} task_id={} promotions={}",
            id, task_id, item.promotions
        );
        ToggleOutcome::Promoted(task_id)
    }

    /// Deletes one inbox item; emitted tasks stay in the store.
    pub fn remove_item(&mut self, id: InboxItemId) -> Option<InboxItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        let removed = self.items.remove(index);
        info!(
            "event=thought_remove module=capture status=ok inbox_id={} inbox_count={}",
            id,
            self.items.len()
        );
        Some(removed)
    }
}

fn promote(item: &mut InboxItem, store: &mut EntityStore) -> TaskId {
    item.promotions = item.promotions.saturating_add(1);
    store.add_task(item.text.clone()).id
}
