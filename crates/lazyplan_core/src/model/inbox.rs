//! Inbox item model for captured free-text thoughts.
//!
//! # Invariants
//! - `text` is stored verbatim and never blank after trim; decoding rejects
//!   blank text.
//! - `actionable` starts as `false` unless captured as actionable.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for an inbox item.
pub type InboxItemId = Uuid;

/// Validation errors for decoded inbox items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboxItemError {
    /// Item text is blank after trim.
    BlankText,
}

impl Display for InboxItemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankText => write!(f, "inbox item text must not be blank"),
        }
    }
}

impl Error for InboxItemError {}

/// One captured thought waiting for triage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "InboxItemRecord")]
pub struct InboxItem {
    pub id: InboxItemId,
    pub text: String,
    pub actionable: bool,
    /// Number of tasks this item has emitted so far.
    #[serde(default)]
    pub promotions: u32,
}

impl InboxItem {
    /// Creates a non-actionable item with a fresh ID.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            actionable: false,
            promotions: 0,
        }
    }

    /// Returns whether the item has ever emitted a task.
    pub fn was_promoted(&self) -> bool {
        self.promotions > 0
    }
}

/// Unvalidated wire shape of [`InboxItem`].
#[derive(Deserialize)]
struct InboxItemRecord {
    id: InboxItemId,
    text: String,
    actionable: bool,
    #[serde(default)]
    promotions: u32,
}

impl TryFrom<InboxItemRecord> for InboxItem {
    type Error = InboxItemError;

    fn try_from(value: InboxItemRecord) -> Result<Self, Self::Error> {
        if value.text.trim().is_empty() {
            return Err(InboxItemError::BlankText);
        }
        Ok(Self {
            id: value.id,
            text: value.text,
            actionable: value.actionable,
            promotions: value.promotions,
        })
    }
}
