//! Weekly grid coordinates and placement records.
//!
//! # Responsibility
//! - Define the `(day, hour)` slot of the weekly grid with range checks.
//! - Define the placement record binding a task ID to one slot.
//!
//! # Invariants
//! - `Slot.day` is within `0..=6`, day `0` being Sunday.
//! - `Slot.hour` is within `0..=23`.
//! - A placement keeps its own title copy; it never borrows from the task.

use crate::model::task::TaskId;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Days per grid week.
pub const DAYS_PER_WEEK: u8 = 7;
/// Hours per grid day.
pub const HOURS_PER_DAY: u8 = 24;
/// Column labels, indexed by `Slot.day`.
pub const DAY_LABELS: [&str; DAYS_PER_WEEK as usize] =
    ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

static SLOT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i)(sun|mon|tue|wed|thu|fri|sat)\s+([0-9]{1,2}):00$").expect("valid slot regex")
});

/// Slot construction and parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    DayOutOfRange(u8),
    HourOutOfRange(u8),
    /// Text is not of the form `<Day> HH:00`.
    Unparseable(String),
}

impl Display for SlotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DayOutOfRange(day) => {
                write!(f, "day ({day}) must be within 0..{DAYS_PER_WEEK}")
            }
            Self::HourOutOfRange(hour) => {
                write!(f, "hour ({hour}) must be within 0..{HOURS_PER_DAY}")
            }
            Self::Unparseable(value) => {
                write!(f, "slot `{value}` must look like `Tue 09:00`")
            }
        }
    }
}

impl Error for SlotError {}

/// One `(day, hour)` cell of the weekly grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawSlot")]
pub struct Slot {
    day: u8,
    hour: u8,
}

#[derive(Deserialize)]
struct RawSlot {
    day: u8,
    hour: u8,
}

impl TryFrom<RawSlot> for Slot {
    type Error = SlotError;

    fn try_from(value: RawSlot) -> Result<Self, Self::Error> {
        Slot::new(value.day, value.hour)
    }
}

impl Slot {
    /// Creates a slot after range-checking both coordinates.
    ///
    /// # Errors
    /// - [`SlotError::DayOutOfRange`] when `day > 6`.
    /// - [`SlotError::HourOutOfRange`] when `hour > 23`.
    pub fn new(day: u8, hour: u8) -> Result<Self, SlotError> {
        if day >= DAYS_PER_WEEK {
            return Err(SlotError::DayOutOfRange(day));
        }
        if hour >= HOURS_PER_DAY {
            return Err(SlotError::HourOutOfRange(hour));
        }
        Ok(Self { day, hour })
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Short column label for this slot's day.
    pub fn day_label(&self) -> &'static str {
        DAY_LABELS[usize::from(self.day)]
    }

    /// Iterates every slot of the week, day-major.
    pub fn all() -> impl Iterator<Item = Slot> {
        (0..DAYS_PER_WEEK)
            .flat_map(|day| (0..HOURS_PER_DAY).map(move |hour| Slot { day, hour }))
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:02}:00", self.day_label(), self.hour)
    }
}

impl FromStr for Slot {
    type Err = SlotError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let captures = SLOT_RE
            .captures(trimmed)
            .ok_or_else(|| SlotError::Unparseable(trimmed.to_string()))?;

        let day_text = captures[1].to_ascii_lowercase();
        let day = DAY_LABELS
            .iter()
            .position(|label| label.to_ascii_lowercase() == day_text)
            .ok_or_else(|| SlotError::Unparseable(trimmed.to_string()))?;
        let hour = captures[2]
            .parse::<u8>()
            .map_err(|_| SlotError::Unparseable(trimmed.to_string()))?;

        // `position` over a 7-element array always fits in u8.
        Slot::new(day as u8, hour)
    }
}

/// A task pinned to one slot of the week.
///
/// `task_id` is a weak reference: the task may have been removed from the
/// entity store while the placement stays on the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub task_id: TaskId,
    pub slot: Slot,
    /// Title snapshot taken at drop time, then edited in place.
    pub title: String,
}

impl Placement {
    pub fn new(task_id: TaskId, slot: Slot, title: impl Into<String>) -> Self {
        Self {
            task_id,
            slot,
            title: title.into(),
        }
    }

    pub fn is_at(&self, slot: Slot) -> bool {
        self.slot == slot
    }
}
