//! Goal progress read model.
//!
//! Progress is a stored, explicitly-set value on [`Goal`]; nothing here
//! derives it from task state.

use crate::model::goal::{Goal, MAX_PROGRESS};

/// Stored goal progress in `0..=100`.
pub fn progress(goal: &Goal) -> u8 {
    goal.progress()
}

/// Percentage label, e.g. `65%`.
pub fn progress_label(goal: &Goal) -> String {
    format!("{}%", progress(goal))
}

/// Filled cell count for a progress bar `width` cells wide, rounded down.
///
/// Never exceeds `width`, for any `width`.
pub fn progress_fill(goal: &Goal, width: usize) -> usize {
    let value = usize::from(progress(goal));
    let max = usize::from(MAX_PROGRESS);
    // Split so neither product can overflow.
    (width / max) * value + (width % max) * value / max
}

#[cfg(test)]
mod tests {
    use super::{progress, progress_fill, progress_label};
    use crate::model::goal::{Goal, GoalDraft};

    fn goal_at(value: u8) -> Goal {
        Goal::from_draft(GoalDraft {
            title: "Read more".to_string(),
            progress: value,
            ..GoalDraft::default()
        })
        .unwrap()
    }

    #[test]
    fn progress_is_the_stored_value() {
        let mut goal = goal_at(65);
        assert_eq!(progress(&goal), 65);
        assert_eq!(progress_label(&goal), "65%");

        goal.push_task("unrelated task");
        assert_eq!(progress(&goal), 65);
    }

    #[test]
    fn fill_scales_and_rounds_down() {
        assert_eq!(progress_fill(&goal_at(0), 20), 0);
        assert_eq!(progress_fill(&goal_at(65), 20), 13);
        assert_eq!(progress_fill(&goal_at(33), 10), 3);
        assert_eq!(progress_fill(&goal_at(100), 20), 20);
    }

    #[test]
    fn fill_handles_huge_widths_without_overflow() {
        let width = usize::MAX / 10;
        assert_eq!(progress_fill(&goal_at(50), width), width / 2);
        assert_eq!(progress_fill(&goal_at(100), usize::MAX), usize::MAX);
        assert_eq!(progress_fill(&goal_at(0), usize::MAX), 0);
    }
}
