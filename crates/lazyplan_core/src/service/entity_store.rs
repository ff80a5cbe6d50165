//! Task and goal use-case store.
//!
//! # Responsibility
//! - Hold the canonical flat task list and goal list for one session.
//! - Provide add/remove entry points for tasks and goals.
//! - Expose the sidebar view (flat list plus goal tasks) to the grid.
//!
//! # Invariants
//! - Task removal never cascades into the scheduling grid.
//! - `list_goal_tasks` is recomputed on each call, never cached.
//! - Goal progress only changes through `set_goal_progress`.

use crate::model::goal::{Goal, GoalDraft, GoalError, GoalId};
use crate::model::task::{Task, TaskId};
use crate::schedule::grid::TaskLookup;
use log::{debug, info};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// In-memory owner of tasks and goals.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    tasks: Vec<Task>,
    goals: Vec<Goal>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with [`sample_goals`].
    pub fn with_sample_goals() -> Self {
        Self {
            tasks: Vec::new(),
            goals: sample_goals(),
        }
    }

    /// Appends an actionable task to the flat list.
    ///
    /// # Contract
    /// - Status is `task`, timestamp is now, ID is fresh.
    /// - Title is kept verbatim; no validation.
    /// - Goals are untouched.
    pub fn add_task(&mut self, title: impl Into<String>) -> Task {
        let task = Task::actionable(title);
        self.tasks.push(task.clone());
        info!(
            "event=task_add module=entity status=ok task_id={} task_count={}",
            task.id,
            self.tasks.len()
        );
        task
    }

    /// Removes one task from the flat list.
    ///
    /// Returns `None` when the ID is not in the flat list. Goal tasks and
    /// grid placements are never touched.
    pub fn remove_task(&mut self, id: TaskId) -> Option<Task> {
        let Some(index) = self.tasks.iter().position(|task| task.id == id) else {
            debug!("event=task_remove module=entity status=noop task_id={id}");
            return None;
        };
        let removed = self.tasks.remove(index);
        info!(
            "event=task_remove module=entity status=ok task_id={} task_count={}",
            id,
            self.tasks.len()
        );
        Some(removed)
    }

    /// Flat task list in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Goals in creation order.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn goal(&self, id: GoalId) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.id == id)
    }

    /// All goal tasks, goal order first and task order within each goal.
    pub fn list_goal_tasks(&self) -> Vec<&Task> {
        self.goals.iter().flat_map(|goal| goal.tasks.iter()).collect()
    }

    /// Tasks the scheduling sidebar can drag: flat list, then goal tasks.
    pub fn visible_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks
            .iter()
            .chain(self.goals.iter().flat_map(|goal| goal.tasks.iter()))
    }

    pub fn find_visible_task(&self, id: TaskId) -> Option<&Task> {
        self.visible_tasks().find(|task| task.id == id)
    }

    /// Creates a goal from a draft and appends it to the goal list.
    ///
    /// # Errors
    /// - Returns [`GoalError`] when the draft fails validation.
    pub fn create_goal(&mut self, draft: GoalDraft) -> Result<GoalId, GoalError> {
        let goal = Goal::from_draft(draft)?;
        let id = goal.id;
        info!(
            "event=goal_create module=entity status=ok goal_id={} task_count={}",
            id,
            goal.tasks.len()
        );
        self.goals.push(goal);
        Ok(id)
    }

    /// Appends a task to an existing goal.
    ///
    /// Returns `None` when the goal does not exist.
    pub fn add_goal_task(&mut self, goal_id: GoalId, title: impl Into<String>) -> Option<TaskId> {
        let goal = self.goals.iter_mut().find(|goal| goal.id == goal_id)?;
        let task_id = goal.push_task(title);
        info!("event=goal_task_add module=entity status=ok goal_id={goal_id} task_id={task_id}");
        Some(task_id)
    }

    /// Overwrites stored goal progress.
    ///
    /// # Errors
    /// - [`GoalError::NotFound`] when the goal does not exist.
    /// - [`GoalError::ProgressOutOfRange`] when `value > 100`.
    pub fn set_goal_progress(&mut self, goal_id: GoalId, value: u8) -> Result<(), GoalError> {
        let goal = self
            .goals
            .iter_mut()
            .find(|goal| goal.id == goal_id)
            .ok_or(GoalError::NotFound(goal_id))?;
        goal.set_progress(value)?;
        info!("event=goal_progress module=entity status=ok goal_id={goal_id} progress={value}");
        Ok(())
    }

    /// Removes a goal together with its owned tasks.
    pub fn remove_goal(&mut self, goal_id: GoalId) -> Option<Goal> {
        let index = self.goals.iter().position(|goal| goal.id == goal_id)?;
        let removed = self.goals.remove(index);
        info!(
            "event=goal_remove module=entity status=ok goal_id={} dropped_tasks={}",
            goal_id,
            removed.tasks.len()
        );
        Some(removed)
    }
}

impl TaskLookup for EntityStore {
    fn find_task(&self, id: TaskId) -> Option<&Task> {
        self.find_visible_task(id)
    }
}

/// Demo goals shown on first launch.
///
/// Target dates are fixed calendar days (2024-04-30 and 2024-06-30, UTC).
pub fn sample_goals() -> Vec<Goal> {
    let drafts = [
        GoalDraft {
            title: "Launch MVP Product".to_string(),
            description: "Complete and launch the minimum viable product for our new service"
                .to_string(),
            specific: "Develop and release core features of the product".to_string(),
            measurable: "Complete all critical features and pass QA testing".to_string(),
            attainable: "Team has necessary resources and skills".to_string(),
            relevant: "Aligns with company growth strategy".to_string(),
            target_date_ms: 19_843 * DAY_MS,
            task_titles: vec![
                "Design System Implementation".to_string(),
                "Core Features Development".to_string(),
                "User Testing".to_string(),
            ],
            progress: 65,
        },
        GoalDraft {
            title: "Improve Fitness".to_string(),
            description: "Get in better shape through consistent exercise".to_string(),
            specific: "Establish regular workout routine".to_string(),
            measurable: "Track workout sessions and progress".to_string(),
            attainable: "Start with manageable workout plan".to_string(),
            relevant: "Improves health and energy levels".to_string(),
            target_date_ms: 19_904 * DAY_MS,
            task_titles: vec!["Morning Workouts".to_string(), "Meal Planning".to_string()],
            progress: 30,
        },
    ];

    drafts
        .into_iter()
        .filter_map(|draft| Goal::from_draft(draft).ok())
        .collect()
}
