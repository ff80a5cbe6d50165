//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Map planner events onto an opaque per-session handle.
//! - Keep error semantics simple: envelopes with `ok` + message.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - IDs cross the boundary as UUID strings; bad IDs fail the call.
//! - Every session lives in its own handle; there is no global planner state.

use flutter_rust_bridge::frb;
use lazyplan_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    progress_label, DropOutcome, Goal, InboxItem, Placement, PromotionPolicy, Session,
    SessionConfig, Task, TaskKind, TaskStatus, ToggleOutcome,
};
use log::warn;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerActionResponse {
    /// Whether the call changed planner state.
    pub ok: bool,
    /// Created or affected ID, when there is one.
    pub id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl PlannerActionResponse {
    fn success(message: impl Into<String>, id: Option<String>) -> Self {
        Self {
            ok: true,
            id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

/// Sidebar task row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerTaskItem {
    pub task_id: String,
    pub title: String,
    /// `actionable|reference`.
    pub kind: String,
    /// `inbox|task|goal`.
    pub status: String,
    pub created_at_ms: i64,
}

/// Inbox row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerInboxItem {
    pub inbox_id: String,
    pub text: String,
    pub actionable: bool,
}

/// Goal card with nested tasks and progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerGoalItem {
    pub goal_id: String,
    pub title: String,
    pub description: String,
    pub specific: String,
    pub measurable: String,
    pub attainable: String,
    pub relevant: String,
    pub target_date_ms: i64,
    pub progress: u8,
    /// Preformatted label, e.g. `65%`.
    pub progress_label: String,
    pub tasks: Vec<PlannerTaskItem>,
}

/// One grid placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerPlacementItem {
    pub task_id: String,
    pub day: u8,
    pub hour: u8,
    pub title: String,
    /// Whether this placement is currently in edit mode.
    pub editing: bool,
}

/// Active edit for the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerEditItem {
    pub task_id: String,
    pub pending_title: String,
}

/// Opaque planning session handle owned by the Dart side.
///
/// FRB calls may arrive on any thread, so the session sits behind a mutex.
#[frb(opaque)]
pub struct PlannerSession {
    inner: Mutex<Session>,
}

impl PlannerSession {
    /// Starts a session.
    ///
    /// `promotion_policy` accepts `every_toggle|once`; `None` or an unknown
    /// value keeps the default.
    #[frb(sync)]
    pub fn new(promotion_policy: Option<String>, seed_sample_goals: bool) -> PlannerSession {
        let promotion_policy = promotion_policy
            .as_deref()
            .and_then(PromotionPolicy::parse)
            .unwrap_or_default();
        Self::from_config(SessionConfig {
            promotion_policy,
            seed_sample_goals,
        })
    }

    /// Starts a session configured from process environment.
    #[frb(sync)]
    pub fn from_env() -> PlannerSession {
        Self::from_config(SessionConfig::from_env())
    }

    #[frb(ignore)]
    fn from_config(config: SessionConfig) -> PlannerSession {
        PlannerSession {
            inner: Mutex::new(Session::new(config)),
        }
    }

    #[frb(sync)]
    pub fn submit_thought(&self, text: String) -> PlannerActionResponse {
        self.act("submit_thought", |session| match session.submit_thought(text) {
            Ok(id) => PlannerActionResponse::success("Thought captured.", Some(id.to_string())),
            Err(err) => PlannerActionResponse::failure(err.to_string()),
        })
    }

    /// Toggles actionable; `id` carries the emitted task on promotion.
    #[frb(sync)]
    pub fn toggle_actionable(&self, inbox_id: String) -> PlannerActionResponse {
        let Some(inbox_id) = parse_id(&inbox_id) else {
            return invalid_id("inbox_id", &inbox_id);
        };
        self.act("toggle_actionable", |session| {
            match session.toggle_actionable(inbox_id) {
                ToggleOutcome::Promoted(task_id) => {
                    PlannerActionResponse::success("Task created.", Some(task_id.to_string()))
                }
                ToggleOutcome::AlreadyPromoted => {
                    PlannerActionResponse::success("Marked actionable.", None)
                }
                ToggleOutcome::Demoted => {
                    PlannerActionResponse::success("Marked not actionable.", None)
                }
                ToggleOutcome::NotFound => {
                    PlannerActionResponse::failure(format!("inbox item not found: {inbox_id}"))
                }
            }
        })
    }

    #[frb(sync)]
    pub fn remove_inbox_item(&self, inbox_id: String) -> PlannerActionResponse {
        let Some(inbox_id) = parse_id(&inbox_id) else {
            return invalid_id("inbox_id", &inbox_id);
        };
        self.act("remove_inbox_item", |session| {
            match session.remove_inbox_item(inbox_id) {
                Some(_) => PlannerActionResponse::success("Thought removed.", None),
                None => PlannerActionResponse::failure(format!("inbox item not found: {inbox_id}")),
            }
        })
    }

    #[frb(sync)]
    pub fn add_task(&self, title: String) -> PlannerActionResponse {
        self.act("add_task", |session| {
            let task = session.add_task(title);
            PlannerActionResponse::success("Task created.", Some(task.id.to_string()))
        })
    }

    #[frb(sync)]
    pub fn remove_task(&self, task_id: String) -> PlannerActionResponse {
        let Some(task_id) = parse_id(&task_id) else {
            return invalid_id("task_id", &task_id);
        };
        self.act("remove_task", |session| match session.remove_task(task_id) {
            Some(_) => PlannerActionResponse::success("Task removed.", None),
            None => PlannerActionResponse::failure(format!("task not found: {task_id}")),
        })
    }

    #[frb(sync)]
    pub fn drop_at(&self, task_id: String, day: u8, hour: u8) -> PlannerActionResponse {
        let Some(task_id) = parse_id(&task_id) else {
            return invalid_id("task_id", &task_id);
        };
        self.act("drop_at", |session| match session.drop_at(task_id, day, hour) {
            DropOutcome::Placed(slot) => {
                PlannerActionResponse::success(format!("Scheduled at {slot}."), None)
            }
            DropOutcome::Moved { to, .. } => {
                PlannerActionResponse::success(format!("Moved to {to}."), None)
            }
            DropOutcome::UnknownTask => {
                PlannerActionResponse::failure(format!("task not found: {task_id}"))
            }
            DropOutcome::InvalidSlot(err) => PlannerActionResponse::failure(err.to_string()),
        })
    }

    #[frb(sync)]
    pub fn begin_edit(&self, task_id: String) -> PlannerActionResponse {
        let Some(task_id) = parse_id(&task_id) else {
            return invalid_id("task_id", &task_id);
        };
        self.act("begin_edit", |session| {
            if session.begin_edit(task_id) {
                PlannerActionResponse::success("Editing.", None)
            } else {
                PlannerActionResponse::failure(format!("placement not found: {task_id}"))
            }
        })
    }

    #[frb(sync)]
    pub fn update_pending_title(&self, text: String) -> PlannerActionResponse {
        self.act("update_pending_title", |session| {
            if session.update_pending_title(text) {
                PlannerActionResponse::success("Pending title updated.", None)
            } else {
                PlannerActionResponse::failure("no active edit")
            }
        })
    }

    #[frb(sync)]
    pub fn commit_edit(&self) -> PlannerActionResponse {
        self.act("commit_edit", |session| match session.commit_edit() {
            Some(task_id) => {
                PlannerActionResponse::success("Placement renamed.", Some(task_id.to_string()))
            }
            None => PlannerActionResponse::failure("no active edit"),
        })
    }

    #[frb(sync)]
    pub fn cancel_edit(&self) -> PlannerActionResponse {
        self.act("cancel_edit", |session| {
            if session.cancel_edit() {
                PlannerActionResponse::success("Edit cancelled.", None)
            } else {
                PlannerActionResponse::failure("no active edit")
            }
        })
    }

    #[frb(sync)]
    pub fn remove_placement(&self, task_id: String) -> PlannerActionResponse {
        let Some(task_id) = parse_id(&task_id) else {
            return invalid_id("task_id", &task_id);
        };
        self.act("remove_placement", |session| {
            match session.remove_placement(task_id) {
                Some(_) => PlannerActionResponse::success("Placement removed.", None),
                None => PlannerActionResponse::failure(format!("placement not found: {task_id}")),
            }
        })
    }

    /// Flat task list.
    #[frb(sync)]
    pub fn list_tasks(&self) -> Vec<PlannerTaskItem> {
        self.read(|session| session.store().tasks().iter().map(to_task_item).collect())
    }

    /// Goal tasks flattened in goal order.
    #[frb(sync)]
    pub fn list_goal_tasks(&self) -> Vec<PlannerTaskItem> {
        self.read(|session| {
            session
                .store()
                .list_goal_tasks()
                .into_iter()
                .map(to_task_item)
                .collect()
        })
    }

    #[frb(sync)]
    pub fn list_goals(&self) -> Vec<PlannerGoalItem> {
        self.read(|session| session.store().goals().iter().map(to_goal_item).collect())
    }

    #[frb(sync)]
    pub fn list_inbox(&self) -> Vec<PlannerInboxItem> {
        self.read(|session| session.capture().items().iter().map(to_inbox_item).collect())
    }

    /// Placements in one cell, insertion order.
    #[frb(sync)]
    pub fn placements_at(&self, day: u8, hour: u8) -> Vec<PlannerPlacementItem> {
        self.read(|session| {
            let editing = editing_task_id(session);
            session
                .placements_at(day, hour)
                .into_iter()
                .map(|placement| to_placement_item(placement, editing))
                .collect()
        })
    }

    /// Every placement, insertion order.
    #[frb(sync)]
    pub fn list_placements(&self) -> Vec<PlannerPlacementItem> {
        self.read(|session| {
            let editing = editing_task_id(session);
            session
                .grid()
                .placements()
                .iter()
                .map(|placement| to_placement_item(placement, editing))
                .collect()
        })
    }

    #[frb(sync)]
    pub fn editing(&self) -> Option<PlannerEditItem> {
        self.read(|session| {
            session.grid().editing().map(|edit| PlannerEditItem {
                task_id: edit.task_id.to_string(),
                pending_title: edit.pending_title.clone(),
            })
        })
    }

    #[frb(ignore)]
    fn lock(&self) -> Result<MutexGuard<'_, Session>, String> {
        self.inner
            .lock()
            .map_err(|_| "planner session lock poisoned".to_string())
    }

    #[frb(ignore)]
    fn act(
        &self,
        op: &str,
        f: impl FnOnce(&mut Session) -> PlannerActionResponse,
    ) -> PlannerActionResponse {
        match self.lock() {
            Ok(mut session) => f(&mut session),
            Err(err) => {
                warn!("event=ffi_call module=ffi status=error op={op} error_code=lock_poisoned");
                PlannerActionResponse::failure(format!("{op} failed: {err}"))
            }
        }
    }

    #[frb(ignore)]
    fn read<T: Default>(&self, f: impl FnOnce(&Session) -> T) -> T {
        match self.lock() {
            Ok(session) => f(&session),
            Err(_) => {
                warn!("event=ffi_read module=ffi status=error error_code=lock_poisoned");
                T::default()
            }
        }
    }
}

fn parse_id(value: &str) -> Option<Uuid> {
    Uuid::parse_str(value.trim()).ok()
}

fn invalid_id(field: &str, value: &str) -> PlannerActionResponse {
    PlannerActionResponse::failure(format!("invalid {field} `{value}`"))
}

fn editing_task_id(session: &Session) -> Option<Uuid> {
    session.grid().editing().map(|edit| edit.task_id)
}

fn to_task_item(task: &Task) -> PlannerTaskItem {
    PlannerTaskItem {
        task_id: task.id.to_string(),
        title: task.title.clone(),
        kind: task_kind_label(task.kind).to_string(),
        status: task_status_label(task.status).to_string(),
        created_at_ms: task.created_at_ms,
    }
}

fn to_inbox_item(item: &InboxItem) -> PlannerInboxItem {
    PlannerInboxItem {
        inbox_id: item.id.to_string(),
        text: item.text.clone(),
        actionable: item.actionable,
    }
}

fn to_goal_item(goal: &Goal) -> PlannerGoalItem {
    PlannerGoalItem {
        goal_id: goal.id.to_string(),
        title: goal.title.clone(),
        description: goal.description.clone(),
        specific: goal.specific.clone(),
        measurable: goal.measurable.clone(),
        attainable: goal.attainable.clone(),
        relevant: goal.relevant.clone(),
        target_date_ms: goal.target_date_ms,
        progress: goal.progress(),
        progress_label: progress_label(goal),
        tasks: goal.tasks.iter().map(to_task_item).collect(),
    }
}

fn to_placement_item(placement: &Placement, editing: Option<Uuid>) -> PlannerPlacementItem {
    PlannerPlacementItem {
        task_id: placement.task_id.to_string(),
        day: placement.slot.day(),
        hour: placement.slot.hour(),
        title: placement.title.clone(),
        editing: editing == Some(placement.task_id),
    }
}

fn task_kind_label(kind: TaskKind) -> &'static str {
    match kind {
        TaskKind::Actionable => "actionable",
        TaskKind::Reference => "reference",
    }
}

fn task_status_label(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Inbox => "inbox",
        TaskStatus::Task => "task",
        TaskStatus::Goal => "goal",
    }
}
