use lazyplan_core::{
    DropOutcome, GoalDraft, SchedulingGrid, Session, SessionConfig, Slot, Task, TaskId,
};

fn session() -> Session {
    Session::new(SessionConfig::default())
}

fn placement_count_for(session: &Session, task_id: TaskId) -> usize {
    session
        .grid()
        .placements()
        .iter()
        .filter(|placement| placement.task_id == task_id)
        .count()
}

#[test]
fn repeated_drops_keep_one_placement_per_task() {
    let mut session = session();
    let task = session.add_task("Write report");

    for (day, hour) in [(0, 0), (2, 9), (2, 9), (6, 23), (3, 10), (3, 10)] {
        assert!(session.drop_at(task.id, day, hour).is_applied());
        assert_eq!(placement_count_for(&session, task.id), 1);
    }
}

#[test]
fn second_drop_moves_placement() {
    let mut session = session();
    let task = session.add_task("Write report");

    let first = session.drop_at(task.id, 2, 9);
    assert_eq!(first, DropOutcome::Placed(Slot::new(2, 9).unwrap()));
    let second = session.drop_at(task.id, 3, 10);
    assert_eq!(
        second,
        DropOutcome::Moved {
            from: Slot::new(2, 9).unwrap(),
            to: Slot::new(3, 10).unwrap(),
        }
    );

    assert_eq!(session.grid().len(), 1);
    let placement = session.grid().placement_for(task.id).unwrap();
    assert_eq!((placement.slot.day(), placement.slot.hour()), (3, 10));
}

#[test]
fn drop_then_move_scenario() {
    let mut session = session();
    let task = session.add_task("Write report");
    assert_eq!(session.store().tasks().len(), 1);

    let payload = session.grid().begin_drag(task.id);
    session.drop_at(payload.task_id, 2, 9);
    let cell = session.placements_at(2, 9);
    assert_eq!(cell.len(), 1);
    assert_eq!(cell[0].title, "Write report");

    session.drop_at(payload.task_id, 3, 10);
    assert!(session.placements_at(2, 9).is_empty());
    let cell = session.placements_at(3, 10);
    assert_eq!(cell.len(), 1);
    assert_eq!(cell[0].task_id, task.id);
}

#[test]
fn committed_edit_renames_without_moving() {
    let mut session = session();
    let task = session.add_task("Call Bob");
    session.drop_at(task.id, 1, 8);

    assert!(session.begin_edit(task.id));
    assert_eq!(
        session.grid().editing().map(|edit| edit.pending_title.as_str()),
        Some("Call Bob")
    );
    assert!(session.update_pending_title("Call Alice"));
    assert_eq!(session.commit_edit(), Some(task.id));

    let cell = session.placements_at(1, 8);
    assert_eq!(cell.len(), 1);
    assert_eq!(cell[0].title, "Call Alice");
    assert_eq!(cell[0].slot, Slot::new(1, 8).unwrap());
    assert!(session.grid().editing().is_none());
}

#[test]
fn placement_rename_does_not_touch_task_and_vice_versa() {
    let mut session = session();
    let task = session.add_task("Call Bob");
    session.drop_at(task.id, 1, 8);

    session.begin_edit(task.id);
    session.update_pending_title("Call Alice");
    session.commit_edit();

    assert_eq!(session.store().tasks()[0].title, "Call Bob");
}

#[test]
fn removed_task_leaves_dangling_placement() {
    let mut session = session();
    let task = session.add_task("Dentist");
    session.drop_at(task.id, 5, 15);
    let before = session.grid().placement_for(task.id).cloned().unwrap();

    assert!(session.remove_task(task.id).is_some());
    assert!(session.store().tasks().iter().all(|t| t.id != task.id));

    let cell = session.placements_at(5, 15);
    assert_eq!(cell.len(), 1);
    assert_eq!(*cell[0], before);
    assert_eq!(session.grid().placement_for(task.id), Some(&before));
}

#[test]
fn dangling_placement_can_still_be_edited_and_removed() {
    let mut session = session();
    let task = session.add_task("Dentist");
    session.drop_at(task.id, 5, 15);
    session.remove_task(task.id);

    assert!(session.begin_edit(task.id));
    session.update_pending_title("Dentist (moved?)");
    assert_eq!(session.commit_edit(), Some(task.id));
    assert_eq!(session.placements_at(5, 15)[0].title, "Dentist (moved?)");

    assert!(session.remove_placement(task.id).is_some());
    assert!(session.grid().is_empty());
}

#[test]
fn drop_of_removed_task_is_ignored() {
    let mut session = session();
    let task = session.add_task("Groceries");
    session.drop_at(task.id, 0, 10);
    session.remove_task(task.id);

    let outcome = session.drop_at(task.id, 4, 11);
    assert_eq!(outcome, DropOutcome::UnknownTask);
    assert!(session.placements_at(4, 11).is_empty());
    assert_eq!(session.placements_at(0, 10).len(), 1);
}

#[test]
fn drop_of_never_seen_id_is_ignored() {
    let mut session = session();
    let stranger = Task::actionable("not in store");

    assert_eq!(session.drop_at(stranger.id, 1, 1), DropOutcome::UnknownTask);
    assert!(session.grid().is_empty());
}

#[test]
fn goal_tasks_can_be_dropped() {
    let mut session = session();
    let goal_id = session
        .store_mut()
        .create_goal(GoalDraft {
            title: "Run a 10k".to_string(),
            task_titles: vec!["Interval run".to_string()],
            ..GoalDraft::default()
        })
        .unwrap();
    let task_id = session.store().goal(goal_id).unwrap().tasks[0].id;

    assert!(session.drop_at(task_id, 6, 7).is_applied());
    assert_eq!(session.placements_at(6, 7)[0].title, "Interval run");
}

#[test]
fn drop_snapshots_title_at_drop_time() {
    let mut session = session();
    let goal_id = session
        .store_mut()
        .create_goal(GoalDraft {
            title: "Garden".to_string(),
            ..GoalDraft::default()
        })
        .unwrap();
    let task_id = session
        .store_mut()
        .add_goal_task(goal_id, "Plant tomatoes")
        .unwrap();
    session.drop_at(task_id, 6, 9);
    session.begin_edit(task_id);
    session.update_pending_title("Plant basil");
    session.commit_edit();

    session.drop_at(task_id, 6, 10);
    assert_eq!(session.placements_at(6, 10)[0].title, "Plant tomatoes");
}

#[test]
fn new_edit_abandons_previous_pending_title() {
    let mut session = session();
    let first = session.add_task("First");
    let second = session.add_task("Second");
    session.drop_at(first.id, 1, 9);
    session.drop_at(second.id, 1, 10);

    session.begin_edit(first.id);
    session.update_pending_title("First renamed");
    session.begin_edit(second.id);
    session.update_pending_title("Second renamed");
    session.commit_edit();

    assert_eq!(session.placements_at(1, 9)[0].title, "First");
    assert_eq!(session.placements_at(1, 10)[0].title, "Second renamed");
}

#[test]
fn begin_edit_without_placement_keeps_current_edit() {
    let mut session = session();
    let placed = session.add_task("Placed");
    let unplaced = session.add_task("Unplaced");
    session.drop_at(placed.id, 2, 2);

    session.begin_edit(placed.id);
    session.update_pending_title("Still editing");
    assert!(!session.begin_edit(unplaced.id));

    let edit = session.grid().editing().unwrap();
    assert_eq!(edit.task_id, placed.id);
    assert_eq!(edit.pending_title, "Still editing");
}

#[test]
fn edit_operations_without_active_edit_are_noops() {
    let mut session = session();
    let task = session.add_task("Idle");
    session.drop_at(task.id, 3, 3);

    assert!(!session.update_pending_title("ghost"));
    assert_eq!(session.commit_edit(), None);
    assert!(!session.cancel_edit());
    assert_eq!(session.placements_at(3, 3)[0].title, "Idle");
}

#[test]
fn cancel_edit_discards_pending_title() {
    let mut session = session();
    let task = session.add_task("Keep me");
    session.drop_at(task.id, 3, 4);

    session.begin_edit(task.id);
    session.update_pending_title("Lose me");
    assert!(session.cancel_edit());
    assert_eq!(session.commit_edit(), None);
    assert_eq!(session.placements_at(3, 4)[0].title, "Keep me");
}

#[test]
fn remove_placement_keeps_task_and_ignores_missing() {
    let mut session = session();
    let task = session.add_task("Laundry");
    session.drop_at(task.id, 0, 18);

    assert!(session.remove_placement(task.id).is_some());
    assert!(session.remove_placement(task.id).is_none());
    assert!(session.placements_at(0, 18).is_empty());
    assert_eq!(session.store().tasks().len(), 1);
}

#[test]
fn grid_accepts_plain_task_slices() {
    let mut grid = SchedulingGrid::new();
    let tasks = vec![Task::actionable("Standalone")];

    assert!(grid.drop_at(tasks[0].id, 1, 1, tasks.as_slice()).is_applied());
    assert_eq!(grid.placements_at(1, 1).len(), 1);
}

#[test]
fn moving_edited_task_keeps_edit_open_for_new_slot() {
    let mut session = session();
    let task = session.add_task("Review PR");
    session.drop_at(task.id, 2, 11);

    session.begin_edit(task.id);
    session.update_pending_title("Review PR #42");
    session.drop_at(task.id, 4, 16);
    assert_eq!(session.commit_edit(), Some(task.id));

    assert!(session.placements_at(2, 11).is_empty());
    assert_eq!(session.placements_at(4, 16)[0].title, "Review PR #42");
}
