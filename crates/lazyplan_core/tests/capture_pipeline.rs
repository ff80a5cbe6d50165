use lazyplan_core::{
    CaptureError, PromotionPolicy, Session, SessionConfig, TaskKind, TaskStatus, ToggleOutcome,
};

fn session() -> Session {
    Session::new(SessionConfig::default())
}

#[test]
fn captured_thought_becomes_task_when_toggled() {
    let mut session = session();

    let inbox_id = session.submit_thought("Buy milk").unwrap();
    assert_eq!(session.capture().items().len(), 1);
    assert!(session.store().tasks().is_empty());

    let outcome = session.toggle_actionable(inbox_id);
    let ToggleOutcome::Promoted(task_id) = outcome else {
        panic!("expected promotion, got {outcome:?}");
    };

    let tasks = session.store().tasks();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, task_id);
    assert_eq!(tasks[0].title, "Buy milk");
    assert_eq!(tasks[0].kind, TaskKind::Actionable);
    assert_eq!(tasks[0].status, TaskStatus::Task);
}

#[test]
fn each_promotion_appends_exactly_one_task() {
    let mut session = session();
    let inbox_id = session.submit_thought("Renew passport").unwrap();

    assert!(matches!(
        session.toggle_actionable(inbox_id),
        ToggleOutcome::Promoted(_)
    ));
    assert_eq!(session.store().tasks().len(), 1);

    assert_eq!(session.toggle_actionable(inbox_id), ToggleOutcome::Demoted);
    assert_eq!(session.store().tasks().len(), 1);

    assert!(matches!(
        session.toggle_actionable(inbox_id),
        ToggleOutcome::Promoted(_)
    ));
    let tasks = session.store().tasks();
    assert_eq!(tasks.len(), 2);
    assert_ne!(tasks[0].id, tasks[1].id);
    assert!(tasks.iter().all(|task| task.title == "Renew passport"));
    assert_eq!(session.capture().item(inbox_id).unwrap().promotions, 2);
}

#[test]
fn blank_submission_is_rejected() {
    let mut session = session();

    assert_eq!(
        session.submit_thought("   ").unwrap_err(),
        CaptureError::BlankThought
    );
    assert_eq!(session.submit_thought("").unwrap_err(), CaptureError::BlankThought);
    assert!(session.capture().items().is_empty());
}

#[test]
fn toggle_unknown_item_is_noop() {
    let mut session = session();
    session.submit_thought("Something").unwrap();

    let stray = uuid::Uuid::new_v4();
    assert_eq!(session.toggle_actionable(stray), ToggleOutcome::NotFound);
    assert!(session.store().tasks().is_empty());
}

#[test]
fn removing_inbox_item_keeps_emitted_task() {
    let mut session = session();
    let inbox_id = session.submit_thought("Book flights").unwrap();
    session.toggle_actionable(inbox_id);

    assert!(session.remove_inbox_item(inbox_id).is_some());
    assert!(session.remove_inbox_item(inbox_id).is_none());
    assert!(session.capture().items().is_empty());
    assert_eq!(session.store().tasks().len(), 1);
}

#[test]
fn items_keep_capture_order() {
    let mut session = session();
    session.submit_thought("one").unwrap();
    session.submit_thought("two").unwrap();
    session.submit_thought("three").unwrap();

    let texts = session
        .capture()
        .items()
        .iter()
        .map(|item| item.text.as_str())
        .collect::<Vec<_>>();
    assert_eq!(texts, vec!["one", "two", "three"]);
}

#[test]
fn once_policy_from_config_emits_single_task() {
    let mut session = Session::new(SessionConfig {
        promotion_policy: PromotionPolicy::Once,
        ..SessionConfig::default()
    });
    let inbox_id = session.submit_thought("Water plants").unwrap();

    session.toggle_actionable(inbox_id);
    session.toggle_actionable(inbox_id);
    assert_eq!(
        session.toggle_actionable(inbox_id),
        ToggleOutcome::AlreadyPromoted
    );
    assert_eq!(session.store().tasks().len(), 1);
}
