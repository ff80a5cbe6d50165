//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `lazyplan_core` linkage.
//! - Render a deterministic demo week for quick local sanity checks.

use lazyplan_core::{progress_fill, progress_label, Session, SessionConfig, Slot};

const PROGRESS_BAR_WIDTH: usize = 20;

fn main() {
    println!("lazyplan_core ping={}", lazyplan_core::ping());
    println!("lazyplan_core version={}", lazyplan_core::core_version());

    let mut session = Session::new(SessionConfig {
        seed_sample_goals: true,
        ..SessionConfig::from_env()
    });
    seed_demo_week(&mut session);

    println!();
    println!("goals:");
    for goal in session.store().goals() {
        let filled = progress_fill(goal, PROGRESS_BAR_WIDTH);
        println!(
            "  [{}{}] {:>4} {}",
            "#".repeat(filled),
            ".".repeat(PROGRESS_BAR_WIDTH - filled),
            progress_label(goal),
            goal.title
        );
    }

    println!();
    println!("week:");
    for slot in Slot::all() {
        for placement in session.grid().placements_in(slot) {
            println!("  {slot}  {}", placement.title);
        }
    }
}

fn seed_demo_week(session: &mut Session) {
    let goal_tasks = session
        .store()
        .list_goal_tasks()
        .into_iter()
        .map(|task| task.id)
        .collect::<Vec<_>>();
    for (index, task_id) in goal_tasks.into_iter().enumerate() {
        // Spread goal tasks over weekday mornings.
        let day = 1 + (index % 5) as u8;
        session.drop_at(task_id, day, 9);
    }

    if let Ok(inbox_id) = session.submit_thought("Buy milk") {
        session.toggle_actionable(inbox_id);
    }
    let report = session.add_task("Write report");
    session.drop_at(report.id, 3, 14);
}
