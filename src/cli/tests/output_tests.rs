//! Tests for terminal rendering of command outcomes.

use rstest::{fixture, rstest};

use crate::cli::{dispatch::Outcome, output::render};
use crate::task::{
    domain::{Task, TaskDescription, TaskId, TaskStatus},
    tests::support::StepClock,
};

#[fixture]
fn task() -> Task {
    Task::new(
        TaskId::new(4).expect("valid id"),
        TaskDescription::new("Water plants").expect("valid description"),
        &StepClock::new(),
    )
}

fn rendered(outcome: &Outcome) -> String {
    let mut out = Vec::new();
    render(outcome, &mut out).expect("render succeeds");
    String::from_utf8(out).expect("utf-8 output")
}

#[rstest]
fn added_reports_new_id(task: Task) {
    assert_eq!(
        rendered(&Outcome::Added(task)),
        "Task added successfully (ID: 4)\n"
    );
}

#[rstest]
fn updated_and_deleted_name_the_task(task: Task) {
    assert_eq!(rendered(&Outcome::Updated(task.clone())), "Task 4 updated\n");
    assert_eq!(rendered(&Outcome::Deleted(task)), "Task 4 deleted\n");
}

#[rstest]
fn status_change_names_new_status(mut task: Task) {
    task.mark_in_progress(&StepClock::new());
    assert_eq!(
        rendered(&Outcome::StatusChanged(task)),
        "Task 4 marked as in-progress\n"
    );
}

#[rstest]
fn empty_list_says_so() {
    assert_eq!(rendered(&Outcome::Listed(Vec::new())), "No tasks found\n");
}

#[rstest]
fn list_prints_one_line_per_task(task: Task) {
    let mut done = Task::new(
        TaskId::new(5).expect("valid id"),
        TaskDescription::new("Pay rent").expect("valid description"),
        &StepClock::new(),
    );
    done.mark_done(&StepClock::new());

    let output = rendered(&Outcome::Listed(vec![task, done]));

    assert_eq!(
        output,
        "4. [todo] Water plants (updated 2026-01-01T09:00:00.000Z)\n\
         5. [done] Pay rent (updated 2026-01-01T09:00:00.000Z)\n"
    );
}
