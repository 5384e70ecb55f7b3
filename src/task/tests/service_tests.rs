//! Service orchestration tests for task use cases.

use std::sync::Arc;

use super::support::StepClock;
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{
        PersistedTaskData, Task, TaskDescription, TaskError, TaskErrorKind, TaskId, TaskStatus,
    },
    ports::TaskRepository,
    services::TaskService,
};
use chrono::TimeDelta;
use rstest::{fixture, rstest};

type TestService = TaskService<InMemoryTaskRepository, StepClock>;

fn id(value: u64) -> TaskId {
    TaskId::new(value).expect("valid id")
}

fn stored_task(value: u64, description: &str, status: TaskStatus) -> Task {
    let timestamp = StepClock::new().start() - TimeDelta::days(1);
    Task::from_persisted(PersistedTaskData {
        id: id(value),
        description: TaskDescription::new(description).expect("valid description"),
        status,
        created_at: timestamp,
        updated_at: timestamp,
    })
}

fn service_over(repository: &InMemoryTaskRepository) -> TestService {
    TaskService::new(Arc::new(repository.clone()), Arc::new(StepClock::new()))
}

#[fixture]
fn repository() -> InMemoryTaskRepository {
    InMemoryTaskRepository::with_tasks([
        stored_task(3, "C", TaskStatus::Todo),
        stored_task(1, "A", TaskStatus::Done),
        stored_task(2, "B", TaskStatus::InProgress),
    ])
}

#[rstest]
fn add_assigns_first_id_and_persists() {
    let repository = InMemoryTaskRepository::new();
    let service = service_over(&repository);

    let task = service.add("Buy tomato").expect("task creation should succeed");

    assert_eq!(task.id().value(), 1);
    assert_eq!(task.status(), TaskStatus::Todo);
    assert_eq!(repository.load().expect("load succeeds"), vec![task]);
}

#[rstest]
fn add_assigns_one_past_highest_id(repository: InMemoryTaskRepository) {
    let service = service_over(&repository);

    let task = service.add("D").expect("task creation should succeed");

    assert_eq!(task.id().value(), 4);
    assert_eq!(repository.load().expect("load succeeds").len(), 4);
}

#[rstest]
fn add_fails_when_identifier_range_is_exhausted() {
    let repository = InMemoryTaskRepository::with_tasks([stored_task(
        u64::MAX,
        "Last",
        TaskStatus::Todo,
    )]);
    let service = service_over(&repository);

    let err = service.add("One more").expect_err("no identifier should remain");

    assert_eq!(err.kind(), TaskErrorKind::Storage);
    assert_eq!(repository.save_count().expect("count readable"), 0);
    let ids: Vec<u64> = repository
        .load()
        .expect("load succeeds")
        .iter()
        .map(|task| task.id().value())
        .collect();
    assert_eq!(ids, vec![u64::MAX]);
}

#[rstest]
#[case("")]
#[case("   ")]
fn add_rejects_blank_description_without_writing(#[case] description: &str) {
    let repository = InMemoryTaskRepository::new();
    let service = service_over(&repository);

    let result = service.add(description);

    assert!(matches!(result, Err(TaskError::Validation(_))));
    assert_eq!(repository.save_count().expect("count readable"), 0);
}

#[rstest]
fn update_replaces_description(repository: InMemoryTaskRepository) {
    let service = service_over(&repository);

    let updated = service
        .update(id(2), "Buy 2kg tomato")
        .expect("update should succeed");

    assert_eq!(updated.description().as_str(), "Buy 2kg tomato");
    assert!(updated.updated_at() > updated.created_at());
    let stored = service.get(id(2)).expect("task should exist");
    assert_eq!(stored, updated);
}

#[rstest]
fn update_missing_task_is_not_found(repository: InMemoryTaskRepository) {
    let service = service_over(&repository);

    let err = service
        .update(id(42), "Am I here?")
        .expect_err("missing task should fail");

    assert_eq!(err.kind(), TaskErrorKind::NotFound);
    assert_eq!(err.message(), "task not found");
    assert_eq!(repository.save_count().expect("count readable"), 0);
}

#[rstest]
fn update_validates_before_lookup(repository: InMemoryTaskRepository) {
    let service = service_over(&repository);

    let err = service.update(id(42), " ").expect_err("blank text should fail");

    assert_eq!(err.kind(), TaskErrorKind::Validation);
}

#[rstest]
fn mark_in_progress_sets_status(repository: InMemoryTaskRepository) {
    let service = service_over(&repository);

    let task = service.mark_in_progress(id(3)).expect("mark should succeed");

    assert_eq!(task.status(), TaskStatus::InProgress);
    assert_eq!(
        service.get(id(3)).expect("task should exist").status(),
        TaskStatus::InProgress
    );
}

#[rstest]
fn mark_done_sets_status(repository: InMemoryTaskRepository) {
    let service = service_over(&repository);

    let task = service.mark_done(id(2)).expect("mark should succeed");

    assert_eq!(task.status(), TaskStatus::Done);
}

#[rstest]
fn done_task_can_be_reopened(repository: InMemoryTaskRepository) {
    let service = service_over(&repository);

    let task = service
        .mark_in_progress(id(1))
        .expect("reopening should succeed");

    assert_eq!(task.status(), TaskStatus::InProgress);
}

#[rstest]
fn set_status_on_missing_task_is_not_found(repository: InMemoryTaskRepository) {
    let service = service_over(&repository);

    let result = service.set_status(id(99), TaskStatus::Done);

    assert!(matches!(result, Err(TaskError::NotFound(_))));
}

#[rstest]
fn delete_removes_only_the_requested_task(repository: InMemoryTaskRepository) {
    let service = service_over(&repository);

    let removed = service.delete(id(1)).expect("delete should succeed");

    assert_eq!(removed.id().value(), 1);
    let remaining: Vec<u64> = repository
        .load()
        .expect("load succeeds")
        .iter()
        .map(|task| task.id().value())
        .collect();
    assert_eq!(remaining, vec![3, 2]);
}

#[rstest]
fn delete_missing_task_is_not_found(repository: InMemoryTaskRepository) {
    let service = service_over(&repository);

    let result = service.delete(id(999));

    assert!(matches!(result, Err(TaskError::NotFound(_))));
    assert_eq!(repository.load().expect("load succeeds").len(), 3);
}

#[rstest]
fn list_returns_all_tasks_sorted_by_id(repository: InMemoryTaskRepository) {
    let service = service_over(&repository);

    let tasks = service.list(None).expect("list should succeed");

    let ids: Vec<u64> = tasks.iter().map(|task| task.id().value()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[rstest]
#[case(TaskStatus::Todo, vec![3])]
#[case(TaskStatus::InProgress, vec![2])]
#[case(TaskStatus::Done, vec![1])]
fn list_filters_by_status(
    repository: InMemoryTaskRepository,
    #[case] status: TaskStatus,
    #[case] expected: Vec<u64>,
) {
    let service = service_over(&repository);

    let tasks = service.list(Some(status)).expect("list should succeed");

    assert!(tasks.iter().all(|task| task.status() == status));
    let ids: Vec<u64> = tasks.iter().map(|task| task.id().value()).collect();
    assert_eq!(ids, expected);
}

#[rstest]
fn list_on_empty_store_is_empty() {
    let service = service_over(&InMemoryTaskRepository::new());
    assert!(service.list(None).expect("list should succeed").is_empty());
}

#[rstest]
fn ids_are_not_reused_after_deleting_a_middle_task(repository: InMemoryTaskRepository) {
    let service = service_over(&repository);
    service.delete(id(2)).expect("delete should succeed");

    let task = service.add("E").expect("task creation should succeed");

    assert_eq!(task.id().value(), 4);
}
