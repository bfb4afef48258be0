use chrono::DateTime;
use tasklight_core::{Filter, Task};

#[test]
fn task_new_sets_defaults() {
    let task = Task::new(1, "buy milk");

    assert_eq!(task.id, 1);
    assert_eq!(task.text, "buy milk");
    assert!(!task.completed);
}

#[test]
fn toggled_flips_only_the_completion_flag() {
    let task = Task::new(7, "walk dog");

    let done = task.toggled();
    assert!(done.completed);
    assert_eq!(done.id, task.id);
    assert_eq!(done.text, task.text);
    assert_eq!(done.created_at, task.created_at);

    // Toggling twice is an involution.
    assert_eq!(done.toggled(), task);
}

#[test]
fn filters_are_mutually_exclusive_views() {
    let pending = Task::new(1, "pending");
    let completed = Task::new(2, "completed").toggled();

    assert!(Filter::All.matches(&pending));
    assert!(Filter::All.matches(&completed));

    assert!(!Filter::Completed.matches(&pending));
    assert!(Filter::Completed.matches(&completed));

    assert!(Filter::Pending.matches(&pending));
    assert!(!Filter::Pending.matches(&completed));
}

#[test]
fn filter_parses_from_user_input() {
    assert_eq!("all".parse::<Filter>().unwrap(), Filter::All);
    assert_eq!(" Completed ".parse::<Filter>().unwrap(), Filter::Completed);
    assert_eq!("PENDING".parse::<Filter>().unwrap(), Filter::Pending);

    let err = "done".parse::<Filter>().unwrap_err();
    assert!(err.to_string().contains("unknown filter"));
}

#[test]
fn filter_defaults_to_all_on_fresh_sessions() {
    assert_eq!(Filter::default(), Filter::All);
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let mut task = Task::new(1_700_000_000_123, "ship release");
    task.created_at = DateTime::parse_from_rfc3339("2026-01-15T10:00:00Z")
        .unwrap()
        .to_utc();
    let task = task.toggled();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], 1_700_000_000_123_u64);
    assert_eq!(json["text"], "ship release");
    assert_eq!(json["completed"], true);

    // `createdAt` is the external name; the value is an ISO-8601 string.
    let created_at = json["createdAt"].as_str().expect("createdAt is a string");
    assert!(DateTime::parse_from_rfc3339(created_at).is_ok());

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}
