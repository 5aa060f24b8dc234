use tasklist_core::{Task, TaskId, TaskListStore, TaskTextError};

#[test]
fn task_serializes_with_id_and_text_fields() {
    let task = Task::new(TaskId::from("1700000000000-0"), "  Buy milk ").unwrap();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "id": "1700000000000-0", "text": "Buy milk" })
    );

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn deserialize_rejects_blank_text() {
    let value = serde_json::json!({ "id": "1-0", "text": "   " });

    let err = serde_json::from_value::<Task>(value).unwrap_err();
    assert!(
        err.to_string().contains("non-whitespace"),
        "unexpected error: {err}"
    );
}

#[test]
fn task_new_matches_admission_rule() {
    assert_eq!(
        Task::new(TaskId::from("x"), "\n").unwrap_err(),
        TaskTextError::Blank
    );
    assert_eq!(Task::new(TaskId::from("x"), " y ").unwrap().text(), "y");
}

#[test]
fn snapshot_serializes_for_ui_bridges() {
    fn fixed() -> i64 {
        5
    }

    let mut store = TaskListStore::with_clock(fixed);
    store.admit("A");
    store.admit("B");

    let json = serde_json::to_value(store.snapshot()).unwrap();
    assert_eq!(json["count"], 2);
    assert_eq!(json["tasks"][0]["text"], "B");
    assert_eq!(json["tasks"][0]["id"], "5-1");
    assert_eq!(json["tasks"][1]["id"], "5-0");
    assert_eq!(json["session_id"], store.session_id().to_string());
}
