use tasklist_core::{render_plain, TaskListStore, TaskListView, EMPTY_STATE_MESSAGE};

#[test]
fn view_tracks_store_through_a_session() {
    let mut store = TaskListStore::new();

    let view = TaskListView::from_snapshot(&store.snapshot());
    assert_eq!(view.count_label, "0 tasks");
    assert_eq!(view.empty_message, Some(EMPTY_STATE_MESSAGE));

    let milk = store.admit("Buy milk").into_created().unwrap();
    store.admit("Walk dog");
    let view = TaskListView::from_snapshot(&store.snapshot());
    assert_eq!(view.count_label, "2 tasks");
    assert_eq!(view.empty_message, None);
    assert_eq!(view.row_at(2).unwrap().id, milk.id().as_str());

    store.remove(milk.id());
    let view = TaskListView::from_snapshot(&store.snapshot());
    assert_eq!(view.count_label, "1 task");
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].position, 1);
    assert_eq!(view.rows[0].text, "Walk dog");

    let rendered = render_plain(&view);
    assert!(rendered.starts_with("Todo App\n1 task\n"));
    assert!(rendered.contains("1. Walk dog"));
    assert!(!rendered.contains("Buy milk"));
}
