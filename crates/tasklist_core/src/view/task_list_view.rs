//! Render-ready task list projection.

use crate::store::task_list::TaskListSnapshot;
use std::fmt::Write;

/// Screen title.
pub const LIST_TITLE: &str = "Todo App";
/// Placeholder shown instead of rows when the list is empty.
pub const EMPTY_STATE_MESSAGE: &str = "No tasks yet. Add one above!";
/// Hint text for the input field.
pub const INPUT_PLACEHOLDER: &str = "Enter a task...";

/// Returns `"1 task"` for one, `"N tasks"` otherwise (zero included).
pub fn count_label(count: usize) -> String {
    if count == 1 {
        format!("{count} task")
    } else {
        format!("{count} tasks")
    }
}

/// One numbered row as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    /// 1-based display position.
    pub position: usize,
    pub id: String,
    pub text: String,
}

/// Whole-screen projection of one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListView {
    pub title: &'static str,
    pub input_placeholder: &'static str,
    pub count_label: String,
    pub rows: Vec<TaskRow>,
    /// `Some` only when there are no rows.
    pub empty_message: Option<&'static str>,
}

impl TaskListView {
    pub fn from_snapshot(snapshot: &TaskListSnapshot) -> Self {
        let rows = snapshot
            .tasks
            .iter()
            .enumerate()
            .map(|(index, task)| TaskRow {
                position: index + 1,
                id: task.id().to_string(),
                text: task.text().to_string(),
            })
            .collect::<Vec<_>>();
        let empty_message = rows.is_empty().then_some(EMPTY_STATE_MESSAGE);

        Self {
            title: LIST_TITLE,
            input_placeholder: INPUT_PLACEHOLDER,
            count_label: count_label(snapshot.count),
            rows,
            empty_message,
        }
    }

    /// Resolves a 1-based display position to its row.
    pub fn row_at(&self, position: usize) -> Option<&TaskRow> {
        position
            .checked_sub(1)
            .and_then(|index| self.rows.get(index))
    }
}

/// Plain-text rendering used by terminal front ends.
///
/// Layout:
/// ```text
/// Todo App
/// 2 tasks
///   1. Walk dog  [1700000000000-1]
///   2. Buy milk  [1700000000000-0]
/// ```
pub fn render_plain(view: &TaskListView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.title);
    let _ = writeln!(out, "{}", view.count_label);
    if let Some(message) = view.empty_message {
        let _ = writeln!(out, "  {message}");
        return out;
    }
    for row in &view.rows {
        let _ = writeln!(out, "  {}. {}  [{}]", row.position, row.text, row.id);
    }
    out
}
