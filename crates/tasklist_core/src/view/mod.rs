//! Display projection for task list UIs.
//!
//! # Responsibility
//! - Turn store snapshots into render-ready rows and labels.
//! - Keep user-facing strings in one place for every front end.
//!
//! # Invariants
//! - Pure functions of the snapshot; nothing here is cached.

mod task_list_view;

pub use task_list_view::{
    count_label, render_plain, TaskListView, TaskRow, EMPTY_STATE_MESSAGE, INPUT_PLACEHOLDER,
    LIST_TITLE,
};
