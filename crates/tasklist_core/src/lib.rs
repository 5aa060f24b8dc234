//! Core domain logic for the task list.
//! This crate is the single source of truth for task list invariants.

pub mod logging;
pub mod model;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{normalize_task_text, Task, TaskId, TaskTextError};
pub use store::task_list::{Admission, EpochMillisClock, TaskListSnapshot, TaskListStore};
pub use view::{count_label, render_plain, TaskListView, TaskRow, EMPTY_STATE_MESSAGE};

/// Minimal health-check API for front-end wiring checks.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
