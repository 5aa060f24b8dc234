//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose task list operations to Dart via FRB as sync calls.
//! - Hold the single session store for the UI process.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Exactly one live store per process; `task_list_create` replaces it.
//! - Blank admission and unknown-id removal are reported, never raised.

use log::info;
use once_cell::sync::Lazy;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tasklist_core::{
    core_version as core_version_inner, count_label, init_logging as init_logging_inner,
    ping as ping_inner, Task, TaskId, TaskListSnapshot, TaskListStore, EMPTY_STATE_MESSAGE,
};

static SESSION_STORE: Lazy<Mutex<TaskListStore>> = Lazy::new(|| Mutex::new(TaskListStore::new()));

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One task as seen by Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    /// Opaque id; pass back unchanged to `task_list_remove`.
    pub id: String,
    pub text: String,
}

/// Result of `task_list_admit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskAdmitResponse {
    /// `None` when the input was blank and nothing changed.
    pub created: Option<TaskItem>,
}

/// Result of `task_list_remove`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRemoveResponse {
    pub removed: bool,
}

/// Render-ready list state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListSnapshotView {
    /// Changes whenever `task_list_create` starts a new session.
    pub session_id: String,
    /// Newest first.
    pub tasks: Vec<TaskItem>,
    pub count: u32,
    /// `"1 task"` / `"N tasks"`.
    pub count_label: String,
    /// Placeholder text, present only when `count == 0`.
    pub empty_message: Option<String>,
}

/// Starts a fresh session store (UI mount) and returns its empty snapshot.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Discards every task of the previous session.
#[flutter_rust_bridge::frb(sync)]
pub fn task_list_create() -> TaskListSnapshotView {
    let mut store = lock_session_store();
    *store = TaskListStore::new();
    info!(
        "event=session_start module=ffi status=ok session={}",
        store.session_id()
    );
    to_snapshot_view(&store.snapshot())
}

/// Admits user-entered text as the newest task.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Blank input returns `created: None`; not an error.
#[flutter_rust_bridge::frb(sync)]
pub fn task_list_admit(text: String) -> TaskAdmitResponse {
    let created = lock_session_store()
        .admit(text.as_str())
        .into_created()
        .map(to_task_item);
    TaskAdmitResponse { created }
}

/// Removes a task by id.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Unknown ids return `removed: false`; repeated calls are harmless.
#[flutter_rust_bridge::frb(sync)]
pub fn task_list_remove(id: String) -> TaskRemoveResponse {
    let removed = lock_session_store().remove(&TaskId::from(id));
    TaskRemoveResponse { removed }
}

/// Returns the current list state for rendering.
#[flutter_rust_bridge::frb(sync)]
pub fn task_list_snapshot() -> TaskListSnapshotView {
    to_snapshot_view(&lock_session_store().snapshot())
}

fn lock_session_store() -> MutexGuard<'static, TaskListStore> {
    // A panic mid-mutation cannot leave the store half-written: both mutations
    // are single VecDeque operations.
    SESSION_STORE.lock().unwrap_or_else(PoisonError::into_inner)
}

fn to_task_item(task: Task) -> TaskItem {
    TaskItem {
        id: task.id().to_string(),
        text: task.text().to_string(),
    }
}

fn to_snapshot_view(snapshot: &TaskListSnapshot) -> TaskListSnapshotView {
    let tasks = snapshot
        .tasks
        .iter()
        .cloned()
        .map(to_task_item)
        .collect::<Vec<_>>();
    let empty_message = tasks.is_empty().then(|| EMPTY_STATE_MESSAGE.to_string());

    TaskListSnapshotView {
        session_id: snapshot.session_id.to_string(),
        tasks,
        count: u32::try_from(snapshot.count).unwrap_or(u32::MAX),
        count_label: count_label(snapshot.count),
        empty_message,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, init_logging, ping, task_list_admit, task_list_create, task_list_remove,
        task_list_snapshot,
    };
    use std::sync::Mutex;

    // Exported calls share one process-wide store.
    static SERIAL: Mutex<()> = Mutex::new(());

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn create_starts_an_empty_session() {
        let _guard = SERIAL.lock().unwrap_or_else(|err| err.into_inner());
        task_list_admit("left over".to_string());

        let previous = task_list_snapshot().session_id;
        let fresh = task_list_create();

        assert_ne!(fresh.session_id, previous);
        assert_eq!(fresh.count, 0);
        assert!(fresh.tasks.is_empty());
        assert_eq!(fresh.count_label, "0 tasks");
        assert_eq!(
            fresh.empty_message.as_deref(),
            Some("No tasks yet. Add one above!")
        );
    }

    #[test]
    fn admit_and_remove_flow_through_snapshot() {
        let _guard = SERIAL.lock().unwrap_or_else(|err| err.into_inner());
        task_list_create();

        let milk = task_list_admit("  Buy milk ".to_string())
            .created
            .expect("admit should create a task");
        assert_eq!(milk.text, "Buy milk");
        task_list_admit("Walk dog".to_string());

        let snapshot = task_list_snapshot();
        assert_eq!(snapshot.count, 2);
        assert_eq!(snapshot.count_label, "2 tasks");
        assert_eq!(snapshot.tasks[0].text, "Walk dog");
        assert_eq!(snapshot.tasks[1], milk);
        assert_eq!(snapshot.empty_message, None);

        assert!(task_list_remove(milk.id.clone()).removed);
        assert!(!task_list_remove(milk.id).removed);

        let snapshot = task_list_snapshot();
        assert_eq!(snapshot.count, 1);
        assert_eq!(snapshot.count_label, "1 task");
    }

    #[test]
    fn blank_admit_reports_no_creation() {
        let _guard = SERIAL.lock().unwrap_or_else(|err| err.into_inner());
        task_list_create();

        assert_eq!(task_list_admit(" \t ".to_string()).created, None);
        assert_eq!(task_list_snapshot().count, 0);
    }
}
