//! Task list store.
//!
//! # Responsibility
//! - Admit user text as new tasks (prepend) and remove tasks by id.
//! - Expose count, pluralized label, and read-only snapshots.
//!
//! # Invariants
//! - `next_sequence` strictly increases and only feeds id generation.
//! - Removal preserves the relative order of remaining tasks.
//! - Blank admission and unknown-id removal are no-ops, not errors.

use crate::model::task::{normalize_task_text, Task, TaskId};
use crate::view::count_label;
use log::debug;
use serde::Serialize;
use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Clock used for the timestamp half of task ids. Returns epoch milliseconds.
pub type EpochMillisClock = fn() -> i64;

/// Outcome of one `admit` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    /// A task was created and is now first in the list.
    Created(Task),
    /// Input was blank; the list is unchanged.
    Rejected,
}

impl Admission {
    /// Returns the created task, if any.
    pub fn created(&self) -> Option<&Task> {
        match self {
            Self::Created(task) => Some(task),
            Self::Rejected => None,
        }
    }

    pub fn into_created(self) -> Option<Task> {
        match self {
            Self::Created(task) => Some(task),
            Self::Rejected => None,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Read-only view of the list for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskListSnapshot {
    /// Session that produced this snapshot.
    pub session_id: Uuid,
    /// Tasks in display order, newest first.
    pub tasks: Vec<Task>,
    /// Always equal to `tasks.len()`.
    pub count: usize,
}

/// Ordered task collection for one UI session.
#[derive(Debug)]
pub struct TaskListStore {
    session_id: Uuid,
    tasks: VecDeque<Task>,
    next_sequence: u64,
    clock: EpochMillisClock,
}

impl Default for TaskListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListStore {
    /// Creates an empty store using the system clock.
    pub fn new() -> Self {
        Self::with_clock(system_epoch_millis)
    }

    /// Creates an empty store with a caller-provided clock.
    ///
    /// Id uniqueness does not depend on the clock; a constant clock still
    /// yields distinct ids.
    pub fn with_clock(clock: EpochMillisClock) -> Self {
        let session_id = Uuid::new_v4();
        debug!("event=task_list_create module=store status=ok session={session_id}");
        Self {
            session_id,
            tasks: VecDeque::new(),
            next_sequence: 0,
            clock,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Admits raw user text as a new task.
    ///
    /// # Contract
    /// - Blank input returns `Admission::Rejected` and mutates nothing.
    /// - Otherwise the trimmed text becomes a new task at position 0.
    pub fn admit(&mut self, raw_text: &str) -> Admission {
        let text = match normalize_task_text(raw_text) {
            Ok(text) => text,
            Err(_) => {
                debug!(
                    "event=task_admit module=store status=skip reason=blank session={}",
                    self.session_id
                );
                return Admission::Rejected;
            }
        };

        let task = Task::from_normalized(self.issue_id(), text);
        self.tasks.push_front(task.clone());

        debug!(
            "event=task_admit module=store status=ok session={} id={} text_chars={} count={}",
            self.session_id,
            task.id(),
            task.text().chars().count(),
            self.tasks.len()
        );
        Admission::Created(task)
    }

    /// Removes the task with `id`, returning whether anything was removed.
    ///
    /// Unknown ids are tolerated (double-tap, stale UI row).
    pub fn remove(&mut self, id: &TaskId) -> bool {
        let Some(position) = self.tasks.iter().position(|task| task.id() == id) else {
            debug!(
                "event=task_remove module=store status=skip reason=not_found session={} id={}",
                self.session_id, id
            );
            return false;
        };

        self.tasks.remove(position);
        debug!(
            "event=task_remove module=store status=ok session={} id={} count={}",
            self.session_id,
            id,
            self.tasks.len()
        );
        true
    }

    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Pluralized count label, recomputed on every call.
    pub fn count_label(&self) -> String {
        count_label(self.count())
    }

    /// Tasks in display order, newest first.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Copies current state into a snapshot for rendering.
    pub fn snapshot(&self) -> TaskListSnapshot {
        TaskListSnapshot {
            session_id: self.session_id,
            tasks: self.tasks.iter().cloned().collect(),
            count: self.tasks.len(),
        }
    }

    fn issue_id(&mut self) -> TaskId {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        TaskId::from(format!("{}-{sequence}", (self.clock)()))
    }
}

fn system_epoch_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
