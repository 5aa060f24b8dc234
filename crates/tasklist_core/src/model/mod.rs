//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the task record rendered by every UI surface.
//! - Own the admission rule for user-entered text.
//!
//! # Invariants
//! - Every task is identified by a `TaskId` issued once by its store.
//! - Task text is trimmed and never blank.

pub mod task;
