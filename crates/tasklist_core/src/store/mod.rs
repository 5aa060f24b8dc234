//! In-memory task list state.
//!
//! # Responsibility
//! - Own the ordered task sequence for one UI session.
//! - Issue task identities and apply admit/remove mutations.
//!
//! # Invariants
//! - Ids are never reused within one store.
//! - Newest task is always first.
//! - Nothing here touches disk or network.

pub mod task_list;
