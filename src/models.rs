//! Frontend Models
//!
//! Data structures for the to-do list.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do record
///
/// `id` is assigned once at creation and never changes; `item` is the
/// user-visible text and is replaced on edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoEntry {
    pub id: String,
    pub item: String,
}

/// Generate a fresh opaque id for a new entry
pub fn new_todo_id() -> String {
    Uuid::new_v4().to_string()
}
