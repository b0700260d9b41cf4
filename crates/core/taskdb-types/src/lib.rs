//! Wire types for the taskdb REST API
//!
//! These mirror the JSON objects exchanged with the task server. The server
//! owns identifiers and ordering; clients treat [`TaskId`] as opaque.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod routes;

/// Server-assigned task identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for TaskId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A task as stored on the server.
///
/// Missing `urgent` / `completed` flags decode as `false` and a missing
/// `text` decodes as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskData {
    pub id: TaskId,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub urgent: bool,
    #[serde(default)]
    pub completed: bool,
}

/// Body of a create request. The server assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub text: String,
    pub urgent: bool,
    pub completed: bool,
}

impl NewTask {
    /// A not-yet-completed task with the given text and urgency
    pub fn new(text: impl Into<String>, urgent: bool) -> Self {
        Self {
            text: text.into(),
            urgent,
            completed: false,
        }
    }
}
