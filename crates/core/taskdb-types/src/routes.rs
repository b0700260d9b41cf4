//! Route table of the task server.
//!
//! `LIST` is host-absolute; the mutation routes are relative to the page the
//! client was loaded from.

/// `GET` the full task collection
pub const LIST: &str = "/tasks";

/// `POST` a [`crate::NewTask`]
pub const ADD: &str = "add";

/// `PATCH` a full [`crate::TaskData`] carrying the new completion state
pub const COMPLETED: &str = "completed";

/// `DELETE` a full [`crate::TaskData`]
pub const DELETE: &str = "delete";
