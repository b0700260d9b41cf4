//! Client for the taskdb REST API
//!
//! [`TaskApi`] is the seam the view-model talks to; [`TaskClient`] implements
//! it over HTTP with `reqwest` on both native and wasm targets.
//!
//! ```rust,no_run
//! use taskdb_client::{TaskApi, TaskClient};
//!
//! # async fn run() -> Result<(), taskdb_client::ClientError> {
//! let client = TaskClient::builder("http://localhost:8080/").build()?;
//! for task in client.list_tasks().await? {
//!     println!("{} {}", task.id, task.text);
//! }
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

pub mod client;
pub mod error;

pub use client::{TaskClient, TaskClientBuilder};
pub use error::{ClientError, ClientResult};
pub use taskdb_types::{NewTask, TaskData, TaskId, routes};

/// Operations offered by the task server.
///
/// Futures are not `Send`: browser fetches are tied to the JS event loop.
#[async_trait(?Send)]
pub trait TaskApi {
    /// Fetch the whole collection, in server order
    async fn list_tasks(&self) -> ClientResult<Vec<TaskData>>;

    /// Create a task
    async fn add_task(&self, task: &NewTask) -> ClientResult<()>;

    /// Store the completion state carried by `task`
    async fn update_completed(&self, task: &TaskData) -> ClientResult<()>;

    /// Delete the task identified by `task`
    async fn delete_task(&self, task: &TaskData) -> ClientResult<()>;
}
