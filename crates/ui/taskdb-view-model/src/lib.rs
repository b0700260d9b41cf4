//! Observable task list state for the taskdb front end
//!
//! [`TaskListViewModel`] mirrors the server's task collection in
//! `futures-signals` state that a declarative UI can bind to, and pushes user
//! actions back to the server through a [`TaskApi`](taskdb_client::TaskApi).
//!
//! - [`Task`] records expose their fields as `Mutable`s and derive their
//!   visibility from the view-model's [`VisibilityFilter`].
//! - Mutations are followed by a full reload of the collection.
//! - Outcomes are reported through a transient [`Flash`] notification.
//!
//! All state is single-threaded (`Rc`); background work goes through a
//! [`Scheduler`].

pub mod config;
pub mod flash;
pub mod scheduler;
pub mod task;
pub mod view_model;

pub use config::{DEFAULT_WELCOME_MESSAGE, ViewModelConfig};
pub use flash::{Flash, FlashPhase};
pub use scheduler::Scheduler;
pub use task::{FilterView, Task, VisibilityFilter, is_visible};
pub use view_model::{TaskListViewModel, messages};

#[cfg(not(target_arch = "wasm32"))]
pub use scheduler::TokioScheduler;

#[cfg(target_arch = "wasm32")]
pub use scheduler::BrowserScheduler;
