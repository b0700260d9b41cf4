//! Reactive task records and the filter they are shown through

use futures_signals::map_ref;
use futures_signals::signal::{Mutable, ReadOnlyMutable, Signal};
use taskdb_client::{TaskData, TaskId};

/// Whether a task with the given completion state passes the filter
pub fn is_visible(completed: bool, show_completed: bool, show_not_completed: bool) -> bool {
    (completed && show_completed) || (!completed && show_not_completed)
}

/// The two independent "show" toggles of the task list.
///
/// Both on shows everything, both off hides everything.
#[derive(Debug, Clone)]
pub struct VisibilityFilter {
    pub show_completed: Mutable<bool>,
    pub show_not_completed: Mutable<bool>,
}

impl Default for VisibilityFilter {
    fn default() -> Self {
        Self {
            show_completed: Mutable::new(true),
            show_not_completed: Mutable::new(true),
        }
    }
}

impl VisibilityFilter {
    /// Read-only handle for task records
    pub fn view(&self) -> FilterView {
        FilterView {
            show_completed: self.show_completed.read_only(),
            show_not_completed: self.show_not_completed.read_only(),
        }
    }
}

/// Read-only view of a [`VisibilityFilter`]
#[derive(Clone)]
pub struct FilterView {
    show_completed: ReadOnlyMutable<bool>,
    show_not_completed: ReadOnlyMutable<bool>,
}

/// Client-side record of one server task
#[derive(Clone)]
pub struct Task {
    id: TaskId,
    pub text: Mutable<String>,
    pub urgent: Mutable<bool>,
    pub completed: Mutable<bool>,
    filter: FilterView,
}

impl Task {
    pub fn new(data: TaskData, filter: FilterView) -> Self {
        Self {
            id: data.id,
            text: Mutable::new(data.text),
            urgent: Mutable::new(data.urgent),
            completed: Mutable::new(data.completed),
            filter,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn visible(&self) -> bool {
        is_visible(
            self.completed.get(),
            self.filter.show_completed.get(),
            self.filter.show_not_completed.get(),
        )
    }

    /// Visibility, recomputed whenever the completion flag or either filter
    /// toggle changes
    pub fn visible_signal(&self) -> impl Signal<Item = bool> + use<> {
        map_ref! {
            let completed = self.completed.signal(),
            let show_completed = self.filter.show_completed.signal(),
            let show_not_completed = self.filter.show_not_completed.signal() =>
            is_visible(*completed, *show_completed, *show_not_completed)
        }
    }

    /// Current field values as a wire payload
    pub fn to_data(&self) -> TaskData {
        TaskData {
            id: self.id,
            text: self.text.get_cloned(),
            urgent: self.urgent.get(),
            completed: self.completed.get(),
        }
    }
}

impl std::fmt::Debug for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Task")
            .field("id", &self.id)
            .field("text", &self.text.get_cloned())
            .field("urgent", &self.urgent.get())
            .field("completed", &self.completed.get())
            .finish()
    }
}
