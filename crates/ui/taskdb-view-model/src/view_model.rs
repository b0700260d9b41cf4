//! The task list controller

use crate::config::ViewModelConfig;
use crate::flash::Flash;
use crate::scheduler::Scheduler;
use crate::task::{Task, VisibilityFilter};
use futures_signals::signal::Mutable;
use futures_signals::signal_vec::{MutableVec, SignalVec};
use std::future::Future;
use std::rc::Rc;
use taskdb_client::{ClientResult, NewTask, TaskApi};
use tracing::{debug, warn};

/// Notification texts
pub mod messages {
    pub const TASK_CREATED: &str = "New task created.";
    pub const CREATE_FAILED: &str = "Unable to save task. Did you enter some text?";
    pub const UPDATE_FAILED: &str = "Sorry, error updating task";
    pub const DELETE_FAILED: &str = "Error deleting task";

    pub fn task_updated(text: &str) -> String {
        format!("Task \"{}\" updated", text)
    }

    pub fn task_deleted(text: &str) -> String {
        format!("Task \"{}\" deleted", text)
    }
}

/// Owns the task collection, the form and filter state, and every exchange
/// with the task server.
///
/// Every successful mutation is followed by a full reload that replaces the
/// collection. Concurrent operations are not ordered against each other; the
/// last reload to finish wins.
pub struct TaskListViewModel {
    tasks: MutableVec<Task>,
    pub new_task_text: Mutable<String>,
    pub new_task_is_urgent: Mutable<bool>,
    pub filter: VisibilityFilter,
    pub flash: Flash,
    api: Rc<dyn TaskApi>,
    scheduler: Rc<dyn Scheduler>,
}

impl TaskListViewModel {
    pub fn new(
        api: Rc<dyn TaskApi>,
        scheduler: Rc<dyn Scheduler>,
        config: ViewModelConfig,
    ) -> Rc<Self> {
        let flash = Flash::new(
            Rc::clone(&scheduler),
            config.flash_hold,
            config.flash_fade,
            config.welcome_message,
        );

        Rc::new(Self {
            tasks: MutableVec::new(),
            new_task_text: Mutable::new(String::new()),
            new_task_is_urgent: Mutable::new(false),
            filter: VisibilityFilter::default(),
            flash,
            api,
            scheduler,
        })
    }

    /// Load the initial collection in the background
    pub fn start(self: &Rc<Self>) {
        let view_model = Rc::clone(self);
        self.scheduler.spawn(Box::pin(async move {
            view_model.refresh().await;
        }));
    }

    /// Fetch every task and replace the collection with fresh records
    pub async fn reload_all(&self) -> ClientResult<()> {
        let data = self.api.list_tasks().await?;
        let filter = self.filter.view();

        let tasks: Vec<Task> = data
            .into_iter()
            .map(|item| Task::new(item, filter.clone()))
            .collect();

        debug!("Replacing task list with {} tasks", tasks.len());
        self.tasks.lock_mut().replace_cloned(tasks);
        Ok(())
    }

    async fn refresh(&self) {
        if let Err(e) = self.reload_all().await {
            warn!("Failed to reload tasks: {}", e);
        }
    }

    /// Submit the new-task form. The server decides whether the text is
    /// acceptable.
    pub async fn create_task(&self) {
        let new_task = NewTask::new(self.new_task_text.get_cloned(), self.new_task_is_urgent.get());

        match self.api.add_task(&new_task).await {
            Ok(()) => {
                self.new_task_is_urgent.set(false);
                self.new_task_text.set(String::new());
                self.notify(messages::TASK_CREATED);
                self.refresh().await;
            }
            Err(e) => {
                warn!("Failed to create task: {}", e);
                self.notify(messages::CREATE_FAILED);
            }
        }
    }

    /// Flip `task`'s completion flag and send it to the server.
    ///
    /// The flip happens before this returns, not when the future is first
    /// polled. A failed request leaves the flipped value in place until the
    /// next reload.
    pub fn toggle_completed(self: &Rc<Self>, task: &Task) -> impl Future<Output = ()> + use<> {
        task.completed.set(!task.completed.get());

        let payload = task.to_data();
        let text = task.text.clone();
        let view_model = Rc::clone(self);

        async move {
            match view_model.api.update_completed(&payload).await {
                Ok(()) => {
                    view_model.notify(messages::task_updated(&text.lock_ref()));
                    view_model.refresh().await;
                }
                Err(e) => {
                    warn!("Failed to update task {}: {}", payload.id, e);
                    view_model.notify(messages::UPDATE_FAILED);
                }
            }
        }
    }

    /// Ask the server to delete `task`. The local collection only changes
    /// through the reload that follows a success.
    pub async fn delete_task(&self, task: &Task) {
        let payload = task.to_data();

        match self.api.delete_task(&payload).await {
            Ok(()) => {
                self.notify(messages::task_deleted(&task.text.lock_ref()));
                self.refresh().await;
            }
            Err(e) => {
                warn!("Failed to delete task {}: {}", payload.id, e);
                self.notify(messages::DELETE_FAILED);
            }
        }
    }

    pub fn notify(&self, text: impl Into<String>) {
        self.flash.show(text);
    }

    pub fn flash_message(&self) -> String {
        self.flash.message()
    }

    /// Snapshot of the current records, in server order
    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.lock_ref().to_vec()
    }

    /// Changes to the record list; only reloads produce them
    pub fn tasks_signal_vec(&self) -> impl SignalVec<Item = Task> + use<> {
        self.tasks.signal_vec_cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::TokioScheduler;
    use async_trait::async_trait;
    use futures::StreamExt;
    use futures::channel::oneshot;
    use futures_signals::signal_vec::{SignalVecExt, VecDiff};
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use taskdb_client::{ClientError, TaskData, TaskId};
    use tokio::task::LocalSet;

    /// Server double whose list responses are released by the test
    #[derive(Default)]
    struct GatedApi {
        pending_lists: RefCell<VecDeque<oneshot::Receiver<Vec<TaskData>>>>,
        updates: RefCell<Vec<TaskData>>,
        fail_updates: bool,
    }

    impl GatedApi {
        fn gate_list(&self) -> oneshot::Sender<Vec<TaskData>> {
            let (tx, rx) = oneshot::channel();
            self.pending_lists.borrow_mut().push_back(rx);
            tx
        }
    }

    #[async_trait(?Send)]
    impl TaskApi for GatedApi {
        async fn list_tasks(&self) -> ClientResult<Vec<TaskData>> {
            let rx = self.pending_lists.borrow_mut().pop_front();
            match rx {
                Some(rx) => rx.await.map_err(|_| ClientError::status(503)),
                None => Ok(Vec::new()),
            }
        }

        async fn add_task(&self, _task: &NewTask) -> ClientResult<()> {
            Ok(())
        }

        async fn update_completed(&self, task: &TaskData) -> ClientResult<()> {
            self.updates.borrow_mut().push(task.clone());
            if self.fail_updates {
                Err(ClientError::status(500))
            } else {
                Ok(())
            }
        }

        async fn delete_task(&self, _task: &TaskData) -> ClientResult<()> {
            Ok(())
        }
    }

    fn data(id: i64, text: &str, completed: bool) -> TaskData {
        TaskData {
            id: TaskId(id),
            text: text.to_string(),
            urgent: false,
            completed,
        }
    }

    fn view_model(api: Rc<GatedApi>) -> Rc<TaskListViewModel> {
        TaskListViewModel::new(api, Rc::new(TokioScheduler), ViewModelConfig::default())
    }

    #[tokio::test]
    async fn test_toggle_flips_before_first_poll() {
        LocalSet::new()
            .run_until(async {
                let api = Rc::new(GatedApi::default());
                let vm = view_model(Rc::clone(&api));

                let gate = api.gate_list();
                gate.send(vec![data(1, "A", false)]).unwrap();
                vm.reload_all().await.unwrap();

                let task = vm.tasks()[0].clone();
                let pending = vm.toggle_completed(&task);

                assert!(task.completed.get());
                assert!(api.updates.borrow().is_empty());

                pending.await;
                assert_eq!(api.updates.borrow()[0], data(1, "A", true));
            })
            .await;
    }

    #[tokio::test]
    async fn test_failed_toggle_keeps_optimistic_flip() {
        LocalSet::new()
            .run_until(async {
                let api = Rc::new(GatedApi {
                    fail_updates: true,
                    ..GatedApi::default()
                });
                let vm = view_model(Rc::clone(&api));

                api.gate_list().send(vec![data(1, "A", false)]).unwrap();
                vm.reload_all().await.unwrap();

                let task = vm.tasks()[0].clone();
                vm.toggle_completed(&task).await;

                assert!(task.completed.get());
                assert!(vm.tasks()[0].completed.get());
                assert_eq!(vm.flash_message(), messages::UPDATE_FAILED);
            })
            .await;
    }

    #[tokio::test]
    async fn test_last_reload_to_finish_wins() {
        LocalSet::new()
            .run_until(async {
                let api = Rc::new(GatedApi::default());
                let vm = view_model(Rc::clone(&api));

                let first = api.gate_list();
                let second = api.gate_list();
                let vm_ref: &TaskListViewModel = &vm;

                // The first reload is issued first but its response arrives last.
                let (first_result, second_result) = futures::join!(vm_ref.reload_all(), async move {
                    second.send(vec![data(2, "newer", false)]).unwrap();
                    let result = vm_ref.reload_all().await;
                    assert_eq!(vm_ref.tasks()[0].text.get_cloned(), "newer");
                    first.send(vec![data(1, "older", false)]).unwrap();
                    result
                });
                first_result.unwrap();
                second_result.unwrap();

                let tasks = vm.tasks();
                assert_eq!(tasks.len(), 1);
                assert_eq!(tasks[0].text.get_cloned(), "older");
            })
            .await;
    }

    #[tokio::test]
    async fn test_reload_failure_leaves_collection_untouched() {
        LocalSet::new()
            .run_until(async {
                let api = Rc::new(GatedApi::default());
                let vm = view_model(Rc::clone(&api));

                api.gate_list().send(vec![data(1, "A", false)]).unwrap();
                vm.reload_all().await.unwrap();

                drop(api.gate_list());
                assert!(vm.reload_all().await.is_err());

                assert_eq!(vm.tasks().len(), 1);
                assert_eq!(vm.tasks()[0].id(), TaskId(1));
            })
            .await;
    }

    #[tokio::test]
    async fn test_tasks_signal_vec_reports_reloads() {
        LocalSet::new()
            .run_until(async {
                let api = Rc::new(GatedApi::default());
                let vm = view_model(Rc::clone(&api));

                api.gate_list()
                    .send(vec![data(1, "A", false), data(2, "B", true)])
                    .unwrap();
                vm.reload_all().await.unwrap();

                let mut changes = vm.tasks_signal_vec().to_stream();
                match changes.next().await {
                    Some(VecDiff::Replace { values }) => {
                        let ids: Vec<TaskId> = values.iter().map(|t| t.id()).collect();
                        assert_eq!(ids, vec![TaskId(1), TaskId(2)]);
                    }
                    other => panic!("expected initial replace, got {:?}", other),
                }

                api.gate_list().send(vec![data(3, "C", false)]).unwrap();
                vm.reload_all().await.unwrap();

                match changes.next().await {
                    Some(VecDiff::Replace { values }) => {
                        assert_eq!(values.len(), 1);
                        assert_eq!(values[0].id(), TaskId(3));
                    }
                    other => panic!("expected replace after reload, got {:?}", other),
                }
            })
            .await;
    }

    #[test]
    fn test_messages() {
        assert_eq!(messages::task_updated("A"), "Task \"A\" updated");
        assert_eq!(messages::task_deleted("B"), "Task \"B\" deleted");
    }
}
