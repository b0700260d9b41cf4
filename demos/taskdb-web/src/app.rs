use crate::style;
use dominator::{Dom, events};
use futures_signals::signal::{Mutable, SignalExt};
use futures_signals::signal_vec::SignalVecExt;
use std::rc::Rc;
use taskdb_client::TaskClient;
use taskdb_view_model::{BrowserScheduler, Task, TaskListViewModel, ViewModelConfig};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;

/// Build the view-model against the server that served this page and start
/// the initial load
pub fn bootstrap() -> Result<Rc<TaskListViewModel>, JsValue> {
    let page = gloo_utils::window().location().href()?;
    let client = TaskClient::builder(page)
        .build()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let view_model = TaskListViewModel::new(
        Rc::new(client),
        Rc::new(BrowserScheduler),
        ViewModelConfig::default(),
    );
    view_model.start();
    Ok(view_model)
}

pub fn render(vm: &Rc<TaskListViewModel>) -> Dom {
    html!("main", {
        .class("task-manager")
        .children(&mut [
            render_flash(vm),
            render_new_task_form(vm),
            render_filters(vm),
            render_task_list(vm),
        ])
    })
}

fn render_flash(vm: &TaskListViewModel) -> Dom {
    let fade = vm.flash.fade_duration();

    html!("div", {
        .attr("id", "flash-message")
        .text_signal(vm.flash.message_signal())
        .style_signal("opacity", vm.flash.phase_signal().map(style::flash_opacity))
        .style_signal("transition", vm.flash.phase_signal().map(move |phase| {
            style::flash_transition(phase, fade)
        }))
    })
}

fn render_new_task_form(vm: &Rc<TaskListViewModel>) -> Dom {
    html!("div", {
        .class("new-task")
        .children(&mut [
            html!("input" => HtmlInputElement, {
                .attr("type", "text")
                .attr("placeholder", "What needs doing?")
                .prop_signal("value", vm.new_task_text.signal_cloned())
                .with_node!(element => {
                    .event(clone!(vm => move |_: events::Input| {
                        vm.new_task_text.set(element.value());
                    }))
                })
            }),
            checkbox("Urgent", vm.new_task_is_urgent.clone()),
            html!("button", {
                .attr("type", "button")
                .text("Add task")
                .event(clone!(vm => move |_: events::Click| {
                    spawn_local(clone!(vm => async move {
                        vm.create_task().await;
                    }));
                }))
            }),
        ])
    })
}

fn render_filters(vm: &TaskListViewModel) -> Dom {
    html!("div", {
        .class("filters")
        .children(&mut [
            checkbox("Show completed", vm.filter.show_completed.clone()),
            checkbox("Show not completed", vm.filter.show_not_completed.clone()),
        ])
    })
}

fn render_task_list(vm: &Rc<TaskListViewModel>) -> Dom {
    html!("ul", {
        .class("tasks")
        .children_signal_vec(vm.tasks_signal_vec().map(clone!(vm => move |task| {
            render_task(&vm, task)
        })))
    })
}

fn render_task(vm: &Rc<TaskListViewModel>, task: Task) -> Dom {
    html!("li", {
        .style_signal("display", task.visible_signal().map(style::display))
        .class_signal("urgent", task.urgent.signal())
        .class_signal("completed", task.completed.signal())
        .children(&mut [
            html!("input" => HtmlInputElement, {
                .attr("type", "checkbox")
                .prop_signal("checked", task.completed.signal())
                .event(clone!(vm, task => move |_: events::Change| {
                    // Flips the record right away; the request runs in the background.
                    spawn_local(vm.toggle_completed(&task));
                }))
            }),
            html!("span", {
                .class("text")
                .text_signal(task.text.signal_cloned())
            }),
            html!("button", {
                .attr("type", "button")
                .text("Delete")
                .event(clone!(vm, task => move |_: events::Click| {
                    spawn_local(clone!(vm, task => async move {
                        vm.delete_task(&task).await;
                    }));
                }))
            }),
        ])
    })
}

fn checkbox(label: &str, state: Mutable<bool>) -> Dom {
    html!("label", {
        .children(&mut [
            html!("input" => HtmlInputElement, {
                .attr("type", "checkbox")
                .prop_signal("checked", state.signal())
                .with_node!(element => {
                    .event(clone!(state => move |_: events::Change| {
                        state.set_neq(element.checked());
                    }))
                })
            }),
            dominator::text(label),
        ])
    })
}
