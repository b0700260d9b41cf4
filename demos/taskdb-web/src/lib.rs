//! Browser front end for the task manager.
//!
//! Binds the DOM to a single [`TaskListViewModel`](taskdb_view_model::TaskListViewModel)
//! created when the wasm module starts. The view-model lives as long as the
//! page.

#[cfg(target_arch = "wasm32")]
#[macro_use]
extern crate dominator;

pub mod style;

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();

    let view_model = app::bootstrap()?;
    dominator::append_dom(&dominator::body(), app::render(&view_model));
    Ok(())
}
