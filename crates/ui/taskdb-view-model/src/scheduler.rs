//! Local task spawning and timers
//!
//! The view-model is single-threaded; everything it spawns runs on the
//! current thread's executor. In the browser that is the JS event loop, on
//! native targets it is a tokio [`LocalSet`](tokio::task::LocalSet).

use futures::future::LocalBoxFuture;
use std::time::Duration;

/// Executor hooks the view-model needs for fire-and-forget work
pub trait Scheduler {
    /// Run `future` to completion in the background
    fn spawn(&self, future: LocalBoxFuture<'static, ()>);

    /// Resolve after `duration`
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

/// Scheduler for native targets. Must be used from within a `LocalSet`.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

#[cfg(not(target_arch = "wasm32"))]
impl Scheduler for TokioScheduler {
    fn spawn(&self, future: LocalBoxFuture<'static, ()>) {
        tokio::task::spawn_local(future);
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(tokio::time::sleep(duration))
    }
}

/// Scheduler backed by the browser event loop
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

#[cfg(target_arch = "wasm32")]
impl Scheduler for BrowserScheduler {
    fn spawn(&self, future: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(future);
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(gloo_timers::future::sleep(duration))
    }
}
