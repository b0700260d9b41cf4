//! Transient notifications
//!
//! A notification is shown at full opacity, held for a fixed time and then
//! faded out. Showing a new notification restarts the sequence; timers left
//! over from an earlier one notice they are stale and do nothing.

use crate::scheduler::Scheduler;
use futures_signals::signal::{Mutable, Signal};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use tracing::info;

/// Presentation state of the notification area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashPhase {
    /// Not visible
    Hidden,
    /// Fully visible
    Shown,
    /// Transitioning to invisible
    Fading,
}

impl FlashPhase {
    /// Target opacity for this phase
    pub fn opacity(self) -> f64 {
        match self {
            FlashPhase::Shown => 1.0,
            FlashPhase::Hidden | FlashPhase::Fading => 0.0,
        }
    }
}

#[derive(Clone)]
pub struct Flash {
    message: Mutable<String>,
    phase: Mutable<FlashPhase>,
    generation: Rc<Cell<u64>>,
    hold: Duration,
    fade: Duration,
    scheduler: Rc<dyn Scheduler>,
}

impl Flash {
    /// Start out showing `initial`, with nothing scheduled. An empty
    /// `initial` starts hidden.
    pub fn new(
        scheduler: Rc<dyn Scheduler>,
        hold: Duration,
        fade: Duration,
        initial: impl Into<String>,
    ) -> Self {
        let initial = initial.into();
        let phase = if initial.is_empty() {
            FlashPhase::Hidden
        } else {
            FlashPhase::Shown
        };

        Self {
            message: Mutable::new(initial),
            phase: Mutable::new(phase),
            generation: Rc::new(Cell::new(0)),
            hold,
            fade,
            scheduler,
        }
    }

    /// Show `text`, superseding whatever is currently displayed or fading
    pub fn show(&self, text: impl Into<String>) {
        let text = text.into();
        info!("Notification: {}", text);

        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        self.message.set(text);
        self.phase.set(FlashPhase::Shown);

        let current = Rc::clone(&self.generation);
        let phase = self.phase.clone();
        let scheduler = Rc::clone(&self.scheduler);
        let (hold, fade) = (self.hold, self.fade);

        self.scheduler.spawn(Box::pin(async move {
            scheduler.sleep(hold).await;
            if current.get() != generation {
                return;
            }
            phase.set(FlashPhase::Fading);

            scheduler.sleep(fade).await;
            if current.get() == generation {
                phase.set(FlashPhase::Hidden);
            }
        }));
    }

    pub fn message(&self) -> String {
        self.message.get_cloned()
    }

    pub fn message_signal(&self) -> impl Signal<Item = String> + use<> {
        self.message.signal_cloned()
    }

    pub fn phase(&self) -> FlashPhase {
        self.phase.get()
    }

    pub fn phase_signal(&self) -> impl Signal<Item = FlashPhase> + use<> {
        self.phase.signal()
    }

    pub fn fade_duration(&self) -> Duration {
        self.fade
    }
}
