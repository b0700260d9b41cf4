//! Inline styles derived from view-model state

use std::time::Duration;
use taskdb_view_model::FlashPhase;

pub fn flash_opacity(phase: FlashPhase) -> String {
    phase.opacity().to_string()
}

/// Only the fade animates; showing a notification is immediate.
pub fn flash_transition(phase: FlashPhase, fade: Duration) -> String {
    match phase {
        FlashPhase::Fading => format!("opacity {}ms linear", fade.as_millis()),
        FlashPhase::Shown | FlashPhase::Hidden => "none".to_string(),
    }
}

pub fn display(visible: bool) -> Option<&'static str> {
    if visible { None } else { Some("none") }
}
