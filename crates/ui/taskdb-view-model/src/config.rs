//! Configuration for the task list view-model

use bon::Builder;
use std::time::Duration;

/// Text shown in the notification area before anything happened
pub const DEFAULT_WELCOME_MESSAGE: &str = "Welcome to the Task Manager!";

/// View-model configuration
#[derive(Debug, Clone, Builder)]
pub struct ViewModelConfig {
    /// How long a notification stays fully visible
    #[builder(default = Duration::from_millis(3000))]
    pub flash_hold: Duration,

    /// Length of the fade-out that follows the hold
    #[builder(default = Duration::from_millis(600))]
    pub flash_fade: Duration,

    /// Initial notification text; empty starts with the notification hidden
    #[builder(into, default = DEFAULT_WELCOME_MESSAGE.to_string())]
    pub welcome_message: String,
}

impl Default for ViewModelConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
