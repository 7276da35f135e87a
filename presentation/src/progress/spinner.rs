use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while a request is in flight
pub struct WaitingIndicator {
    bar: Option<ProgressBar>,
}

impl WaitingIndicator {
    /// Start spinning with `message`. When `enabled` is false nothing is drawn.
    pub fn start(message: &str, enabled: bool) -> Self {
        if !enabled {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar: Some(bar) }
    }

    pub fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
