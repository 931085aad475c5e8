//! User notification boundary.
//!
//! The session talks to the operator twice: a working-set confirmation
//! before anything runs, and the summary line afterwards. In a real host
//! both are blocking modal alerts; here the channel is injected.

/// Receiver for operator-facing alerts.
pub trait Notifier {
    /// Show a blocking message to the operator.
    fn alert(&mut self, message: &str);
}

/// Shown before the run so the operator can confirm the working set.
pub const WORKING_SET_NOTICE: &str = "Make sure the layer with the data you want to process is \
    active. Process a relatively small number of buildings at a time and check the result \
    visually for mistakes such as duplicate address points on one building.";

/// Notifier that collects messages for tests.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Vec<String>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
