//! Transition observers
//!
//! Callbacks for invalid-transition diagnostics, so a caller or a test can
//! see rejected commands without parsing log output.

use super::FetchStatus;

/// Receives a callback each time the machine rejects a command.
pub trait TransitionObserver {
    /// Called when `command` was not permitted from `status`.
    fn invalid_transition(&mut self, status: FetchStatus, command: &'static str);
}

/// Observer that ignores all callbacks.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl TransitionObserver for NoopObserver {
    fn invalid_transition(&mut self, _status: FetchStatus, _command: &'static str) {}
}

/// Observer that records rejected commands, mainly for tests.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    rejected: Vec<(FetchStatus, &'static str)>,
}

impl RecordingObserver {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejected `(status, command)` pairs, in order of occurrence.
    pub fn rejected(&self) -> &[(FetchStatus, &'static str)] {
        &self.rejected
    }
}

impl TransitionObserver for RecordingObserver {
    fn invalid_transition(&mut self, status: FetchStatus, command: &'static str) {
        self.rejected.push((status, command));
    }
}
