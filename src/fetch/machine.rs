//! Fetch machine
//!
//! Owns a [`FetchState`] and applies commands through the validated
//! reducer. One machine governs one logical fetch operation.

use super::{
    FetchCommand, FetchState, FetchStatus, allows,
    observer::{NoopObserver, TransitionObserver},
    reduce,
};

/// A fetch state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchMachine<T> {
    state: FetchState<T>,
}

impl<T> Default for FetchMachine<T> {
    fn default() -> Self {
        FetchMachine {
            state: FetchState::new(),
        }
    }
}

impl<T: Clone> FetchMachine<T> {
    /// Create a machine in the initial idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state.
    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Current lifecycle phase.
    pub fn status(&self) -> FetchStatus {
        self.state.status()
    }

    /// Payload of the last successful fetch, present only when resolved.
    pub fn data(&self) -> Option<&T> {
        self.state.data()
    }

    /// Failure message, present only when rejected.
    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    /// Whether no request has been issued yet.
    pub fn is_idle(&self) -> bool {
        self.state.is_idle()
    }

    /// Whether a request is in flight.
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Whether the last request settled successfully.
    pub fn is_resolved(&self) -> bool {
        self.state.is_resolved()
    }

    /// Whether the last request failed.
    pub fn is_rejected(&self) -> bool {
        self.state.is_rejected()
    }

    /// Begin a fetch.
    pub fn init(&mut self) {
        self.apply(FetchCommand::Init);
    }

    /// Report that the in-flight request resolved with `payload`.
    pub fn report_success(&mut self, payload: T) {
        self.apply(FetchCommand::Success(payload));
    }

    /// Report that the in-flight request failed with `message`.
    pub fn report_failure(&mut self, message: impl Into<String>) {
        self.apply(FetchCommand::Failure(message.into()));
    }

    /// Return to the initial idle value.
    pub fn reset(&mut self) {
        self.apply(FetchCommand::Reset);
    }

    /// Apply a command through the validated reducer.
    pub fn apply(&mut self, command: FetchCommand<T>) {
        self.apply_with_observer(command, &mut NoopObserver);
    }

    /// Apply a command, notifying `observer` if the command is rejected.
    pub fn apply_with_observer(
        &mut self,
        command: FetchCommand<T>,
        observer: &mut dyn TransitionObserver,
    ) {
        if !allows(self.status(), &command) {
            observer.invalid_transition(self.status(), command.name());
        }

        self.state = reduce(&self.state, &command);
    }
}
