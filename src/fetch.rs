//! Fetch state machine
//!
//! The lifecycle of a single asynchronous data request, with every
//! transition validated against an explicit table. Commands not permitted
//! from the current status are no-ops that leave the state untouched and
//! emit a non-fatal diagnostic.

use serde::{Deserialize, Serialize};

pub mod gateway;
pub mod machine;
pub mod observer;

/// Lifecycle phase of a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    /// No request has been issued, or the machine was reset.
    Idle,

    /// A request is in flight.
    Loading,

    /// The last request settled successfully.
    Resolved,

    /// The last request failed.
    Rejected,
}

/// Commands accepted by the fetch reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchCommand<T> {
    /// Begin a fetch.
    Init,

    /// The in-flight request resolved with a payload.
    Success(T),

    /// The in-flight request failed with a message.
    Failure(String),

    /// Return to the initial idle value.
    Reset,
}

impl<T> FetchCommand<T> {
    /// Name of the command, for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            FetchCommand::Init => "Init",
            FetchCommand::Success(_) => "Success",
            FetchCommand::Failure(_) => "Failure",
            FetchCommand::Reset => "Reset",
        }
    }
}

/// State of one logical fetch operation.
///
/// `data` and `error` are mutually exclusive: `data` is present only when
/// resolved, `error` only when rejected, and both are absent while idle or
/// loading.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    status: FetchStatus,
    data: Option<T>,
    error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState {
            status: FetchStatus::Idle,
            data: None,
            error: None,
        }
    }
}

impl<T> FetchState<T> {
    /// The initial idle value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle phase.
    pub fn status(&self) -> FetchStatus {
        self.status
    }

    /// Payload of the last successful fetch, present only when resolved.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Failure message, present only when rejected.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether no request has been issued yet.
    pub fn is_idle(&self) -> bool {
        self.status == FetchStatus::Idle
    }

    /// Whether a request is in flight.
    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    /// Whether the last request settled successfully.
    pub fn is_resolved(&self) -> bool {
        self.status == FetchStatus::Resolved
    }

    /// Whether the last request failed.
    pub fn is_rejected(&self) -> bool {
        self.status == FetchStatus::Rejected
    }
}

/// Whether `command` is permitted from `status`.
///
/// The transition table: idle allows `Init`; loading allows `Success` and
/// `Failure`; resolved and rejected allow `Init` and `Reset`.
pub fn allows<T>(status: FetchStatus, command: &FetchCommand<T>) -> bool {
    match status {
        FetchStatus::Idle => matches!(command, FetchCommand::Init),
        FetchStatus::Loading => matches!(
            command,
            FetchCommand::Success(_) | FetchCommand::Failure(_)
        ),
        FetchStatus::Resolved | FetchStatus::Rejected => {
            matches!(command, FetchCommand::Init | FetchCommand::Reset)
        }
    }
}

/// Apply a command to the state, returning the new state.
///
/// A command not permitted from the current status leaves the state
/// unchanged and emits a `tracing` warning; the caller proceeds with the
/// old value.
pub fn reduce<T: Clone>(state: &FetchState<T>, command: &FetchCommand<T>) -> FetchState<T> {
    if !allows(state.status, command) {
        tracing::warn!(
            status = ?state.status,
            command = command.name(),
            "invalid fetch transition ignored"
        );
        return state.clone();
    }

    match command {
        FetchCommand::Init => FetchState {
            status: FetchStatus::Loading,
            data: None,
            error: None,
        },
        FetchCommand::Success(payload) => FetchState {
            status: FetchStatus::Resolved,
            data: Some(payload.clone()),
            error: None,
        },
        FetchCommand::Failure(message) => FetchState {
            status: FetchStatus::Rejected,
            data: None,
            error: Some(message.clone()),
        },
        FetchCommand::Reset => FetchState::new(),
    }
}
