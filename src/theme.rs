//! Theme
//!
//! Dark/light mode state. Persisting the preference and reflecting it in
//! the document are the caller's concern; the core only holds the value.
//! The theme exists in the core so selector isolation can be exercised
//! against genuinely unrelated state.

use serde::{Deserialize, Serialize};

/// Colour scheme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Dark mode, the default.
    #[default]
    Dark,

    /// Light mode.
    Light,
}

impl ThemeMode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

/// Theme state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeState {
    mode: ThemeMode,
}

impl ThemeState {
    /// Create a state with the default mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode.
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }
}

/// Commands accepted by the theme reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeCommand {
    /// Switch to the other mode.
    Toggle,

    /// Set the mode directly.
    Set(ThemeMode),
}

/// Apply a command to the theme state.
pub fn reduce(state: ThemeState, command: ThemeCommand) -> ThemeState {
    match command {
        ThemeCommand::Toggle => ThemeState {
            mode: state.mode.toggled(),
        },
        ThemeCommand::Set(mode) => ThemeState { mode },
    }
}
