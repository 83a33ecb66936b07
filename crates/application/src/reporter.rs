//! Run output
//!
//! Every line a command prints about hooks goes through a [`Reporter`], so
//! the quiet/verbose/debug switches travel with the operation instead of
//! living in process-wide state.

use std::fmt::Display;

use hookmock_domain::OutputSettings;

/// Emits tagged log lines gated by [`OutputSettings`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    settings: OutputSettings,
}

impl Reporter {
    /// Creates a reporter for the given settings.
    #[must_use]
    pub const fn new(settings: OutputSettings) -> Self {
        Self { settings }
    }

    /// `[<tag>]: <message>`, unless quiet.
    pub fn hook(&self, tag: &str, message: impl Display) {
        if self.settings.shows_hook_lines() {
            tracing::info!("[{tag}]: {message}");
        }
    }

    /// `[VERBOSE]: <message>`, when verbose and not quiet.
    pub fn verbose(&self, message: impl Display) {
        if self.settings.shows_verbose() {
            tracing::info!("[VERBOSE]: {message}");
        }
    }

    /// `[DEBUG]: <message>`, when debug and not quiet.
    pub fn debug(&self, message: impl Display) {
        if self.settings.shows_debug() {
            tracing::debug!("[DEBUG]: {message}");
        }
    }

    /// `[ERROR]: <message>`, always.
    pub fn error(&self, message: impl Display) {
        tracing::error!("[ERROR]: {message}");
    }
}
