//! Output settings
//!
//! Controls how much a run reports. Passed explicitly to every operation
//! that logs.

use serde::{Deserialize, Serialize};

/// Output verbosity switches.
///
/// Errors are always reported; `quiet` silences everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Suppress per-hook output.
    pub quiet: bool,
    /// Dump responses and extra detail.
    pub verbose: bool,
    /// Emit internal trace messages.
    pub debug: bool,
}

impl OutputSettings {
    /// Creates settings from the three switches.
    #[must_use]
    pub const fn new(quiet: bool, verbose: bool, debug: bool) -> Self {
        Self {
            quiet,
            verbose,
            debug,
        }
    }

    /// Settings that only let errors through.
    #[must_use]
    pub const fn quiet() -> Self {
        Self::new(true, false, false)
    }

    /// Whether per-hook lines are shown.
    #[must_use]
    pub const fn shows_hook_lines(&self) -> bool {
        !self.quiet
    }

    /// Whether verbose lines are shown.
    #[must_use]
    pub const fn shows_verbose(&self) -> bool {
        self.verbose && !self.quiet
    }

    /// Whether debug lines are shown.
    #[must_use]
    pub const fn shows_debug(&self) -> bool {
        self.debug && !self.quiet
    }
}
