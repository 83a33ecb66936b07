//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use hookmock_domain::OutputSettings;
use hookmock_infrastructure::DEFAULT_CONFIG_FILE;

/// Mock webhooks locally.
#[derive(Debug, Parser)]
#[command(name = "hookmock", version, about = "Mock webhooks locally.")]
pub struct Cli {
    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fire webhooks
    Fire {
        /// Hooks to fire, in order
        #[arg(required = true)]
        hooks: Vec<String>,
        #[command(flatten)]
        options: FireOptions,
    },
    /// Fire a group of webhooks
    FireGroup {
        /// Groups to fire, in order
        #[arg(required = true)]
        groups: Vec<String>,
        #[command(flatten)]
        options: FireOptions,
    },
    /// List all webhooks
    Ls {
        #[command(flatten)]
        config: ConfigArg,
    },
}

/// Config file selection.
#[derive(Debug, Clone, Args)]
pub struct ConfigArg {
    /// Path to config file
    #[arg(short, long, env = "HOOKMOCK_CONFIG")]
    pub config: Option<PathBuf>,
}

impl ConfigArg {
    /// Returns the config path, falling back to `hooks.yaml` with a notice.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(|| {
            println!("No config file specified.");
            println!("Using default config file: {DEFAULT_CONFIG_FILE}");
            PathBuf::from(DEFAULT_CONFIG_FILE)
        })
    }
}

/// Options shared by the firing commands.
#[derive(Debug, Clone, Args)]
pub struct FireOptions {
    #[command(flatten)]
    pub config: ConfigArg,

    /// Suppress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Debug output
    #[arg(short, long)]
    pub debug: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,
}

impl FireOptions {
    /// Output settings selected by the flags.
    #[must_use]
    pub const fn settings(&self) -> OutputSettings {
        OutputSettings::new(self.quiet, self.verbose, self.debug)
    }
}

impl Command {
    /// Output settings for the command; `ls` never runs verbose or debug.
    #[must_use]
    pub const fn settings(&self) -> OutputSettings {
        match self {
            Self::Fire { options, .. } | Self::FireGroup { options, .. } => options.settings(),
            Self::Ls { .. } => OutputSettings::new(false, false, false),
        }
    }
}
