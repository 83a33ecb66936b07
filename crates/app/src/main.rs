//! Hookmock - Main Entry Point
//!
//! Parses the command line, sets up logging and runs the command.

mod cli;

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use hookmock_application::{
    FireError, FireHooks, FireOutcome, Reporter, ResolveEnvironment, list_hooks,
};
use hookmock_domain::{Config, OutputSettings};
use hookmock_infrastructure::{ProcessEnvironment, ReqwestHttpClient, load_config};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command, FireOptions};

// Requests must start in the order hooks are named, which the
// current-thread scheduler guarantees.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.command.settings());

    match cli.command {
        Command::Fire { hooks, options } => fire(&options, Target::Hooks(hooks)).await,
        Command::FireGroup { groups, options } => fire(&options, Target::Groups(groups)).await,
        Command::Ls { config } => {
            let reporter = Reporter::default();
            let loaded = load(&config.path(), &reporter).await;
            match list_hooks(loaded.as_ref(), &reporter) {
                Ok(names) => {
                    for name in names {
                        println!("- {name}");
                    }
                    ExitCode::SUCCESS
                }
                Err(_) => ExitCode::FAILURE,
            }
        }
    }
}

fn init_tracing(settings: OutputSettings) {
    let level = if settings.debug { "debug" } else { "info" };
    let default_filter = format!(
        "warn,hookmock={level},hookmock_application={level},hookmock_infrastructure={level}"
    );

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_target(false)
                .with_level(false),
        )
        .init();
}

async fn load(path: &Path, reporter: &Reporter) -> Option<Config> {
    match load_config(path).await {
        Ok(config) => {
            reporter.debug(format!("{config:?}"));
            Some(config)
        }
        Err(e) => {
            reporter.error(FireError::ConfigLoad(e.to_string()));
            None
        }
    }
}

/// What a firing command was asked to send.
enum Target {
    Hooks(Vec<String>),
    Groups(Vec<String>),
}

/// Loads the config, resolves its environment, then fires `target` and
/// waits for every request.
async fn fire(options: &FireOptions, target: Target) -> ExitCode {
    let reporter = Reporter::new(options.settings());

    let Some(mut config) = load(&options.config.path(), &reporter).await else {
        return ExitCode::FAILURE;
    };

    if config.environment.is_some() {
        // Resolution reports its own problems; none of them stop the run.
        let _resolution = ResolveEnvironment::new(ProcessEnvironment::new(), reporter)
            .execute(&mut config);
    }

    let client = match ReqwestHttpClient::with_timeout(Duration::from_secs(options.timeout)) {
        Ok(client) => client,
        Err(e) => {
            reporter.error(e);
            return ExitCode::FAILURE;
        }
    };

    let use_case = FireHooks::new(Arc::new(client), reporter);
    let dispatches = match &target {
        Target::Hooks(hooks) => use_case.fire(&config, hooks).await,
        Target::Groups(groups) => use_case.fire_groups(&config, groups).await,
    };
    let outcomes = dispatches.join_all().await;

    exit_code(&outcomes)
}

fn exit_code(outcomes: &[FireOutcome]) -> ExitCode {
    if outcomes.iter().all(FireOutcome::is_success) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
