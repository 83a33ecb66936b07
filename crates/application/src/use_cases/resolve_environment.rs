//! Resolve environment use case

use hookmock_domain::Config;

use crate::error::{FireError, FireResult};
use crate::ports::EnvironmentSource;
use crate::reporter::Reporter;

/// Output of environment resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveEnvironmentOutput {
    /// Config keys whose variable was found.
    pub resolved: Vec<String>,
    /// Config keys left holding the variable name.
    pub unresolved: Vec<String>,
}

/// Replaces the variable names in a config's environment block with their
/// values.
///
/// Runs once per invocation, before anything is dispatched.
pub struct ResolveEnvironment<E> {
    source: E,
    reporter: Reporter,
}

impl<E: EnvironmentSource> ResolveEnvironment<E> {
    /// Creates a new `ResolveEnvironment` use case.
    pub const fn new(source: E, reporter: Reporter) -> Self {
        Self { source, reporter }
    }

    /// Executes the use case.
    ///
    /// Loads the block's `file` (without overriding variables already set),
    /// then looks up each mapped variable. A variable that is not set, or set
    /// to an empty string, keeps its name as its value.
    ///
    /// A file that fails to load is reported and resolution carries on with
    /// whatever the process environment already holds.
    ///
    /// # Errors
    /// Returns [`FireError::MissingConfigSection`] if the config has no
    /// environment block. Nothing is mutated in that case.
    pub fn execute(&self, config: &mut Config) -> FireResult<ResolveEnvironmentOutput> {
        let Some(environment) = config.environment.as_mut() else {
            let error = FireError::MissingConfigSection("environment");
            self.reporter.error(&error);
            return Err(error);
        };

        if let Some(file) = &environment.file {
            self.reporter
                .verbose(format!("Loading environment from file: {}", file.display()));
            if let Err(e) = self.source.load_file(file) {
                self.reporter.error(e);
            }
        }

        let mut output = ResolveEnvironmentOutput::default();

        for (key, value) in &mut environment.variables {
            self.reporter
                .debug(format!("Checking for environment variable: {value}"));

            match self.source.var(value).filter(|v| !v.is_empty()) {
                Some(resolved) => {
                    self.reporter
                        .debug(format!("Found environment variable: {value}"));
                    *value = resolved;
                    output.resolved.push(key.clone());
                }
                None => {
                    self.reporter.hook(
                        "Environment",
                        format!(
                            "No environment variable found for: environment.variable:\"{value}\", in config file \"{key}: {value}\". Using value {value}"
                        ),
                    );
                    output.unresolved.push(key.clone());
                }
            }
        }

        Ok(output)
    }
}
