//! List hooks use case

use hookmock_domain::Config;

use crate::error::{FireError, FireResult};
use crate::reporter::Reporter;

/// Returns hook names in declaration order.
///
/// # Errors
/// Returns [`FireError::NoConfig`] when no config was loaded.
pub fn list_hooks<'a>(config: Option<&'a Config>, reporter: &Reporter) -> FireResult<Vec<&'a str>> {
    let Some(config) = config else {
        reporter.error(FireError::NoConfig);
        return Err(FireError::NoConfig);
    };

    reporter.hook("ls", "Webhooks:");
    Ok(config.hook_names().collect())
}
