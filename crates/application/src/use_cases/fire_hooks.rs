//! Fire hooks use case
//!
//! Requests are issued in the order hooks are named and each runs as its
//! own Tokio task, so a slow or failing hook never holds up its siblings.
//! The returned [`Dispatches`] handle lets the caller wait for every
//! in-flight request.
//!
//! Issue order relies on a current-thread runtime: its scheduler first
//! polls spawned tasks in spawn order, so `HttpClient::post` is entered in
//! the order hooks were named. A multi-threaded runtime gives no such
//! guarantee.

use std::collections::HashMap;
use std::sync::Arc;

use hookmock_domain::{Config, HookRequest, HookResponse};
use tokio::task::{Id, JoinSet};

use crate::error::{FireError, FireResult};
use crate::ports::{HttpClient, HttpClientError};
use crate::reporter::Reporter;
use crate::use_cases::BuildRequest;

/// Final result of one hook (or of a group that could not be expanded).
#[derive(Debug, Clone)]
pub struct FireOutcome {
    /// Hook name, or group name for [`FireError::GroupNotFound`].
    pub name: String,
    /// Response on success.
    pub result: FireResult<HookResponse>,
}

impl FireOutcome {
    /// Returns true if the hook got a 2xx response.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Requests issued by a [`FireHooks`] call.
#[derive(Debug, Default)]
pub struct Dispatches {
    issued: Vec<String>,
    settled: Vec<(usize, FireOutcome)>,
    in_flight: JoinSet<(usize, FireOutcome)>,
    tasks: HashMap<Id, (usize, String)>,
    next: usize,
}

impl Dispatches {
    /// Hook names whose request was sent, in issue order.
    #[must_use]
    pub fn issued(&self) -> &[String] {
        &self.issued
    }

    /// Waits for every in-flight request and returns all outcomes in the
    /// order the hooks were attempted.
    ///
    /// A task that panics or is cancelled still yields a failed outcome for
    /// its hook.
    pub async fn join_all(mut self) -> Vec<FireOutcome> {
        while let Some(task) = self.in_flight.join_next_with_id().await {
            match task {
                Ok((id, entry)) => {
                    self.tasks.remove(&id);
                    self.settled.push(entry);
                }
                Err(e) => {
                    tracing::error!("[ERROR]: dispatch task failed: {e}");
                    if let Some((index, name)) = self.tasks.remove(&e.id()) {
                        self.settle_at(index, name, FireError::Dispatch(e.to_string()));
                    }
                }
            }
        }
        self.settled.sort_by_key(|(index, _)| *index);
        self.settled.into_iter().map(|(_, outcome)| outcome).collect()
    }

    fn settle(&mut self, name: &str, error: FireError) {
        let index = self.reserve();
        self.settle_at(index, name.to_string(), error);
    }

    fn settle_at(&mut self, index: usize, name: String, error: FireError) {
        self.settled.push((
            index,
            FireOutcome {
                name,
                result: Err(error),
            },
        ));
    }

    const fn reserve(&mut self) -> usize {
        let index = self.next;
        self.next += 1;
        index
    }
}

/// Fires hooks and groups through an [`HttpClient`].
pub struct FireHooks<C> {
    client: Arc<C>,
    reporter: Reporter,
}

impl<C: HttpClient> FireHooks<C> {
    /// Creates a new `FireHooks` use case with the given HTTP client.
    pub const fn new(client: Arc<C>, reporter: Reporter) -> Self {
        Self { client, reporter }
    }

    /// Builds and sends each named hook, in order.
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime.
    pub async fn fire<S: AsRef<str> + Sync>(
        &self,
        config: &Config,
        hook_names: &[S],
    ) -> Dispatches {
        let mut dispatches = Dispatches::default();
        for name in hook_names {
            self.fire_one(config, name.as_ref(), &mut dispatches).await;
        }
        dispatches
    }

    /// Fires every member of each named group, in order.
    ///
    /// An unknown group is reported and skipped; the remaining groups
    /// still fire.
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime.
    pub async fn fire_groups<S: AsRef<str> + Sync>(
        &self,
        config: &Config,
        group_names: &[S],
    ) -> Dispatches {
        let mut dispatches = Dispatches::default();
        for group_name in group_names {
            let group_name = group_name.as_ref();
            self.reporter.hook(group_name, "Firing webhook group.");

            let Some(members) = config.group(group_name) else {
                let error = FireError::GroupNotFound(group_name.to_string());
                self.reporter.hook(group_name, &error);
                dispatches.settle(group_name, error);
                continue;
            };

            for hook_name in members {
                self.fire_one(config, hook_name, &mut dispatches).await;
            }
        }
        dispatches
    }

    async fn fire_one(&self, config: &Config, hook_name: &str, dispatches: &mut Dispatches) {
        match BuildRequest::new(self.reporter).execute(config, hook_name).await {
            Ok(request) => {
                let index = dispatches.reserve();
                dispatches.issued.push(hook_name.to_string());
                let client = Arc::clone(&self.client);
                let reporter = self.reporter;
                let task = dispatches.in_flight.spawn(async move {
                    let outcome = send(client.as_ref(), &request, &reporter).await;
                    (index, outcome)
                });
                dispatches
                    .tasks
                    .insert(task.id(), (index, hook_name.to_string()));
            }
            Err(error) => dispatches.settle(hook_name, error),
        }
    }
}

/// Sends one request and reports how it went.
///
/// Never fails: the outcome carries the error instead.
pub async fn send<C: HttpClient>(
    client: &C,
    request: &HookRequest,
    reporter: &Reporter,
) -> FireOutcome {
    let result = client.post(request).await;
    let hook = request.hook.as_str();

    match &result {
        Ok(response) => {
            reporter.hook(hook, "Webhook fired successfully.");
            reporter.verbose(&response.body);
        }
        Err(error) => {
            reporter.hook(hook, format!("Ran into an error after webhook fired: {error}"));
            report_error_data(error, reporter);
        }
    }

    FireOutcome {
        name: request.hook.clone(),
        result: result.map_err(FireError::Request),
    }
}

fn report_error_data(error: &HttpClientError, reporter: &Reporter) {
    reporter.verbose("Error data:");
    if let Some(response) = error.response() {
        reporter.verbose(&response.body);
        reporter.verbose(response.status);
        reporter.verbose(format!("{:?}", response.headers));
    }
}
