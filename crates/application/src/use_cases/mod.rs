//! Application use cases (business logic orchestration).

mod build_request;
mod fire_hooks;
mod inject_secrets;
mod list_hooks;
mod resolve_environment;

pub use build_request::BuildRequest;
pub use fire_hooks::{Dispatches, FireHooks, FireOutcome, send};
pub use inject_secrets::inject_secrets;
pub use list_hooks::list_hooks;
pub use resolve_environment::{ResolveEnvironment, ResolveEnvironmentOutput};
