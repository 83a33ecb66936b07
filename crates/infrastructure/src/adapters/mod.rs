//! Port adapters.

mod process_environment;
mod reqwest_client;

pub use process_environment::ProcessEnvironment;
pub use reqwest_client::ReqwestHttpClient;
