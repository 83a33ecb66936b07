//! File-based persistence.

mod config_file;

pub use config_file::{ConfigError, DEFAULT_CONFIG_FILE, load_config};
