//! Configuration loading
//!
//! Builds a [`reportlink_domain::HubConfig`] from environment variables or
//! a config file.

pub mod loader;

// Re-export commonly used items
pub use loader::{load, load_from_env, load_from_file, load_from_vars, probe_config_paths};
