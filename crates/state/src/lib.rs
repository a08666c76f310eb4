//! Runtime settings for skillport.
//!
//! This crate provides utilities for:
//! - Resolving the user's home directory.
//! - Reading `SKILLPORT_*` environment variables.
//! - Loading `~/.skillport/config.toml` and folding it into the environment.

pub mod config;
pub mod env;

pub use config::{apply_config_to_env, load_config, load_config_from, Config, InstallConfig};
pub use env::{
    config_file, env_agents, env_force, env_source_dir, home_dir, resolve_source_dir,
    DEFAULT_SOURCE_DIR,
};
