//! CLI infrastructure for the guessing game
//!
//! This module provides the command-line interface: the interactive menu
//! loop, the `show` and `export` commands, and configuration resolution.

pub mod commands;
pub mod config;
pub mod menu;
pub mod output;

/// Initialise `env_logger` once. `RUST_LOG` wins over `verbose`.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init();
}
