//! Logging helper for the command-line front end.

use std::env;

use colored::Colorize;
use log::info;

/// Install the global logger.
///
/// Verbosity comes from the `LOG` environment variable, defaulting to
/// `info` when unset; `debug_mode` overrides it to `debug` so the proof
/// search narrates every expansion.
///
/// # Panics
///
/// Panics if a global logger is already installed.
pub fn setup(debug_mode: bool) {
    if debug_mode {
        env::set_var("LOG", "debug");
    } else if env::var("LOG").is_err() {
        env::set_var("LOG", "info");
    }

    pretty_env_logger::init_custom_env("LOG");

    info!(
        "logging level is {}",
        env::var("LOG").unwrap_or_default().to_uppercase().blue()
    );
}
