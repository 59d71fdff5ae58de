//! Typed error variants for the shortcut-bridge-config crate.
//!
//! Provides structured error types for shortcut file I/O and validation so
//! callers can match on specific failure modes.

use thiserror::Error;

/// Errors that can occur when loading a shortcut file.
///
/// # Example
///
/// ```rust,no_run
/// use shortcut_bridge_config::{ConfigError, ShortcutConfig};
///
/// match ShortcutConfig::load_from("shortcuts.yaml") {
///     Ok(config) => println!("{} shortcuts", config.shortcuts.len()),
///     Err(ConfigError::Io(io)) => eprintln!("I/O error: {io}"),
///     Err(ConfigError::Parse(p)) => eprintln!("YAML parse error: {p}"),
///     Err(ConfigError::Validation(msg)) => eprintln!("Validation: {msg}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading the shortcut file.
    #[error("I/O error reading shortcut file: {0}")]
    Io(#[from] std::io::Error),

    /// The shortcut file contained invalid YAML that could not be parsed.
    #[error("YAML parse error in shortcut file: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string describes which entry is invalid and why.
    #[error("Shortcut file validation error: {0}")]
    Validation(String),
}
