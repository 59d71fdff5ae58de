//! Configuration system for shortcut-bridge.
//!
//! This crate provides the configuration inputs of the shortcut adapter:
//!
//! - The per-shortcut option map handed in by the host (`ShortcutOptions`)
//! - The platform tag that decides how `ctrl` is interpreted (`Platform`)
//! - The YAML shortcut file and its loader (`ShortcutConfig`)

pub mod config;
pub mod error;
mod types;

pub use config::{ShortcutConfig, ShortcutEntry};
pub use error::ConfigError;
pub use types::{Platform, ShortcutOptions};
