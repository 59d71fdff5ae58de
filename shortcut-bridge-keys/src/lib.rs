//! Shortcut parsing for shortcut-bridge.
//!
//! This crate turns shortcut strings from host configuration into
//! [`Accelerator`] values and converts host key events into the same form.
//!
//! Features:
//! - Case-insensitive "modifier+modifier+key" strings (ctrl+shift+a)
//! - Explicit platform tag for the ctrl/command mapping
//! - Diagnostics for ignored tokens and conflicting keys
//! - Physical key matching for winit key events

pub mod accelerator;
mod matcher;
pub mod parser;
pub mod platform;

pub use accelerator::{Accelerator, KeyCode, Modifiers};
pub use matcher::AcceleratorMatcher;
pub use parser::{ParseOutcome, parse_shortcut, parse_shortcut_with_diagnostics};
pub use shortcut_bridge_config::Platform;
