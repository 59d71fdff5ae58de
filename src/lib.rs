//! Global keyboard shortcut adapter.
//!
//! A [`ShortcutHandle`] parses the `"key"` option a host hands it into an
//! [`Accelerator`] and reports its lifecycle as events through a
//! [`Dispatcher`]:
//!
//! - `"failed"` once, at construction, if the shortcut string cannot be parsed
//! - `"active"` every time the bound key combination is pressed
//!
//! [`ShortcutRegistry`] routes key presses to the handles bound to them.

pub mod cli;
pub mod debug;
pub mod dispatcher;
pub mod error;
pub mod handle;
pub mod registry;

pub use dispatcher::{DispatchedEvent, Dispatcher, EventQueue, ShortcutEvent, ShortcutId};
pub use error::ShortcutError;
pub use handle::ShortcutHandle;
pub use registry::ShortcutRegistry;

// Re-export the parsing and configuration crates for convenience
pub use shortcut_bridge_config::{ConfigError, Platform, ShortcutConfig, ShortcutOptions};
pub use shortcut_bridge_keys::{
    Accelerator, AcceleratorMatcher, KeyCode, Modifiers, parse_shortcut,
    parse_shortcut_with_diagnostics,
};
