//! Configuration types and enums.
//!
//! - `platform` - Platform tag driving the ctrl/command mapping
//! - `shortcut` - Option map handed to a single shortcut

mod platform;
mod shortcut;

pub use platform::Platform;
pub use shortcut::ShortcutOptions;
