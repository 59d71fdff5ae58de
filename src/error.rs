//! Typed error types for shortcut-bridge.

use crate::dispatcher::ShortcutId;
use shortcut_bridge_config::ConfigError;
use shortcut_bridge_keys::Accelerator;
use thiserror::Error;

/// Errors reported by shortcut handles and the registry.
#[derive(Debug, Error)]
pub enum ShortcutError {
    /// A key press was routed to a handle registered for a different
    /// accelerator. This is a routing bug in the caller, not user input.
    #[error("Shortcut {id} received {received} but is registered for {expected}")]
    AcceleratorMismatch {
        /// Handle that received the press.
        id: ShortcutId,
        /// Accelerator stored in the handle.
        expected: Accelerator,
        /// Accelerator that was delivered.
        received: Accelerator,
    },

    /// A shortcut with this id is already registered.
    #[error("Shortcut {0} is already registered")]
    DuplicateId(ShortcutId),

    /// Loading the shortcut file failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
