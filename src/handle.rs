//! A registered global shortcut.
//!
//! The handle parses its shortcut string once, at construction, and reports
//! the outcome and later key presses as events through its dispatcher.

use crate::dispatcher::{Dispatcher, ShortcutEvent, ShortcutId};
use crate::error::ShortcutError;
use shortcut_bridge_config::{Platform, ShortcutOptions};
use shortcut_bridge_keys::{Accelerator, parse_shortcut};
use std::sync::Weak;

/// A shortcut bound to one accelerator.
///
/// An unparsable shortcut string does not prevent construction: the handle
/// emits a single `"failed"` event and keeps the invalid accelerator, which
/// never matches a key press.
pub struct ShortcutHandle {
    id: ShortcutId,
    dispatcher: Weak<dyn Dispatcher>,
    /// Shortcut string as given by the host
    shortcut: String,
    accelerator: Accelerator,
}

impl ShortcutHandle {
    /// Create a handle for the build target's platform.
    pub fn new(id: ShortcutId, dispatcher: Weak<dyn Dispatcher>, options: &ShortcutOptions) -> Self {
        Self::with_platform(id, dispatcher, options, Platform::current())
    }

    /// Create a handle interpreting its shortcut for `platform`.
    pub fn with_platform(
        id: ShortcutId,
        dispatcher: Weak<dyn Dispatcher>,
        options: &ShortcutOptions,
        platform: Platform,
    ) -> Self {
        let accelerator = parse_shortcut(&options.key, platform);
        let handle = Self {
            id,
            dispatcher,
            shortcut: options.key.clone(),
            accelerator,
        };

        if handle.is_valid() {
            log::info!(
                "Shortcut {} bound: {} -> {}",
                handle.id,
                handle.shortcut,
                handle.accelerator
            );
        } else {
            log::warn!("Shortcut {} could not parse '{}'", handle.id, handle.shortcut);
            handle.on_failed(&format!("Can not parse shortcut: {}.", handle.shortcut));
        }

        handle
    }

    pub fn id(&self) -> ShortcutId {
        self.id
    }

    /// The accelerator parsed at construction.
    pub fn accelerator(&self) -> &Accelerator {
        &self.accelerator
    }

    /// The original, unparsed shortcut string.
    pub fn shortcut(&self) -> &str {
        &self.shortcut
    }

    pub fn is_valid(&self) -> bool {
        self.accelerator.is_valid()
    }

    /// Emit an `"active"` event.
    ///
    /// Returns whether the dispatcher accepted it.
    pub fn on_active(&self) -> bool {
        self.emit(&ShortcutEvent::Active)
    }

    /// Emit a `"failed"` event carrying `message`.
    pub fn on_failed(&self, message: &str) -> bool {
        self.emit(&ShortcutEvent::Failed {
            message: message.to_string(),
        })
    }

    /// Handle a key press reported by the global shortcut listener.
    ///
    /// A press for a different accelerator is a listener bug: it is logged,
    /// no event is emitted and [`ShortcutError::AcceleratorMismatch`] is
    /// returned. On a match, returns whether `"active"` was delivered.
    ///
    /// A handle whose shortcut failed to parse never emits `"active"`, even
    /// when the press converts to the same invalid accelerator.
    pub fn on_key_pressed(&self, accelerator: &Accelerator) -> Result<bool, ShortcutError> {
        if !self.is_valid() {
            log::warn!(
                "Shortcut {} ('{}') is not bound to a valid accelerator, ignoring {}",
                self.id,
                self.shortcut,
                accelerator
            );
            return Ok(false);
        }

        if *accelerator != self.accelerator {
            log::warn!(
                "Shortcut {} notified with {} but bound to {}",
                self.id,
                accelerator,
                self.accelerator
            );
            return Err(ShortcutError::AcceleratorMismatch {
                id: self.id,
                expected: self.accelerator,
                received: *accelerator,
            });
        }

        Ok(self.on_active())
    }

    fn emit(&self, event: &ShortcutEvent) -> bool {
        match self.dispatcher.upgrade() {
            Some(dispatcher) => dispatcher.try_send(self.id, event),
            None => {
                log::debug!(
                    "Dispatcher gone, skipping '{}' event for shortcut {}",
                    event.name(),
                    self.id
                );
                false
            }
        }
    }
}

impl std::fmt::Debug for ShortcutHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShortcutHandle")
            .field("id", &self.id)
            .field("shortcut", &self.shortcut)
            .field("accelerator", &self.accelerator)
            .field("dispatcher_alive", &(self.dispatcher.strong_count() > 0))
            .finish()
    }
}
