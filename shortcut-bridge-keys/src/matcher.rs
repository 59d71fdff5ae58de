//! Key event matching.
//!
//! Converts winit key events into [`Accelerator`] values so that presses
//! reported by the host can be compared with parsed shortcuts. Matching is
//! by physical key position.

use crate::accelerator::{Accelerator, KeyCode, Modifiers};
use crate::platform::key_code_from_physical;
use winit::event::{KeyEvent, Modifiers as WinitModifiers};
use winit::keyboard::{ModifiersState, PhysicalKey};

/// Matcher for comparing winit key events against accelerators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceleratorMatcher {
    /// Accelerator the event corresponds to
    accelerator: Accelerator,
}

impl AcceleratorMatcher {
    /// Create a matcher from a winit key event.
    pub fn from_event(event: &KeyEvent, modifiers: &WinitModifiers) -> Self {
        Self::from_parts(event.physical_key, modifiers.state())
    }

    /// Create a matcher from a physical key and a modifier state.
    ///
    /// Control maps to the control modifier and Super to command, so on
    /// macOS a shortcut parsed from "ctrl+..." matches Cmd, not Control.
    pub fn from_parts(physical_key: PhysicalKey, state: ModifiersState) -> Self {
        let key = match physical_key {
            PhysicalKey::Code(code) => key_code_from_physical(code),
            PhysicalKey::Unidentified(_) => KeyCode::Unknown,
        };

        let modifiers = Modifiers {
            ctrl: state.control_key(),
            alt: state.alt_key(),
            shift: state.shift_key(),
            command: state.super_key(),
        };

        Self {
            accelerator: Accelerator::new(key, modifiers),
        }
    }

    /// The accelerator this event corresponds to.
    pub fn accelerator(&self) -> Accelerator {
        self.accelerator
    }

    /// Check whether the event matches `accelerator`.
    ///
    /// Invalid accelerators never match.
    pub fn matches(&self, accelerator: &Accelerator) -> bool {
        accelerator.is_valid() && self.accelerator == *accelerator
    }
}
