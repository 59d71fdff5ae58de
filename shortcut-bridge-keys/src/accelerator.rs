//! Accelerator data model.
//!
//! An [`Accelerator`] is a key code plus a set of modifiers. The key code
//! comes from a closed enumeration; [`KeyCode::Unknown`] marks an accelerator
//! that could not be parsed.

use serde::{Deserialize, Serialize};
use shortcut_bridge_config::Platform;
use std::fmt;

/// Key codes a shortcut can be bound to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// Sentinel for an unparsable shortcut
    #[default]
    Unknown,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    Comma,
    Period,
    Up,
    Down,
    Left,
    Right,
    Insert,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    Tab,
    MediaNextTrack,
    MediaPlayPause,
    MediaPrevTrack,
    MediaStop,
}

/// Letter key codes in alphabetical order, indexed by offset from 'a'.
pub(crate) const LETTERS: [KeyCode; 26] = [
    KeyCode::A,
    KeyCode::B,
    KeyCode::C,
    KeyCode::D,
    KeyCode::E,
    KeyCode::F,
    KeyCode::G,
    KeyCode::H,
    KeyCode::I,
    KeyCode::J,
    KeyCode::K,
    KeyCode::L,
    KeyCode::M,
    KeyCode::N,
    KeyCode::O,
    KeyCode::P,
    KeyCode::Q,
    KeyCode::R,
    KeyCode::S,
    KeyCode::T,
    KeyCode::U,
    KeyCode::V,
    KeyCode::W,
    KeyCode::X,
    KeyCode::Y,
    KeyCode::Z,
];

/// Digit key codes, indexed by offset from '0'.
pub(crate) const DIGITS: [KeyCode; 10] = [
    KeyCode::Digit0,
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

impl KeyCode {
    /// Key code for an ASCII letter (either case).
    pub fn from_letter(c: char) -> Option<Self> {
        let lower = c.to_ascii_lowercase();
        lower
            .is_ascii_lowercase()
            .then(|| LETTERS[(lower as u8 - b'a') as usize])
    }

    /// Key code for an ASCII digit.
    pub fn from_digit(c: char) -> Option<Self> {
        c.is_ascii_digit()
            .then(|| DIGITS[(c as u8 - b'0') as usize])
    }

    /// Canonical lowercase token for this key, as accepted by the parser.
    pub fn token(self) -> &'static str {
        const LETTER_TOKENS: [&str; 26] = [
            "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q",
            "r", "s", "t", "u", "v", "w", "x", "y", "z",
        ];
        const DIGIT_TOKENS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

        if let Some(i) = LETTERS.iter().position(|k| *k == self) {
            return LETTER_TOKENS[i];
        }
        if let Some(i) = DIGITS.iter().position(|k| *k == self) {
            return DIGIT_TOKENS[i];
        }
        match self {
            KeyCode::Comma => "comma",
            KeyCode::Period => "period",
            KeyCode::Up => "up",
            KeyCode::Down => "down",
            KeyCode::Left => "left",
            KeyCode::Right => "right",
            KeyCode::Insert => "insert",
            KeyCode::Delete => "delete",
            KeyCode::Home => "home",
            KeyCode::End => "end",
            KeyCode::PageUp => "pageup",
            KeyCode::PageDown => "pagedown",
            KeyCode::Tab => "tab",
            KeyCode::MediaNextTrack => "medianexttrack",
            KeyCode::MediaPlayPause => "mediaplaypause",
            KeyCode::MediaPrevTrack => "mediaprevtrack",
            KeyCode::MediaStop => "mediastop",
            _ => "unknown",
        }
    }
}

/// Set of modifiers held for an accelerator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    /// Command key (macOS)
    pub command: bool,
}

impl Modifiers {
    /// No modifiers.
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
        command: false,
    };

    /// Only Control.
    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        ..Self::NONE
    };

    /// Only Alt.
    pub const ALT: Modifiers = Modifiers {
        alt: true,
        ..Self::NONE
    };

    /// Only Shift.
    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ..Self::NONE
    };

    /// Only Command.
    pub const COMMAND: Modifiers = Modifiers {
        command: true,
        ..Self::NONE
    };

    /// The modifier the `ctrl` keyword stands for on `platform`.
    pub const fn ctrl_for(platform: Platform) -> Modifiers {
        if platform.ctrl_means_command() {
            Self::COMMAND
        } else {
            Self::CTRL
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    /// Union of both sets.
    pub fn union(self, other: Modifiers) -> Modifiers {
        Modifiers {
            ctrl: self.ctrl || other.ctrl,
            alt: self.alt || other.alt,
            shift: self.shift || other.shift,
            command: self.command || other.command,
        }
    }
}

/// A parsed keyboard shortcut.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Accelerator {
    pub key: KeyCode,
    pub modifiers: Modifiers,
}

impl Accelerator {
    pub const fn new(key: KeyCode, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// The accelerator returned for unparsable shortcuts.
    pub const fn invalid() -> Self {
        Self {
            key: KeyCode::Unknown,
            modifiers: Modifiers::NONE,
        }
    }

    /// An accelerator is usable only if it names a key.
    pub fn is_valid(&self) -> bool {
        self.key != KeyCode::Unknown
    }

    /// Shortcut string that parses back to this accelerator on `platform`.
    ///
    /// Returns `None` for invalid accelerators and for modifier sets the
    /// `ctrl` keyword cannot express on that platform (Command off macOS,
    /// Control on macOS).
    pub fn to_shortcut_string(&self, platform: Platform) -> Option<String> {
        if !self.is_valid() {
            return None;
        }
        let expressible = if platform.ctrl_means_command() {
            !self.modifiers.ctrl
        } else {
            !self.modifiers.command
        };
        if !expressible {
            return None;
        }

        let mut parts = Vec::new();
        if self.modifiers.ctrl || self.modifiers.command {
            parts.push("ctrl");
        }
        if self.modifiers.alt {
            parts.push("alt");
        }
        if self.modifiers.shift {
            parts.push("shift");
        }
        parts.push(self.key.token());
        Some(parts.join("+"))
    }
}

impl fmt::Display for Accelerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if self.modifiers.command {
            parts.push("Command".to_string());
        }
        if self.modifiers.ctrl {
            parts.push("Ctrl".to_string());
        }
        if self.modifiers.alt {
            parts.push("Alt".to_string());
        }
        if self.modifiers.shift {
            parts.push("Shift".to_string());
        }
        parts.push(format!("{:?}", self.key));

        write!(f, "{}", parts.join("+"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_invalid() {
        assert_eq!(Accelerator::default(), Accelerator::invalid());
        assert!(!Accelerator::invalid().is_valid());
        // Modifiers do not rescue an unknown key.
        assert!(!Accelerator::new(KeyCode::Unknown, Modifiers::CTRL).is_valid());
    }

    #[test]
    fn test_letter_and_digit_offsets() {
        assert_eq!(KeyCode::from_letter('a'), Some(KeyCode::A));
        assert_eq!(KeyCode::from_letter('Z'), Some(KeyCode::Z));
        assert_eq!(KeyCode::from_letter('1'), None);
        assert_eq!(KeyCode::from_digit('0'), Some(KeyCode::Digit0));
        assert_eq!(KeyCode::from_digit('9'), Some(KeyCode::Digit9));
        assert_eq!(KeyCode::from_digit('x'), None);
    }

    #[test]
    fn test_tokens() {
        assert_eq!(KeyCode::Q.token(), "q");
        assert_eq!(KeyCode::Digit7.token(), "7");
        assert_eq!(KeyCode::PageDown.token(), "pagedown");
        assert_eq!(KeyCode::Unknown.token(), "unknown");
    }

    #[test]
    fn test_ctrl_for_platform() {
        assert_eq!(Modifiers::ctrl_for(Platform::MacOs), Modifiers::COMMAND);
        assert_eq!(Modifiers::ctrl_for(Platform::Linux), Modifiers::CTRL);
        assert_eq!(Modifiers::ctrl_for(Platform::Windows), Modifiers::CTRL);
    }

    #[test]
    fn test_display() {
        let accel = Accelerator::new(KeyCode::B, Modifiers::CTRL.union(Modifiers::SHIFT));
        assert_eq!(accel.to_string(), "Ctrl+Shift+B");
        let accel = Accelerator::new(KeyCode::Comma, Modifiers::COMMAND);
        assert_eq!(accel.to_string(), "Command+Comma");
    }

    #[test]
    fn test_to_shortcut_string() {
        let accel = Accelerator::new(KeyCode::Tab, Modifiers::CTRL.union(Modifiers::ALT));
        assert_eq!(
            accel.to_shortcut_string(Platform::Linux).as_deref(),
            Some("ctrl+alt+tab")
        );
        assert_eq!(accel.to_shortcut_string(Platform::MacOs), None);
        assert_eq!(Accelerator::invalid().to_shortcut_string(Platform::Linux), None);
    }
}
