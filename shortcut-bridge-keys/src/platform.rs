//! Token tables and platform-specific key resolution.
//!
//! Contains:
//! - Modifier keyword table (`ctrl` resolves per [`Platform`])
//! - Key token table (string → [`KeyCode`])
//! - Physical key code table (winit `KeyCode` → [`KeyCode`])

use crate::accelerator::{KeyCode, Modifiers};
use shortcut_bridge_config::Platform;
use winit::keyboard::KeyCode as WinitKeyCode;

/// Parse a lowercase modifier keyword.
///
/// `ctrl` resolves to Command on macOS and to Control elsewhere.
/// Returns `None` for anything that is not a modifier keyword.
pub fn parse_modifier_token(token: &str, platform: Platform) -> Option<Modifiers> {
    match token {
        "ctrl" => Some(Modifiers::ctrl_for(platform)),
        "alt" => Some(Modifiers::ALT),
        "shift" => Some(Modifiers::SHIFT),
        _ => None,
    }
}

/// Parse a lowercase key token into a [`KeyCode`].
///
/// Accepts a single ASCII letter or digit, or one of the named keys.
/// `,` and `.` are accepted as spellings of `comma` and `period`.
/// Returns `None` for unrecognised tokens.
pub fn parse_key_token(token: &str) -> Option<KeyCode> {
    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return match c {
            ',' => Some(KeyCode::Comma),
            '.' => Some(KeyCode::Period),
            _ => KeyCode::from_letter(c).or_else(|| KeyCode::from_digit(c)),
        };
    }

    match token {
        "comma" => Some(KeyCode::Comma),
        "period" => Some(KeyCode::Period),

        // Arrow keys
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),

        // Navigation keys
        "insert" => Some(KeyCode::Insert),
        "delete" => Some(KeyCode::Delete),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" => Some(KeyCode::PageUp),
        "pagedown" => Some(KeyCode::PageDown),
        "tab" => Some(KeyCode::Tab),

        // Media transport keys
        "medianexttrack" => Some(KeyCode::MediaNextTrack),
        "mediaplaypause" => Some(KeyCode::MediaPlayPause),
        "mediaprevtrack" => Some(KeyCode::MediaPrevTrack),
        "mediastop" => Some(KeyCode::MediaStop),

        _ => None,
    }
}

/// Map a winit physical key code to a [`KeyCode`].
///
/// Keys outside the shortcut key set map to [`KeyCode::Unknown`].
pub fn key_code_from_physical(code: WinitKeyCode) -> KeyCode {
    match code {
        WinitKeyCode::KeyA => KeyCode::A,
        WinitKeyCode::KeyB => KeyCode::B,
        WinitKeyCode::KeyC => KeyCode::C,
        WinitKeyCode::KeyD => KeyCode::D,
        WinitKeyCode::KeyE => KeyCode::E,
        WinitKeyCode::KeyF => KeyCode::F,
        WinitKeyCode::KeyG => KeyCode::G,
        WinitKeyCode::KeyH => KeyCode::H,
        WinitKeyCode::KeyI => KeyCode::I,
        WinitKeyCode::KeyJ => KeyCode::J,
        WinitKeyCode::KeyK => KeyCode::K,
        WinitKeyCode::KeyL => KeyCode::L,
        WinitKeyCode::KeyM => KeyCode::M,
        WinitKeyCode::KeyN => KeyCode::N,
        WinitKeyCode::KeyO => KeyCode::O,
        WinitKeyCode::KeyP => KeyCode::P,
        WinitKeyCode::KeyQ => KeyCode::Q,
        WinitKeyCode::KeyR => KeyCode::R,
        WinitKeyCode::KeyS => KeyCode::S,
        WinitKeyCode::KeyT => KeyCode::T,
        WinitKeyCode::KeyU => KeyCode::U,
        WinitKeyCode::KeyV => KeyCode::V,
        WinitKeyCode::KeyW => KeyCode::W,
        WinitKeyCode::KeyX => KeyCode::X,
        WinitKeyCode::KeyY => KeyCode::Y,
        WinitKeyCode::KeyZ => KeyCode::Z,
        WinitKeyCode::Digit0 => KeyCode::Digit0,
        WinitKeyCode::Digit1 => KeyCode::Digit1,
        WinitKeyCode::Digit2 => KeyCode::Digit2,
        WinitKeyCode::Digit3 => KeyCode::Digit3,
        WinitKeyCode::Digit4 => KeyCode::Digit4,
        WinitKeyCode::Digit5 => KeyCode::Digit5,
        WinitKeyCode::Digit6 => KeyCode::Digit6,
        WinitKeyCode::Digit7 => KeyCode::Digit7,
        WinitKeyCode::Digit8 => KeyCode::Digit8,
        WinitKeyCode::Digit9 => KeyCode::Digit9,
        WinitKeyCode::Comma => KeyCode::Comma,
        WinitKeyCode::Period => KeyCode::Period,
        WinitKeyCode::ArrowUp => KeyCode::Up,
        WinitKeyCode::ArrowDown => KeyCode::Down,
        WinitKeyCode::ArrowLeft => KeyCode::Left,
        WinitKeyCode::ArrowRight => KeyCode::Right,
        WinitKeyCode::Insert => KeyCode::Insert,
        WinitKeyCode::Delete => KeyCode::Delete,
        WinitKeyCode::Home => KeyCode::Home,
        WinitKeyCode::End => KeyCode::End,
        WinitKeyCode::PageUp => KeyCode::PageUp,
        WinitKeyCode::PageDown => KeyCode::PageDown,
        WinitKeyCode::Tab => KeyCode::Tab,
        WinitKeyCode::MediaTrackNext => KeyCode::MediaNextTrack,
        WinitKeyCode::MediaPlayPause => KeyCode::MediaPlayPause,
        WinitKeyCode::MediaTrackPrevious => KeyCode::MediaPrevTrack,
        WinitKeyCode::MediaStop => KeyCode::MediaStop,
        _ => KeyCode::Unknown,
    }
}
