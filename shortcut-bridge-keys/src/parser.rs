//! Shortcut string parser.
//!
//! Parses human-readable shortcut strings like "ctrl+shift+a" into
//! [`Accelerator`] values. Parsing never fails with an error: an unparsable
//! string yields an accelerator whose key is [`KeyCode::Unknown`].

use crate::accelerator::{Accelerator, KeyCode, Modifiers};
use crate::platform::{parse_key_token, parse_modifier_token};
use shortcut_bridge_config::Platform;

/// Result of parsing a shortcut string, with diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    /// The parsed accelerator (invalid if the key is unknown)
    pub accelerator: Accelerator,
    /// Non-empty tokens that were neither a modifier nor a key
    pub ignored_tokens: Vec<String>,
    /// True if more than one key token was present
    pub multiple_keys: bool,
}

/// Parse a shortcut string into an [`Accelerator`].
///
/// Supported format: "modifier+modifier+key", case-insensitive.
///
/// Modifiers:
/// - `ctrl` - Command on macOS, Control elsewhere
/// - `alt` - Alt/Option key
/// - `shift` - Shift key
///
/// Keys:
/// - Single letters and digits: `a`, `Z`, `7`
/// - `comma` (or `,`), `period` (or `.`), `up`, `down`, `left`, `right`,
///   `insert`, `delete`, `home`, `end`, `pageup`, `pagedown`, `tab`
/// - `medianexttrack`, `mediaplaypause`, `mediaprevtrack`, `mediastop`
///
/// Unrecognised tokens are skipped (and logged); a second key token makes
/// the whole shortcut invalid.
pub fn parse_shortcut(shortcut: &str, platform: Platform) -> Accelerator {
    let outcome = parse_shortcut_with_diagnostics(shortcut, platform);

    for token in &outcome.ignored_tokens {
        log::warn!("Ignoring unrecognized token '{}' in shortcut '{}'", token, shortcut);
    }
    if outcome.multiple_keys {
        log::debug!("Shortcut '{}' names more than one key", shortcut);
    }

    outcome.accelerator
}

/// Parse a shortcut string, reporting ignored tokens and key conflicts.
///
/// The accelerator is identical to what [`parse_shortcut`] returns.
pub fn parse_shortcut_with_diagnostics(shortcut: &str, platform: Platform) -> ParseOutcome {
    let lower = shortcut.to_ascii_lowercase();
    let mut outcome = ParseOutcome {
        accelerator: Accelerator::invalid(),
        ignored_tokens: Vec::new(),
        multiple_keys: false,
    };

    if lower.is_empty() {
        return outcome;
    }

    let mut modifiers = Modifiers::NONE;
    let mut key = KeyCode::Unknown;

    for token in lower.split('+') {
        if let Some(modifier) = parse_modifier_token(token, platform) {
            modifiers = modifiers.union(modifier);
            continue;
        }

        match parse_key_token(token) {
            Some(_) if key != KeyCode::Unknown => {
                outcome.multiple_keys = true;
                return outcome;
            }
            Some(parsed) => key = parsed,
            None if token.is_empty() => {}
            None => outcome.ignored_tokens.push(token.to_string()),
        }
    }

    outcome.accelerator = Accelerator::new(key, modifiers);
    outcome
}
