//! Platform tag for shortcut interpretation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Platform family a shortcut string is interpreted for.
///
/// The only behavioral difference is the `ctrl` keyword: on macOS it means
/// the Command key, everywhere else it means Control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// macOS (`ctrl` maps to Command)
    #[serde(alias = "mac")]
    MacOs,
    /// Windows
    Windows,
    /// Linux and other Unix-likes
    Linux,
}

impl Platform {
    /// Platform of the build target.
    pub const fn current() -> Self {
        #[cfg(target_os = "macos")]
        {
            Platform::MacOs
        }
        #[cfg(target_os = "windows")]
        {
            Platform::Windows
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            Platform::Linux
        }
    }

    /// Whether the `ctrl` keyword maps to the Command modifier.
    pub const fn ctrl_means_command(self) -> bool {
        matches!(self, Platform::MacOs)
    }

    /// Lowercase name as used in shortcut files and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Platform::MacOs => "macos",
            Platform::Windows => "windows",
            Platform::Linux => "linux",
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "macos" | "mac" => Ok(Platform::MacOs),
            "windows" => Ok(Platform::Windows),
            "linux" => Ok(Platform::Linux),
            other => Err(format!("Unknown platform: '{other}'")),
        }
    }
}
