//! Table of the Accessibility keys axkeys exposes
//!
//! Pure data, available on every platform. Resolving an entry to the live framework
//! key is only possible on macOS (see `AxKey::resolve`).

use crate::AxKeysError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

pub const FOCUSED_APPLICATION_ATTRIBUTE: &str = "AXFocusedApplication";
pub const FOCUSED_WINDOW_ATTRIBUTE: &str = "AXFocusedWindow";
pub const POSITION_ATTRIBUTE: &str = "AXPosition";
pub const SIZE_ATTRIBUTE: &str = "AXSize";

/// Where the framework defines a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "kind", content = "value")]
pub enum KeySource {
    /// Compile-time `CFSTR` literal in the framework headers
    Literal(&'static str),
    /// Data symbol exported by the framework binary
    Exported,
}

impl KeySource {
    pub fn literal(self) -> Option<&'static str> {
        match self {
            KeySource::Literal(value) => Some(value),
            KeySource::Exported => None,
        }
    }
}

/// The Accessibility keys a window manager needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AxKey {
    FocusedApplication,
    FocusedWindow,
    Position,
    Size,
    TrustedCheckOptionPrompt,
}

impl AxKey {
    pub const ALL: [AxKey; 5] = [
        AxKey::FocusedApplication,
        AxKey::FocusedWindow,
        AxKey::Position,
        AxKey::Size,
        AxKey::TrustedCheckOptionPrompt,
    ];

    /// Kebab-case name used on the command line and in serialized output
    pub fn name(self) -> &'static str {
        match self {
            AxKey::FocusedApplication => "focused-application",
            AxKey::FocusedWindow => "focused-window",
            AxKey::Position => "position",
            AxKey::Size => "size",
            AxKey::TrustedCheckOptionPrompt => "trusted-check-option-prompt",
        }
    }

    /// Name of the framework constant
    pub fn symbol(self) -> &'static str {
        match self {
            AxKey::FocusedApplication => "kAXFocusedApplicationAttribute",
            AxKey::FocusedWindow => "kAXFocusedWindowAttribute",
            AxKey::Position => "kAXPositionAttribute",
            AxKey::Size => "kAXSizeAttribute",
            AxKey::TrustedCheckOptionPrompt => "kAXTrustedCheckOptionPrompt",
        }
    }

    /// Name of the accessor function returning this key
    pub fn accessor_name(self) -> &'static str {
        match self {
            AxKey::FocusedApplication => "focused_application_attribute",
            AxKey::FocusedWindow => "focused_window_attribute",
            AxKey::Position => "position_attribute",
            AxKey::Size => "size_attribute",
            AxKey::TrustedCheckOptionPrompt => "trusted_check_option_prompt",
        }
    }

    pub fn source(self) -> KeySource {
        match self {
            AxKey::FocusedApplication => KeySource::Literal(FOCUSED_APPLICATION_ATTRIBUTE),
            AxKey::FocusedWindow => KeySource::Literal(FOCUSED_WINDOW_ATTRIBUTE),
            AxKey::Position => KeySource::Literal(POSITION_ATTRIBUTE),
            AxKey::Size => KeySource::Literal(SIZE_ATTRIBUTE),
            AxKey::TrustedCheckOptionPrompt => KeySource::Exported,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AxKey::FocusedApplication => "The currently focused application",
            AxKey::FocusedWindow => "The currently focused window",
            AxKey::Position => "A window's on-screen position",
            AxKey::Size => "A window's on-screen size",
            AxKey::TrustedCheckOptionPrompt => {
                "Option flag that triggers the accessibility trust prompt"
            }
        }
    }
}

impl fmt::Display for AxKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for AxKey {
    type Err = AxKeysError;

    /// Accepts the kebab-case name, the accessor name or the framework symbol
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        AxKey::ALL
            .into_iter()
            .find(|key| {
                wanted.eq_ignore_ascii_case(key.name())
                    || wanted.eq_ignore_ascii_case(key.accessor_name())
                    || wanted.eq_ignore_ascii_case(key.symbol())
            })
            .ok_or_else(|| {
                debug!(input = s, "unrecognised accessibility key");
                AxKeysError::UnknownKey(s.to_string())
            })
    }
}
