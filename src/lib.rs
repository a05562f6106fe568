//! axkeys - macOS Accessibility key accessors
//!
//! Exposes the Accessibility attribute and option keys that window managers need
//! (focused application, focused window, position, size and the trust prompt option)
//! as plain zero-argument functions, so callers never touch the framework's raw
//! symbols themselves.

pub mod cli;
pub mod keys;
pub mod logging;
#[cfg(target_os = "macos")]
pub mod macos;

pub use keys::{AxKey, KeySource};
#[cfg(target_os = "macos")]
pub use macos::accessibility::*;

/// Result type alias for axkeys operations
pub type Result<T> = anyhow::Result<T>;

/// Error types specific to axkeys
#[derive(thiserror::Error, Debug)]
pub enum AxKeysError {
    #[error("Unknown accessibility key: {0}")]
    UnknownKey(String),

    #[error("Platform unsupported: {0}")]
    PlatformUnsupported(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}
