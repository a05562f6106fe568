//! macOS integration layer for axkeys
//!
//! Everything in here links against ApplicationServices and only builds on
//! Apple targets.

pub mod accessibility;

pub use accessibility::*;
