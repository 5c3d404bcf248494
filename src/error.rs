//! Engine error types.
//!
//! The propagation policy is deliberately lopsided: sparse or malformed
//! *data* never errors (it is absorbed into documented defaults), while a
//! palette label outside the fixed vocabulary always does (it indicates a
//! caller or schema bug, not missing data).

use std::num::ParseIntError;

use thiserror::Error;

/// Error type for parsing hex color strings.
///
/// Only surfaced from explicit parse entry points ([`Rgb::from_str`]).
/// The bulk scoring path never raises it: malformed colors are folded
/// into an infinite distance instead (see [`hex_distance`]).
///
/// [`Rgb::from_str`]: crate::Rgb
/// [`hex_distance`]: crate::hex_distance
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has the wrong length (exactly 6 digits required after
    /// stripping '#')
    #[error("invalid hex color length: expected 6 digits, found {found}")]
    InvalidLength {
        /// Number of characters found after stripping the '#'
        found: usize,
    },

    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Engine-level errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A palette label did not come from the fixed twelve-name catalog
    /// vocabulary.
    #[error("unknown seasonal palette: {0:?}")]
    UnknownPalette(String),

    /// Invalid hex color string at an explicit parse boundary.
    #[error("invalid color: {0}")]
    ParseColor(#[from] ParseColorError),
}
