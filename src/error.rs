//! Error taxonomy for the display binding and theming core.
//!
//! Every failure at this layer is local and synchronous; nothing is retried
//! or suppressed internally. Per-field data absence is not an error, it is
//! resolved by the placeholder policy in [`crate::registry`].

use thiserror::Error;

/// Errors raised by the display binding and theming core.
#[derive(Debug, Error)]
pub enum DisplayError {
    /// A color name not present in the fixed project palette.
    #[error("unknown color name: {0}")]
    UnknownColor(String),

    /// A string that is not a valid `#RRGGBB` hex color.
    #[error("invalid hex color format: {0}")]
    InvalidColorFormat(String),

    /// The rendering engine rejected a style rule.
    #[error("style engine rejected rule: {0}")]
    StyleApply(String),

    /// Refresh was requested for a device with no registered bindings.
    #[error("no display bindings registered for device: {0}")]
    UnknownDevice(String),
}

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, DisplayError>;
