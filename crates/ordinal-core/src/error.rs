//! Error types for Ordinal

use crate::position::Side;
use thiserror::Error;

/// The main error type for Ordinal operations
#[derive(Debug, Error)]
pub enum OrdinalError {
    #[error("Invalid position for item '{item}': {shape} is not one of none, first, last, {{ before = \"..\" }} or {{ after = \"..\" }}")]
    InvalidPositionShape { item: String, shape: String },

    #[error("Item '{item}' is positioned {side} '{target}', but no item named '{target}' exists")]
    InvalidDifferedTarget {
        item: String,
        side: Side,
        target: String,
    },

    #[error("Circular '{side}' chain: {}", .chain.join(" -> "))]
    CircularChain { chain: Vec<String>, side: Side },

    #[error("Items '{item}' and '{target}' reference each other from opposite sides")]
    SymmetricConflict { item: String, target: String },

    #[error("Duplicate item name: {0}")]
    DuplicateName(String),

    #[error("Item load error: {0}")]
    ItemLoadError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),
}

impl OrdinalError {
    /// Whether this error describes a problem in the declared constraints
    /// themselves, as opposed to a failure reading or parsing them.
    pub fn is_constraint_error(&self) -> bool {
        matches!(
            self,
            OrdinalError::InvalidPositionShape { .. }
                | OrdinalError::InvalidDifferedTarget { .. }
                | OrdinalError::CircularChain { .. }
                | OrdinalError::SymmetricConflict { .. }
                | OrdinalError::DuplicateName(_)
        )
    }
}

/// Result type alias for Ordinal operations
pub type Result<T> = std::result::Result<T, OrdinalError>;

impl From<toml::de::Error> for OrdinalError {
    fn from(err: toml::de::Error) -> Self {
        OrdinalError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for OrdinalError {
    fn from(err: toml::ser::Error) -> Self {
        OrdinalError::TomlSerError(err.to_string())
    }
}
