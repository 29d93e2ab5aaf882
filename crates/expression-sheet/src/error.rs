//! Error types for sprite-sheet configuration.

use thiserror::Error;

/// Errors raised while building a grid or an expression map.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SheetError {
    /// A sheet or cell dimension is zero, negative or not finite.
    #[error("invalid {name}: {value} (must be finite and greater than zero)")]
    InvalidDimension { name: &'static str, value: f32 },

    /// The expression map has no entries.
    #[error("expression map is empty")]
    EmptyExpressionMap,
}

/// Result type for sheet operations.
pub type SheetResult<T> = Result<T, SheetError>;
