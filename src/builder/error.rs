//! Build errors for character and effect builders.

use thiserror::Error;

/// Errors that can occur when building characters and effects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Character name not specified. Call .name(name) before .build()")]
    MissingName,

    #[error("Character kind not specified. Call .hero() or .enemy()")]
    MissingKind,

    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Effect target not specified. Call .target(target)")]
    MissingTarget,

    #[error("Effect value must not be zero")]
    ZeroValue,
}
