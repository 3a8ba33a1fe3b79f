//! Error types for percent expression parsing and resolution.

use percent_core::Axis;
use thiserror::Error;

/// Errors raised while building or resolving percent layout information.
#[derive(Debug, Error)]
pub enum PercentError {
    /// The expression does not match `<number><suffix>`.
    #[error("invalid percent expression '{input}': expected <number>[%|a|w|h|sw|sh|aw|ah]")]
    Malformed {
        /// Offending input
        input: String,
    },

    /// The suffix has the right shape but names no base reference.
    #[error("percent expression '{input}' must end with one of [%|a|w|h|sw|sh|aw|ah], found '{suffix}'")]
    InvalidSuffix {
        /// Offending input
        input: String,
        /// Suffix that failed to classify
        suffix: String,
    },

    /// An auto base was used without a design reference for its axis.
    #[error("auto base on the {axis:?} axis requires a design reference")]
    MissingDesignReference {
        /// Axis whose design reference is missing
        axis: Axis,
    },

    /// A design reference is zero or negative.
    #[error("design reference on the {axis:?} axis must be positive, got {value}")]
    InvalidDesignReference {
        /// Axis of the design reference
        axis: Axis,
        /// Declared value
        value: f32,
    },

    /// A design dimension attribute could not be read as pixels.
    #[error("invalid dimension '{input}' for attribute '{attribute}'")]
    InvalidDimension {
        /// Attribute name
        attribute: String,
        /// Offending input
        input: String,
    },

    /// An attribute sheet could not be deserialized.
    #[error("attribute sheet error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}
