//! Error types for Dice score computation.

use thiserror::Error;

/// Errors that can occur while computing the Dice score.
///
/// Every error is surfaced to the caller before any numeric work is done.
/// There is no recovery path: the computation either produces a valid scalar
/// or fails outright.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DiceError {
    /// Outputs and targets disagree in shape.
    #[error("incompatible tensor shapes: outputs shape {outputs:?} does not match targets shape {targets:?}")]
    ShapeMismatch {
        outputs: Vec<usize>,
        targets: Vec<usize>,
    },

    /// Unknown activation tag at the string boundary.
    #[error("unsupported activation '{tag}': must be one of \"none\", \"sigmoid\", \"softmax2d\"")]
    UnsupportedActivation { tag: String },

    /// Binarization threshold outside the open interval (0, 1).
    #[error("invalid threshold {threshold}: must lie strictly between 0 and 1")]
    InvalidThreshold { threshold: f64 },
}
