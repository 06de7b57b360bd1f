//! Dice similarity coefficient for batched 2D segmentation.
//!
//! For each `(batch, channel)` slice the score is the classic set-overlap
//! ratio, computed from spatial means rather than raw sums:
//!
//! ```text
//! dice = (2 * mean(targets * outputs) + eps)
//!      / (mean(targets) + mean(outputs) + eps)
//! ```
//!
//! and the per-slice ratios are averaged into one scalar. The epsilon term
//! makes the empty-mask case well-defined: when both masks are all-zero the
//! ratio collapses to `eps / eps = 1.0`, i.e. "nothing to predict, correctly
//! predicted nothing".

use burn::{
    prelude::*,
    tensor::{backend::Backend, cast::ToElement, Tensor},
};

use crate::{activation::Activation, error::DiceError};

/// Configuration for creating a [Dice scorer](DiceScore).
#[derive(Config, Debug)]
pub struct DiceScoreConfig {
    /// Small epsilon value to avoid division by zero. Default: 1e-7
    #[config(default = 1e-7)]
    pub eps: f64,

    /// Binarization threshold for the outputs. `None` keeps outputs
    /// continuous; `Some(t)` replaces each element with `1.0` when strictly
    /// greater than `t`, else `0.0`.
    pub threshold: Option<f64>,

    /// Activation applied to the outputs before comparison.
    #[config(default = "Activation::Sigmoid")]
    pub activation: Activation,
}

impl DiceScoreConfig {
    /// Initialize a [Dice scorer](DiceScore).
    pub fn init(&self) -> DiceScore {
        DiceScore {
            eps: self.eps,
            threshold: self.threshold,
            activation: self.activation.clone(),
        }
    }
}

/// Batched Dice similarity scorer.
///
/// A stateless single-pass transform: safe to share across threads and to
/// call concurrently, since it only reads its own settings and allocates
/// derived tensors.
#[derive(Debug, Clone)]
pub struct DiceScore {
    /// Small epsilon value to avoid division by zero.
    pub eps: f64,
    /// Optional binarization threshold in (0, 1).
    pub threshold: Option<f64>,
    /// Activation applied to the outputs.
    pub activation: Activation,
}

impl Default for DiceScore {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceScore {
    /// Create a new Dice scorer with default configuration.
    pub fn new() -> Self {
        DiceScoreConfig::new().init()
    }

    /// Compute the batch-mean Dice score.
    ///
    /// # Shapes
    ///
    /// - outputs: `[batch_size, channels, height, width]`
    /// - targets: `[batch_size, channels, height, width]`
    ///
    /// The last two axes are the spatial extent; overlap and union terms are
    /// reduced over them per `(batch, channel)` slice, then averaged.
    ///
    /// # Errors
    ///
    /// - [`DiceError::ShapeMismatch`] when the two tensors disagree in shape.
    /// - [`DiceError::InvalidThreshold`] when the threshold lies outside
    ///   the open interval (0, 1).
    ///
    /// Both are reported before any numeric work.
    pub fn forward<B: Backend>(
        &self,
        outputs: Tensor<B, 4>,
        targets: Tensor<B, 4>,
    ) -> Result<f64, DiceError> {
        let output_dims = outputs.dims();
        let target_dims = targets.dims();
        if output_dims != target_dims {
            return Err(DiceError::ShapeMismatch {
                outputs: output_dims.to_vec(),
                targets: target_dims.to_vec(),
            });
        }

        if let Some(threshold) = self.threshold {
            if threshold <= 0.0 || threshold >= 1.0 {
                return Err(DiceError::InvalidThreshold { threshold });
            }
        }

        let outputs = self.activation.apply(outputs);
        let outputs = match self.threshold {
            Some(threshold) => outputs.greater_elem(threshold).float(),
            None => outputs,
        };

        // Spatial means per (batch, channel) slice: [B, C, 1, 1].
        let intersection = (targets.clone() * outputs.clone()).mean_dim(3).mean_dim(2);
        let union_term = targets.mean_dim(3).mean_dim(2) + outputs.mean_dim(3).mean_dim(2);

        let dice = (intersection.mul_scalar(2.0).add_scalar(self.eps))
            .div(union_term.add_scalar(self.eps));

        Ok(dice.mean().into_scalar().to_f64())
    }
}

/// Compute the Dice score with default settings.
///
/// Equivalent to `DiceScore::new().forward(outputs, targets)`: sigmoid
/// activation, no thresholding, `eps = 1e-7`.
///
/// # Errors
///
/// Returns [`DiceError::ShapeMismatch`] when the two tensors disagree in
/// shape.
pub fn dice<B: Backend>(
    outputs: Tensor<B, 4>,
    targets: Tensor<B, 4>,
) -> Result<f64, DiceError> {
    DiceScore::new().forward(outputs, targets)
}
