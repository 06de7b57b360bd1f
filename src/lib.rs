//! # Dice Metric
//!
//! Batched Dice similarity coefficient for 2D segmentation, implemented with
//! the Burn deep learning framework.
//!
//! The Dice score is the set-overlap measure `2|A∩B| / (|A| + |B|)`: `1.0`
//! for perfect overlap, `0.0` for disjoint masks. This crate computes it over
//! 4D tensors shaped `[batch, channels, height, width]`, averaging the
//! per-(batch, channel) ratios into a single scalar. It implements exactly
//! this one measure; it is not a general metrics library.
//!
//! ## Core API
//!
//! - [`DiceScore`]: the scorer, configured via [`DiceScoreConfig`] with an
//!   [`Activation`] policy (`none`, `sigmoid`, or channel softmax), an
//!   optional binarization threshold, and an epsilon for empty-mask
//!   stability.
//! - [`dice`]: convenience function using the defaults (sigmoid activation,
//!   no threshold, `eps = 1e-7`).
//! - [`DiceMetric`] (feature `train`): wraps the scorer in Burn's
//!   `Metric`/`Numeric` traits for use in training loops.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use burn::prelude::*;
//! use dice_metric::{Activation, DiceScoreConfig};
//!
//! fn score<B: Backend>(outputs: Tensor<B, 4>, targets: Tensor<B, 4>) -> f64 {
//!     let scorer = DiceScoreConfig::new()
//!         .with_activation(Activation::Sigmoid)
//!         .with_threshold(Some(0.5))
//!         .init();
//!
//!     scorer.forward(outputs, targets).unwrap()
//! }
//! ```
//!
//! The scorer is a pure, stateless transform: it never mutates its inputs,
//! holds no shared state, and is safe to call concurrently. Whether the
//! underlying tensor operations are vectorized or offloaded is up to the
//! chosen [`Backend`](burn::tensor::backend::Backend).

mod activation;
mod dice;
mod error;
#[cfg(feature = "train")]
mod input;
#[cfg(feature = "train")]
mod metric;

pub use activation::Activation;
pub use dice::{dice, DiceScore, DiceScoreConfig};
pub use error::DiceError;
#[cfg(feature = "train")]
pub use input::DiceInput;
#[cfg(feature = "train")]
pub use metric::{DiceMetric, DiceMetricConfig};
