//! Input structure for the Dice training metric.

use burn::{prelude::*, tensor::backend::Backend};
use derive_new::new;

/// Dice metric input.
#[derive(new, Debug, Clone)]
pub struct DiceInput<B: Backend> {
    /// Raw model outputs with shape `[batch_size, channels, height, width]`.
    pub outputs: Tensor<B, 4>,
    /// Ground truth with shape `[batch_size, channels, height, width]`.
    pub targets: Tensor<B, 4>,
}
