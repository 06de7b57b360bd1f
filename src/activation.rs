//! Output activation policies.
//!
//! Raw model outputs are mapped to probability-like values before the overlap
//! computation. The set of policies is closed: an enum variant per transform,
//! with string tags resolved eagerly at the API boundary.

use core::str::FromStr;

use burn::{
    prelude::*,
    tensor::activation::{sigmoid, softmax},
};

use crate::error::DiceError;

/// Activation applied to the outputs tensor before comparison.
#[derive(Config, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Identity, outputs are used as-is.
    None,
    /// Elementwise logistic sigmoid.
    Sigmoid,
    /// Softmax over the channel axis.
    Softmax,
}

impl Activation {
    /// Apply the transform to a 4D `[batch, channels, height, width]` tensor.
    pub fn apply<B: Backend>(&self, outputs: Tensor<B, 4>) -> Tensor<B, 4> {
        match self {
            Self::None => outputs,
            Self::Sigmoid => sigmoid(outputs),
            Self::Softmax => softmax(outputs, 1),
        }
    }
}

impl FromStr for Activation {
    type Err = DiceError;

    /// Resolve a string tag, case-insensitively.
    ///
    /// Recognized tags are `"none"`, `"sigmoid"`, and `"softmax2d"` (with
    /// `"softmax"` accepted as an alias).
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "sigmoid" => Ok(Self::Sigmoid),
            "softmax" | "softmax2d" => Ok(Self::Softmax),
            _ => Err(DiceError::UnsupportedActivation {
                tag: tag.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use burn::tensor::{TensorData, Tolerance};

    use super::*;
    use crate::tests::TestBackend;

    #[test]
    fn activation_resolves_known_tags() {
        assert_eq!("none".parse::<Activation>(), Ok(Activation::None));
        assert_eq!("Sigmoid".parse::<Activation>(), Ok(Activation::Sigmoid));
        assert_eq!("Softmax2d".parse::<Activation>(), Ok(Activation::Softmax));
        assert_eq!("softmax".parse::<Activation>(), Ok(Activation::Softmax));
    }

    #[test]
    fn activation_rejects_unknown_tag() {
        let err = "relu".parse::<Activation>().unwrap_err();
        assert_eq!(
            err,
            DiceError::UnsupportedActivation {
                tag: "relu".to_owned()
            }
        );
    }

    #[test]
    fn activation_none_is_identity() {
        let device = Default::default();
        let outputs = Tensor::<TestBackend, 4>::from_data(
            TensorData::from([[[[-2.0, 0.5], [3.0, 0.0]]]]),
            &device,
        );

        let result = Activation::None.apply(outputs.clone());

        result
            .into_data()
            .assert_approx_eq::<f32>(&outputs.into_data(), Tolerance::default());
    }

    #[test]
    fn activation_softmax_normalizes_channels() {
        let device = Default::default();
        // Two channels, uniform logits: softmax yields 0.5 everywhere.
        let outputs = Tensor::<TestBackend, 4>::from_data(
            TensorData::from([[[[1.0, 1.0], [1.0, 1.0]], [[1.0, 1.0], [1.0, 1.0]]]]),
            &device,
        );

        let result = Activation::Softmax.apply(outputs);

        let expected =
            TensorData::from([[[[0.5, 0.5], [0.5, 0.5]], [[0.5, 0.5], [0.5, 0.5]]]]);
        result
            .into_data()
            .assert_approx_eq::<f32>(&expected, Tolerance::relative(1e-6));
    }
}
