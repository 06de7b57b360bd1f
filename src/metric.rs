//! Dice metric for Burn training loops.
//!
//! Wraps the [`DiceScore`] computation in Burn's `Metric`/`Numeric` traits so
//! the score can be tracked per batch and aggregated across an epoch.

use core::marker::PhantomData;
use std::sync::Arc;

use burn::{
    prelude::*,
    tensor::backend::Backend,
    train::metric::{
        Metric, MetricMetadata, Numeric, NumericEntry,
        state::{FormatOptions, NumericMetricState},
    },
};

use crate::{
    activation::Activation,
    dice::{DiceScore, DiceScoreConfig},
    input::DiceInput,
};

/// Configuration for creating a [Dice metric](DiceMetric).
#[derive(Config, Debug)]
pub struct DiceMetricConfig {
    /// Small epsilon value to avoid division by zero. Default: 1e-7
    #[config(default = 1e-7)]
    pub eps: f64,

    /// Optional binarization threshold in (0, 1).
    pub threshold: Option<f64>,

    /// Activation applied to the outputs before comparison.
    #[config(default = "Activation::Sigmoid")]
    pub activation: Activation,
}

impl DiceMetricConfig {
    /// Initialize a [Dice metric](DiceMetric).
    pub fn init<B: Backend>(&self) -> DiceMetric<B> {
        DiceMetric {
            state: NumericMetricState::default(),
            scorer: DiceScoreConfig::new()
                .with_eps(self.eps)
                .with_threshold(self.threshold)
                .with_activation(self.activation.clone())
                .init(),
            name: Arc::new("Dice".to_owned()),
            _b: PhantomData,
        }
    }
}

/// Batch-mean Dice score tracked as a training metric.
#[derive(Clone)]
pub struct DiceMetric<B: Backend> {
    state: NumericMetricState,
    scorer: DiceScore,
    name: Arc<String>,
    _b: PhantomData<B>,
}

impl<B: Backend> Default for DiceMetric<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Backend> DiceMetric<B> {
    /// Create a new Dice metric with default configuration.
    pub fn new() -> Self {
        DiceMetricConfig::new().init()
    }
}

impl<B: Backend> Metric for DiceMetric<B> {
    type Input = DiceInput<B>;

    fn name(&self) -> Arc<String> {
        self.name.clone()
    }

    fn update(
        &mut self,
        item: &Self::Input,
        _metadata: &MetricMetadata,
    ) -> burn::train::metric::SerializedEntry {
        let output_dims = item.outputs.dims();
        let target_dims = item.targets.dims();
        assert_eq!(
            output_dims, target_dims,
            "Shape of outputs ({output_dims:?}) must match targets ({target_dims:?})"
        );

        let [batch_size, ..] = output_dims;

        // Shapes were asserted above and the config is validated at init,
        // so the scorer cannot fail here.
        let score = self
            .scorer
            .forward(item.outputs.clone(), item.targets.clone())
            .expect("dice inputs share a shape");

        self.state.update(
            score,
            batch_size,
            FormatOptions::new(self.name()).precision(5),
        )
    }

    fn clear(&mut self) {
        self.state.reset();
    }
}

impl<B: Backend> Numeric for DiceMetric<B> {
    fn value(&self) -> NumericEntry {
        self.state.current_value()
    }

    fn running_value(&self) -> NumericEntry {
        self.state.running_value()
    }
}
