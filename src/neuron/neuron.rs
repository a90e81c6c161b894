use log::{debug, warn};
use rand::Rng;

use crate::activation::activation::ActivationFunction;
use crate::error::{NeuronError, Result, ShapeFault};
use crate::math::array::DynamicArray;
use crate::math::matrix::DenseMatrix;
use crate::train::learning_rule::LearningRule;

/// Value returned by [`Neuron::predict`] when the data point does not fit the
/// weight vector. It is also a legitimate output of `Tanh`,
/// `SymmetricHardLimit` and friends; use [`Neuron::try_predict`] to tell them apart.
pub const PREDICT_SENTINEL: f32 = -1.0;

/// Range used when the weights are initialized lazily.
pub const DEFAULT_INIT_RANGE: (f32, f32) = (-100.0, 100.0);

/// Weights are drawn at this resolution.
const WEIGHT_RESOLUTION: f32 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeuronState {
    /// No weight vector yet; the first training or prediction call sizes it.
    Uninitialized,
    Initialized,
}

/// A single trainable unit: one augmented weight vector plus an activation.
///
/// The weight vector has shape `(feature_size + 1, 1)`. Row 0 is the bias
/// weight, paired with a constant 1 prepended to every sample.
#[derive(Debug, Clone)]
pub struct Neuron {
    pub activation: ActivationFunction,
    /// Pre-activation value of the most recent prediction.
    pub last_net_input: f32,
    pub init_range: (f32, f32),
    weights: DenseMatrix<f32>,
    state: NeuronState,
}

impl Neuron {
    pub fn new() -> Neuron {
        Neuron::with_activation(ActivationFunction::Heaviside)
    }

    pub fn with_activation(activation: ActivationFunction) -> Neuron {
        Neuron {
            activation,
            last_net_input: 0.0,
            init_range: DEFAULT_INIT_RANGE,
            weights: DenseMatrix::new(),
            state: NeuronState::Uninitialized,
        }
    }

    pub fn state(&self) -> NeuronState {
        self.state
    }

    pub fn weights(&self) -> &DenseMatrix<f32> {
        &self.weights
    }

    /// Number of features the weight vector expects, once initialized.
    pub fn feature_size(&self) -> Option<usize> {
        match self.state {
            NeuronState::Initialized => Some(self.weights.size_x().saturating_sub(1)),
            NeuronState::Uninitialized => None,
        }
    }

    /// Installs a caller-built weight vector and marks the unit initialized.
    ///
    /// # Panics
    /// Panics unless `weights` is a single column with at least the bias row.
    pub fn set_weight_matrix(&mut self, weights: DenseMatrix<f32>) {
        assert!(
            weights.size_y() == 1 && weights.size_x() > 0,
            "weight vector must have shape (feature_size + 1, 1), got {:?}",
            weights.shape()
        );
        self.weights = weights;
        self.state = NeuronState::Initialized;
    }

    pub fn init_weight_matrix(&mut self, feature_size: usize) {
        self.init_weight_matrix_with(feature_size, &mut rand::thread_rng());
    }

    /// Sizes the weight vector for `feature_size` features and randomizes it
    /// within `init_range`.
    pub fn init_weight_matrix_with<R: Rng>(&mut self, feature_size: usize, rng: &mut R) {
        let (min_value, max_value) = self.init_range;
        self.weights.set_size(feature_size + 1, 1);
        self.fill_weight_matrix_randomly_with(feature_size, min_value, max_value, rng);
        debug!("initialized weight vector for {feature_size} features");
    }

    pub fn fill_weight_matrix_randomly(&mut self, feature_size: usize, min_value: f32, max_value: f32) {
        self.fill_weight_matrix_randomly_with(feature_size, min_value, max_value, &mut rand::thread_rng());
    }

    /// Sets the bias weight to exactly 1 and draws every feature weight from
    /// `[min_value, max_value)` in steps of 0.001.
    pub fn fill_weight_matrix_randomly_with<R: Rng>(
        &mut self,
        feature_size: usize,
        min_value: f32,
        max_value: f32,
        rng: &mut R,
    ) {
        if self.weights.shape() != (feature_size + 1, 1) {
            self.weights.set_size(feature_size + 1, 1);
        }

        let steps = ((max_value - min_value) * WEIGHT_RESOLUTION).round() as i64;
        self.weights[0][0] = 1.0;
        for i in 1..=feature_size {
            self.weights[i][0] = if steps > 0 {
                rng.gen_range(0..steps) as f32 / WEIGHT_RESOLUTION + min_value
            } else {
                min_value
            };
        }
        self.state = NeuronState::Initialized;
    }

    /// Supervised online training with the delta rule.
    ///
    /// `features` holds one feature per X index and one sample per Y index.
    /// Samples are visited in index order every epoch. Every weight, the bias
    /// included, moves by `learning_rate * (label - response) * input`.
    ///
    /// A shape mismatch is logged and returned; the weights are left as they were.
    pub fn delta_learning(
        &mut self,
        features: &DenseMatrix<f32>,
        labels: &DynamicArray<f32>,
        epochs: usize,
        learning_rate: f32,
    ) -> Result<()> {
        self.ensure_initialized(features.size_x());
        self.check_training_shape(LearningRule::Delta, features, Some(labels.size()))?;

        self.run_epochs(LearningRule::Delta, features, epochs, |response, sample| {
            learning_rate * (labels[sample] - response)
        })
    }

    /// Unsupervised online training with the Hebbian rule: every weight moves by
    /// `learning_rate * response * input`.
    pub fn hebbian_learning(
        &mut self,
        features: &DenseMatrix<f32>,
        epochs: usize,
        learning_rate: f32,
    ) -> Result<()> {
        self.ensure_initialized(features.size_x());
        self.check_training_shape(LearningRule::Hebbian, features, None)?;

        self.run_epochs(LearningRule::Hebbian, features, epochs, |response, _| {
            learning_rate * response
        })
    }

    /// Activated response for one `(feature_size, 1)` data point.
    ///
    /// Stores the pre-activation value in `last_net_input`.
    pub fn try_predict(&mut self, data_point: &DenseMatrix<f32>) -> Result<f32> {
        self.ensure_initialized(data_point.size_x());

        if self.weights.size_x() != data_point.size_x() + 1 {
            let err = NeuronError::DimensionMismatch {
                got: data_point.size_x(),
                expected: self.weights.size_x().saturating_sub(1),
            };
            warn!("{err}");
            return Err(err);
        }

        let augmented = Neuron::augmented_data_sample(data_point);
        let mut result = DenseMatrix::new();
        result.dot(&self.weights, &augmented)?;
        self.last_net_input = result[0][0];
        Ok(self.activation.function(self.last_net_input))
    }

    /// Like [`Neuron::try_predict`], but reports a mismatch as [`PREDICT_SENTINEL`].
    pub fn predict(&mut self, data_point: &DenseMatrix<f32>) -> f32 {
        self.try_predict(data_point).unwrap_or(PREDICT_SENTINEL)
    }

    pub fn activation_function(&self, input: f32) -> f32 {
        self.activation.function(input)
    }

    pub fn derived_activation_function(&self, input: f32) -> f32 {
        self.activation.derivative(input)
    }

    /// Builds the `(1, n + 1)` row `[1, x_0, .., x_{n-1}]` from an `(n, 1)`
    /// data point. A data point without a column contributes zeros.
    pub fn augmented_data_sample(input: &DenseMatrix<f32>) -> DenseMatrix<f32> {
        let mut output = DenseMatrix::with_size(1, input.size_x() + 1);
        output[0][0] = 1.0;
        for i in 0..input.size_x() {
            output[0][i + 1] = input.get(i, 0).copied().unwrap_or_default();
        }
        output
    }

    /// Space-separated weights, bias first.
    pub fn weight_summary(&self) -> String {
        (0..self.weights.size_x())
            .map(|i| self.weights[i][0].to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn print_weight_matrix(&self) {
        println!("{}", self.weight_summary());
    }

    fn ensure_initialized(&mut self, feature_size: usize) {
        if self.state == NeuronState::Uninitialized {
            self.init_weight_matrix(feature_size);
        }
    }

    fn check_training_shape(
        &self,
        rule: LearningRule,
        features: &DenseMatrix<f32>,
        label_count: Option<usize>,
    ) -> Result<()> {
        let expected = self.weights.size_x().saturating_sub(1);
        let fault = if features.size_x() != expected || self.weights.size_x() == 0 {
            Some(ShapeFault::FeatureDimension { got: features.size_x(), expected })
        } else if features.size_x() == 0 {
            Some(ShapeFault::EmptyFeatures)
        } else {
            match label_count {
                Some(labels) if labels != features.size_y() => {
                    Some(ShapeFault::LabelCount { samples: features.size_y(), labels })
                }
                _ => None,
            }
        };

        match fault {
            Some(fault) => {
                let err = NeuronError::InvalidTrainingShape { rule, fault };
                warn!("{err}");
                Err(err)
            }
            None => Ok(()),
        }
    }

    /// Shared online loop: for each sample, in order, compute the response and
    /// move every weight by `factor(response, sample) * input`.
    fn run_epochs<F>(
        &mut self,
        rule: LearningRule,
        features: &DenseMatrix<f32>,
        epochs: usize,
        factor: F,
    ) -> Result<()>
    where
        F: Fn(f32, usize) -> f32,
    {
        let feature_dimension = features.size_x();
        let mut augmented = DenseMatrix::with_size(1, feature_dimension + 1);
        augmented[0][0] = 1.0;
        let mut result = DenseMatrix::new();

        for epoch in 0..epochs {
            for sample in 0..features.size_y() {
                for k in 0..feature_dimension {
                    augmented[0][k + 1] = features[k][sample];
                }

                result.dot(&self.weights, &augmented)?;
                let response = self.activation.function(result[0][0]);

                let step = factor(response, sample);
                for k in 0..self.weights.size_x() {
                    self.weights[k][0] += step * augmented[0][k];
                }
            }
            debug!("{rule} learning: finished epoch {}/{epochs}", epoch + 1);
        }

        Ok(())
    }
}

impl Default for Neuron {
    fn default() -> Self {
        Neuron::new()
    }
}
