use log::info;

use crate::error::Result;
use crate::math::array::DynamicArray;
use crate::math::matrix::DenseMatrix;
use crate::neuron::neuron::Neuron;
use crate::train::learning_rule::LearningRule;
use crate::train::train_config::TrainConfig;

/// Trains `neuron` in place according to `config`.
///
/// Installs the config's activation and init range, then runs the selected
/// rule. `labels` are only read by the delta rule.
///
/// # Arguments
/// - `neuron`   - modified in place
/// - `features` - `(feature_size, sample_count)` matrix, one sample per Y index
/// - `labels`   - one target per sample
/// - `config`   - rule, activation and hyperparameters
pub fn train_neuron(
    neuron: &mut Neuron,
    features: &DenseMatrix<f32>,
    labels: &DynamicArray<f32>,
    config: &TrainConfig,
) -> Result<()> {
    neuron.activation = config.activation;
    neuron.init_range = (config.init_min, config.init_max);

    match config.rule {
        LearningRule::Delta => {
            neuron.delta_learning(features, labels, config.epochs, config.learning_rate)?
        }
        LearningRule::Hebbian => {
            neuron.hebbian_learning(features, config.epochs, config.learning_rate)?
        }
    }

    info!(
        "{} learning: {} epochs over {} samples with {} at rate {}",
        config.rule,
        config.epochs,
        features.size_y(),
        config.activation,
        config.learning_rate
    );
    Ok(())
}
