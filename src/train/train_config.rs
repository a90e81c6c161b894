use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::neuron::neuron::DEFAULT_INIT_RANGE;
use crate::train::learning_rule::LearningRule;

/// Configuration for a `train_neuron` run.
///
/// # Fields
/// - `rule`          - weight-update rule (`delta` or `hebbian`)
/// - `activation`    - activation installed on the neuron before training
/// - `epochs`        - full passes over the samples
/// - `learning_rate` - step size of every weight update
/// - `init_min`, `init_max` - range for lazily initialized feature weights
/// - `seed`          - optional RNG seed for callers that generate data or
///                     initialize weights from the config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub rule: LearningRule,
    pub activation: ActivationFunction,
    pub epochs: usize,
    pub learning_rate: f32,
    #[serde(default = "default_init_min")]
    pub init_min: f32,
    #[serde(default = "default_init_max")]
    pub init_max: f32,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_init_min() -> f32 {
    DEFAULT_INIT_RANGE.0
}

fn default_init_max() -> f32 {
    DEFAULT_INIT_RANGE.1
}

impl TrainConfig {
    /// Creates a config with the default init range and no seed.
    pub fn new(rule: LearningRule, activation: ActivationFunction, epochs: usize, learning_rate: f32) -> Self {
        TrainConfig {
            rule,
            activation,
            epochs,
            learning_rate,
            init_min: default_init_min(),
            init_max: default_init_max(),
            seed: None,
        }
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `TrainConfig` from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

impl Default for TrainConfig {
    /// Delta rule, `Tanh01`, 50 epochs at rate 0.5.
    fn default() -> Self {
        TrainConfig::new(LearningRule::Delta, ActivationFunction::Tanh01, 50, 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_optional_fields_take_defaults() {
        let json = r#"{"rule":"hebbian","activation":"relu","epochs":3,"learning_rate":0.25}"#;
        let config: TrainConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.rule, LearningRule::Hebbian);
        assert_eq!(config.activation, ActivationFunction::ReLU);
        assert_eq!((config.init_min, config.init_max), DEFAULT_INIT_RANGE);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn unknown_activation_is_rejected() {
        let json = r#"{"rule":"delta","activation":"swish","epochs":1,"learning_rate":0.1}"#;
        assert!(serde_json::from_str::<TrainConfig>(json).is_err());
    }
}
