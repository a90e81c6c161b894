pub mod math;
pub mod activation;
pub mod error;
pub mod neuron;
pub mod train;
pub mod data;

// Convenience re-exports
pub use math::array::DynamicArray;
pub use math::matrix::DenseMatrix;
pub use activation::activation::ActivationFunction;
pub use error::{FailureKind, NeuronError};
pub use neuron::neuron::{Neuron, PREDICT_SENTINEL};
pub use train::{evaluate, train_neuron, EvalStats, LearningRule, TrainConfig};
pub use data::synthetic::generate_linear_split;
