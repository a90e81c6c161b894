pub mod neuron;

pub use neuron::{Neuron, NeuronState, DEFAULT_INIT_RANGE, PREDICT_SENTINEL};
