pub mod evaluate;
pub mod learning_rule;
pub mod train_config;
pub mod trainer;

pub use evaluate::{evaluate, EvalStats};
pub use learning_rule::LearningRule;
pub use train_config::TrainConfig;
pub use trainer::train_neuron;
