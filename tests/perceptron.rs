use rand::rngs::StdRng;
use rand::SeedableRng;

use ferrite_neuron::{
    evaluate, generate_linear_split, train_neuron, ActivationFunction, LearningRule, Neuron,
    TrainConfig, PREDICT_SENTINEL,
};

#[test]
fn delta_rule_learns_linear_split_across_seeds() {
    for seed in [1, 7, 42, 2018, 31337, 900_001] {
        let mut rng = StdRng::seed_from_u64(seed);
        let (features, labels) = generate_linear_split(500, &mut rng);

        let mut neuron = Neuron::with_activation(ActivationFunction::Tanh01);
        neuron.init_weight_matrix_with(features.size_x(), &mut rng);
        neuron.delta_learning(&features, &labels, 50, 0.5).unwrap();

        let stats = evaluate(&mut neuron, &features, &labels);
        assert_eq!(stats.total(), 500);
        assert!(
            stats.correct > 400,
            "seed {seed}: only {} of 500 classified correctly",
            stats.correct
        );
    }
}

#[test]
fn trained_neuron_generalizes_to_fresh_samples() {
    let mut rng = StdRng::seed_from_u64(42);
    let (features, labels) = generate_linear_split(500, &mut rng);

    let mut neuron = Neuron::new();
    neuron.init_weight_matrix_with(features.size_x(), &mut rng);
    train_neuron(&mut neuron, &features, &labels, &TrainConfig::default()).unwrap();
    assert_eq!(neuron.activation, ActivationFunction::Tanh01);

    let (test_features, test_labels) = generate_linear_split(100, &mut rng);
    let stats = evaluate(&mut neuron, &test_features, &test_labels);
    assert!(stats.success_rate() > 80.0, "success rate {}%", stats.success_rate());
}

#[test]
fn training_through_config_lazily_initializes() {
    let mut rng = StdRng::seed_from_u64(5);
    let (features, labels) = generate_linear_split(20, &mut rng);

    let mut neuron = Neuron::new();
    let config = TrainConfig::new(LearningRule::Hebbian, ActivationFunction::Tanh01, 1, 0.001);
    train_neuron(&mut neuron, &features, &labels, &config).unwrap();

    assert_eq!(neuron.feature_size(), Some(2));
    let point = features.sub_matrix(0, 1, 0, 0);
    let value = neuron.predict(&point);
    assert!(value.is_finite() && value != PREDICT_SENTINEL);
}
