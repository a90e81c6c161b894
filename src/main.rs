// Single-neuron demo: learn the split `x - y >= 0` on generated data, then
// classify the training set and a fresh test set.
//
//   cargo run -- [config.json]
use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;

use ferrite_neuron::{evaluate, generate_linear_split, train_neuron, Neuron, TrainConfig};

const TRAIN_SAMPLES: usize = 500;
const TEST_SAMPLES: usize = 100;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => TrainConfig::load_json(&path)
            .with_context(|| format!("failed to load training config from {path}"))?,
        None => TrainConfig::default(),
    };
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!("### Neural network: Neuron test ###");
    let mut neuron = Neuron::with_activation(config.activation);
    let (features, labels) = generate_linear_split(TRAIN_SAMPLES, &mut rng);

    println!("\nLearning phase:");
    neuron.fill_weight_matrix_randomly_with(features.size_x(), config.init_min, config.init_max, &mut rng);
    train_neuron(&mut neuron, &features, &labels, &config)
        .context("training rejected the generated data")?;
    println!("Success.");

    println!("\nTraining data classification phase");
    let stats = evaluate(&mut neuron, &features, &labels);
    println!(
        "Correctly classified = {}, incorrectly classified = {}",
        stats.correct, stats.incorrect
    );

    println!("\nNew data testing phase");
    let (test_features, test_labels) = generate_linear_split(TEST_SAMPLES, &mut rng);
    let stats = evaluate(&mut neuron, &test_features, &test_labels);
    println!(
        "Correctly classified = {}, incorrectly classified = {}",
        stats.correct, stats.incorrect
    );
    println!("Neuron success rate = {}%", stats.success_rate());
    neuron.print_weight_matrix();

    Ok(())
}
