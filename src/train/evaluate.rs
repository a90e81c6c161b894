use crate::math::array::DynamicArray;
use crate::math::matrix::DenseMatrix;
use crate::neuron::neuron::Neuron;

/// Classification counts produced by `evaluate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalStats {
    pub correct: usize,
    pub incorrect: usize,
}

impl EvalStats {
    pub fn total(&self) -> usize {
        self.correct + self.incorrect
    }

    /// Share of correctly classified samples as a percentage in [0, 100].
    pub fn success_rate(&self) -> f32 {
        if self.total() == 0 {
            return 0.0;
        }
        self.correct as f32 / self.total() as f32 * 100.0
    }
}

/// Predicts every sample column of `features`, rounds the response to the
/// nearest label and compares it with `labels`.
///
/// Samples past the end of `labels` are ignored.
pub fn evaluate(neuron: &mut Neuron, features: &DenseMatrix<f32>, labels: &DynamicArray<f32>) -> EvalStats {
    let samples = features.size_y().min(labels.size());
    let correct = (0..samples)
        .filter(|&i| {
            let data_point = features.sub_matrix(0, features.size_x() as isize, i as isize, i as isize);
            neuron.predict(&data_point).round() == labels[i]
        })
        .count();

    EvalStats { correct, incorrect: samples - correct }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::activation::ActivationFunction;

    #[test]
    fn counts_rounded_matches() {
        let mut neuron = Neuron::with_activation(ActivationFunction::Heaviside);
        neuron.set_weight_matrix(DenseMatrix::from_vec(2, 1, vec![0.0, 1.0]).unwrap());

        let features = DenseMatrix::from_vec(1, 4, vec![2.0, -1.0, 3.0, -4.0]).unwrap();
        let labels = DynamicArray::from_vec(vec![1.0, 0.0, 0.0, 0.0]);

        let stats = evaluate(&mut neuron, &features, &labels);
        assert_eq!(stats, EvalStats { correct: 3, incorrect: 1 });
        assert_eq!(stats.success_rate(), 75.0);
    }

    #[test]
    fn empty_stats_have_zero_rate() {
        let stats = EvalStats { correct: 0, incorrect: 0 };
        assert_eq!(stats.success_rate(), 0.0);
    }
}
