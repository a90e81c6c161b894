use rand::Rng;

use crate::math::array::DynamicArray;
use crate::math::matrix::DenseMatrix;

/// Feature values are drawn from the integers in `[-SAMPLE_BOUND, SAMPLE_BOUND]`.
pub const SAMPLE_BOUND: i32 = 500;

/// Generates a linearly separable 2-D set.
///
/// Returns a `(2, samples)` feature matrix and one label per sample: `1` when
/// `x - y >= 0`, `0` otherwise.
pub fn generate_linear_split<R: Rng>(samples: usize, rng: &mut R) -> (DenseMatrix<f32>, DynamicArray<f32>) {
    const DIMENSIONALITY: usize = 2;

    let mut features = DenseMatrix::with_size(DIMENSIONALITY, samples);
    let mut labels = DynamicArray::with_size(samples);

    for i in 0..samples {
        for j in 0..DIMENSIONALITY {
            features[j][i] = rng.gen_range(-SAMPLE_BOUND..=SAMPLE_BOUND) as f32;
        }
        labels[i] = if features[0][i] - features[1][i] >= 0.0 { 1.0 } else { 0.0 };
    }

    (features, labels)
}
