use log::warn;
use num_traits::{NumAssign, One, Zero};
use std::ops::{Add, Index, IndexMut, Sub};

use crate::error::{NeuronError, Result};

/// Owned two-dimensional buffer addressed by `(x, y)`.
///
/// Storage is `size_x` contiguous blocks of length `size_y`; element `(x, y)`
/// lives at `x * size_y + y`. `m[x]` is the block for `x`, so `m[x][y]` and
/// `m[(x, y)]` address the same element.
///
/// Sub-matrices are value copies, never views.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T> {
    size_x: usize,
    size_y: usize,
    data: Box<[T]>,
}

impl<T> DenseMatrix<T> {
    pub fn new() -> DenseMatrix<T> {
        DenseMatrix { size_x: 0, size_y: 0, data: Vec::new().into_boxed_slice() }
    }

    /// Builds a matrix from a flat buffer laid out as `x * size_y + y`.
    pub fn from_vec(size_x: usize, size_y: usize, data: Vec<T>) -> Result<DenseMatrix<T>> {
        let expected = size_x * size_y;
        if data.len() != expected {
            return Err(NeuronError::BufferLength { expected, got: data.len() });
        }
        Ok(DenseMatrix { size_x, size_y, data: data.into_boxed_slice() })
    }

    pub fn size_x(&self) -> usize {
        self.size_x
    }

    pub fn size_y(&self) -> usize {
        self.size_y
    }

    /// Total element count, `size_x * size_y`.
    pub fn size(&self) -> usize {
        self.size_x * self.size_y
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.size_x, self.size_y)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        x * self.size_y + y
    }

    pub fn get_element(&self, x: usize, y: usize) -> &T {
        &self.data[self.offset(x, y)]
    }

    pub fn get_element_mut(&mut self, x: usize, y: usize) -> &mut T {
        let offset = self.offset(x, y);
        &mut self.data[offset]
    }

    /// Bounds-checked element access.
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x < self.size_x && y < self.size_y {
            Some(self.get_element(x, y))
        } else {
            None
        }
    }
}

impl<T: Clone> DenseMatrix<T> {
    /// Copies out the inclusive region `[min_x, max_x] x [min_y, max_y]`.
    ///
    /// Bounds are clamped into the matrix rather than rejected. A range that is
    /// empty after clamping produces an empty extent in that dimension.
    pub fn sub_matrix(&self, min_x: isize, max_x: isize, min_y: isize, max_y: isize) -> DenseMatrix<T> {
        let (start_x, len_x) = clamp_extent(min_x, max_x, self.size_x);
        let (start_y, len_y) = clamp_extent(min_y, max_y, self.size_y);

        let mut data = Vec::with_capacity(len_x * len_y);
        for x in start_x..start_x + len_x {
            let block = &self[x];
            data.extend_from_slice(&block[start_y..start_y + len_y]);
        }

        DenseMatrix { size_x: len_x, size_y: len_y, data: data.into_boxed_slice() }
    }

    /// Sets every element to `value`.
    pub fn fill(&mut self, value: T) {
        self.data.iter_mut().for_each(|element| *element = value.clone());
    }
}

/// Clamps an inclusive `[min, max]` into `[0, size - 1]`, returning the start
/// index and the number of elements covered.
fn clamp_extent(min: isize, max: isize, size: usize) -> (usize, usize) {
    let min = min.max(0);
    let max = max.min(size as isize - 1);
    if max < min {
        return (0, 0);
    }
    (min as usize, (max - min + 1) as usize)
}

impl<T: Clone + Default> DenseMatrix<T> {
    pub fn with_size(size_x: usize, size_y: usize) -> DenseMatrix<T> {
        DenseMatrix {
            size_x,
            size_y,
            data: vec![T::default(); size_x * size_y].into_boxed_slice(),
        }
    }

    /// Reallocates to `(new_x, new_y)`, copying the overlapping region cell by
    /// cell into the new layout. Cells outside it hold `T::default()`.
    pub fn set_size(&mut self, new_x: usize, new_y: usize) {
        let mut data = vec![T::default(); new_x * new_y];
        for x in 0..new_x.min(self.size_x) {
            for y in 0..new_y.min(self.size_y) {
                data[x * new_y + y] = self.data[self.offset(x, y)].clone();
            }
        }

        self.data = data.into_boxed_slice();
        self.size_x = new_x;
        self.size_y = new_y;
    }

    /// Swaps the two dimensions, moving `(x, y)` to `(y, x)`.
    pub fn transpose(&mut self) {
        let mut data = vec![T::default(); self.data.len()];
        for x in 0..self.size_x {
            for y in 0..self.size_y {
                data[y * self.size_x + x] = self.data[self.offset(x, y)].clone();
            }
        }

        self.data = data.into_boxed_slice();
        std::mem::swap(&mut self.size_x, &mut self.size_y);
    }
}

impl<T> DenseMatrix<T>
where
    T: Copy + Zero + One + NumAssign,
{
    /// Sets every element to zero.
    pub fn clear(&mut self) {
        self.fill(T::zero());
    }

    /// Replaces the matrix with the `size x size` identity. `size == 0` is a no-op.
    pub fn to_identity_matrix(&mut self, size: usize) {
        if size == 0 {
            return;
        }

        self.data = vec![T::zero(); size * size].into_boxed_slice();
        self.size_x = size;
        self.size_y = size;
        for i in 0..size {
            self.data[i * size + i] = T::one();
        }
    }

    pub fn identity(size: usize) -> DenseMatrix<T> {
        let mut matrix = DenseMatrix::new();
        matrix.to_identity_matrix(size);
        matrix
    }

    /// Scales every element in place.
    pub fn multiply(&mut self, value: T) {
        self.data.iter_mut().for_each(|element| *element *= value);
    }

    /// Stores `a + b` element-wise into `self`. Does nothing if `a` and `b`
    /// differ in shape.
    pub fn add_matrices(&mut self, a: &DenseMatrix<T>, b: &DenseMatrix<T>) {
        if a.shape() == b.shape() {
            self.combine_into(a, b, |l, r| l + r);
        }
    }

    /// Stores `a - b` element-wise into `self`. Does nothing if `a` and `b`
    /// differ in shape.
    pub fn deduct_matrices(&mut self, a: &DenseMatrix<T>, b: &DenseMatrix<T>) {
        if a.shape() == b.shape() {
            self.combine_into(a, b, |l, r| l - r);
        }
    }

    fn combine_into<F>(&mut self, a: &DenseMatrix<T>, b: &DenseMatrix<T>, op: F)
    where
        F: Fn(T, T) -> T,
    {
        self.size_x = a.size_x;
        self.size_y = a.size_y;
        self.data = a.data.iter()
            .zip(b.data.iter())
            .map(|(&l, &r)| op(l, r))
            .collect();
    }

    /// Matrix product with this crate's compatibility rule: `a.size_x` must
    /// equal `b.size_y`, and the result has shape `(b.size_x, a.size_y)` with
    ///
    /// `result[i2][i1] = sum over i3 of a[i3][i1] * b[i2][i3]`.
    ///
    /// On incompatible shapes `self` is left untouched.
    pub fn dot(&mut self, a: &DenseMatrix<T>, b: &DenseMatrix<T>) -> Result<()> {
        if a.size_x != b.size_y {
            let err = NeuronError::IncompatibleDot { left_x: a.size_x, right_y: b.size_y };
            warn!("{err}");
            return Err(err);
        }

        let (x1, y1, x2) = (a.size_x, a.size_y, b.size_x);
        let mut data = vec![T::zero(); x2 * y1];
        for i1 in 0..y1 {
            for i2 in 0..x2 {
                let mut sum = T::zero();
                for i3 in 0..x1 {
                    sum += a[i3][i1] * b[i2][i3];
                }
                data[i2 * y1 + i1] = sum;
            }
        }

        self.data = data.into_boxed_slice();
        self.size_x = x2;
        self.size_y = y1;
        Ok(())
    }

    /// Element-wise sum, rejecting operands of a different shape.
    pub fn checked_add(&self, rhs: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        self.checked_combine(rhs, "addition", |l, r| l + r)
    }

    /// Element-wise difference, rejecting operands of a different shape.
    pub fn checked_sub(&self, rhs: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        self.checked_combine(rhs, "subtraction", |l, r| l - r)
    }

    fn checked_combine<F>(&self, rhs: &DenseMatrix<T>, op: &'static str, f: F) -> Result<DenseMatrix<T>>
    where
        F: Fn(T, T) -> T,
    {
        if self.shape() != rhs.shape() {
            return Err(NeuronError::OperandShape { op, left: self.shape(), right: rhs.shape() });
        }

        let mut res = DenseMatrix::new();
        res.combine_into(self, rhs, f);
        Ok(res)
    }
}

impl<T> Default for DenseMatrix<T> {
    fn default() -> Self {
        DenseMatrix::new()
    }
}

impl<T> Index<usize> for DenseMatrix<T> {
    type Output = [T];

    /// The `size_y`-long block for `x`.
    fn index(&self, x: usize) -> &[T] {
        let start = x * self.size_y;
        &self.data[start..start + self.size_y]
    }
}

impl<T> IndexMut<usize> for DenseMatrix<T> {
    fn index_mut(&mut self, x: usize) -> &mut [T] {
        let start = x * self.size_y;
        &mut self.data[start..start + self.size_y]
    }
}

impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &T {
        self.get_element(x, y)
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        self.get_element_mut(x, y)
    }
}

impl<T: Copy + NumAssign> Add for &DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn add(self, rhs: Self) -> Self::Output {
        match self.checked_add(rhs) {
            Ok(res) => res,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: Copy + NumAssign> Add for DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl<T: Copy + NumAssign> Sub for &DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        match self.checked_sub(rhs) {
            Ok(res) => res,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: Copy + NumAssign> Sub for DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;

    fn matrix(size_x: usize, size_y: usize, data: Vec<f32>) -> DenseMatrix<f32> {
        DenseMatrix::from_vec(size_x, size_y, data).unwrap()
    }

    fn counting(size_x: usize, size_y: usize) -> DenseMatrix<f32> {
        matrix(size_x, size_y, (0..size_x * size_y).map(|v| v as f32).collect())
    }

    #[test]
    fn element_lives_at_x_times_size_y_plus_y() {
        let m = counting(3, 4);
        assert_eq!(m[(2, 1)], 9.0);
        assert_eq!(m[2][1], 9.0);
        assert_eq!(*m.get_element(1, 3), 7.0);
        assert_eq!(m[1].len(), 4);
        assert_eq!(m.get(3, 0), None);
    }

    #[test]
    fn from_vec_rejects_wrong_length() {
        let err = DenseMatrix::<f32>::from_vec(2, 2, vec![1.0; 3]).unwrap_err();
        assert_eq!(err, NeuronError::BufferLength { expected: 4, got: 3 });

        let err = DenseMatrix::<f32>::from_vec(2, 2, vec![1.0]).unwrap_err();
        assert_eq!(err.kind(), FailureKind::HardFailure);
    }

    #[test]
    fn buffer_length_tracks_shape_through_every_reshape() {
        let mut m = counting(3, 4);
        let holds = |m: &DenseMatrix<f32>| m.as_slice().len() == m.size_x() * m.size_y();

        m.set_size(5, 2);
        assert!(holds(&m));
        m.transpose();
        assert!(holds(&m));
        assert!(holds(&m.sub_matrix(-1, 9, 1, 1)));

        let mut product = DenseMatrix::new();
        product.dot(&counting(2, 3), &counting(4, 2)).unwrap();
        assert!(holds(&product));
        product.to_identity_matrix(3);
        assert!(holds(&product));
    }

    #[test]
    fn sub_matrix_clamps_out_of_range_bounds() {
        let m = counting(3, 4);

        let column = m.sub_matrix(0, 3, 2, 2);
        assert_eq!(column.shape(), (3, 1));
        assert_eq!(column.as_slice(), &[2.0, 6.0, 10.0]);

        let everything = m.sub_matrix(-5, 100, -1, 100);
        assert_eq!(everything, m);

        let inverted = m.sub_matrix(2, 1, 0, 3);
        assert_eq!(inverted.size(), 0);
    }

    #[test]
    fn set_size_preserves_overlap() {
        let mut m = counting(3, 4);
        m.set_size(2, 6);
        assert_eq!(m.shape(), (2, 6));
        for x in 0..2 {
            for y in 0..4 {
                assert_eq!(m[x][y], (x * 4 + y) as f32);
            }
        }

        let mut m = counting(3, 4);
        m.set_size(4, 2);
        for x in 0..3 {
            for y in 0..2 {
                assert_eq!(m[x][y], (x * 4 + y) as f32);
            }
        }
    }

    #[test]
    fn fill_and_clear() {
        let mut m = counting(2, 2);
        m.fill(3.5);
        assert!(m.as_slice().iter().all(|&v| v == 3.5));
        m.clear();
        assert!(m.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn multiply_scales_in_place() {
        let mut m = counting(2, 3);
        m.multiply(2.0);
        assert_eq!(m.as_slice(), &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn dot_follows_size_x_equals_size_y_rule() {
        let a = matrix(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
        let b = matrix(2, 2, vec![5.0, 6.0, 7.0, 8.0]);
        let mut res = DenseMatrix::new();
        res.dot(&a, &b).unwrap();
        assert_eq!(res.shape(), (2, 2));
        assert_eq!(res.as_slice(), &[23.0, 34.0, 31.0, 46.0]);
    }

    #[test]
    fn dot_output_shape_is_b_x_by_a_y() {
        let a = DenseMatrix::<f32>::with_size(2, 3);
        let b = DenseMatrix::<f32>::with_size(5, 2);
        let mut res = DenseMatrix::new();
        res.dot(&a, &b).unwrap();
        assert_eq!(res.shape(), (5, 3));
    }

    #[test]
    fn dot_weight_column_with_augmented_row() {
        let weights = matrix(3, 1, vec![0.5, 2.0, -1.0]);
        let sample = matrix(1, 3, vec![1.0, 4.0, 3.0]);
        let mut res = DenseMatrix::new();
        res.dot(&weights, &sample).unwrap();
        assert_eq!(res.shape(), (1, 1));
        assert_eq!(res[0][0], 0.5 + 8.0 - 3.0);
    }

    #[test]
    fn incompatible_dot_leaves_target_untouched() {
        let a = counting(2, 3);
        let b = counting(2, 3);
        let mut target = counting(4, 1);
        let before = target.clone();

        let err = target.dot(&a, &b).unwrap_err();
        assert_eq!(err, NeuronError::IncompatibleDot { left_x: 2, right_y: 3 });
        assert_eq!(err.kind(), FailureKind::SilentNoOp);
        assert_eq!(target, before);
    }

    #[test]
    fn transpose_swaps_dimensions() {
        let mut m = counting(2, 3);
        m.transpose();
        assert_eq!(m.shape(), (3, 2));
        assert_eq!(m.size(), 6);
        for x in 0..3 {
            for y in 0..2 {
                assert_eq!(m[x][y], (y * 3 + x) as f32);
            }
        }
    }

    #[test]
    fn identity_matrix() {
        for n in 1..5 {
            let m = DenseMatrix::<i32>::identity(n);
            assert_eq!(m.shape(), (n, n));
            for i in 0..n {
                for j in 0..n {
                    assert_eq!(m[i][j], if i == j { 1 } else { 0 });
                }
            }
        }

        let mut untouched = counting(2, 2);
        untouched.to_identity_matrix(0);
        assert_eq!(untouched, counting(2, 2));
    }

    #[test]
    fn operators_combine_matching_shapes() {
        let a = counting(2, 2);
        let b = matrix(2, 2, vec![1.0; 4]);
        assert_eq!((&a + &b).as_slice(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!((a - b).as_slice(), &[-1.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn checked_operators_report_hard_failure() {
        let err = counting(2, 2).checked_add(&counting(2, 3)).unwrap_err();
        assert_eq!(err.kind(), FailureKind::HardFailure);
        assert!(counting(2, 2).checked_sub(&counting(3, 2)).is_err());
    }

    #[test]
    #[should_panic(expected = "different size")]
    fn add_operator_panics_on_shape_mismatch() {
        let _ = counting(2, 2) + counting(1, 4);
    }

    #[test]
    fn add_and_deduct_ignore_mismatched_operands() {
        let mut target = counting(2, 2);
        target.add_matrices(&counting(2, 2), &counting(2, 3));
        assert_eq!(target, counting(2, 2));
        target.deduct_matrices(&counting(1, 1), &counting(2, 2));
        assert_eq!(target, counting(2, 2));

        let mut target = DenseMatrix::new();
        target.add_matrices(&counting(1, 3), &counting(1, 3));
        assert_eq!(target.as_slice(), &[0.0, 2.0, 4.0]);
        target.deduct_matrices(&counting(3, 1), &matrix(3, 1, vec![1.0; 3]));
        assert_eq!(target.shape(), (3, 1));
        assert_eq!(target.as_slice(), &[-1.0, 0.0, 1.0]);
    }
}
