pub mod array;
pub mod matrix;

pub use array::DynamicArray;
pub use matrix::DenseMatrix;
