use std::error::Error;
use std::fmt;

use crate::train::learning_rule::LearningRule;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, NeuronError>;

/// How a failing operation surfaces to its caller.
///
/// The learning core signals failure in deliberately different ways depending
/// on the call site. Tests and callers that care about the distinction match on
/// this instead of on the individual error variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The operation logged a diagnostic and left all state untouched.
    SilentNoOp,
    /// The legacy entry point returned a sentinel value instead of a result.
    Sentinel,
    /// The operator form panics; the checked form returns this error.
    HardFailure,
    /// A checked index access fell outside the buffer.
    OutOfRange,
}

/// Which training precondition was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeFault {
    /// The feature matrix X-dimension does not match the weight vector.
    FeatureDimension { got: usize, expected: usize },
    /// The feature matrix has no feature rows.
    EmptyFeatures,
    /// Sample count and label count disagree.
    LabelCount { samples: usize, labels: usize },
}

impl fmt::Display for ShapeFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeFault::FeatureDimension { got, expected } => write!(
                f,
                "the feature dimensionality in the feature matrix must equal the weight matrix size (got {got}, expected {expected})"
            ),
            ShapeFault::EmptyFeatures => {
                write!(f, "the feature dimension must be larger than 0 for learning to occur")
            }
            ShapeFault::LabelCount { samples, labels } => write!(
                f,
                "the number of samples in the feature matrix must equal the classification vector size ({samples} != {labels})"
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NeuronError {
    /// A training call was rejected; the weights were not modified.
    InvalidTrainingShape { rule: LearningRule, fault: ShapeFault },
    /// `dot(a, b)` requires `a.size_x == b.size_y`.
    IncompatibleDot { left_x: usize, right_y: usize },
    /// A data point does not match the weight vector's feature dimension.
    DimensionMismatch { got: usize, expected: usize },
    /// Element-wise operator applied to matrices of different shapes.
    OperandShape {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    IndexOutOfRange { index: usize, len: usize },
    /// A flat buffer did not hold `size_x * size_y` elements.
    BufferLength { expected: usize, got: usize },
}

impl NeuronError {
    pub fn kind(&self) -> FailureKind {
        match self {
            NeuronError::InvalidTrainingShape { .. } => FailureKind::SilentNoOp,
            NeuronError::IncompatibleDot { .. } => FailureKind::SilentNoOp,
            NeuronError::DimensionMismatch { .. } => FailureKind::Sentinel,
            NeuronError::OperandShape { .. } => FailureKind::HardFailure,
            NeuronError::BufferLength { .. } => FailureKind::HardFailure,
            NeuronError::IndexOutOfRange { .. } => FailureKind::OutOfRange,
        }
    }
}

impl fmt::Display for NeuronError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NeuronError::InvalidTrainingShape { rule, fault } => {
                write!(f, "{rule} learning: {fault}")
            }
            NeuronError::IncompatibleDot { left_x, right_y } => write!(
                f,
                "matrix dot cannot be performed due to incompatible matrices: {left_x} != {right_y}"
            ),
            NeuronError::DimensionMismatch { got, expected } => write!(
                f,
                "incorrect number of feature dimensions for data point: got {got}, expected {expected}"
            ),
            NeuronError::OperandShape { op, left, right } => write!(
                f,
                "matrix passed for {op} is of different size than expected: ({}, {}) != ({}, {})",
                left.0, left.1, right.0, right.1
            ),
            NeuronError::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range for length {len}")
            }
            NeuronError::BufferLength { expected, got } => {
                write!(f, "buffer holds {got} elements, shape requires {expected}")
            }
        }
    }
}

impl Error for NeuronError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_keep_call_site_shapes_apart() {
        let training = NeuronError::InvalidTrainingShape {
            rule: LearningRule::Delta,
            fault: ShapeFault::EmptyFeatures,
        };
        let predict = NeuronError::DimensionMismatch { got: 3, expected: 2 };
        let operator = NeuronError::OperandShape { op: "addition", left: (1, 2), right: (2, 1) };

        assert_eq!(training.kind(), FailureKind::SilentNoOp);
        assert_eq!(predict.kind(), FailureKind::Sentinel);
        assert_eq!(operator.kind(), FailureKind::HardFailure);
    }

    #[test]
    fn display_names_the_rule() {
        let err = NeuronError::InvalidTrainingShape {
            rule: LearningRule::Hebbian,
            fault: ShapeFault::FeatureDimension { got: 3, expected: 2 },
        };
        assert!(err.to_string().starts_with("Hebbian learning:"));
    }
}
