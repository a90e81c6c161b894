use serde::{Serialize, Deserialize};
use std::fmt;

/// Selects which weight-update rule a training run applies.
///
/// - `Delta`   - supervised: `w += rate * (target - output) * input`.
/// - `Hebbian` - unsupervised: `w += rate * output * input`; labels are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningRule {
    Delta,
    Hebbian,
}

impl fmt::Display for LearningRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LearningRule::Delta => write!(f, "Delta"),
            LearningRule::Hebbian => write!(f, "Hebbian"),
        }
    }
}
