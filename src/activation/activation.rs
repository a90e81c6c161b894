use serde::{Serialize, Deserialize};
use std::f32::consts::{E, PI};
use std::fmt;

/// The closed set of scalar activation functions a neuron can use.
///
/// Variants keep their historical discriminants (`Linear` = 0 through
/// `NotSpecified` = 13) so that numeric selectors still map to the same
/// function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum ActivationFunction {
    /// Identity.
    Linear = 0,
    /// Binary step, 0.5 at the origin.
    Heaviside = 1,
    Logistic = 2,
    /// Placeholder: both forward and derivative are 0.
    Softmax = 3,
    Tanh = 4,
    /// Hyperbolic tangent rescaled into (0, 1).
    Tanh01 = 5,
    #[serde(rename = "relu")]
    ReLU = 6,
    ArcTan = 7,
    /// Arctangent rescaled into (0, 1).
    ArcTan01 = 8,
    SymmetricHardLimit = 9,
    Sinusoid = 10,
    Sinusoid01 = 11,
    /// The radial basis function of RBF networks.
    Gaussian = 12,
    /// Behaves as `Linear`.
    NotSpecified = 13,
}

impl ActivationFunction {
    pub const ALL: [ActivationFunction; 14] = [
        ActivationFunction::Linear,
        ActivationFunction::Heaviside,
        ActivationFunction::Logistic,
        ActivationFunction::Softmax,
        ActivationFunction::Tanh,
        ActivationFunction::Tanh01,
        ActivationFunction::ReLU,
        ActivationFunction::ArcTan,
        ActivationFunction::ArcTan01,
        ActivationFunction::SymmetricHardLimit,
        ActivationFunction::Sinusoid,
        ActivationFunction::Sinusoid01,
        ActivationFunction::Gaussian,
        ActivationFunction::NotSpecified,
    ];

    pub fn discriminant(self) -> u8 {
        self as u8
    }

    pub fn from_discriminant(value: u8) -> Option<ActivationFunction> {
        ActivationFunction::ALL.get(value as usize).copied()
    }

    pub fn function(&self, x: f32) -> f32 {
        match self {
            ActivationFunction::Linear => x,
            ActivationFunction::Heaviside => {
                if x > 0.0 { 1.0 } else if x == 0.0 { 0.5 } else { 0.0 }
            }
            ActivationFunction::Logistic => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::Softmax => 0.0,
            ActivationFunction::Tanh => x.tanh(),
            ActivationFunction::Tanh01 => x.tanh() / 2.0 + 0.5,
            ActivationFunction::ReLU => if x < 0.0 { 0.0 } else { x },
            ActivationFunction::ArcTan => x.atan(),
            ActivationFunction::ArcTan01 => x.atan() / PI + 0.5,
            ActivationFunction::SymmetricHardLimit => {
                if x > 0.0 { 1.0 } else if x == 0.0 { 0.0 } else { -1.0 }
            }
            ActivationFunction::Sinusoid => x.sin(),
            ActivationFunction::Sinusoid01 => x.sin() / 2.0 + 0.5,
            ActivationFunction::Gaussian => E.powf(-x * x),
            ActivationFunction::NotSpecified => x,
        }
    }

    /// Derivative of the activation at `x`.
    ///
    /// The step functions report 0 everywhere, so they cannot drive
    /// gradient-based updates. `Logistic` keeps its historical formula
    /// `atan(x) * (1 - atan(x)) / 2`, which is not the logistic derivative.
    pub fn derivative(&self, x: f32) -> f32 {
        match self {
            ActivationFunction::Linear => 1.0,
            ActivationFunction::Heaviside => 0.0,
            ActivationFunction::Logistic => x.atan() * (1.0 - x.atan()) / 2.0,
            ActivationFunction::Softmax => 0.0,
            ActivationFunction::Tanh => 1.0 - self.function(x).powi(2),
            ActivationFunction::Tanh01 => (1.0 - self.function(x).powi(2)) / 2.0,
            ActivationFunction::ReLU => if x < 0.0 { 0.0 } else { 1.0 },
            ActivationFunction::ArcTan => 1.0 / (x * x + 1.0),
            ActivationFunction::ArcTan01 => 1.0 / (x * x + 1.0) / PI,
            ActivationFunction::SymmetricHardLimit => 0.0,
            ActivationFunction::Sinusoid => x.cos(),
            ActivationFunction::Sinusoid01 => x.cos() / 2.0,
            ActivationFunction::Gaussian => -2.0 * x * E.powf(-x * x),
            ActivationFunction::NotSpecified => 1.0,
        }
    }
}

impl Default for ActivationFunction {
    fn default() -> Self {
        ActivationFunction::NotSpecified
    }
}

impl fmt::Display for ActivationFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActivationFunction::Linear => "linear",
            ActivationFunction::Heaviside => "heaviside",
            ActivationFunction::Logistic => "logistic",
            ActivationFunction::Softmax => "softmax",
            ActivationFunction::Tanh => "tanh",
            ActivationFunction::Tanh01 => "tanh01",
            ActivationFunction::ReLU => "relu",
            ActivationFunction::ArcTan => "arc_tan",
            ActivationFunction::ArcTan01 => "arc_tan01",
            ActivationFunction::SymmetricHardLimit => "symmetric_hard_limit",
            ActivationFunction::Sinusoid => "sinusoid",
            ActivationFunction::Sinusoid01 => "sinusoid01",
            ActivationFunction::Gaussian => "gaussian",
            ActivationFunction::NotSpecified => "not_specified",
        };
        write!(f, "{name}")
    }
}
