//! Unary scientific function table.
//!
//! Each function consumes the current display value and produces a new one.
//! Trigonometric functions take their argument in degrees; the conversion to
//! radians happens here, not in the dispatcher.

use std::f64::consts;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A unary scientific operation (or constant) from the scientific keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScientificFn {
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Sqrt,
    Square,
    Cube,
    Reciprocal,
    Pi,
    E,
    Percent,
}

impl ScientificFn {
    /// Evaluate the function against the current display value.
    ///
    /// Singularities follow the engine's saturate-to-value policy:
    /// reciprocal of zero resolves to `0`; log/ln of a non-positive value
    /// and sqrt of a negative value produce `NaN`, which the display layer
    /// renders as the text `"NaN"`.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Sin => value.to_radians().sin(),
            Self::Cos => value.to_radians().cos(),
            Self::Tan => value.to_radians().tan(),
            Self::Log => value.log10(),
            Self::Ln => value.ln(),
            Self::Sqrt => value.sqrt(),
            Self::Square => value * value,
            Self::Cube => value * value * value,
            Self::Reciprocal => {
                if value == 0.0 {
                    0.0
                } else {
                    value.recip()
                }
            }
            Self::Pi => consts::PI,
            Self::E => consts::E,
            Self::Percent => value / 100.0,
        }
    }

    /// The function name used in history expressions.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Sqrt => "sqrt",
            Self::Square => "square",
            Self::Cube => "cube",
            Self::Reciprocal => "reciprocal",
            Self::Pi => "π",
            Self::E => "e",
            Self::Percent => "percent",
        }
    }

    /// Constants replace the display value instead of transforming it.
    #[must_use]
    pub fn is_constant(self) -> bool {
        matches!(self, Self::Pi | Self::E)
    }

    /// The left-hand side of the history entry, e.g. `sin(90)` or `π`.
    #[must_use]
    pub fn history_expression(self, operand: &str) -> String {
        if self.is_constant() {
            self.name().to_owned()
        } else {
            format!("{}({operand})", self.name())
        }
    }
}

impl fmt::Display for ScientificFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
