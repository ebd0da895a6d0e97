//! Binary operators and their evaluation policy.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A binary operator awaiting (or applied to) two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Apply the operator to two committed operands.
    ///
    /// Division by a zero operand resolves to `0` rather than `±inf`; the
    /// display always shows a value, never an error state.
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs == 0.0 {
                    0.0
                } else {
                    lhs / rhs
                }
            }
        }
    }

    /// The symbol used in history expressions and on the keypad.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::Operator;

    #[test]
    fn applies_basic_arithmetic() {
        assert_eq!(Operator::Add.apply(5.0, 3.0), 8.0);
        assert_eq!(Operator::Subtract.apply(5.0, 3.0), 2.0);
        assert_eq!(Operator::Multiply.apply(5.0, 3.0), 15.0);
        assert_eq!(Operator::Divide.apply(6.0, 3.0), 2.0);
    }

    #[test]
    fn division_by_zero_resolves_to_zero() {
        assert_eq!(Operator::Divide.apply(7.0, 0.0), 0.0);
        assert_eq!(Operator::Divide.apply(0.0, 0.0), 0.0);
        assert_eq!(Operator::Divide.apply(-3.5, 0.0), 0.0);
    }
}
