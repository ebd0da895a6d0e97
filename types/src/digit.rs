//! Proof type for a single decimal digit.
//!
//! Validation occurs at construction time, so the dispatcher never has to
//! re-check that a digit action carries a character outside `0-9`.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single decimal digit, guaranteed to be in `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Digit(u8);

#[derive(Debug, Error)]
#[error("digit must be a character in 0-9, got {0:?}")]
pub struct InvalidDigitError(pub char);

impl Digit {
    pub fn new(value: char) -> Result<Self, InvalidDigitError> {
        match value.to_digit(10) {
            Some(digit) => Ok(Self(digit as u8)),
            None => Err(InvalidDigitError(value)),
        }
    }

    #[must_use]
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<char> for Digit {
    type Error = InvalidDigitError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Digit> for char {
    fn from(digit: Digit) -> Self {
        digit.as_char()
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::Digit;

    #[test]
    fn accepts_all_decimal_digits() {
        for c in '0'..='9' {
            let digit = Digit::new(c).expect("decimal digit");
            assert_eq!(digit.as_char(), c);
        }
    }

    #[test]
    fn rejects_non_digits() {
        assert!(Digit::new('a').is_err());
        assert!(Digit::new('.').is_err());
        assert!(Digit::new(' ').is_err());
    }

    #[test]
    fn serde_uses_char_representation() {
        let digit = Digit::new('7').unwrap();
        let json = serde_json::to_string(&digit).unwrap();
        assert_eq!(json, "\"7\"");
        let restored: Digit = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, digit);
    }
}
