//! Error types for interest accrual.

use core::fmt;
use odra::prelude::OdraError;

/// Errors returned by the accrual math.
#[odra::odra_error]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InterestError {
    /// An input is outside the supported domain
    InvalidInput = 0,
    /// A checked intermediate product or sum overflowed 256 bits
    ArithmeticOverflow = 1,
    /// Division by zero
    DivisionByZero = 2,
    /// A scaled value does not fit the requested integer width
    ConversionOverflow = 3,
}

impl InterestError {
    /// Human readable description
    pub fn message(&self) -> &str {
        match self {
            InterestError::InvalidInput => "Input value is invalid",
            InterestError::ArithmeticOverflow => "Arithmetic operation overflow",
            InterestError::DivisionByZero => "Division by zero",
            InterestError::ConversionOverflow => "Value does not fit the target integer type",
        }
    }
}

impl fmt::Display for InterestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
