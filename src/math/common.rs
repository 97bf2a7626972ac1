//! Scalers, time constants and checked arithmetic traits shared by the
//! fixed-point types.

use crate::error::InterestError;

/// Number of fractional digits of a WAD value
pub const SCALE: usize = 18;
/// Number of fractional digits of a BASE value
pub const BASE_SCALE: usize = 9;
/// WAD identity, scale of amounts and rates
pub const WAD: u64 = 1_000_000_000_000_000_000;
/// BASE identity, scale of growth multipliers
pub const BASE: u64 = 1_000_000_000;
/// Divisor bringing a WAD-scaled value down to BASE precision
pub const WAD_TO_BASE: u64 = WAD / BASE;

/// Seconds in a day
pub const SECONDS_PER_DAY: u64 = 86_400;
/// Seconds in a year, 365 days with no leap adjustment
pub const SECONDS_PER_YEAR: u64 = 365 * SECONDS_PER_DAY;
/// APY inputs are tenths of a percent, so 100% is 1000
pub const APY_DENOMINATOR: u64 = 1_000;

/// Try to subtract, return an error on underflow
pub trait TrySub: Sized {
    /// Subtract
    fn try_sub(self, rhs: Self) -> Result<Self, InterestError>;
}

/// Try to add, return an error on overflow
pub trait TryAdd: Sized {
    /// Add
    fn try_add(self, rhs: Self) -> Result<Self, InterestError>;
}

/// Try to divide, return an error on overflow or divide by zero
pub trait TryDiv<RHS>: Sized {
    /// Divide
    fn try_div(self, rhs: RHS) -> Result<Self, InterestError>;
}

/// Try to multiply, return an error on overflow
pub trait TryMul<RHS>: Sized {
    /// Multiply
    fn try_mul(self, rhs: RHS) -> Result<Self, InterestError>;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn scalers_line_up() {
        assert_eq!(WAD_TO_BASE, 1_000_000_000);
        assert_eq!(SECONDS_PER_YEAR, 31_536_000);
        assert_eq!(10u64.pow(SCALE as u32), WAD);
        assert_eq!(10u64.pow(BASE_SCALE as u32), BASE);
    }
}
