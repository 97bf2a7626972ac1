//! Per-second growth rate, WAD scaled, derived from an annual yield.

use {
    crate::{
        error::InterestError,
        math::{common::*, format_scaled},
    },
    alloc::{string::ToString, vec::Vec},
    core::fmt,
    odra::casper_types::{
        bytesrepr::{self, FromBytes, ToBytes},
        CLType, CLTyped, U256,
    },
};

/// Interest rate per second as a scaled value
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Eq, Ord)]
pub struct Rate(pub U256);

impl ToBytes for Rate {
    fn to_bytes(&self) -> Result<Vec<u8>, bytesrepr::Error> {
        self.0.to_bytes()
    }

    fn serialized_length(&self) -> usize {
        self.0.serialized_length()
    }
}

impl FromBytes for Rate {
    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), bytesrepr::Error> {
        let (value, remainder) = U256::from_bytes(bytes)?;
        Ok((Rate(value), remainder))
    }
}

impl CLTyped for Rate {
    fn cl_type() -> CLType {
        CLType::U256
    }
}

impl Rate {
    /// Zero (0%)
    pub fn zero() -> Self {
        Self(U256::zero())
    }

    fn wad() -> U256 {
        U256::from(WAD)
    }

    /// Per-second rate for an APY given in tenths of a percent.
    ///
    /// `apy * WAD / (1000 * SECONDS_PER_YEAR)`, a single floor division.
    /// The numerator is at most `u64::MAX * 1e18`, so it cannot overflow.
    pub fn from_apy(apy: u64) -> Self {
        let numerator = U256::from(apy) * Self::wad();
        let denominator = U256::from(APY_DENOMINATOR) * U256::from(SECONDS_PER_YEAR);
        Self(numerator / denominator)
    }

    /// Return raw scaled value
    pub fn to_scaled_val(&self) -> U256 {
        self.0
    }

    /// Create rate from scaled value
    pub fn from_scaled_val(scaled_val: U256) -> Self {
        Self(scaled_val)
    }

    /// True when the rate accrues nothing
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

/// Convert an APY in tenths of a percent (52 is 5.2%) to a WAD-scaled
/// per-second rate.
pub fn apy_to_rate_per_second(apy: u64) -> Rate {
    Rate::from_apy(apy)
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_scaled(&self.0.to_string(), SCALE))
    }
}

impl TryMul<u64> for Rate {
    fn try_mul(self, rhs: u64) -> Result<Self, InterestError> {
        Ok(Self(
            self.0
                .checked_mul(U256::from(rhs))
                .ok_or(InterestError::ArithmeticOverflow)?,
        ))
    }
}

/// WAD product, floored: `self * rhs / WAD`.
impl TryMul<Rate> for Rate {
    fn try_mul(self, rhs: Self) -> Result<Self, InterestError> {
        Ok(Self(
            self.0
                .checked_mul(rhs.0)
                .ok_or(InterestError::ArithmeticOverflow)?
                / Self::wad(),
        ))
    }
}
