//! WAD-scaled token amounts backed by `U256`.

use {
    crate::{
        error::InterestError,
        math::{common::*, format_scaled, Multiplier},
    },
    alloc::{string::ToString, vec::Vec},
    core::fmt,
    odra::casper_types::{
        bytesrepr::{self, FromBytes, ToBytes},
        CLType, CLTyped, U256,
    },
};

/// Large decimal values, precise to 18 digits
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Eq, Ord)]
pub struct Decimal(pub U256);

impl ToBytes for Decimal {
    fn to_bytes(&self) -> Result<Vec<u8>, bytesrepr::Error> {
        self.0.to_bytes()
    }

    fn serialized_length(&self) -> usize {
        self.0.serialized_length()
    }
}

impl FromBytes for Decimal {
    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), bytesrepr::Error> {
        let (value, remainder) = U256::from_bytes(bytes)?;
        Ok((Decimal(value), remainder))
    }
}

impl CLTyped for Decimal {
    fn cl_type() -> CLType {
        CLType::U256
    }
}

impl Decimal {
    /// One
    pub fn one() -> Self {
        Self(Self::wad())
    }

    /// Zero
    pub fn zero() -> Self {
        Self(U256::zero())
    }

    fn wad() -> U256 {
        U256::from(WAD)
    }

    fn half_wad() -> U256 {
        U256::from(WAD / 2)
    }

    /// Return raw scaled value
    #[allow(clippy::wrong_self_convention)]
    pub fn to_scaled_val(&self) -> U256 {
        self.0
    }

    /// Create decimal from scaled value
    pub fn from_scaled_val(scaled_val: U256) -> Self {
        Self(scaled_val)
    }

    /// Round scaled decimal to u64
    pub fn try_round_u64(&self) -> Result<u64, InterestError> {
        let rounded_val = Self::half_wad()
            .checked_add(self.0)
            .ok_or(InterestError::ArithmeticOverflow)?
            / Self::wad();
        Self::narrow(rounded_val)
    }

    /// Floor scaled decimal to u64
    pub fn try_floor_u64(&self) -> Result<u64, InterestError> {
        Self::narrow(self.0 / Self::wad())
    }

    fn narrow(val: U256) -> Result<u64, InterestError> {
        if val > U256::from(u64::MAX) {
            return Err(InterestError::ConversionOverflow);
        }
        Ok(val.as_u64())
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_scaled(&self.0.to_string(), SCALE))
    }
}

/// Whole tokens; `u64::MAX * WAD` stays well inside 256 bits.
impl From<u64> for Decimal {
    fn from(val: u64) -> Self {
        Self(Self::wad() * U256::from(val))
    }
}

impl TryAdd for Decimal {
    fn try_add(self, rhs: Self) -> Result<Self, InterestError> {
        Ok(Self(
            self.0
                .checked_add(rhs.0)
                .ok_or(InterestError::ArithmeticOverflow)?,
        ))
    }
}

impl TrySub for Decimal {
    fn try_sub(self, rhs: Self) -> Result<Self, InterestError> {
        Ok(Self(
            self.0
                .checked_sub(rhs.0)
                .ok_or(InterestError::ArithmeticOverflow)?,
        ))
    }
}

impl TryDiv<u64> for Decimal {
    fn try_div(self, rhs: u64) -> Result<Self, InterestError> {
        Ok(Self(
            self.0
                .checked_div(U256::from(rhs))
                .ok_or(InterestError::DivisionByZero)?,
        ))
    }
}

impl TryMul<u64> for Decimal {
    fn try_mul(self, rhs: u64) -> Result<Self, InterestError> {
        Ok(Self(
            self.0
                .checked_mul(U256::from(rhs))
                .ok_or(InterestError::ArithmeticOverflow)?,
        ))
    }
}

/// Grow an amount by a BASE-scaled multiplier, flooring the result.
impl TryMul<Multiplier> for Decimal {
    fn try_mul(self, rhs: Multiplier) -> Result<Self, InterestError> {
        Ok(Self(
            self.0
                .checked_mul(rhs.to_scaled_val())
                .ok_or(InterestError::ArithmeticOverflow)?
                / U256::from(BASE),
        ))
    }
}
