//! BASE-scaled growth multiplier and its truncated series expansion.
//!
//! `e^x` with `x = rate * dt / WAD` is approximated as
//!
//! ```text
//! 1 + dt*r + dt*(dt-1)/2 * r^2 + dt*(dt-1)*(dt-2)/6 * r^3
//! ```
//!
//! in WAD precision and then rescaled to BASE. Every division floors, so the
//! order of the steps in [`compute_multiplier`] fixes the exact result and
//! must not be rearranged.

use {
    crate::{
        error::InterestError,
        math::{common::*, format_scaled, Rate},
    },
    alloc::{string::ToString, vec::Vec},
    core::fmt,
    odra::casper_types::{
        bytesrepr::{self, FromBytes, ToBytes},
        CLType, CLTyped, U256,
    },
};

/// Growth factor precise to 9 digits; `BASE` is 1.0
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Eq, Ord)]
pub struct Multiplier(pub U256);

impl ToBytes for Multiplier {
    fn to_bytes(&self) -> Result<Vec<u8>, bytesrepr::Error> {
        self.0.to_bytes()
    }

    fn serialized_length(&self) -> usize {
        self.0.serialized_length()
    }
}

impl FromBytes for Multiplier {
    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), bytesrepr::Error> {
        let (value, remainder) = U256::from_bytes(bytes)?;
        Ok((Multiplier(value), remainder))
    }
}

impl CLTyped for Multiplier {
    fn cl_type() -> CLType {
        CLType::U256
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Self::identity()
    }
}

impl Multiplier {
    /// No growth (1.0)
    pub fn identity() -> Self {
        Self(U256::from(BASE))
    }

    /// Return raw scaled value
    pub fn to_scaled_val(&self) -> U256 {
        self.0
    }

    /// Create multiplier from scaled value
    pub fn from_scaled_val(scaled_val: U256) -> Self {
        Self(scaled_val)
    }

    /// True when applying this multiplier leaves an amount unchanged
    pub fn is_identity(&self) -> bool {
        self.0 == U256::from(BASE)
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_scaled(&self.0.to_string(), BASE_SCALE))
    }
}

fn checked_mul(lhs: U256, rhs: U256) -> Result<U256, InterestError> {
    lhs.checked_mul(rhs).ok_or(InterestError::ArithmeticOverflow)
}

fn checked_add(lhs: U256, rhs: U256) -> Result<U256, InterestError> {
    lhs.checked_add(rhs).ok_or(InterestError::ArithmeticOverflow)
}

/// Growth multiplier for `rate_per_second` compounded over `dt` seconds.
///
/// Returns exactly [`Multiplier::identity`] for `dt == 0`. Fails with
/// [`InterestError::ArithmeticOverflow`] when any intermediate exceeds 256
/// bits; nothing wraps.
pub fn compute_multiplier(rate_per_second: Rate, dt: u64) -> Result<Multiplier, InterestError> {
    if dt == 0 {
        return Ok(Multiplier::identity());
    }

    let exp = U256::from(dt);
    let exp_minus_one = U256::from(dt - 1);
    let exp_minus_two = if dt > 2 {
        U256::from(dt - 2)
    } else {
        U256::zero()
    };

    let base_power_two = rate_per_second.try_mul(rate_per_second)?;
    let base_power_three = base_power_two.try_mul(rate_per_second)?;

    let temp = checked_mul(exp, exp_minus_one)?;
    let second_term = checked_mul(temp, base_power_two.to_scaled_val())? / U256::from(2u64);
    let third_term = checked_mul(
        checked_mul(temp, exp_minus_two)?,
        base_power_three.to_scaled_val(),
    )? / U256::from(6u64);

    let first_term = rate_per_second.try_mul(dt)?.to_scaled_val();
    let offset = checked_add(checked_add(first_term, second_term)?, third_term)?
        / U256::from(WAD_TO_BASE);

    Ok(Multiplier(checked_add(U256::from(BASE), offset)?))
}
