#![allow(clippy::arithmetic_side_effects)]
#![deny(missing_docs)]
#![cfg_attr(not(test), no_std)]

//! Fixed-point compound interest accrual over discrete epochs.
//!
//! Reproduces, bit for bit, the integer-truncated result of an on-chain
//! accrual engine: an APY in tenths of a percent is turned into a WAD-scaled
//! per-second rate, grown over the elapsed seconds with a third-order series
//! multiplier, and applied to a WAD-scaled principal.

extern crate alloc;

pub mod error;
pub mod interest;
pub mod math;

pub use error::InterestError;
pub use interest::{calculate_interest, AccrualResult, InterestConfig};
pub use math::{apy_to_rate_per_second, compute_multiplier, Decimal, Multiplier, Rate};
