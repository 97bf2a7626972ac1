//! Fixed-point math for interest accrual.

pub mod common;
pub mod decimal;
pub mod multiplier;
pub mod rate;

pub use common::{TryAdd, TryDiv, TryMul, TrySub};
pub use decimal::Decimal;
pub use multiplier::{compute_multiplier, Multiplier};
pub use rate::{apy_to_rate_per_second, Rate};

use alloc::{string::ToString, vec};

/// Render a scaled integer string with `scale` fractional digits
pub(crate) fn format_scaled(raw: &str, scale: usize) -> alloc::string::String {
    let mut scaled_val = raw.to_string();
    if scaled_val.len() <= scale {
        scaled_val.insert_str(0, &vec!["0"; scale - scaled_val.len()].join(""));
        scaled_val.insert_str(0, "0.");
    } else {
        scaled_val.insert(scaled_val.len() - scale, '.');
    }
    scaled_val
}
