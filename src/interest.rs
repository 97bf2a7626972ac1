//! Interest accrual over elapsed epochs.

use crate::{
    error::InterestError,
    math::{
        apy_to_rate_per_second, common::*, compute_multiplier, Decimal, Multiplier, Rate, TryMul,
        TrySub,
    },
};

/// Epoch length used by the reference deployment, in seconds
pub const DEFAULT_EPOCH_DURATION: u64 = 600;
/// Default APY in tenths of a percent (4.0%)
pub const DEFAULT_INTEREST_RATE: u64 = 40;

/// Accrual schedule: how long an epoch lasts and the yield paid on it
#[odra::odra_type]
pub struct InterestConfig {
    /// Seconds per epoch, must be positive
    pub epoch_duration: u64,
    /// APY in tenths of a percent (e.g. 52 = 5.2%)
    pub interest_rate: u64,
}

impl Default for InterestConfig {
    fn default() -> Self {
        Self {
            epoch_duration: DEFAULT_EPOCH_DURATION,
            interest_rate: DEFAULT_INTEREST_RATE,
        }
    }
}

impl InterestConfig {
    /// Create a validated schedule
    pub fn new(epoch_duration: u64, interest_rate: u64) -> Result<Self, InterestError> {
        let config = Self {
            epoch_duration,
            interest_rate,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject schedules that would hide elapsed time
    pub fn validate(&self) -> Result<(), InterestError> {
        if self.epoch_duration == 0 {
            return Err(InterestError::InvalidInput);
        }
        Ok(())
    }

    /// Per-second rate for this schedule's APY
    pub fn rate_per_second(&self) -> Rate {
        apy_to_rate_per_second(self.interest_rate)
    }

    /// Whole epochs in a 365 day year
    pub fn epochs_per_year(&self) -> Result<u64, InterestError> {
        self.validate()?;
        Ok(SECONDS_PER_YEAR / self.epoch_duration)
    }

    /// Whole epochs in a day
    pub fn epochs_per_day(&self) -> Result<u64, InterestError> {
        self.validate()?;
        Ok(SECONDS_PER_DAY / self.epoch_duration)
    }

    /// Accrue `principal` from `start_epoch` to `current_epoch`
    pub fn accrue(
        &self,
        principal: Decimal,
        start_epoch: u64,
        current_epoch: u64,
    ) -> Result<AccrualResult, InterestError> {
        accrue(
            principal,
            start_epoch,
            current_epoch,
            self.epoch_duration,
            self.interest_rate,
        )
    }
}

/// Breakdown of a single accrual
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccrualResult {
    /// Principal plus interest
    pub accrued: Decimal,
    /// `accrued - principal`
    pub interest_earned: Decimal,
    /// Growth factor applied to the principal
    pub multiplier: Multiplier,
}

impl AccrualResult {
    fn unchanged(principal: Decimal) -> Self {
        Self {
            accrued: principal,
            interest_earned: Decimal::zero(),
            multiplier: Multiplier::identity(),
        }
    }
}

/// Seconds between two epochs. Zero-length epochs would report no elapsed
/// time for any epoch gap, so they are rejected.
fn elapsed_seconds(
    start_epoch: u64,
    current_epoch: u64,
    epoch_duration: u64,
) -> Result<u64, InterestError> {
    if epoch_duration == 0 {
        return Err(InterestError::InvalidInput);
    }
    current_epoch
        .checked_sub(start_epoch)
        .ok_or(InterestError::InvalidInput)?
        .checked_mul(epoch_duration)
        .ok_or(InterestError::ArithmeticOverflow)
}

fn accrue(
    principal: Decimal,
    start_epoch: u64,
    current_epoch: u64,
    epoch_duration: u64,
    interest_rate: u64,
) -> Result<AccrualResult, InterestError> {
    let rate_per_second = apy_to_rate_per_second(interest_rate);

    if current_epoch <= start_epoch {
        log::trace!(
            "no accrual: current epoch {} not after start epoch {}",
            current_epoch,
            start_epoch
        );
        return Ok(AccrualResult::unchanged(principal));
    }

    let dt = elapsed_seconds(start_epoch, current_epoch, epoch_duration)?;
    let multiplier = compute_multiplier(rate_per_second, dt)?;
    let accrued = principal.try_mul(multiplier)?;

    log::debug!(
        "accrued {} -> {} over {}s (rate {}/s, multiplier {})",
        principal,
        accrued,
        dt,
        rate_per_second,
        multiplier
    );

    Ok(AccrualResult {
        accrued,
        interest_earned: accrued.try_sub(principal)?,
        multiplier,
    })
}

/// Value of `principal` after compounding from `start_epoch` to
/// `current_epoch` at `interest_rate` (APY, tenths of a percent).
///
/// Returns `principal` unchanged when `current_epoch <= start_epoch`.
///
/// # Errors
/// * `InvalidInput` if epochs advanced and `epoch_duration` is zero
/// * `ArithmeticOverflow` if the elapsed time or any product overflows
pub fn calculate_interest(
    principal: Decimal,
    start_epoch: u64,
    current_epoch: u64,
    epoch_duration: u64,
    interest_rate: u64,
) -> Result<Decimal, InterestError> {
    accrue(
        principal,
        start_epoch,
        current_epoch,
        epoch_duration,
        interest_rate,
    )
    .map(|result| result.accrued)
}
