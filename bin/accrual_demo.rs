// FILE: bin/accrual_demo.rs
// Prints the reference accrual scenario: 4.0% APY, 600s epochs, one year, 1000 tokens.

use epoch_interest::{calculate_interest, Decimal, InterestConfig, InterestError};

/// Main function
pub fn main() -> Result<(), InterestError> {
    let config = InterestConfig::default();
    let principal = Decimal::from(1000u64);
    let start_epoch = 0;
    let current_epoch = config.epochs_per_year()?;

    let result = calculate_interest(
        principal,
        start_epoch,
        current_epoch,
        config.epoch_duration,
        config.interest_rate,
    )?;
    let accrual = config.accrue(principal, start_epoch, current_epoch)?;

    println!("{}", "=".repeat(60));
    println!("INTEREST CALCULATION");
    println!("{}", "=".repeat(60));
    println!("Result: {}", result.to_scaled_val());
    println!(
        "4.0% APY, {} tokens, 1 year ({} epochs of {}s)",
        principal.try_floor_u64()?,
        current_epoch,
        config.epoch_duration
    );
    println!("  Principal:       {}", principal);
    println!("  Result:          {}", result);
    println!("  Interest earned: {}", accrual.interest_earned);
    println!("  Multiplier:      {}", accrual.multiplier);
    println!("  Rate per second: {}", config.rate_per_second());

    Ok(())
}
