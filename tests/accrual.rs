use epoch_interest::{
    apy_to_rate_per_second, calculate_interest, compute_multiplier,
    math::common::{BASE, SECONDS_PER_YEAR, WAD},
    Decimal, InterestConfig, InterestError, Multiplier, Rate,
};
use odra::casper_types::U256;

const EPOCH_DURATION: u64 = 600;
const EPOCHS_PER_YEAR: u64 = SECONDS_PER_YEAR / EPOCH_DURATION;

fn tokens(amount: u64) -> Decimal {
    Decimal::from(amount)
}

#[test]
fn one_year_at_four_percent_compounds() {
    let principal = tokens(1000);
    let result = calculate_interest(principal, 0, EPOCHS_PER_YEAR, EPOCH_DURATION, 40).unwrap();

    assert_eq!(
        result.to_scaled_val(),
        U256::from_dec_str("1040497259000000000000").unwrap()
    );
    assert!(result > principal);

    // 1000 * (e^0.04 - 1) ~= 40.8108 tokens; simple interest would be 40
    let earned = result.0 - principal.0;
    let continuous = U256::from(40_810_774_192_388_226u64) * U256::from(1000u64);
    let tolerance = U256::from(WAD / 2);
    let distance = if earned > continuous {
        earned - continuous
    } else {
        continuous - earned
    };
    assert!(distance < tolerance);
    assert!(earned > U256::from(40u64) * U256::from(WAD));
}

#[test]
fn two_years_at_five_point_two_percent() {
    let result = calculate_interest(tokens(1000), 0, 2 * EPOCHS_PER_YEAR, EPOCH_DURATION, 52).unwrap();
    assert_eq!(
        result.to_scaled_val(),
        U256::from_dec_str("1107978077000000000000").unwrap()
    );
}

#[test]
fn principal_returned_when_epochs_do_not_advance() {
    for (start, current) in [(0u64, 0u64), (5, 5), (9, 2), (u64::MAX, 0)] {
        for rate in [0u64, 40, 1000] {
            assert_eq!(
                calculate_interest(tokens(77), start, current, EPOCH_DURATION, rate),
                Ok(tokens(77))
            );
        }
    }
}

#[test]
fn accrual_never_shrinks_principal() {
    let principal = Decimal::from_scaled_val(U256::from(123_456_789u64));
    for rate in [0u64, 1, 40, 52, 1000] {
        for current in [1u64, 2, 144, EPOCHS_PER_YEAR] {
            let result = calculate_interest(principal, 0, current, EPOCH_DURATION, rate).unwrap();
            assert!(result >= principal);
        }
    }
}

#[test]
fn later_epochs_accrue_more() {
    let mut prev = tokens(1);
    for current in [1u64, 10, 144, 1_000, EPOCHS_PER_YEAR, 5 * EPOCHS_PER_YEAR] {
        let result = calculate_interest(tokens(1), 0, current, EPOCH_DURATION, 52).unwrap();
        assert!(result >= prev);
        prev = result;
    }
}

#[test]
fn multiplier_boundaries() {
    assert_eq!(apy_to_rate_per_second(0), Rate::zero());
    assert_eq!(
        compute_multiplier(apy_to_rate_per_second(40), 0).unwrap().to_scaled_val(),
        U256::from(BASE)
    );
    assert_eq!(
        compute_multiplier(apy_to_rate_per_second(u64::MAX), u64::MAX),
        Err(InterestError::ArithmeticOverflow)
    );
    assert_eq!(
        calculate_interest(tokens(1), 0, u64::MAX, u64::MAX, 40),
        Err(InterestError::ArithmeticOverflow)
    );
}

#[test]
fn config_matches_free_function() {
    let config = InterestConfig::new(EPOCH_DURATION, 52).unwrap();
    let accrual = config.accrue(tokens(250), 12, 12 + 144 * 7).unwrap();
    assert_eq!(
        Ok(accrual.accrued),
        calculate_interest(tokens(250), 12, 12 + 144 * 7, EPOCH_DURATION, 52)
    );
    assert!(accrual.multiplier > Multiplier::identity());
}
