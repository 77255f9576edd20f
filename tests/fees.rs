//! Integration tests for screening fees

use decimal_percentage::Percentage;
use jiff::{
    SignedDuration,
    civil::{Weekday, date, time},
};
use rusty_money::{Money, iso::KRW};
use testresult::TestResult;

use box_office::prelude::*;

fn avatar(policy: DiscountPolicy<'static>) -> Result<Movie<'static>, MovieError> {
    Movie::new(
        "Avatar",
        SignedDuration::from_mins(120),
        Money::from_minor(10_000, KRW),
        policy,
    )
}

#[test]
fn amount_discount_on_first_screening() -> TestResult {
    let movie = avatar(DiscountPolicy::amount(
        Money::from_minor(2_000, KRW),
        [SequenceCondition::new(1)],
    )?)?;

    let start = date(2024, 1, 1).at(9, 0, 0, 0);
    let first = Screening::new(&movie, 1, start);
    let second = Screening::new(&movie, 2, start);

    assert_eq!(movie.calculate_fee(&first)?, Money::from_minor(8_000, KRW));
    assert_eq!(movie.calculate_fee(&second)?, Money::from_minor(10_000, KRW));

    Ok(())
}

#[test]
fn percent_discount_on_monday_mornings() -> TestResult {
    let movie = avatar(DiscountPolicy::percent(
        Percentage::from(0.1),
        [PeriodCondition::new(
            Weekday::Monday,
            time(10, 0, 0, 0),
            time(12, 0, 0, 0),
        )],
    )?)?;

    let monday = Screening::new(&movie, 1, date(2024, 1, 1).at(11, 0, 0, 0));
    let tuesday = Screening::new(&movie, 1, date(2024, 1, 2).at(11, 0, 0, 0));

    assert_eq!(movie.calculate_fee(&monday)?, Money::from_minor(9_000, KRW));
    assert_eq!(movie.calculate_fee(&tuesday)?, Money::from_minor(10_000, KRW));

    Ok(())
}

#[test]
fn reservation_total_is_per_ticket_fee_times_audience() -> TestResult {
    let movie = avatar(DiscountPolicy::amount(
        Money::from_minor(2_000, KRW),
        [SequenceCondition::new(1)],
    )?)?;

    let screening = Screening::new(&movie, 1, date(2024, 1, 1).at(9, 0, 0, 0));
    let reservation = screening.reserve(Customer::new("Choi"), 3)?;

    assert_eq!(reservation.fee(), Money::from_minor(24_000, KRW));
    assert_eq!(reservation.per_ticket_fee(), Money::from_minor(8_000, KRW));

    Ok(())
}

#[test]
fn either_condition_unlocks_the_discount() -> TestResult {
    let movie = avatar(DiscountPolicy::amount(
        Money::from_minor(800, KRW),
        [
            DiscountCondition::from(SequenceCondition::new(1)),
            DiscountCondition::from(PeriodCondition::new(
                Weekday::Thursday,
                time(10, 0, 0, 0),
                time(20, 59, 0, 0),
            )),
        ],
    )?)?;

    // 2024-01-04 is a Thursday
    let first_on_friday = Screening::new(&movie, 1, date(2024, 1, 5).at(9, 0, 0, 0));
    let thursday_evening = Screening::new(&movie, 6, date(2024, 1, 4).at(20, 59, 0, 0));
    let thursday_late = thursday_evening.rescheduled(date(2024, 1, 4).at(21, 0, 0, 0));

    assert_eq!(movie.calculate_fee(&first_on_friday)?, Money::from_minor(9_200, KRW));
    assert_eq!(movie.calculate_fee(&thursday_evening)?, Money::from_minor(9_200, KRW));
    assert_eq!(movie.calculate_fee(&thursday_late)?, Money::from_minor(10_000, KRW));

    Ok(())
}

#[test]
fn many_screenings_share_one_movie() -> TestResult {
    let movie = avatar(DiscountPolicy::amount(
        Money::from_minor(1_000, KRW),
        [SequenceCondition::new(3)],
    )?)?;

    let start = date(2024, 1, 1).at(9, 0, 0, 0);

    let fees = (1..=5)
        .map(|sequence| {
            let screening = Screening::new(&movie, sequence, start);

            movie.calculate_fee(&screening).map(|fee| fee.to_minor_units())
        })
        .collect::<Result<Vec<_>, _>>()?;

    assert_eq!(fees, [10_000, 10_000, 9_000, 10_000, 10_000]);

    Ok(())
}

#[test]
fn misconfigured_policies_are_rejected_up_front() {
    assert_eq!(
        DiscountPolicy::percent(Percentage::from(1.1), [SequenceCondition::new(1)]).err(),
        Some(PolicyError::PercentageOutOfRange(
            Percentage::from(1.1) * rust_decimal::Decimal::ONE
        ))
    );

    assert!(matches!(
        DiscountPolicy::amount(Money::from_minor(100, KRW), DiscountConditions::empty()),
        Err(PolicyError::NoConditions)
    ));

    assert!(matches!(
        DiscountPolicy::amount(Money::from_minor(20_000, KRW), [SequenceCondition::new(1)])
            .map(avatar),
        Ok(Err(MovieError::DiscountExceedsFee {
            discount: 20_000,
            fee: 10_000
        }))
    ));
}
