//! Birth date, age, and credit segment derived from an identity code.
//!
//! Offsets follow the `GYYMMDDSSSC` layout: century digit at 0, two-digit year at 1..3,
//! month at 3..5, day at 5..7, and the serial used for segmentation in the last four digits.

use chrono::{Datelike, NaiveDate};

use super::config::DecisionConfig;
use super::domain::{CreditProfile, CreditSegment};
use super::error::DecisionError;

/// Century base for the leading digit of a code.
pub fn century(first_digit: u32) -> Result<i32, DecisionError> {
    match first_digit {
        3 | 4 => Ok(1900),
        5 | 6 => Ok(2000),
        other => Err(DecisionError::UnrecognizedCenturyDigit(other)),
    }
}

pub fn birth_date(code: &str) -> Result<NaiveDate, DecisionError> {
    let first_digit = code
        .chars()
        .next()
        .and_then(|ch| ch.to_digit(10))
        .ok_or(DecisionError::InvalidIdentityCode)?;
    let century = century(first_digit)?;

    let year = digits_at(code, 1, 3)?;
    let month = digits_at(code, 3, 5)?;
    let day = digits_at(code, 5, 7)?;

    NaiveDate::from_ymd_opt(century + year as i32, month, day)
        .ok_or(DecisionError::InvalidIdentityCode)
}

/// Whole years elapsed between `birth_date` and `today`.
///
/// Negative when the birth date lies in the future.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

pub fn validate_age(age: i32, config: &DecisionConfig) -> Result<(), DecisionError> {
    if age < config.minimum_allowed_age || age > config.maximum_eligible_age() {
        return Err(DecisionError::AgeIneligible);
    }
    Ok(())
}

pub fn credit_segment(code: &str) -> Result<CreditSegment, DecisionError> {
    let end = code.len();
    if end < 4 {
        return Err(DecisionError::InvalidIdentityCode);
    }
    let serial = digits_at(code, end - 4, end)?;
    Ok(CreditSegment::from_serial(serial))
}

/// Derive the applicant's profile, rejecting anyone outside the eligible age band.
///
/// Age is checked before the segment, so an ineligible applicant with debt is reported as
/// ineligible by age.
pub fn credit_profile(
    code: &str,
    today: NaiveDate,
    config: &DecisionConfig,
) -> Result<CreditProfile, DecisionError> {
    let birth_date = birth_date(code)?;
    let age = age_on(birth_date, today);
    validate_age(age, config)?;

    let segment = credit_segment(code)?;
    Ok(CreditProfile {
        birth_date,
        age,
        segment,
        credit_modifier: config.modifier_for(segment),
    })
}

fn digits_at(code: &str, start: usize, end: usize) -> Result<u32, DecisionError> {
    let field = code
        .get(start..end)
        .filter(|field| field.bytes().all(|byte| byte.is_ascii_digit()))
        .ok_or(DecisionError::InvalidIdentityCode)?;
    field
        .parse::<u32>()
        .map_err(|_| DecisionError::InvalidIdentityCode)
}
