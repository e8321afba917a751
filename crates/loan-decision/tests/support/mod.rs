#![allow(dead_code)]

use chrono::NaiveDate;
use loan_decision::decision::{
    DecisionConfig, DecisionEngine, EstonianPersonalCodeValidator, FixedClock,
};

pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid reference date")
}

pub fn engine() -> DecisionEngine<EstonianPersonalCodeValidator, FixedClock> {
    DecisionEngine::with_collaborators(
        EstonianPersonalCodeValidator::new(),
        FixedClock(reference_date()),
        DecisionConfig::default(),
    )
}

/// Build a checksummed code for a birth date in the 1900s or 2000s.
pub fn personal_code(year: i32, month: u32, day: u32, serial: u32, female: bool) -> String {
    let century_digit = match (year >= 2000, female) {
        (false, false) => 3,
        (false, true) => 4,
        (true, false) => 5,
        (true, true) => 6,
    };
    let prefix = format!(
        "{century_digit}{:02}{month:02}{day:02}{serial:03}",
        year % 100
    );

    let mut digits = [0u32; 10];
    for (slot, byte) in digits.iter_mut().zip(prefix.bytes()) {
        *slot = u32::from(byte - b'0');
    }
    format!(
        "{prefix}{}",
        EstonianPersonalCodeValidator::checksum(&digits)
    )
}
