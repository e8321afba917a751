use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::decision::{
    DecisionConfig, DecisionEngine, EstonianPersonalCodeValidator, FixedClock, LoanRequest,
};

/// Born 1990-01-01, serial 0000.
pub(super) const DEBT_CODE: &str = "39001010000";
/// Born 1990-01-01, serial 3002.
pub(super) const SEGMENT_1_CODE: &str = "39001013002";
/// Born 1990-01-01, serial 6004.
pub(super) const SEGMENT_2_CODE: &str = "39001016004";
/// Born 1990-01-01, serial 9006.
pub(super) const SEGMENT_3_CODE: &str = "39001019006";
/// Born 2006-06-15: turns 18 on the reference date.
pub(super) const JUST_ADULT_CODE: &str = "50606154909";
/// Born 2006-06-16: one day short of 18 on the reference date.
pub(super) const ALMOST_ADULT_CODE: &str = "50606164905";
/// Born 1950-06-16: 73 on the reference date.
pub(super) const OLDEST_ELIGIBLE_CODE: &str = "35006164906";
/// Born 1950-06-15: 74 on the reference date.
pub(super) const TOO_OLD_CODE: &str = "35006154903";
/// Structurally valid 2100s code.
pub(super) const FUTURE_CENTURY_CODE: &str = "89001014908";
/// Structurally valid 1800s code.
pub(super) const NINETEENTH_CENTURY_CODE: &str = "19001014901";

pub(super) fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid reference date")
}

pub(super) fn decision_config() -> DecisionConfig {
    DecisionConfig::default()
}

pub(super) fn decision_engine() -> DecisionEngine<EstonianPersonalCodeValidator, FixedClock> {
    DecisionEngine::with_collaborators(
        EstonianPersonalCodeValidator::new(),
        FixedClock(reference_date()),
        decision_config(),
    )
}

pub(super) fn request(code: &str, amount: i64, period: i64) -> LoanRequest {
    LoanRequest::new(code, amount, period)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("valid json")
}
