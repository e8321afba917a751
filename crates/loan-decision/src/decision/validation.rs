//! Structural checks run before any demographic or credit computation.

use super::config::DecisionConfig;
use super::domain::LoanRequest;
use super::error::DecisionError;
use super::identity::IdentityCodeValidator;

/// Requested amount and period once they are known to be within bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestedTerms {
    pub loan_amount: u32,
    pub loan_period: u32,
}

/// Reject malformed requests. The identity code is checked first, then the amount, then
/// the period, so the first failing field decides the reason.
pub fn validate_request<V>(
    request: &LoanRequest,
    validator: &V,
    config: &DecisionConfig,
) -> Result<RequestedTerms, DecisionError>
where
    V: IdentityCodeValidator + ?Sized,
{
    if !validator.is_valid(&request.personal_code) {
        return Err(DecisionError::InvalidIdentityCode);
    }

    let loan_amount = within(
        request.loan_amount,
        config.min_loan_amount,
        config.max_loan_amount,
    )
    .ok_or(DecisionError::InvalidLoanAmount)?;

    let loan_period = within(
        request.loan_period,
        config.min_loan_period,
        config.max_loan_period,
    )
    .ok_or(DecisionError::InvalidLoanPeriod)?;

    Ok(RequestedTerms {
        loan_amount,
        loan_period,
    })
}

fn within(value: i64, min: u32, max: u32) -> Option<u32> {
    if value < i64::from(min) || value > i64::from(max) {
        return None;
    }
    u32::try_from(value).ok()
}
