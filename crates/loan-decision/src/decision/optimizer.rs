//! Search for the largest approvable offer.
//!
//! The walk starts at the requested terms and only ever moves one way: the amount shrinks in
//! fixed steps down to its floor, then the period grows a month at a time up to its ceiling.
//! Once a combination scores at least 1.0 the amount is recomputed from the final period, so
//! the offer can exceed what was requested.

use tracing::debug;

use super::config::DecisionConfig;
use super::domain::LoanOffer;
use super::error::DecisionError;

/// Score at or above which a combination is approvable.
pub const APPROVAL_THRESHOLD: f64 = 1.0;

/// `(modifier / amount) * period`.
pub fn credit_score(credit_modifier: u32, loan_amount: u32, loan_period: u32) -> f64 {
    (f64::from(credit_modifier) / f64::from(loan_amount)) * f64::from(loan_period)
}

/// Largest amount the modifier supports at `loan_period`, capped at the configured maximum.
pub fn highest_valid_loan_amount(
    credit_modifier: u32,
    loan_period: u32,
    config: &DecisionConfig,
) -> u32 {
    credit_modifier
        .checked_mul(loan_period)
        .map_or(config.max_loan_amount, |amount| {
            amount.min(config.max_loan_amount)
        })
}

/// Which way the walk moved to reach a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMove {
    Start,
    DecreaseAmount,
    ExtendPeriod,
}

/// One visited point of the search grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchStep {
    pub movement: SearchMove,
    pub loan_amount: u32,
    pub loan_period: u32,
    pub credit_score: f64,
}

/// Best offer reachable from the requested terms.
pub fn optimize(
    credit_modifier: u32,
    requested_amount: u32,
    requested_period: u32,
    config: &DecisionConfig,
) -> Result<LoanOffer, DecisionError> {
    let loan_period = walk(
        credit_modifier,
        requested_amount,
        requested_period,
        config,
        |step| {
            debug!(
                movement = ?step.movement,
                loan_amount = step.loan_amount,
                loan_period = step.loan_period,
                credit_score = step.credit_score,
                "loan search step"
            );
        },
    )?;

    Ok(LoanOffer {
        loan_amount: highest_valid_loan_amount(credit_modifier, loan_period, config),
        loan_period,
    })
}

/// Every point the search visits, in order, ending at the first approvable one.
pub fn search_path(
    credit_modifier: u32,
    requested_amount: u32,
    requested_period: u32,
    config: &DecisionConfig,
) -> Result<Vec<SearchStep>, DecisionError> {
    let mut path = Vec::new();
    walk(
        credit_modifier,
        requested_amount,
        requested_period,
        config,
        |step| path.push(step),
    )?;
    Ok(path)
}

/// Run the walk, reporting each visited point, and return the final period.
fn walk<F>(
    credit_modifier: u32,
    mut loan_amount: u32,
    mut loan_period: u32,
    config: &DecisionConfig,
    mut visit: F,
) -> Result<u32, DecisionError>
where
    F: FnMut(SearchStep),
{
    if credit_modifier == 0 {
        return Err(DecisionError::NoValidLoan);
    }

    let mut movement = SearchMove::Start;
    loop {
        let score = credit_score(credit_modifier, loan_amount, loan_period);
        visit(SearchStep {
            movement,
            loan_amount,
            loan_period,
            credit_score: score,
        });

        if score >= APPROVAL_THRESHOLD {
            return Ok(loan_period);
        }

        if loan_amount > config.min_loan_amount {
            loan_amount = loan_amount.saturating_sub(config.loan_amount_step.max(1));
            movement = SearchMove::DecreaseAmount;
        } else if loan_period < config.max_loan_period {
            loan_period += 1;
            movement = SearchMove::ExtendPeriod;
        } else {
            return Err(DecisionError::NoValidLoan);
        }
    }
}
