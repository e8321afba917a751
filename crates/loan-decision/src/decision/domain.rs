use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::DecisionError;

/// A single loan application as received from a transport.
///
/// Amount and period are signed and unbounded here so out-of-range input reaches the
/// validator instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub personal_code: String,
    pub loan_amount: i64,
    pub loan_period: i64,
}

impl LoanRequest {
    pub fn new(personal_code: impl Into<String>, loan_amount: i64, loan_period: i64) -> Self {
        Self {
            personal_code: personal_code.into(),
            loan_amount,
            loan_period,
        }
    }
}

/// Credit-risk bucket derived from the last four digits of the identity code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditSegment {
    /// Applicant carries debt; never approvable.
    None,
    Segment1,
    Segment2,
    Segment3,
}

impl CreditSegment {
    /// Partition `0..10000` into four equal contiguous ranges.
    pub fn from_serial(serial: u32) -> Self {
        if serial < 2500 {
            CreditSegment::None
        } else if serial < 5000 {
            CreditSegment::Segment1
        } else if serial < 7500 {
            CreditSegment::Segment2
        } else {
            CreditSegment::Segment3
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CreditSegment::None => "Debt",
            CreditSegment::Segment1 => "Segment 1",
            CreditSegment::Segment2 => "Segment 2",
            CreditSegment::Segment3 => "Segment 3",
        }
    }
}

/// Facts derived from the identity code for one decision.
///
/// The credit modifier travels with the profile into the optimizer; nothing about an
/// applicant is kept on the engine between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreditProfile {
    pub birth_date: NaiveDate,
    pub age: i32,
    pub segment: CreditSegment,
    pub credit_modifier: u32,
}

/// Largest approvable amount at the period the optimizer settled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanOffer {
    pub loan_amount: u32,
    pub loan_period: u32,
}

/// Outcome of a decision. Amount and period are either both present or both absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Approved { loan_amount: u32, loan_period: u32 },
    Rejected { reason: DecisionError },
}

impl Decision {
    pub fn is_approved(&self) -> bool {
        matches!(self, Decision::Approved { .. })
    }

    pub fn loan_amount(&self) -> Option<u32> {
        match self {
            Decision::Approved { loan_amount, .. } => Some(*loan_amount),
            Decision::Rejected { .. } => None,
        }
    }

    pub fn loan_period(&self) -> Option<u32> {
        match self {
            Decision::Approved { loan_period, .. } => Some(*loan_period),
            Decision::Rejected { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<DecisionError> {
        match self {
            Decision::Approved { .. } => None,
            Decision::Rejected { reason } => Some(*reason),
        }
    }

    pub fn summary(&self) -> String {
        match self {
            Decision::Approved {
                loan_amount,
                loan_period,
            } => format!("approved {loan_amount} over {loan_period} months"),
            Decision::Rejected { reason } => format!("rejected: {reason}"),
        }
    }
}

impl From<Result<LoanOffer, DecisionError>> for Decision {
    fn from(value: Result<LoanOffer, DecisionError>) -> Self {
        match value {
            Ok(offer) => Decision::Approved {
                loan_amount: offer.loan_amount,
                loan_period: offer.loan_period,
            },
            Err(reason) => Decision::Rejected { reason },
        }
    }
}

/// Wire shape of a [`Decision`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionResponse {
    pub loan_amount: Option<u32>,
    pub loan_period: Option<u32>,
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl From<&Decision> for DecisionResponse {
    fn from(decision: &Decision) -> Self {
        let reason = decision.reason();
        Self {
            loan_amount: decision.loan_amount(),
            loan_period: decision.loan_period(),
            error_message: reason.map(|reason| reason.to_string()),
            error_code: reason.map(|reason| reason.code().to_string()),
        }
    }
}
