use serde::Serialize;

/// Every way a loan request can be turned down.
///
/// The messages double as the user-facing rejection text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecisionError {
    #[error("Invalid personal ID code!")]
    InvalidIdentityCode,
    #[error("Invalid loan amount!")]
    InvalidLoanAmount,
    #[error("Invalid loan period!")]
    InvalidLoanPeriod,
    #[error("Unknown first digit {0} in the personal code")]
    UnrecognizedCenturyDigit(u32),
    #[error("Customer is ineligible for a loan due to age constraints.")]
    AgeIneligible,
    #[error("No valid loan found!")]
    NoValidLoan,
}

/// Coarse grouping used by transports to pick a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionKind {
    /// The request itself is malformed; resubmitting different input may help.
    InvalidInput,
    /// The request is well formed but the applicant cannot be offered a loan.
    Ineligible,
}

impl DecisionError {
    pub fn kind(&self) -> RejectionKind {
        match self {
            DecisionError::InvalidIdentityCode
            | DecisionError::InvalidLoanAmount
            | DecisionError::InvalidLoanPeriod
            | DecisionError::UnrecognizedCenturyDigit(_) => RejectionKind::InvalidInput,
            DecisionError::AgeIneligible | DecisionError::NoValidLoan => RejectionKind::Ineligible,
        }
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            DecisionError::InvalidIdentityCode => "invalid_identity_code",
            DecisionError::InvalidLoanAmount => "invalid_loan_amount",
            DecisionError::InvalidLoanPeriod => "invalid_loan_period",
            DecisionError::UnrecognizedCenturyDigit(_) => "unrecognized_century_digit",
            DecisionError::AgeIneligible => "age_ineligible",
            DecisionError::NoValidLoan => "no_valid_loan",
        }
    }
}
