//! Loan decisions from a personal identity code and requested terms.
//!
//! A decision runs three stages in order and never calls back into an earlier one:
//! [`validation`] rejects malformed requests, [`demographics`] derives age and credit segment
//! from the code, and [`optimizer`] searches for the largest approvable amount/period pair.

pub mod clock;
mod config;
pub mod demographics;
mod domain;
mod engine;
mod error;
pub mod identity;
pub mod optimizer;
pub mod router;
pub mod validation;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{DecisionConfig, SegmentModifiers};
pub use domain::{
    CreditProfile, CreditSegment, Decision, DecisionResponse, LoanOffer, LoanRequest,
};
pub use engine::DecisionEngine;
pub use error::{DecisionError, RejectionKind};
pub use identity::{EstonianPersonalCodeValidator, IdentityCodeValidator};
pub use router::decision_router;
