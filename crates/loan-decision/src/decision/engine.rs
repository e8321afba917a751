use tracing::{debug, info, info_span};

use super::clock::{Clock, SystemClock};
use super::config::DecisionConfig;
use super::demographics::credit_profile;
use super::domain::{Decision, LoanOffer, LoanRequest};
use super::error::DecisionError;
use super::identity::{EstonianPersonalCodeValidator, IdentityCodeValidator};
use super::optimizer::optimize;
use super::validation::validate_request;

/// Stateless decision engine: validate, profile, then optimize.
///
/// Holds only immutable collaborators and limits, so one instance can serve concurrent
/// requests; every per-applicant value is threaded through the call.
#[derive(Debug, Clone)]
pub struct DecisionEngine<V = EstonianPersonalCodeValidator, C = SystemClock> {
    validator: V,
    clock: C,
    config: DecisionConfig,
}

impl DecisionEngine {
    pub fn new(config: DecisionConfig) -> Self {
        Self::with_collaborators(EstonianPersonalCodeValidator::new(), SystemClock, config)
    }
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::new(DecisionConfig::default())
    }
}

impl<V, C> DecisionEngine<V, C>
where
    V: IdentityCodeValidator,
    C: Clock,
{
    pub fn with_collaborators(validator: V, clock: C, config: DecisionConfig) -> Self {
        Self {
            validator,
            clock,
            config,
        }
    }

    pub fn config(&self) -> &DecisionConfig {
        &self.config
    }

    /// Decide on a loan for the given code and requested terms.
    pub fn decide(&self, personal_code: &str, loan_amount: i64, loan_period: i64) -> Decision {
        self.evaluate(&LoanRequest::new(personal_code, loan_amount, loan_period))
    }

    /// Decide on a request. Expected rejections come back as [`Decision::Rejected`].
    pub fn evaluate(&self, request: &LoanRequest) -> Decision {
        let span = info_span!(
            "loan_decision",
            loan_amount = request.loan_amount,
            loan_period = request.loan_period
        );
        let _entered = span.enter();

        let decision = Decision::from(self.try_evaluate(request));
        match &decision {
            Decision::Approved {
                loan_amount,
                loan_period,
            } => info!(
                approved_amount = loan_amount,
                approved_period = loan_period,
                "loan approved"
            ),
            Decision::Rejected { reason } => {
                info!(reason = reason.code(), kind = ?reason.kind(), "loan rejected")
            }
        }
        decision
    }

    fn try_evaluate(&self, request: &LoanRequest) -> Result<LoanOffer, DecisionError> {
        let terms = validate_request(request, &self.validator, &self.config)?;
        let profile = credit_profile(&request.personal_code, self.clock.today(), &self.config)?;

        debug!(
            age = profile.age,
            segment = profile.segment.label(),
            credit_modifier = profile.credit_modifier,
            "applicant profiled"
        );

        optimize(
            profile.credit_modifier,
            terms.loan_amount,
            terms.loan_period,
            &self.config,
        )
    }
}
