use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};

use super::clock::Clock;
use super::domain::{Decision, DecisionResponse, LoanRequest};
use super::engine::DecisionEngine;
use super::error::RejectionKind;
use super::identity::IdentityCodeValidator;

pub const DECISION_ROUTE: &str = "/api/loan/decision";

/// Router exposing the decision engine over HTTP.
pub fn decision_router<V, C>(engine: Arc<DecisionEngine<V, C>>) -> Router
where
    V: IdentityCodeValidator + 'static,
    C: Clock + 'static,
{
    Router::new()
        .route(DECISION_ROUTE, post(decision_handler::<V, C>))
        .with_state(engine)
}

pub(crate) async fn decision_handler<V, C>(
    State(engine): State<Arc<DecisionEngine<V, C>>>,
    Json(request): Json<LoanRequest>,
) -> Response
where
    V: IdentityCodeValidator + 'static,
    C: Clock + 'static,
{
    let decision = engine.evaluate(&request);
    let status = status_for(&decision);
    (status, Json(DecisionResponse::from(&decision))).into_response()
}

/// Approvals are 200, malformed input 400, and business rejections 404.
pub fn status_for(decision: &Decision) -> StatusCode {
    match decision.reason().map(|reason| reason.kind()) {
        None => StatusCode::OK,
        Some(RejectionKind::InvalidInput) => StatusCode::BAD_REQUEST,
        Some(RejectionKind::Ineligible) => StatusCode::NOT_FOUND,
    }
}
