use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::Json;
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::decision::router::{decision_handler, DECISION_ROUTE};
use crate::decision::{decision_router, EstonianPersonalCodeValidator, FixedClock};

fn post_json(body: serde_json::Value) -> Request<Body> {
    Request::post(DECISION_ROUTE)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).expect("serializable")))
        .expect("request builds")
}

#[tokio::test]
async fn handler_returns_ok_for_approvals() {
    let engine = Arc::new(decision_engine());

    let response = decision_handler::<EstonianPersonalCodeValidator, FixedClock>(
        State(engine),
        Json(request(SEGMENT_3_CODE, 4000, 12)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["loan_amount"], 10000);
    assert_eq!(body["loan_period"], 12);
    assert!(body["error_message"].is_null());
}

#[tokio::test]
async fn route_reports_invalid_input_as_bad_request() {
    let router = decision_router(Arc::new(decision_engine()));

    let response = router
        .oneshot(post_json(json!({
            "personal_code": SEGMENT_1_CODE,
            "loan_amount": -500,
            "loan_period": 12,
        })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert!(body["loan_amount"].is_null());
    assert!(body["loan_period"].is_null());
    assert_eq!(body["error_message"], "Invalid loan amount!");
    assert_eq!(body["error_code"], "invalid_loan_amount");
}

#[tokio::test]
async fn route_reports_business_rejections_as_not_found() {
    let router = decision_router(Arc::new(decision_engine()));

    let response = router
        .oneshot(post_json(json!({
            "personal_code": DEBT_CODE,
            "loan_amount": 4000,
            "loan_period": 12,
        })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json_body(response).await;
    assert_eq!(body["error_message"], "No valid loan found!");
}

#[tokio::test]
async fn route_rejects_bodies_missing_fields() {
    let router = decision_router(Arc::new(decision_engine()));

    let response = router
        .oneshot(post_json(json!({ "personal_code": SEGMENT_1_CODE })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn route_reports_unknown_century_as_bad_request() {
    let router = decision_router(Arc::new(decision_engine()));

    let response = router
        .oneshot(post_json(json!({
            "personal_code": FUTURE_CENTURY_CODE,
            "loan_amount": 4000,
            "loan_period": 12,
        })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert!(body["loan_amount"].is_null());
    assert_eq!(body["error_message"], "Unknown first digit 8 in the personal code");
    assert_eq!(body["error_code"], "unrecognized_century_digit");
}
