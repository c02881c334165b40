//! HTTP surface for the tracking issuance service.
//!
//! Thin pass-through layer: query parameters land in
//! [`IssuanceParams`] untyped, so parsing and field-level error reporting
//! stay in the core validator. Issuance failures map to status codes the
//! way the service contract defines them: validation problems are the
//! caller's (400), collision exhaustion and store faults are ours (500,
//! without leaking store internals).

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::Service;
use tracknum_core::issuance::{
    TrackingApiDefaultStack,
    api::{IssuanceParams, TrackingRequest, TrackingResponse},
    error::TrackingError,
    init_tracking,
    record::TrackingRecord,
};

/// Builds the application router with a fresh in-memory store.
pub fn app() -> Router {
    app_with_service(init_tracking())
}

/// Builds the application router on top of an existing service stack.
pub fn app_with_service(tracking: TrackingApiDefaultStack) -> Router {
    Router::new()
        .route("/next-tracking-number", get(next_tracking_number))
        .route("/tracking-numbers", get(list_tracking_numbers))
        .with_state(tracking)
}

#[derive(Debug, Serialize)]
struct IssuedBody {
    tracking_number: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// `GET /next-tracking-number` — issue a unique tracking number.
async fn next_tracking_number(
    State(mut tracking): State<TrackingApiDefaultStack>,
    Query(params): Query<IssuanceParams>,
) -> Result<(StatusCode, Json<IssuedBody>), ApiError> {
    match tracking.call(TrackingRequest::Issue(params)).await? {
        TrackingResponse::Issued { tracking_number, created_at } => {
            tracing::info!("issued tracking number {tracking_number}");
            Ok((StatusCode::CREATED, Json(IssuedBody { tracking_number, created_at })))
        }
        _ => Err(ApiError(TrackingError::InternalIssuanceError)),
    }
}

/// `GET /tracking-numbers` — list every persisted record.
async fn list_tracking_numbers(
    State(mut tracking): State<TrackingApiDefaultStack>,
) -> Result<Json<Vec<TrackingRecord>>, ApiError> {
    match tracking.call(TrackingRequest::List).await? {
        TrackingResponse::Records(records) => Ok(Json(records)),
        _ => Err(ApiError(TrackingError::InternalIssuanceError)),
    }
}

/// Wrapper mapping core errors onto HTTP responses.
struct ApiError(TrackingError);

impl From<TrackingError> for ApiError {
    fn from(err: TrackingError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match &self.0 {
            TrackingError::MissingFields(_) | TrackingError::InvalidField(_) => {
                (StatusCode::BAD_REQUEST, self.0.to_string())
            }
            TrackingError::ExhaustedRetries => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "a unique tracking number could not be generated due to a collision, please try again"
                    .to_owned(),
            ),
            _ => {
                tracing::error!("issuance failed: {}", self.0);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            }
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;

    const ISSUE_URI: &str = "/next-tracking-number?origin_country_id=US&destination_country_id=DE\
                             &weight=2.5&customer_id=de619854-b59b-425e-9db4-943979e1bd49\
                             &customer_name=Acme%20Corp";

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn integration_http_issue_then_list() {
        let app = app();

        let response = app
            .clone()
            .oneshot(Request::builder().uri(ISSUE_URI).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        let tracking_number = body["tracking_number"].as_str().unwrap().to_owned();
        assert!(tracking_number.starts_with("USDE2500"));
        assert!(body["created_at"].as_str().is_some());

        let response = app
            .oneshot(Request::builder().uri("/tracking-numbers").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let records = body.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["tracking_number"], tracking_number.as_str());
        assert_eq!(records[0]["customer_slug"], "acme-corp");
    }

    #[tokio::test]
    async fn integration_http_missing_parameters_reported() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/next-tracking-number?origin_country_id=US")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        let error = body["error"].as_str().unwrap();
        assert!(error.contains("destination_country_id"));
        assert!(error.contains("weight"));
        assert!(error.contains("customer_id"));
        assert!(error.contains("customer_name"));
    }

    #[tokio::test]
    async fn integration_http_invalid_parameter_reported() {
        let uri = "/next-tracking-number?origin_country_id=US&destination_country_id=DE\
                   &weight=heavy&customer_id=de619854-b59b-425e-9db4-943979e1bd49\
                   &customer_name=Acme";
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("weight"));
    }

    #[tokio::test]
    async fn integration_http_empty_listing() {
        let response = app()
            .oneshot(Request::builder().uri("/tracking-numbers").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!([]));
    }
}
