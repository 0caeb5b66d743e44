// HTTP layer: router, handlers and the mapping from domain errors to responses
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::error::ItineraryError;
use crate::models::{PathRequest, PathResponse, ValidationError};
use crate::service::FlightTracker;

const MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Path not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            Self::Internal(_) => {
                tracing::error!(error = %self, "internal server error");
                "An internal error occurred".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };
        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

// Every classification failure is reported to clients as "not found"
impl From<ItineraryError> for ApiError {
    fn from(err: ItineraryError) -> Self {
        if err.is_internal() {
            Self::Internal(err.to_string())
        } else {
            Self::NotFound(err.to_string())
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub tracker: Arc<dyn FlightTracker>,
    pub max_flights: usize,
}

impl AppState {
    pub fn new(tracker: Arc<dyn FlightTracker>, config: &ServerConfig) -> Self {
        Self {
            tracker,
            max_flights: config.max_flights,
        }
    }
}

/// Build the application router.
///
/// `POST /calculate` resolves an itinerary; `GET /health` is a liveness probe.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/calculate", post(calculate))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

// The body is decoded by hand so any malformed payload is a 400, whatever its content type.
async fn calculate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PathResponse>, ApiError> {
    let request: PathRequest = serde_json::from_slice(&body).map_err(|err| {
        warn!(error = %err, "error decoding JSON");
        ApiError::BadRequest(err.to_string())
    })?;

    if let Err(err) = request.validate(state.max_flights) {
        warn!(error = %err, "error validating request");
        return Err(err.into());
    }

    info!(flights = request.flights.len(), "calculating path");
    let itinerary = state.tracker.get_flights_path(request).await?;

    Ok(Json(itinerary.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_errors_are_not_found() {
        let errors = [
            ItineraryError::NoSourceFound,
            ItineraryError::NoSinkFound,
            ItineraryError::MultipleSinks {
                codes: vec!["LAX".to_string(), "EWR".to_string()],
            },
            ItineraryError::Disconnected {
                codes: vec!["XXX".to_string()],
            },
            ItineraryError::CircularOrIsolated {
                code: "AAA".to_string(),
            },
        ];

        for err in errors {
            let (status, code) = ApiError::from(err).status_and_code();
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(code, "NOT_FOUND");
        }
    }

    #[test]
    fn test_no_path_is_internal() {
        let (status, _) = ApiError::from(ItineraryError::NoPathFound).status_and_code();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_error_is_bad_request() {
        let (status, code) = ApiError::from(ValidationError::MissingFlights).status_and_code();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_internal_message_is_hidden() {
        let response = ApiError::Internal("stages disagree".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error.code, "INTERNAL_ERROR");
        assert_eq!(body.error.message, "An internal error occurred");
    }
}
