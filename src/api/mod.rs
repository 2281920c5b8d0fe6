//! HTTP API handlers

use crate::app::api::{PredictionRequest, PredictionResponse, ValidationError};
use crate::config::Config;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
    pub started: Instant,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.prediction.timeout_secs))
            .build()?;

        Ok(Self {
            config: Arc::new(config),
            http,
            started: Instant::now(),
        })
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("prediction service unreachable: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("prediction service returned {0}")]
    UpstreamStatus(reqwest::StatusCode),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Invalid(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) | ApiError::UpstreamStatus(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

/// Error response
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!("Prediction proxy failed: {}", self);
        } else {
            tracing::debug!("Rejected prediction request: {}", self);
        }
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// General status response
#[derive(Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub git_sha: &'static str,
    pub uptime_secs: u64,
    pub prediction_endpoint: String,
}

/// GET /status - Service health check
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "cardio-predict",
        version: env!("CP_VERSION"),
        git_sha: env!("CP_GIT_SHA"),
        uptime_secs: state.started.elapsed().as_secs(),
        prediction_endpoint: state.config.prediction.endpoint.clone(),
    })
}

/// POST /api/predict - Validate and forward to the prediction service
pub async fn predict_handler(
    State(state): State<AppState>,
    Json(request): Json<PredictionRequest>,
) -> Result<Json<PredictionResponse>, ApiError> {
    request.validate()?;

    let endpoint = &state.config.prediction.endpoint;
    tracing::debug!("Forwarding prediction request to {}", endpoint);

    let resp = state.http.post(endpoint).json(&request).send().await?;
    if !resp.status().is_success() {
        return Err(ApiError::UpstreamStatus(resp.status()));
    }

    let prediction: PredictionResponse = resp.json().await?;
    tracing::info!(
        "Prediction: {} ({})",
        prediction.probability_percent(),
        prediction.risk_level.label()
    );
    Ok(Json(prediction))
}
