//! One-shot HTTP analysis endpoint.

use crate::{run_analysis, AppState};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use cadence_analysis::AnalysisError;
use cadence_types::AnalysisResult;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// Request body for `POST /api/analyze`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Identifier of the registered user requesting feedback.
    pub user: String,
    /// The text to analyze.
    pub text: String,
}

/// Error response wrapper mapping analysis failures to HTTP statuses.
///
/// Bodies are `{"error": {"code", "message"}}`. Unknown users are a client
/// addressing problem (404), scorer failures are an upstream dependency
/// problem (502).
pub struct ApiError(pub AnalysisError);

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.0 {
            AnalysisError::UnknownUser(_) => StatusCode::NOT_FOUND,
            AnalysisError::Scorer(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Stable machine-readable error code for the response body.
    pub fn code(&self) -> &'static str {
        match self.0 {
            AnalysisError::UnknownUser(_) => "unknown_user",
            AnalysisError::Scorer(_) => "scorer_failure",
        }
    }
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": {
                "code": self.code(),
                "message": self.0.to_string(),
            }
        });
        (self.status(), Json(body)).into_response()
    }
}

/// `POST /api/analyze` — runs one analysis pass and returns the result.
pub async fn analyze_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let result = run_analysis(&state, &request.user, &request.text)?;

    tracing::debug!(
        user = %request.user,
        context = result.context.label(),
        tone = result.tone.label(),
        "analysis complete"
    );

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_user_maps_to_not_found() {
        let err = ApiError(AnalysisError::UnknownUser("ghost".to_string()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "unknown_user");
    }

    #[test]
    fn scorer_failure_maps_to_bad_gateway() {
        let err = ApiError(AnalysisError::Scorer("no compound score".to_string()));
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.code(), "scorer_failure");
    }
}
