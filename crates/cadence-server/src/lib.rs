//! Cadence server library logic.

pub mod api;
pub mod api_ws;
pub mod config;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Extension, Json, Router,
};
use cadence_analysis::{classify, detect, AnalysisError, PreferenceStore, ToneAnalyzer};
use cadence_types::AnalysisResult;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across all request handlers.
///
/// Both fields are built once at startup and never mutated afterwards, so
/// the whole state is shared via a single `Arc` with no locking.
pub struct AppState {
    /// Registered users and their speaking preferences.
    pub prefs: PreferenceStore,
    /// Shared sentiment scorer.
    pub tone: ToneAnalyzer,
}

impl AppState {
    /// Builds application state from loaded configuration.
    pub fn from_config(config: &config::Config) -> Self {
        Self {
            prefs: PreferenceStore::new(config.users.iter().cloned().map(Into::into)),
            tone: ToneAnalyzer::new(),
        }
    }
}

/// Runs one full analysis pass for a user over a piece of text.
///
/// Looks up the user's preferences, classifies context, scores tone, and
/// detects fillers. The unknown-user check runs before any analysis so a
/// misconfigured caller never receives a partially defaulted result.
pub fn run_analysis(
    state: &AppState,
    user: &str,
    text: &str,
) -> Result<AnalysisResult, AnalysisError> {
    let pref = state.prefs.get(user)?;
    let context = classify(text);
    let (tone, tone_score) = state.tone.score(text)?;
    let filler_feedback = detect(text, pref);

    Ok(AnalysisResult {
        context,
        tone,
        tone_score,
        filler_feedback,
    })
}

/// Maximum request body size (64 KiB). Analysis inputs are short text
/// snippets; anything larger is rejected before the handler runs.
const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;

/// Health check handler.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Builds the application router with all routes.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/analyze", post(api::analyze_handler))
        .route("/ws", get(api_ws::ws_handler))
        .layer(Extension(state))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_types::{ContextLabel, ToneLabel};

    fn test_state() -> AppState {
        AppState::from_config(&config::Config::default())
    }

    #[test]
    fn run_analysis_combines_all_components() {
        let state = test_state();
        let result = run_analysis(
            &state,
            "User1",
            "I think, um, this project meeting is great",
        )
        .unwrap();

        assert_eq!(result.context, ContextLabel::Formal);
        assert_eq!(result.tone, ToneLabel::Positive);
        assert!(result.tone_score >= 0.05);
        assert!(result.filler_feedback.contains("um"));
    }

    #[test]
    fn run_analysis_unknown_user_fails_before_analysis() {
        let state = test_state();
        let err = run_analysis(&state, "nobody", "hello there").unwrap_err();
        assert!(matches!(err, AnalysisError::UnknownUser(ref id) if id == "nobody"));
    }

    #[test]
    fn run_analysis_respects_the_stock_allow_lists() {
        let state = test_state();

        // User2 allows "like" and "you know"; "um" is still flagged.
        let result = run_analysis(&state, "User2", "um, you know, this is like fine").unwrap();
        assert!(result.filler_feedback.contains("um"));
        assert!(!result.filler_feedback.contains("like"));
        assert!(!result.filler_feedback.contains("you know"));

        // User1 has no allow-list, so all three are flagged.
        let result = run_analysis(&state, "User1", "um, you know, this is like fine").unwrap();
        assert!(result.filler_feedback.contains("um"));
        assert!(result.filler_feedback.contains("like"));
        assert!(result.filler_feedback.contains("you know"));
    }

    #[test]
    fn run_analysis_is_deterministic_for_identical_input() {
        let state = test_state();
        let first = run_analysis(&state, "User1", "the client strategy is solid").unwrap();
        let second = run_analysis(&state, "User1", "the client strategy is solid").unwrap();
        assert_eq!(first, second);
    }
}
