//! WebSocket streaming analysis endpoint.
//!
//! Each inbound text frame carries one `<user>:<text>` request; each reply
//! frame carries the analysis result JSON. Errors are reported as error
//! frames and never close the channel; only the client closing (or a
//! transport failure) ends the session.

use crate::{run_analysis, AppState};
use axum::{
    extract::{
        ws::{Message, WebSocket},
        Extension, WebSocketUpgrade,
    },
    response::IntoResponse,
};
use cadence_analysis::AnalysisError;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

/// Splits an inbound frame into its user and text parts.
///
/// The separator is the first colon only, so the text may itself contain
/// colons. Frames without a colon are malformed.
pub fn parse_frame(frame: &str) -> Option<(&str, &str)> {
    frame.split_once(':')
}

/// Serializes an error frame payload.
fn error_frame(code: &str, message: &str) -> String {
    json!({
        "error": {
            "code": code,
            "message": message,
        }
    })
    .to_string()
}

/// Serializes an analysis failure as an error frame.
fn analysis_error_frame(err: &AnalysisError) -> String {
    let code = match err {
        AnalysisError::UnknownUser(_) => "unknown_user",
        AnalysisError::Scorer(_) => "scorer_failure",
    };
    error_frame(code, &err.to_string())
}

/// WebSocket handler: `GET /ws`.
pub async fn ws_handler(
    Extension(state): Extension<Arc<AppState>>,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handles one WebSocket connection.
///
/// Frames are processed strictly sequentially: receive, analyze, reply,
/// then receive again. The connection ID exists only for log correlation.
async fn handle_socket(mut socket: WebSocket, state: Arc<AppState>) {
    let connection_id = Uuid::new_v4();
    tracing::info!(%connection_id, "websocket connection opened");

    while let Some(Ok(msg)) = socket.recv().await {
        match msg {
            Message::Text(frame) => {
                let reply = match parse_frame(&frame) {
                    Some((user, text)) => match run_analysis(&state, user, text) {
                        Ok(result) => match serde_json::to_string(&result) {
                            Ok(body) => body,
                            Err(e) => {
                                tracing::error!(
                                    %connection_id,
                                    "failed to serialize analysis result: {}",
                                    e
                                );
                                error_frame("internal", "failed to serialize analysis result")
                            }
                        },
                        Err(err) => {
                            tracing::warn!(
                                %connection_id,
                                user = %user,
                                "analysis failed: {}",
                                err
                            );
                            analysis_error_frame(&err)
                        }
                    },
                    None => {
                        tracing::warn!(%connection_id, "malformed frame, expected <user>:<text>");
                        error_frame("malformed_frame", "expected frame format <user>:<text>")
                    }
                };

                if socket.send(Message::Text(reply.into())).await.is_err() {
                    break;
                }
            }
            Message::Close(_) => break,
            // Ping/pong are answered by axum; binary frames carry nothing
            // this protocol understands.
            _ => {}
        }
    }

    tracing::info!(%connection_id, "websocket connection closed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_splits_on_first_colon_only() {
        assert_eq!(
            parse_frame("User1:note: check the timing"),
            Some(("User1", "note: check the timing"))
        );
    }

    #[test]
    fn frame_without_colon_is_malformed() {
        assert_eq!(parse_frame("just some words"), None);
    }

    #[test]
    fn frame_with_empty_text_still_parses() {
        assert_eq!(parse_frame("User1:"), Some(("User1", "")));
    }

    #[test]
    fn error_frames_carry_code_and_message() {
        let frame = error_frame("malformed_frame", "expected frame format <user>:<text>");
        let parsed: serde_json::Value = serde_json::from_str(&frame).unwrap();
        assert_eq!(parsed["error"]["code"], "malformed_frame");
        assert_eq!(
            parsed["error"]["message"],
            "expected frame format <user>:<text>"
        );
    }

    #[test]
    fn unknown_user_error_frame_uses_stable_code() {
        let err = AnalysisError::UnknownUser("ghost".to_string());
        let parsed: serde_json::Value =
            serde_json::from_str(&analysis_error_frame(&err)).unwrap();
        assert_eq!(parsed["error"]["code"], "unknown_user");
        assert_eq!(parsed["error"]["message"], "unknown user: ghost");
    }

    #[test]
    fn scorer_error_frame_uses_stable_code() {
        let err = AnalysisError::Scorer("no compound score".to_string());
        let parsed: serde_json::Value =
            serde_json::from_str(&analysis_error_frame(&err)).unwrap();
        assert_eq!(parsed["error"]["code"], "scorer_failure");
    }
}
