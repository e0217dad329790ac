//! Integration tests for the WebSocket streaming endpoint.
//!
//! These tests run a real server on an ephemeral port and drive it with a
//! WebSocket client, verifying that error frames are reported to the client
//! and that the channel survives every error.

use cadence_server::{app, config::Config, AppState};
use futures_util::{SinkExt, StreamExt};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message, MaybeTlsStream, WebSocketStream};

type WsClient = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

async fn setup_test_server() -> SocketAddr {
    let state = Arc::new(AppState::from_config(&Config::default()));
    let app = app(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

async fn connect(addr: SocketAddr) -> WsClient {
    let ws_url = format!("ws://{}/ws", addr);
    let (ws_stream, _) = connect_async(ws_url).await.expect("failed to connect");
    ws_stream
}

/// Sends one text frame and returns the parsed JSON reply.
async fn roundtrip(ws: &mut WsClient, frame: &str) -> serde_json::Value {
    ws.send(Message::Text(frame.to_string().into()))
        .await
        .expect("failed to send frame");

    let response = tokio::time::timeout(Duration::from_secs(5), ws.next())
        .await
        .expect("timeout waiting for response")
        .expect("connection closed")
        .expect("frame error");

    match response {
        Message::Text(text) => serde_json::from_str(&text).expect("failed to parse response JSON"),
        other => panic!("expected text message, got: {:?}", other),
    }
}

#[tokio::test]
async fn valid_frame_returns_analysis_result() {
    let addr = setup_test_server().await;
    let mut ws = connect(addr).await;

    let reply = roundtrip(&mut ws, "User1:um, the project meeting went great").await;

    assert_eq!(reply["context"], "Formal");
    assert_eq!(reply["tone"], "Positive");
    assert!(reply["tone_score"].as_f64().unwrap() >= 0.05);
    assert!(reply["filler_feedback"]
        .as_str()
        .unwrap()
        .contains("um"));
}

#[tokio::test]
async fn malformed_frame_reports_error_and_keeps_channel_open() {
    let addr = setup_test_server().await;
    let mut ws = connect(addr).await;

    let reply = roundtrip(&mut ws, "no separator here").await;
    assert_eq!(reply["error"]["code"], "malformed_frame");

    // The channel must still be usable after the error.
    let reply = roundtrip(&mut ws, "User1:the weather was unremarkable").await;
    assert_eq!(reply["context"], "General");
    assert_eq!(reply["filler_feedback"], "No filler words detected.");
}

#[tokio::test]
async fn unknown_user_reports_error_and_keeps_channel_open() {
    let addr = setup_test_server().await;
    let mut ws = connect(addr).await;

    let reply = roundtrip(&mut ws, "nobody:hello there").await;
    assert_eq!(reply["error"]["code"], "unknown_user");
    assert!(reply["error"]["message"]
        .as_str()
        .unwrap()
        .contains("nobody"));

    let reply = roundtrip(&mut ws, "User1:hello there").await;
    assert!(reply.get("error").is_none());
    assert!(reply.get("context").is_some());
}

#[tokio::test]
async fn text_containing_colons_splits_on_first_colon_only() {
    let addr = setup_test_server().await;
    let mut ws = connect(addr).await;

    // Everything after the first colon is analysis input, colons included.
    let reply = roundtrip(&mut ws, "User1:agenda: um, convince the client").await;

    assert_eq!(reply["context"], "Formal");
    assert!(reply["filler_feedback"]
        .as_str()
        .unwrap()
        .contains("um"));
}

#[tokio::test]
async fn allow_list_applies_per_frame_user() {
    let addr = setup_test_server().await;
    let mut ws = connect(addr).await;

    // Same text, different users on one connection.
    let reply = roundtrip(&mut ws, "User2:you know, this is like fine").await;
    assert_eq!(reply["filler_feedback"], "No filler words detected.");

    let reply = roundtrip(&mut ws, "User1:you know, this is like fine").await;
    let feedback = reply["filler_feedback"].as_str().unwrap();
    assert!(feedback.contains("you know"));
    assert!(feedback.contains("like"));
}

#[tokio::test]
async fn consecutive_frames_are_processed_in_order() {
    let addr = setup_test_server().await;
    let mut ws = connect(addr).await;

    let first = roundtrip(&mut ws, "User1:this is terrible and awful").await;
    assert_eq!(first["tone"], "Negative");

    let second = roundtrip(&mut ws, "User1:this is great and wonderful").await;
    assert_eq!(second["tone"], "Positive");

    let third = roundtrip(&mut ws, "User1:the train departs at noon").await;
    assert_eq!(third["tone"], "Neutral");
}

#[tokio::test]
async fn client_close_is_clean_shutdown() {
    let addr = setup_test_server().await;
    let mut ws = connect(addr).await;

    let reply = roundtrip(&mut ws, "User1:quick check").await;
    assert!(reply.get("context").is_some());

    // Closing must succeed without the server erroring the stream first.
    ws.close(None).await.expect("close handshake failed");
}
