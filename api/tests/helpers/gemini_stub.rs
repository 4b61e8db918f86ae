use std::net::SocketAddr;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub const STUB_API_KEY: &str = "test-key";
pub const STUB_MODEL: &str = "stub-model";

/// Canned replies for a local stand-in of the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiStub {
    /// Reply to generation prompts; `None` answers them with `503`.
    pub code_reply: Option<String>,
    /// Reply to the similarity judge prompt.
    pub judge_reply: String,
}

/// Spawns the stub on a random local port and returns its base URL.
pub async fn spawn_gemini_stub(stub: GeminiStub) -> String {
    let path = format!("/v1beta/models/{STUB_MODEL}:generateContent");
    let app = Router::new().route(&path, post(generate_content)).with_state(stub);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/v1beta")
}

async fn generate_content(
    State(stub): State<GeminiStub>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if headers.get("x-goog-api-key").and_then(|v| v.to_str().ok()) != Some(STUB_API_KEY) {
        return (StatusCode::UNAUTHORIZED, "bad key").into_response();
    }

    let persona = body["system_instruction"]["parts"][0]["text"]
        .as_str()
        .unwrap_or_default();
    let reply = if persona.contains("Code Diff Analyzer") {
        stub.judge_reply
    } else {
        match stub.code_reply {
            Some(code) => code,
            None => return (StatusCode::SERVICE_UNAVAILABLE, "overloaded").into_response(),
        }
    };

    Json(json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": reply}]},
            "finishReason": "STOP"
        }]
    }))
    .into_response()
}
