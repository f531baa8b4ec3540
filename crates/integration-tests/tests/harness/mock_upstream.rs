//! Mock upstream server for integration tests
//!
//! Serves both remote dependencies on one listener: an OpenAI-compatible
//! `/v1/audio/transcriptions` endpoint and a Perplexity-style
//! `/chat/completions` endpoint, each returning canned responses and counting
//! requests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

/// Mock for the transcription and chat completion upstreams
pub struct MockUpstream {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    transcript: String,
    chat_reply: String,
    /// Status returned by the transcription endpoint
    stt_status: u16,
    /// Status returned by the chat endpoint
    chat_status: u16,
    transcription_count: AtomicU32,
    completion_count: AtomicU32,
}

/// Canned behavior for a mock instance
pub struct MockBehavior {
    pub transcript: String,
    pub chat_reply: String,
    pub stt_status: u16,
    pub chat_status: u16,
}

impl Default for MockBehavior {
    fn default() -> Self {
        Self {
            transcript: "hello".to_string(),
            chat_reply: "Hello! How can I help?".to_string(),
            stt_status: 200,
            chat_status: 200,
        }
    }
}

impl MockUpstream {
    /// Start a mock returning the default canned responses
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_with(MockBehavior::default()).await
    }

    /// Start a mock whose chat endpoint fails with the given status
    pub async fn start_failing_chat(status: u16) -> anyhow::Result<Self> {
        Self::start_with(MockBehavior {
            chat_status: status,
            ..MockBehavior::default()
        })
        .await
    }

    /// Start a mock whose transcription endpoint fails with the given status
    pub async fn start_failing_stt(status: u16) -> anyhow::Result<Self> {
        Self::start_with(MockBehavior {
            stt_status: status,
            ..MockBehavior::default()
        })
        .await
    }

    /// Start a mock with fully custom behavior
    pub async fn start_with(behavior: MockBehavior) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            transcript: behavior.transcript,
            chat_reply: behavior.chat_reply,
            stt_status: behavior.stt_status,
            chat_status: behavior.chat_status,
            transcription_count: AtomicU32::new(0),
            completion_count: AtomicU32::new(0),
        });

        let app = Router::new()
            .route("/v1/audio/transcriptions", routing::post(handle_transcriptions))
            .route("/chat/completions", routing::post(handle_chat_completions))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for the stt provider (which appends `/audio/transcriptions`)
    pub fn stt_base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Base URL for the chat client (which appends `/chat/completions`)
    pub fn chat_base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of transcription requests received
    pub fn transcription_count(&self) -> u32 {
        self.state.transcription_count.load(Ordering::Relaxed)
    }

    /// Number of chat completion requests received
    pub fn completion_count(&self) -> u32 {
        self.state.completion_count.load(Ordering::Relaxed)
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_transcriptions(State(state): State<Arc<MockState>>) -> axum::response::Response {
    state.transcription_count.fetch_add(1, Ordering::Relaxed);

    if state.stt_status != 200 {
        return (
            StatusCode::from_u16(state.stt_status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            "mock transcription failure",
        )
            .into_response();
    }

    Json(serde_json::json!({"text": state.transcript})).into_response()
}

async fn handle_chat_completions(State(state): State<Arc<MockState>>) -> axum::response::Response {
    state.completion_count.fetch_add(1, Ordering::Relaxed);

    if state.chat_status != 200 {
        return (
            StatusCode::from_u16(state.chat_status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            "mock chat failure",
        )
            .into_response();
    }

    Json(serde_json::json!({
        "id": "mock-completion",
        "model": "sonar-pro",
        "choices": [
            {
                "index": 0,
                "message": {"role": "assistant", "content": state.chat_reply},
                "finish_reason": "stop"
            }
        ],
        "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
    }))
    .into_response()
}
