use std::sync::Arc;

use atende_agent::ChatRuntime;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub runtime: Arc<ChatRuntime>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequestBody {
    #[serde(default)]
    pub message: String,
    #[serde(rename = "sessionId", default)]
    pub session_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatResponseBody {
    pub success: bool,
    pub reply: String,
    #[serde(rename = "openForm")]
    pub open_form: bool,
    pub source: String,
    pub tokens: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub ai: HealthCheck,
    pub profile: HealthCheck,
    pub checked_at: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/health", get(health))
        .with_state(state)
}

pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequestBody>,
) -> Json<ChatResponseBody> {
    let reply = state.runtime.handle_message(&body.message, &body.session_id).await;

    info!(
        event_name = "http.chat.replied",
        source = %reply.source.tag(),
        open_form = reply.open_lead_form,
        tokens = reply.tokens,
        "chat request answered"
    );

    Json(ChatResponseBody {
        success: true,
        reply: reply.text,
        open_form: reply.open_lead_form,
        source: reply.source.tag(),
        tokens: reply.tokens,
    })
}

/// The rule-based tier cannot fail, so the service reports ready even when
/// the AI responder is out of play; the `ai` check carries the detail.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let ai = match state.runtime.ai_mode() {
        "ai" => HealthCheck { status: "ready", detail: "ai responder active".to_string() },
        "fallback_forced" => HealthCheck {
            status: "degraded",
            detail: "ai responder failed, rule-based replies forced".to_string(),
        },
        _ => HealthCheck {
            status: "disabled",
            detail: "no api key configured, rule-based replies only".to_string(),
        },
    };

    let profile = match state.runtime.profile_source() {
        Some(source) => {
            HealthCheck { status: "ready", detail: format!("profile acquired via {source}") }
        }
        None => HealthCheck {
            status: "pending",
            detail: "profile not yet acquired, first message will trigger it".to_string(),
        },
    };

    let payload = HealthResponse {
        status: "ready",
        service: HealthCheck {
            status: "ready",
            detail: "atende-server runtime initialized".to_string(),
        },
        ai,
        profile,
        checked_at: Utc::now().to_rfc3339(),
    };

    (StatusCode::OK, Json(payload))
}
