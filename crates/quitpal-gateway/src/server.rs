use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use quitpal_core::{ProfilePayload, UserProfile};
use quitpal_engine::ChatSession;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::sanitize::Sanitizer;

/// Shared application state.
pub struct AppState {
    /// The single long-lived chat session.
    pub session: Arc<ChatSession>,
    /// Sanitizer applied to inbound chat messages.
    pub sanitizer: Sanitizer,
}

/// The main gateway server.
pub struct GatewayServer;

impl GatewayServer {
    /// Build the gateway router with the default sanitizer.
    pub fn build(session: Arc<ChatSession>) -> Router {
        Self::build_with_sanitizer(session, Sanitizer::default())
    }

    /// Build the gateway router with a custom sanitizer.
    pub fn build_with_sanitizer(session: Arc<ChatSession>, sanitizer: Sanitizer) -> Router {
        let state = Arc::new(AppState { session, sanitizer });

        // The browser frontend is served from another origin.
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/initialize", post(initialize_handler))
            .route("/chat", post(chat_handler))
            .route("/health", get(health_handler))
            .layer(cors)
            .with_state(state)
    }
}

#[derive(Debug, Serialize)]
struct InitializeResponse {
    message: String,
    user_data: UserProfile,
}

#[derive(Debug, Deserialize)]
struct ChatRequest {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Serialize)]
struct ChatResponse {
    response: String,
}

async fn health_handler() -> impl IntoResponse {
    serde_json::json!({"status": "ok", "service": "quitpal"}).to_string()
}

async fn initialize_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ProfilePayload>,
) -> Json<InitializeResponse> {
    let user_data = state.session.initialize(payload).await;
    info!(session_id = %state.session.id(), "session initialized");
    Json(InitializeResponse {
        message: "Session initialized".to_string(),
        user_data,
    })
}

async fn chat_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Response {
    let Some(message) = state.sanitizer.sanitize(&request.message).into_string() else {
        warn!(session_id = %state.session.id(), "rejected chat message at sanitization");
        return (StatusCode::BAD_REQUEST, "Message rejected: invalid content").into_response();
    };

    let response = state.session.respond(&message).await;
    Json(ChatResponse { response }).into_response()
}
