//! Astra HTTP REST API
//!
//! Axum-based HTTP server exposing the advisory chat over JSON.
//!
//! Architecture: each endpoint has a thin axum handler that delegates to a
//! pure inner function returning `(StatusCode, serde_json::Value)`. The inner
//! functions are directly testable without axum dispatch machinery.
//!
//! Endpoints:
//! - GET  /health            — health check with generator backend info
//! - GET  /version           — server version info
//! - POST /chat              — one advisory exchange
//! - GET  /conversation/:id  — full conversation record

use std::sync::Arc;

use astra_core::{AstraConfig, AstraError, ConversationStore, ResponseGenerator};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::chat::{self, ChatError};

/// Shared state for all HTTP handlers
#[derive(Clone)]
pub struct HttpState {
    pub store: Arc<ConversationStore>,
    pub generator: Arc<dyn ResponseGenerator>,
}

/// Build the Axum router with all endpoints
pub fn build_router(state: Arc<HttpState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/version", get(version_handler))
        .route("/chat", post(chat_handler))
        .route("/conversation/:id", get(conversation_handler))
        .with_state(state)
}

/// Start the HTTP server on the configured address.
/// Gracefully shuts down when the broadcast shutdown signal fires.
pub async fn start_http_server(
    state: Arc<HttpState>,
    config: &AstraConfig,
    mut shutdown: broadcast::Receiver<()>,
) -> Result<(), AstraError> {
    let addr = format!("{}:{}", config.http.host, config.http.port);
    let app = build_router(state);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Astra HTTP API listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown.recv().await;
            tracing::info!("HTTP server shutting down...");
        })
        .await?;

    Ok(())
}

// ============================================================================
// Inner (directly testable) business logic functions
// ============================================================================

/// Inner health check — the store is infallible, so this only reports shape.
pub fn health_inner(state: &HttpState) -> (StatusCode, serde_json::Value) {
    (
        StatusCode::OK,
        json!({
            "status": "healthy",
            "version": env!("CARGO_PKG_VERSION"),
            "generator": state.generator.name(),
        }),
    )
}

/// Inner version — returns version info (pure, no IO).
pub fn version_inner() -> serde_json::Value {
    json!({
        "version": env!("CARGO_PKG_VERSION"),
        "protocol": "astra/1",
    })
}

/// Inner chat — validates the raw body and runs the advisory exchange.
pub async fn chat_inner(
    state: &HttpState,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let command = match chat::parse_chat_request(&body) {
        Ok(command) => command,
        Err(e) => return chat_error_to_http(e),
    };

    match chat::handle_chat(&state.store, state.generator.as_ref(), command).await {
        Ok(outcome) => match serde_json::to_value(&outcome) {
            Ok(value) => (StatusCode::OK, value),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": e.to_string() }),
            ),
        },
        Err(e) => chat_error_to_http(e),
    }
}

/// Inner conversation lookup. Ids that are not UUIDs cannot name a stored
/// conversation, so they report not-found like any other miss.
pub async fn conversation_inner(
    state: &HttpState,
    id: &str,
) -> (StatusCode, serde_json::Value) {
    let not_found = || {
        (
            StatusCode::NOT_FOUND,
            json!({ "error": "Conversation not found" }),
        )
    };

    let Ok(id) = Uuid::parse_str(id) else {
        return not_found();
    };

    match state.store.conversation(id).await {
        Some(conversation) => match serde_json::to_value(&conversation) {
            Ok(value) => (StatusCode::OK, value),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": e.to_string() }),
            ),
        },
        None => not_found(),
    }
}

fn chat_error_to_http(error: ChatError) -> (StatusCode, serde_json::Value) {
    match error {
        ChatError::Validation(issues) => (
            StatusCode::BAD_REQUEST,
            json!({ "error": "Invalid request", "details": issues }),
        ),
        ChatError::ConversationNotFound(_) => (
            StatusCode::NOT_FOUND,
            json!({ "error": "Conversation not found" }),
        ),
        ChatError::Configuration(message) | ChatError::Generation(message) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "error": message }),
        ),
        ChatError::Store(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "error": e.to_string() }),
        ),
    }
}

// ============================================================================
// Axum handler wrappers (thin — delegate to inner functions)
// ============================================================================

pub async fn health_handler(State(state): State<Arc<HttpState>>) -> impl IntoResponse {
    let (status, body) = health_inner(&state);
    (status, Json(body))
}

pub async fn version_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(version_inner()))
}

pub async fn chat_handler(
    State(state): State<Arc<HttpState>>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    let (status, body) = chat_inner(&state, body).await;
    (status, Json(body))
}

pub async fn conversation_handler(
    State(state): State<Arc<HttpState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let (status, body) = conversation_inner(&state, &id).await;
    (status, Json(body))
}

// ============================================================================
// Unit Tests — call inner functions directly
// ============================================================================
