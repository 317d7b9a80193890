//! REST API server for the MSME assistant
//!
//! Exposes chat, the Maharashtra dataset, the calculators and generated
//! icons over HTTP for the web front end.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::agent::ChatOrchestrator;
use crate::calculators::{
    break_even, gst_split, loan_emi, working_capital, BreakEvenInput, GstInput, LoanInput,
    WorkingCapitalInput,
};
use crate::error::AssistantError;
use crate::fallback::NOT_CONFIGURED_TEXT;
use crate::icons;
use crate::models::{ChatRequest, LocalChatRequest};

const SVG_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

/// =============================
/// API State
/// =============================

#[derive(Clone)]
pub struct ApiState {
    pub orchestrator: Arc<ChatOrchestrator>,
}

/// =============================
/// Error Mapping
/// =============================

fn error_response(err: AssistantError) -> Response {
    match err {
        AssistantError::MissingMessage => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Message is required" })),
        )
            .into_response(),
        AssistantError::NotConfigured(detail) => {
            warn!("Chat request rejected: {}", detail);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "API key not configured",
                    "response": NOT_CONFIGURED_TEXT,
                })),
            )
                .into_response()
        }
        other => {
            warn!("Chat request failed: {}", other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": other.to_string() })),
            )
                .into_response()
        }
    }
}

/// =============================
/// Health Endpoint
/// =============================

async fn health(State(state): State<ApiState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "ai_configured": state.orchestrator.is_configured(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// =============================
/// Chat Endpoints
/// =============================

async fn chat_handler(State(state): State<ApiState>, Json(req): Json<ChatRequest>) -> Response {
    info!(model = %req.model, "Received chat request");

    match state.orchestrator.respond(req.message.as_deref(), req.model).await {
        Ok(reply) => (StatusCode::OK, Json(reply)).into_response(),
        Err(e) => error_response(e),
    }
}

async fn local_chat_handler(
    State(state): State<ApiState>,
    Json(req): Json<LocalChatRequest>,
) -> Response {
    info!(
        category = req.category.as_deref().unwrap_or("maharashtra"),
        "Received local chat request"
    );

    match state.orchestrator.respond_local(req.message.as_deref()).await {
        Ok(reply) => (StatusCode::OK, Json(reply)).into_response(),
        Err(e) => error_response(e),
    }
}

/// =============================
/// Calculator Endpoints
/// =============================

fn calculated<T: Serialize>(result: Option<T>) -> Response {
    match result {
        Some(result) => (StatusCode::OK, Json(result)).into_response(),
        None => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": "Inputs are outside the calculator's domain" })),
        )
            .into_response(),
    }
}

async fn loan_handler(Json(input): Json<LoanInput>) -> Response {
    calculated(loan_emi(&input))
}

async fn gst_handler(Json(input): Json<GstInput>) -> Response {
    calculated(gst_split(&input))
}

async fn working_capital_handler(Json(input): Json<WorkingCapitalInput>) -> Response {
    calculated(working_capital(&input))
}

async fn break_even_handler(Json(input): Json<BreakEvenInput>) -> Response {
    calculated(break_even(&input))
}

/// =============================
/// Icon Endpoints
/// =============================

#[derive(Debug, Deserialize)]
struct IconQuery {
    size: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OgQuery {
    title: Option<String>,
}

fn svg(body: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, SVG_CACHE_CONTROL),
        ],
        body,
    )
        .into_response()
}

async fn icon_handler(Query(query): Query<IconQuery>) -> Response {
    svg(icons::icon_svg(icons::parse_size(query.size.as_deref())))
}

async fn icon_192_handler() -> Response {
    svg(icons::app_icon_svg(192))
}

async fn icon_512_handler() -> Response {
    svg(icons::app_icon_svg(512))
}

async fn og_handler(Query(query): Query<OgQuery>) -> Response {
    svg(icons::og_image_svg(query.title.as_deref()))
}

/// =============================
/// Router
/// =============================

pub fn create_router(orchestrator: Arc<ChatOrchestrator>) -> Router {
    let state = ApiState { orchestrator };

    Router::new()
        .route("/health", get(health))
        .route("/api/chat", post(chat_handler))
        .route("/chat", post(chat_handler))
        .route("/api/local-chat", post(local_chat_handler))
        .route("/local-chat", post(local_chat_handler))
        .route("/api/calculators/loan", post(loan_handler))
        .route("/api/calculators/gst", post(gst_handler))
        .route("/api/calculators/working-capital", post(working_capital_handler))
        .route("/api/calculators/break-even", post(break_even_handler))
        .route("/api/icon", get(icon_handler))
        .route("/icon-192.png", get(icon_192_handler))
        .route("/icon-512.png", get(icon_512_handler))
        .route("/api/og", get(og_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// =============================
/// Server Startup
/// =============================

pub async fn start_server(
    orchestrator: Arc<ChatOrchestrator>,
    port: u16,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let router = create_router(orchestrator);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!("API Server listening on http://0.0.0.0:{}", port);
    info!("Local: http://127.0.0.1:{}", port);

    axum::serve(listener, router).await?;

    Ok(())
}
