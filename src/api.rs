//! REST API server for the advisory toolkit
//!
//! Exposes the three advisory operations via HTTP endpoints
//! Integrates with the Spendify frontend

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::gateway::AdvisoryGateway;
use crate::tools::{budget, categorize, BudgetTool, CategorizerTool, ChatTool};

/// =============================
/// Request Models
/// =============================

#[derive(Debug, Deserialize)]
pub struct BudgetRequest {
    /// Raw income field as typed by the user; validated by the budget tool.
    pub income: String,
}

#[derive(Debug, Deserialize)]
pub struct CategorizeRequest {
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// =============================
/// Response Wrapper
/// =============================

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub data: Option<serde_json::Value>,
    pub error: Option<String>,
    pub timestamp: String,
}

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> Self {
        Self {
            success: true,
            data: serde_json::to_value(data).ok(),
            error: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// =============================
/// API State
/// =============================

#[derive(Clone)]
pub struct ApiState {
    pub gateway: Arc<AdvisoryGateway>,
    /// The chat tool is shared so the transcript, in-flight guard and
    /// rollback semantics hold across requests.
    pub chat: Arc<Mutex<ChatTool>>,
}

impl ApiState {
    pub fn new(gateway: Arc<AdvisoryGateway>) -> Self {
        let chat = Arc::new(Mutex::new(ChatTool::new(gateway.clone())));
        Self { gateway, chat }
    }
}

/// =============================
/// Health Endpoint
/// =============================

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// =============================
/// Tool Endpoints
/// =============================

async fn generate_budget(
    State(state): State<ApiState>,
    Json(req): Json<BudgetRequest>,
) -> (StatusCode, Json<ApiResponse>) {
    info!("Received budget request");

    let mut tool = BudgetTool::new(state.gateway.clone());
    tool.set_input(req.income);
    tool.submit().await;

    match (&tool.state().result, &tool.state().error) {
        (Some(items), _) => (
            StatusCode::OK,
            Json(ApiResponse::success(serde_json::json!({ "budget": items }))),
        ),
        (None, Some(message)) => {
            let status = if message.as_str() == budget::VALIDATION_MESSAGE {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, Json(ApiResponse::error(message.clone())))
        }
        (None, None) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Budget generation produced no result".to_string())),
        ),
    }
}

async fn categorize_expense(
    State(state): State<ApiState>,
    Json(req): Json<CategorizeRequest>,
) -> (StatusCode, Json<ApiResponse>) {
    info!("Received categorization request");

    let mut tool = CategorizerTool::new(state.gateway.clone());
    tool.set_input(req.description);
    tool.submit().await;

    match (&tool.state().result, &tool.state().error) {
        (Some(category), _) => (
            StatusCode::OK,
            Json(ApiResponse::success(serde_json::json!({ "category": category }))),
        ),
        (None, Some(message)) => {
            let status = if message.as_str() == categorize::VALIDATION_MESSAGE {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, Json(ApiResponse::error(message.clone())))
        }
        (None, None) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Categorization produced no result".to_string())),
        ),
    }
}

async fn chat(
    State(state): State<ApiState>,
    Json(req): Json<ChatRequest>,
) -> (StatusCode, Json<ApiResponse>) {
    info!("Received chat message");

    // Holding the lock across the provider call keeps at most one chat
    // request in flight.
    let mut tool = state.chat.lock().await;
    tool.set_input(req.message);
    tool.submit().await;

    if let Some(message) = tool.state().error.clone() {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(message)),
        );
    }

    (
        StatusCode::OK,
        Json(ApiResponse::success(serde_json::json!({
            "history": tool.history(),
        }))),
    )
}

/// =============================
/// Router
/// =============================

pub fn create_router(gateway: Arc<AdvisoryGateway>) -> Router {
    let state = ApiState::new(gateway);

    Router::new()
        .route("/health", axum::routing::get(health))
        .route("/api/budget", post(generate_budget))
        .route("/api/categorize", post(categorize_expense))
        .route("/api/chat", post(chat))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// =============================
/// Server Startup
/// =============================

pub async fn start_server(
    gateway: Arc<AdvisoryGateway>,
    port: u16,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let router = create_router(gateway);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!("API Server listening on http://0.0.0.0:{}", port);
    info!("Local: http://127.0.0.1:{}", port);

    axum::serve(listener, router).await?;

    Ok(())
}
