//! HTTP 路由：POST /mcp 接收 JSON-RPC 请求，GET /health 探活

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use super::handlers::Handlers;
use super::protocol::{JsonRpcRequest, JsonRpcResponse};

/// 创建 MCP 服务路由
pub fn create_router(handlers: Arc<Handlers>) -> Router {
    Router::new()
        .route("/mcp", post(handle_mcp))
        .route("/health", get(|| async { "OK" }))
        .with_state(handlers)
}

/// POST /mcp - 每次请求承载一个 JSON-RPC 调用（streamable HTTP 端点）
async fn handle_mcp(
    State(handlers): State<Arc<Handlers>>,
    Json(request): Json<JsonRpcRequest>,
) -> Json<JsonRpcResponse> {
    Json(handlers.handle_request(request).await)
}
