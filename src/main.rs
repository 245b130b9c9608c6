//! Biomech MCP 服务器入口
//!
//! 初始化日志与配置，注册工具集，在 /mcp 暴露 streamable HTTP 端点。

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;

use biomech_mcp::config::load_config;
use biomech_mcp::infer::InferClient;
use biomech_mcp::server::{create_router, Handlers};
use biomech_mcp::{observability, tools};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    observability::init();

    let cfg = load_config(None).unwrap_or_default();

    let infer = Arc::new(InferClient::new(cfg.infer.base_url.clone()));
    let registry = Arc::new(tools::default_registry(infer));
    let handlers = Arc::new(Handlers::new(registry));
    let app = create_router(handlers);

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.server.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Biomech MCP server running on port {}", cfg.server.port);
    tracing::info!(
        "Streamable HTTP endpoint: http://localhost:{}/mcp",
        cfg.server.port
    );
    tracing::info!("Inference service: {}", cfg.infer.base_url);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .context("Server run failed")?;

    Ok(())
}
