//! MCP 服务器：JSON-RPC 协议类型、方法分发与 HTTP 路由

pub mod handlers;
pub mod protocol;
pub mod router;

pub use handlers::Handlers;
pub use router::create_router;
