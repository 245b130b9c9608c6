//! Biomech MCP - 生物力学分析工具网关
//!
//! 模块划分：
//! - **config**: 应用配置加载（TOML + 环境变量）
//! - **error**: 工具层错误类型（fail-soft 边界的输入）
//! - **infer**: 推理服务 HTTP 客户端与线上数据类型
//! - **observability**: tracing 日志初始化
//! - **server**: MCP 协议层（JSON-RPC 类型、方法分发、HTTP 路由）
//! - **tools**: 工具箱（analyze、frame、feedback、refs）与注册表

pub mod config;
pub mod error;
pub mod infer;
pub mod observability;
pub mod server;
pub mod tools;
