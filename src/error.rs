//! 工具层错误类型
//!
//! 所有工具执行失败统一收敛为 ToolError，在 tools/call 边界被转成文本响应，
//! 不会作为协议级错误或进程崩溃向外传播。

use thiserror::Error;

/// 工具执行过程中可能出现的错误（参数、传输、上游状态）
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    /// 出站请求的传输或解码失败
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// 上游返回非 2xx 状态（携带已格式化的人类可读信息）
    #[error("{0}")]
    Upstream(String),
}
