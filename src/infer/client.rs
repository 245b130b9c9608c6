//! 推理服务 HTTP 客户端
//!
//! 只有两个端点：POST /analyze 与 POST /frame。按规约不设置请求超时，
//! 上游无响应时该次调用一直挂起。

use reqwest::Client;

use super::types::{AnalyzeRequest, AnalyzeResponse, FrameRequest, FrameResponse};
use crate::error::ToolError;

/// 推理服务客户端：持有连接池与 base_url
#[derive(Debug, Clone)]
pub struct InferClient {
    client: Client,
    base_url: String,
}

impl InferClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST /analyze：非 2xx 时带状态码返回 Upstream 错误
    pub async fn analyze(&self, req: &AnalyzeRequest) -> Result<AnalyzeResponse, ToolError> {
        let resp = self
            .client
            .post(format!("{}/analyze", self.base_url))
            .json(req)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ToolError::Upstream(format!(
                "analysis failed: HTTP {}",
                resp.status()
            )));
        }
        Ok(resp.json().await?)
    }

    /// POST /frame
    pub async fn frame(&self, req: &FrameRequest) -> Result<FrameResponse, ToolError> {
        let resp = self
            .client
            .post(format!("{}/frame", self.base_url))
            .json(req)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ToolError::Upstream(format!(
                "frame extraction failed: HTTP {}",
                resp.status()
            )));
        }
        Ok(resp.json().await?)
    }
}
