//! grab_frame 工具：按时间戳请求推理服务抽帧

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::ToolError;
use crate::infer::{FrameRequest, InferClient};
use crate::tools::Tool;

/// 视频抽帧工具
pub struct GrabFrameTool {
    infer: Arc<InferClient>,
}

impl GrabFrameTool {
    pub fn new(infer: Arc<InferClient>) -> Self {
        Self { infer }
    }
}

#[async_trait]
impl Tool for GrabFrameTool {
    fn name(&self) -> &str {
        "grab_frame"
    }

    fn title(&self) -> &str {
        "Extract a still frame from video"
    }

    fn description(&self) -> &str {
        "Extract and return information about a specific frame at a given timestamp \
         for detailed analysis."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "video_url": {
                    "type": "string",
                    "description": "URL to the video file"
                },
                "ms": {
                    "type": "number",
                    "description": "Timestamp in milliseconds to extract frame"
                }
            },
            "required": ["video_url", "ms"]
        })
    }

    fn failure_label(&self) -> &str {
        "extracting frame"
    }

    async fn execute(&self, args: Value) -> Result<String, ToolError> {
        let video_url = args
            .get("video_url")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ToolError::InvalidArgs("missing video_url".to_string()))?
            .to_string();
        let ms = args
            .get("ms")
            .and_then(|v| v.as_f64())
            .ok_or_else(|| ToolError::InvalidArgs("missing ms".to_string()))?;

        let req = FrameRequest { video_url, ms };
        tracing::info!(video_url = %req.video_url, ms, "frame request");
        let resp = self.infer.frame(&req).await?;

        Ok(format!(
            "Frame extracted at {}ms:\n- Timestamp: {}ms\n- Status: {}\n- Frame saved for analysis",
            ms, resp.timestamp_ms, resp.message
        ))
    }
}
