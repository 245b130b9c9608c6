//! analyze_biomechanics 工具：整段视频的动作分析
//!
//! 一次出站请求（固定阶段列表 + 调用方 focus），成功后把结构化结果渲染成 Markdown。

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::ToolError;
use crate::infer::{AnalyzeRequest, InferClient};
use crate::tools::format::{render_analysis, PHASES};
use crate::tools::Tool;

/// 动作生物力学分析工具
pub struct AnalyzeTool {
    infer: Arc<InferClient>,
}

impl AnalyzeTool {
    pub fn new(infer: Arc<InferClient>) -> Self {
        Self { infer }
    }
}

#[async_trait]
impl Tool for AnalyzeTool {
    fn name(&self) -> &str {
        "analyze_biomechanics"
    }

    fn title(&self) -> &str {
        "Analyze movement biomechanics from video"
    }

    fn description(&self) -> &str {
        "Run pose estimation and bar path analysis on weightlifting/movement videos \
         to provide structured coaching feedback for defensive sports training."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "video_url": {
                    "type": "string",
                    "description": "SAS URL or public URL to the video file for analysis"
                },
                "focus": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Optional focus areas for analysis (e.g., 'bar path', 'receive', 'timing')"
                }
            },
            "required": ["video_url"]
        })
    }

    fn failure_label(&self) -> &str {
        "analyzing video"
    }

    async fn execute(&self, args: Value) -> Result<String, ToolError> {
        let video_url = args
            .get("video_url")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ToolError::InvalidArgs("missing video_url".to_string()))?
            .to_string();
        // focus 省略时仍发送空列表，而不是缺字段
        let focus: Vec<String> = args
            .get("focus")
            .and_then(|v| v.as_array())
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();

        let req = AnalyzeRequest {
            video_url,
            phases: PHASES.iter().map(|p| p.to_string()).collect(),
            focus,
        };
        tracing::info!(video_url = %req.video_url, focus = ?req.focus, "analyze request");
        let resp = self.infer.analyze(&req).await?;
        Ok(render_analysis(&resp))
    }
}
