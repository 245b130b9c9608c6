//! save_feedback 工具：保存教练对运动员的反馈
//!
//! 目前是占位持久化：只记一条结构化日志，不落盘。文件名与日期是确定性的，
//! 接入 Blob/数据库后沿用同一命名。

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{json, Value};

use crate::error::ToolError;
use crate::tools::Tool;

/// 教练反馈保存工具（占位实现）
pub struct SaveFeedbackTool;

/// 反馈文件名：feedback_{athlete_id}_{date}.md
pub fn feedback_filename(athlete_id: &str, date: &str) -> String {
    format!("feedback_{}_{}.md", athlete_id, date)
}

#[async_trait]
impl Tool for SaveFeedbackTool {
    fn name(&self) -> &str {
        "save_feedback"
    }

    fn title(&self) -> &str {
        "Save coaching feedback for athlete"
    }

    fn description(&self) -> &str {
        "Persist analysis summary and recommendations for a specific athlete \
         for future reference and progress tracking."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "athlete_id": {
                    "type": "string",
                    "description": "Unique identifier for the athlete"
                },
                "feedback_md": {
                    "type": "string",
                    "description": "Markdown-formatted feedback and recommendations"
                },
                "session_date": {
                    "type": "string",
                    "description": "Date of the training session (YYYY-MM-DD)"
                }
            },
            "required": ["athlete_id", "feedback_md"]
        })
    }

    fn failure_label(&self) -> &str {
        "saving feedback"
    }

    async fn execute(&self, args: Value) -> Result<String, ToolError> {
        let athlete_id = args
            .get("athlete_id")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ToolError::InvalidArgs("missing athlete_id".to_string()))?;
        let feedback_md = args
            .get("feedback_md")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ToolError::InvalidArgs("missing feedback_md".to_string()))?;
        let date = args
            .get("session_date")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string());

        let filename = feedback_filename(athlete_id, &date);
        let chars = feedback_md.chars().count();
        // 占位持久化：接入真实存储前只记录
        tracing::info!(athlete_id, filename = %filename, chars, "saving feedback");

        Ok(format!(
            "✓ Feedback saved for athlete {}\n- File: {}\n- Date: {}\n- Length: {} characters",
            athlete_id, filename, date, chars
        ))
    }
}
