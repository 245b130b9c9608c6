//! search_technique_refs 工具：技术参考资料检索
//!
//! 接入真正的检索服务前返回固定条目；limit 只截断，不排序（顺序即静态顺序）。

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::ToolError;
use crate::tools::Tool;

/// 单条参考资料
pub struct Reference {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub source: &'static str,
}

/// 静态参考集（接入检索服务前的固定数据）
pub const REFERENCES: [Reference; 3] = [
    Reference {
        title: "Bar Path Optimization in Olympic Lifts",
        excerpt: "Maintaining vertical bar path through proper lat engagement and timing...",
        source: "Coaching Manual Vol. 3",
    },
    Reference {
        title: "Clean Pull Technique Progressions",
        excerpt: "Building proper pulling mechanics through systematic drill progression...",
        source: "Movement Fundamentals",
    },
    Reference {
        title: "Front Rack Mobility and Positioning",
        excerpt: "Essential mobility requirements and correction exercises for front rack...",
        source: "Mobility Protocols",
    },
];

const DEFAULT_LIMIT: usize = 5;

/// 技术参考检索工具
pub struct SearchRefsTool;

#[async_trait]
impl Tool for SearchRefsTool {
    fn name(&self) -> &str {
        "search_technique_refs"
    }

    fn title(&self) -> &str {
        "Search technique reference materials"
    }

    fn description(&self) -> &str {
        "Search through coaching articles, technique guides, and reference materials \
         for specific movement patterns or corrections."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search query (e.g., 'bar path correction', 'clean pull technique', 'front rack mobility')"
                },
                "limit": {
                    "type": "number",
                    "description": "Maximum number of results to return"
                }
            },
            "required": ["query"]
        })
    }

    fn failure_label(&self) -> &str {
        "searching references"
    }

    async fn execute(&self, args: Value) -> Result<String, ToolError> {
        let query = args
            .get("query")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ToolError::InvalidArgs("missing query".to_string()))?;
        let limit = args
            .get("limit")
            .and_then(|v| v.as_u64())
            .map(|v| v as usize)
            .unwrap_or(DEFAULT_LIMIT);

        let results: Vec<String> = REFERENCES
            .iter()
            .take(limit)
            .enumerate()
            .map(|(idx, r)| {
                format!(
                    "**{}. {}**\n{}\n*Source: {}*",
                    idx + 1,
                    r.title,
                    r.excerpt,
                    r.source
                )
            })
            .collect();

        Ok(format!(
            "Found {} reference(s) for \"{}\":\n\n{}",
            results.len(),
            query,
            results.join("\n\n")
        ))
    }
}
