//! 推理服务线上数据类型
//!
//! 与 infer 服务的 /analyze、/frame JSON 协议对应；响应中未声明的字段一律忽略。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// POST /analyze 请求体；focus 省略时仍序列化为空列表，而不是缺字段
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest {
    pub video_url: String,
    pub phases: Vec<String>,
    pub focus: Vec<String>,
}

/// POST /analyze 响应体
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeResponse {
    pub overview: String,
    #[serde(default)]
    pub phases: BTreeMap<String, PhaseDetail>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    pub debug: Option<DebugInfo>,
}

/// 单个动作阶段的分析明细；除 notes 外均可缺省
#[derive(Debug, Clone, Deserialize)]
pub struct PhaseDetail {
    #[serde(default)]
    pub notes: String,
    pub timing: Option<TimingWindow>,
    pub angles: Option<JointAngles>,
    pub key_points: Option<Vec<String>>,
}

/// 阶段时间窗（毫秒）
#[derive(Debug, Clone, Deserialize)]
pub struct TimingWindow {
    pub start_ms: f64,
    pub end_ms: f64,
}

/// 关节角度（度）；上游会给 ankle，渲染时只展示 hip 与 knee
#[derive(Debug, Clone, Deserialize)]
pub struct JointAngles {
    pub hip: f64,
    pub knee: f64,
    pub ankle: Option<f64>,
}

/// debug 段：目前只关心 focus_areas
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DebugInfo {
    #[serde(default)]
    pub focus_areas: Vec<String>,
}

/// POST /frame 请求体
#[derive(Debug, Clone, Serialize)]
pub struct FrameRequest {
    pub video_url: String,
    pub ms: f64,
}

/// POST /frame 响应体（frame_path 等额外字段忽略）
#[derive(Debug, Clone, Deserialize)]
pub struct FrameResponse {
    pub timestamp_ms: f64,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_analyze_response_tolerates_sparse_phases() {
        let data: AnalyzeResponse = serde_json::from_value(json!({
            "overview": "ok",
            "phases": { "setup": { "notes": "n" } },
            "recommendations": ["r1"]
        }))
        .unwrap();
        assert_eq!(data.phases["setup"].notes, "n");
        assert!(data.phases["setup"].timing.is_none());
        assert!(data.debug.is_none());
    }

    #[test]
    fn test_analyze_request_always_carries_focus() {
        let req = AnalyzeRequest {
            video_url: "http://example.com/v.mp4".to_string(),
            phases: vec!["setup".to_string()],
            focus: Vec::new(),
        };
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["focus"], json!([]));
    }

    #[test]
    fn test_frame_response_ignores_extra_fields() {
        let data: FrameResponse = serde_json::from_value(json!({
            "timestamp_ms": 2500,
            "frame_path": "/tmp/frame_2500ms.jpg",
            "message": "Frame extracted at 2500ms"
        }))
        .unwrap();
        assert_eq!(data.timestamp_ms, 2500.0);
    }
}
