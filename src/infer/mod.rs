//! 推理服务对接：HTTP 客户端与线上数据类型

pub mod client;
pub mod types;

pub use client::InferClient;
pub use types::{
    AnalyzeRequest, AnalyzeResponse, DebugInfo, FrameRequest, FrameResponse, JointAngles,
    PhaseDetail, TimingWindow,
};
