//! 工具箱：analyze / frame / feedback / refs 四个 MCP 工具与注册表

pub mod analyze;
pub mod feedback;
pub mod format;
pub mod frame;
pub mod refs;
pub mod registry;
pub mod schema;

use std::sync::Arc;

use crate::infer::InferClient;

pub use analyze::AnalyzeTool;
pub use feedback::SaveFeedbackTool;
pub use frame::GrabFrameTool;
pub use refs::SearchRefsTool;
pub use registry::{Tool, ToolRegistry};

/// 构建网关的完整工具集（进程生命周期内不变）
pub fn default_registry(infer: Arc<InferClient>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(AnalyzeTool::new(infer.clone()));
    registry.register(GrabFrameTool::new(infer));
    registry.register(SaveFeedbackTool);
    registry.register(SearchRefsTool);
    registry
}
