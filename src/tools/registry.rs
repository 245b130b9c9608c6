//! 工具注册表
//!
//! 所有工具实现 Tool trait（name / title / description / input_schema / execute），
//! 由 ToolRegistry 按名注册与查找；tools/list 的描述符直接由注册表渲染。

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::ToolError;

/// 工具 trait：静态描述符（供 tools/list）+ 异步执行（args 为 JSON 对象）
#[async_trait]
pub trait Tool: Send + Sync {
    /// 工具名称（tools/call 中的 "name" 字段）
    fn name(&self) -> &str;

    /// 简短标题（描述符的 "title" 字段）
    fn title(&self) -> &str;

    /// 工具描述（供调用方理解功能）
    fn description(&self) -> &str;

    /// 参数 JSON Schema；tools/call 在执行前据此校验
    /// 默认返回空对象，表示无参数
    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }

    /// fail-soft 边界的错误文案片段，如 "analyzing video" → "Error analyzing video: ..."
    fn failure_label(&self) -> &str;

    /// 执行工具
    async fn execute(&self, args: Value) -> Result<String, ToolError>;
}

/// 工具注册表：按名称存储 Arc<dyn Tool>，支持 register / get / descriptors
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, tool: impl Tool + 'static) {
        let name = tool.name().to_string();
        self.tools.insert(name, Arc::new(tool));
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    pub fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// tools/list 用的完整描述符列表（按名称排序，保证输出稳定）
    pub fn descriptors(&self) -> Vec<Value> {
        let mut tools: Vec<&Arc<dyn Tool>> = self.tools.values().collect();
        tools.sort_by(|a, b| a.name().cmp(b.name()));
        tools
            .iter()
            .map(|tool| {
                json!({
                    "name": tool.name(),
                    "title": tool.title(),
                    "description": tool.description(),
                    "inputSchema": tool.input_schema(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopTool;

    #[async_trait]
    impl Tool for NoopTool {
        fn name(&self) -> &str {
            "noop"
        }

        fn title(&self) -> &str {
            "No-op"
        }

        fn description(&self) -> &str {
            "Does nothing"
        }

        fn failure_label(&self) -> &str {
            "doing nothing"
        }

        async fn execute(&self, _args: Value) -> Result<String, ToolError> {
            Ok("done".to_string())
        }
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = ToolRegistry::new();
        registry.register(NoopTool);
        assert!(registry.get("noop").is_some());
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_descriptor_shape() {
        let mut registry = ToolRegistry::new();
        registry.register(NoopTool);
        let descriptors = registry.descriptors();
        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0]["name"], "noop");
        assert_eq!(descriptors[0]["inputSchema"]["type"], "object");
    }
}
