//! MCP 方法分发：initialize / tools/list / tools/call
//!
//! tools/call 是 fail-soft 边界：工具执行失败一律转成文本内容返回，协议层面仍是
//! 成功响应。只有协议性错误（未知方法、未知工具、参数不符 schema）使用 JSON-RPC
//! 错误对象；schema 校验先于任何副作用。每次调用输出一条结构化审计日志（JSON）。

use std::sync::Arc;
use std::time::Instant;

use serde_json::{json, Value};

use super::protocol::{error_codes, methods, JsonRpcId, JsonRpcRequest, JsonRpcResponse};
use crate::tools::{schema, ToolRegistry};

const SERVER_NAME: &str = "biomech-mcp";
const PROTOCOL_VERSION: &str = "2024-11-05";

/// 方法分发器：持有只读工具注册表
pub struct Handlers {
    registry: Arc<ToolRegistry>,
}

impl Handlers {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// 处理单个 JSON-RPC 请求
    pub async fn handle_request(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        match request.method.as_str() {
            methods::INITIALIZE => self.handle_initialize(request.id),
            methods::INITIALIZED => JsonRpcResponse::success(request.id, json!({})),
            methods::PING => JsonRpcResponse::success(request.id, json!({})),
            methods::TOOLS_LIST => self.handle_tools_list(request.id),
            methods::TOOLS_CALL => self.handle_tools_call(request.id, request.params).await,
            other => JsonRpcResponse::error(
                request.id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method not found: {}", other),
            ),
        }
    }

    fn handle_initialize(&self, id: Option<JsonRpcId>) -> JsonRpcResponse {
        tracing::info!("initialize request");
        JsonRpcResponse::success(
            id,
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": { "tools": {} },
                "serverInfo": {
                    "name": SERVER_NAME,
                    "version": env!("CARGO_PKG_VERSION"),
                }
            }),
        )
    }

    fn handle_tools_list(&self, id: Option<JsonRpcId>) -> JsonRpcResponse {
        JsonRpcResponse::success(id, json!({ "tools": self.registry.descriptors() }))
    }

    async fn handle_tools_call(
        &self,
        id: Option<JsonRpcId>,
        params: Option<Value>,
    ) -> JsonRpcResponse {
        let params = match params {
            Some(p) => p,
            None => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    "Missing params for tools/call",
                )
            }
        };
        let tool_name = match params.get("name").and_then(|v| v.as_str()) {
            Some(n) => n.to_string(),
            None => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    "Missing 'name' parameter in tools/call",
                )
            }
        };
        let arguments = params.get("arguments").cloned().unwrap_or_else(|| json!({}));

        let tool = match self.registry.get(&tool_name) {
            Some(t) => t,
            None => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::TOOL_NOT_FOUND,
                    format!("Unknown tool: {}", tool_name),
                )
            }
        };

        // schema 校验先于任何出站调用
        if let Err(reason) = schema::validate_args(&tool.input_schema(), &arguments) {
            return JsonRpcResponse::error(
                id,
                error_codes::INVALID_PARAMS,
                format!("Invalid arguments for {}: {}", tool_name, reason),
            );
        }

        let start = Instant::now();
        let args_preview = args_preview(&arguments);
        let result = tool.execute(arguments).await;

        let (ok, outcome) = match &result {
            Ok(_) => (true, "ok"),
            Err(_) => (false, "error"),
        };
        let audit = json!({
            "event": "tool_audit",
            "tool": tool_name,
            "ok": ok,
            "outcome": outcome,
            "duration_ms": start.elapsed().as_millis() as u64,
            "args_preview": args_preview,
        });
        tracing::info!(audit = %audit.to_string(), "tool");

        let text = match result {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(tool = %tool_name, error = %e, "tool execution failed");
                format!("Error {}: {}", tool.failure_label(), e)
            }
        };
        JsonRpcResponse::success(id, json!({ "content": [{ "type": "text", "text": text }] }))
    }
}

/// 审计日志里的参数预览（截断到 200 字符）
fn args_preview(args: &Value) -> String {
    let s = args.to_string();
    if s.len() > 200 {
        format!("{}...", s.chars().take(200).collect::<String>())
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infer::InferClient;
    use crate::tools;

    fn make_handlers() -> Handlers {
        // 指向一个不会被访问的地址；协议层测试不触发出站调用
        let infer = Arc::new(InferClient::new("http://127.0.0.1:1"));
        Handlers::new(Arc::new(tools::default_registry(infer)))
    }

    fn make_request(method: &str, params: Option<Value>) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(JsonRpcId::Number(1)),
            method: method.to_string(),
            params,
        }
    }

    #[tokio::test]
    async fn test_initialize_reports_protocol_version() {
        let handlers = make_handlers();
        let resp = handlers
            .handle_request(make_request("initialize", None))
            .await;
        let result = resp.result.unwrap();
        assert_eq!(result["protocolVersion"], "2024-11-05");
        assert_eq!(result["serverInfo"]["name"], "biomech-mcp");
    }

    #[tokio::test]
    async fn test_tools_list_exposes_four_tools() {
        let handlers = make_handlers();
        let resp = handlers
            .handle_request(make_request("tools/list", None))
            .await;
        let tools = resp.result.unwrap()["tools"].as_array().unwrap().clone();
        let names: Vec<&str> = tools
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec![
                "analyze_biomechanics",
                "grab_frame",
                "save_feedback",
                "search_technique_refs"
            ]
        );
    }

    #[tokio::test]
    async fn test_unknown_method_rejected() {
        let handlers = make_handlers();
        let resp = handlers
            .handle_request(make_request("resources/list", None))
            .await;
        assert_eq!(resp.error.unwrap().code, error_codes::METHOD_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_tool_rejected() {
        let handlers = make_handlers();
        let params = json!({ "name": "delete_athlete", "arguments": {} });
        let resp = handlers
            .handle_request(make_request("tools/call", Some(params)))
            .await;
        assert_eq!(resp.error.unwrap().code, error_codes::TOOL_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_missing_required_field_rejected_before_dispatch() {
        // infer 指向不可达地址：若校验没挡住，会得到 fail-soft 文本而不是参数错误
        let handlers = make_handlers();
        let params = json!({ "name": "analyze_biomechanics", "arguments": {} });
        let resp = handlers
            .handle_request(make_request("tools/call", Some(params)))
            .await;
        assert_eq!(resp.error.unwrap().code, error_codes::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_wrong_type_rejected_before_dispatch() {
        let handlers = make_handlers();
        let params = json!({
            "name": "grab_frame",
            "arguments": { "video_url": "http://v", "ms": "soon" }
        });
        let resp = handlers
            .handle_request(make_request("tools/call", Some(params)))
            .await;
        assert_eq!(resp.error.unwrap().code, error_codes::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_search_refs_through_dispatch() {
        let handlers = make_handlers();
        let params = json!({
            "name": "search_technique_refs",
            "arguments": { "query": "bar path", "limit": 2 }
        });
        let resp = handlers
            .handle_request(make_request("tools/call", Some(params)))
            .await;
        assert!(resp.error.is_none());
        let result = resp.result.unwrap();
        let content = result["content"].as_array().unwrap();
        assert_eq!(content.len(), 1);
        assert_eq!(content[0]["type"], "text");
        let text = content[0]["text"].as_str().unwrap();
        assert!(text.starts_with("Found 2 reference(s) for \"bar path\":"));
    }

    #[tokio::test]
    async fn test_save_feedback_through_dispatch() {
        let handlers = make_handlers();
        let params = json!({
            "name": "save_feedback",
            "arguments": {
                "athlete_id": "A1",
                "feedback_md": "solid",
                "session_date": "2024-01-01"
            }
        });
        let resp = handlers
            .handle_request(make_request("tools/call", Some(params)))
            .await;
        let result = resp.result.unwrap();
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("feedback_A1_2024-01-01.md"));
    }

    #[tokio::test]
    async fn test_ping_returns_empty_object() {
        let handlers = make_handlers();
        let resp = handlers.handle_request(make_request("ping", None)).await;
        assert_eq!(resp.result.unwrap(), json!({}));
    }
}
