//! 工具参数校验
//!
//! 按描述符里的 JSON Schema 做轻量校验：required 键必须在场，已声明类型的字段
//! 必须匹配（string / number / array 及数组元素类型）。校验发生在任何出站请求之前。

use serde_json::Value;

/// 校验 args 是否满足 schema；失败返回人类可读原因
pub fn validate_args(schema: &Value, args: &Value) -> Result<(), String> {
    let obj = match args.as_object() {
        Some(o) => o,
        None => return Err("arguments must be a JSON object".to_string()),
    };

    if let Some(required) = schema.get("required").and_then(|v| v.as_array()) {
        for key in required.iter().filter_map(|v| v.as_str()) {
            match obj.get(key) {
                Some(v) if !v.is_null() => {}
                _ => return Err(format!("missing required field: {}", key)),
            }
        }
    }

    let props = match schema.get("properties").and_then(|v| v.as_object()) {
        Some(p) => p,
        None => return Ok(()),
    };
    for (key, spec) in props {
        let value = match obj.get(key) {
            Some(v) if !v.is_null() => v,
            // 可选字段缺席或显式 null 都视为未传
            _ => continue,
        };
        let ty = match spec.get("type").and_then(|v| v.as_str()) {
            Some(t) => t,
            None => continue,
        };
        if !type_matches(ty, value) {
            return Err(format!("field '{}' must be of type {}", key, ty));
        }
        if ty == "array" {
            let item_ty = spec
                .get("items")
                .and_then(|i| i.get("type"))
                .and_then(|v| v.as_str());
            if let (Some(item_ty), Some(items)) = (item_ty, value.as_array()) {
                for (idx, item) in items.iter().enumerate() {
                    if !type_matches(item_ty, item) {
                        return Err(format!(
                            "field '{}' item {} must be of type {}",
                            key, idx, item_ty
                        ));
                    }
                }
            }
        }
    }
    Ok(())
}

fn type_matches(ty: &str, value: &Value) -> bool {
    match ty {
        "string" => value.is_string(),
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64(),
        "boolean" => value.is_boolean(),
        "array" => value.is_array(),
        "object" => value.is_object(),
        _ => true,
    }
}
