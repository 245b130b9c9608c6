//! 分析结果渲染：结构化响应 → 教练可读的 Markdown 文本

use crate::infer::{AnalyzeResponse, PhaseDetail};

/// 动作阶段的固定顺序（请求与渲染共用）
pub const PHASES: [&str; 5] = ["setup", "pull", "transition", "receive", "recovery"];

/// 将分析响应渲染为 Markdown：Overview、按阶段的小节、编号建议、focus 脚注
pub fn render_analysis(data: &AnalyzeResponse) -> String {
    let mut out = String::from("# Biomechanics Analysis\n\n");

    out.push_str(&format!("## Overview\n{}\n\n", data.overview));

    out.push_str("## Phase Analysis\n");
    for name in phase_order(data) {
        if let Some(detail) = data.phases.get(&name) {
            render_phase(&mut out, &name, detail);
        }
    }

    out.push_str("## Recommendations\n");
    for (idx, rec) in data.recommendations.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", idx + 1, rec));
    }

    if let Some(debug) = &data.debug {
        if !debug.focus_areas.is_empty() {
            out.push_str(&format!(
                "\n*Analysis focused on: {}*",
                debug.focus_areas.join(", ")
            ));
        }
    }

    out
}

/// 已知阶段按固定顺序在前，响应里多出的键按字典序附在其后
fn phase_order(data: &AnalyzeResponse) -> Vec<String> {
    let mut order: Vec<String> = PHASES
        .iter()
        .filter(|p| data.phases.contains_key(**p))
        .map(|p| p.to_string())
        .collect();
    for key in data.phases.keys() {
        if !PHASES.contains(&key.as_str()) {
            order.push(key.clone());
        }
    }
    order
}

fn render_phase(out: &mut String, name: &str, detail: &PhaseDetail) {
    out.push_str(&format!("### {}\n", capitalize(name)));
    out.push_str(&format!("{}\n", detail.notes));
    if let Some(timing) = &detail.timing {
        out.push_str(&format!(
            "- **Timing:** {}ms - {}ms\n",
            timing.start_ms, timing.end_ms
        ));
    }
    if let Some(angles) = &detail.angles {
        out.push_str(&format!(
            "- **Joint Angles:** Hip: {}°, Knee: {}°\n",
            angles.hip, angles.knee
        ));
    }
    if let Some(points) = &detail.key_points {
        out.push_str(&format!("- **Key Points:** {}\n", points.join(", ")));
    }
    out.push('\n');
}

/// 首字母大写（阶段名渲染成小节标题）
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
