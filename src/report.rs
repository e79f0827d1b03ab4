// 🧾 Report Formatting
// Renders an InterestReport as the console result block or as JSON.

use crate::engine::{CalculationMode, InterestReport};

/// Text block shown at the end of a run. All amounts use two decimals.
pub fn format_report(report: &InterestReport) -> String {
    let inputs = &report.inputs;
    let mut lines = vec![
        "=== 计算结果 ===".to_string(),
        format!("计算方式: {}", report.calculation.label()),
        format!("本金: {:.2} 元", inputs.principal),
        format!("时间: {:.2} 年", inputs.time),
        format!("年利率: {:.2}%", inputs.rate),
    ];

    if let CalculationMode::Compound { frequency } = report.calculation {
        lines.push(format!(
            "复利频率: {}（{} 次/年）",
            frequency.label(),
            frequency.periods_per_year()
        ));
    }

    lines.push(format!("预期利息: {:.2} 元", report.result.interest));
    lines.push(format!("本息合计: {:.2} 元", report.result.final_amount));

    if let Some(comparison) = &report.comparison {
        lines.push(format!("单利利息: {:.2} 元", comparison.simple_interest));
        lines.push(format!("复利比单利多: {:.2} 元", comparison.difference));
    }

    lines.join("\n")
}

pub fn format_report_json(report: &InterestReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
