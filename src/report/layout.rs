//! 보고서 구성. PDF와 텍스트 출력이 같은 섹션 목록을 공유한다.

use crate::format::format_thousands;
use crate::whr::{AnalysisResult, PlantInput};

use super::sanitize::sanitize_text;

/// 보고서 머리말/통화 표기 옵션.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub title: String,
    pub subtitle: String,
    /// 금액 앞에 붙일 통화 표기 (예: `Rs.`)
    pub currency_label: String,
    pub footer: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: "Waste Heat Recovery - Technical Report".into(),
            subtitle: "Generated by WHR Toolbox".into(),
            currency_label: "Rs.".into(),
            footer: "This report was automatically generated. All values are estimates based on standard engineering assumptions.".into(),
        }
    }
}

/// 한 줄의 표시 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// 목록 항목
    Item,
    /// 경고(적색)
    Warning,
    /// 줄바꿈이 필요한 긴 문단
    Paragraph,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub text: String,
    pub style: LineStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportSection {
    pub heading: String,
    pub lines: Vec<ReportLine>,
}

fn item(text: String) -> ReportLine {
    ReportLine {
        text: sanitize_text(&text),
        style: LineStyle::Item,
    }
}

/// 입력 → 결과 → 추천 → 기후 효과 → 요약 순서의 다섯 섹션을 만든다.
///
/// 모든 문자열은 여기서 sanitize 된다.
pub fn build_sections(
    input: &PlantInput,
    result: &AnalysisResult,
    opts: &ReportOptions,
) -> Vec<ReportSection> {
    let cur = &opts.currency_label;
    let rec = &result.recommendation;
    let climate = &result.climate_impact;

    let inputs = vec![
        item(format!("  - Flue Gas Inlet Temperature: {:.1} C", input.flue_temp_in)),
        item(format!("  - Flue Gas Outlet Temperature: {:.1} C", input.flue_temp_out)),
        item(format!("  - Flow Rate: {} kg/hr", format_thousands(input.flow_rate, 0))),
        item(format!("  - Fuel Type: {}", input.fuel_type)),
        item(format!("  - Fuel Cost: {cur} {}/kg", input.fuel_cost)),
        item(format!(
            "  - Operating Hours: {} hrs/yr",
            format_thousands(input.operating_hours, 0)
        )),
        item(format!(
            "  - Installation Cost: {cur} {}",
            format_thousands(input.installation_cost, 0)
        )),
    ];

    let results = vec![
        item(format!(
            "  - Heat Recovered: {} kW",
            format_thousands(result.heat_recovered_kw, 2)
        )),
        item(format!(
            "  - Steam Saved: {} kg/hr",
            format_thousands(result.steam_saved_kg_hr, 2)
        )),
        item(format!(
            "  - Annual Savings: {cur} {}",
            format_thousands(result.annual_savings, 2)
        )),
        item(format!("  - Payback Period: {:.2} years", result.payback_years)),
        item(format!(
            "  - CO2 Reduction: {} tons/year",
            format_thousands(result.co2_reduction_tons, 2)
        )),
        item(format!("  - Efficiency Gain: {:.2}%", result.efficiency_gain_pct)),
        item(format!(
            "  - Energy Recovered / Lost: {:.2}% / {:.2}%",
            result.energy.energy_recovered_pct, result.energy.energy_lost_pct
        )),
    ];

    let mut recommendation = vec![
        item(format!("  Equipment: {}", rec.heat_exchanger_type)),
        item(format!("  Optimal Exit Temp: {:.1} C", rec.optimal_exit_temp)),
        item(format!("  {}", rec.efficiency_improvement)),
    ];
    if rec.dew_point_warning {
        recommendation.push(ReportLine {
            text: sanitize_text(&format!(
                "  WARNING: {}",
                rec.warning_message.as_deref().unwrap_or_default()
            )),
            style: LineStyle::Warning,
        });
    }

    let climate_lines = vec![
        item(format!(
            "  Total CO2 Avoided: {} tons",
            format_thousands(climate.total_co2_avoided_tons, 0)
        )),
        item(format!(
            "  Equivalent Trees Planted: {}",
            format_thousands(climate.equivalent_trees_planted as f64, 0)
        )),
        item(format!(
            "  Equivalent Cars Removed: {}",
            format_thousands(climate.equivalent_cars_removed as f64, 0)
        )),
    ];

    let summary = vec![ReportLine {
        text: sanitize_text(&result.ai_summary),
        style: LineStyle::Paragraph,
    }];

    vec![
        ReportSection {
            heading: "1. Input Parameters".into(),
            lines: inputs,
        },
        ReportSection {
            heading: "2. Analysis Results".into(),
            lines: results,
        },
        ReportSection {
            heading: "3. Recommendation".into(),
            lines: recommendation,
        },
        ReportSection {
            heading: "4. Five-Year Climate Impact".into(),
            lines: climate_lines,
        },
        ReportSection {
            heading: "5. Executive Summary".into(),
            lines: summary,
        },
    ]
}

/// 단어 경계에서 `max_chars` 폭으로 줄을 나눈다. 한 단어가 폭보다 길면 그대로 한 줄이 된다.
pub fn wrap_words(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// CLI 출력용 평문 보고서.
pub fn render_text(input: &PlantInput, result: &AnalysisResult, opts: &ReportOptions) -> String {
    let mut out = String::new();
    let title = sanitize_text(&opts.title);
    out.push_str(&title);
    out.push('\n');
    out.push_str(&"=".repeat(title.len()));
    out.push('\n');
    for section in build_sections(input, result, opts) {
        out.push('\n');
        out.push_str(&section.heading);
        out.push('\n');
        for line in section.lines {
            match line.style {
                LineStyle::Paragraph => {
                    for wrapped in wrap_words(&line.text, 90) {
                        out.push_str("  ");
                        out.push_str(&wrapped);
                        out.push('\n');
                    }
                }
                LineStyle::Item | LineStyle::Warning => {
                    out.push_str(&line.text);
                    out.push('\n');
                }
            }
        }
    }
    out
}
