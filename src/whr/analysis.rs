use serde::{Deserialize, Serialize};

use super::calculator::{round2, run_scenario, total_input_kw};
use super::insights::generate_summary;
use super::model::{ClimateImpact, PlantInput, Recommendation, ScenarioLabel, ScenarioResult};
use super::optimizer::{
    climate_equivalence, generate_scenarios, project_roi_5yr, recommend_heat_exchanger, ROI_YEARS,
};

/// 배가스 보유 열량 중 회수/손실 비율 [%].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyBreakdown {
    pub energy_recovered_pct: f64,
    pub energy_lost_pct: f64,
}

impl EnergyBreakdown {
    /// 회수 열량과 배가스 조건으로 비율을 계산한다. 보유 열량이 0 이하이면 회수율 0.
    pub fn from_heat(heat_kw: f64, flow_rate_kg_hr: f64, temp_in: f64) -> Self {
        let total = total_input_kw(flow_rate_kg_hr, temp_in);
        let recovered = if total > 0.0 {
            round2(heat_kw / total * 100.0)
        } else {
            0.0
        };
        Self {
            energy_recovered_pct: recovered,
            energy_lost_pct: round2(100.0 - recovered),
        }
    }
}

/// 분석 한 건의 전체 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(rename = "heat_recovered_kW")]
    pub heat_recovered_kw: f64,
    pub steam_saved_kg_hr: f64,
    pub annual_savings: f64,
    pub payback_years: f64,
    pub co2_reduction_tons: f64,
    pub efficiency_gain_pct: f64,
    pub scenarios: [ScenarioResult; 3],
    pub recommendation: Recommendation,
    pub climate_impact: ClimateImpact,
    pub ai_summary: String,
    pub roi_5yr: [f64; ROI_YEARS],
    #[serde(flatten)]
    pub energy: EnergyBreakdown,
    /// 회수 증기량이 현재 증기 수요에서 차지하는 비율 [%]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steam_demand_coverage_pct: Option<f64>,
}

impl AnalysisResult {
    /// 기준 시나리오 지표만 떼어낸다.
    pub fn base(&self) -> ScenarioResult {
        ScenarioResult {
            label: ScenarioLabel::Base,
            flue_temp_out: self.scenarios[0].flue_temp_out,
            installation_cost: self.scenarios[0].installation_cost,
            heat_recovered_kw: self.heat_recovered_kw,
            steam_saved_kg_hr: self.steam_saved_kg_hr,
            annual_savings: self.annual_savings,
            payback_years: self.payback_years,
            co2_reduction_tons: self.co2_reduction_tons,
            efficiency_gain_pct: self.efficiency_gain_pct,
        }
    }
}

/// 계산기, 최적화기, 요약 생성기를 묶어 한 번의 분석을 수행한다.
///
/// 상태도 실패 경로도 없다. 입력 범위 검증은 호출 측에서 먼저 끝내야 한다.
pub fn analyze(input: &PlantInput) -> AnalysisResult {
    let base = run_scenario(input, ScenarioLabel::Base);
    let scenarios = generate_scenarios(input);
    let recommendation = recommend_heat_exchanger(input.flue_temp_in, input.flue_temp_out);
    let roi_5yr = project_roi_5yr(base.annual_savings, input.installation_cost);
    let climate_impact = climate_equivalence(base.co2_reduction_tons);
    let energy = EnergyBreakdown::from_heat(
        base.heat_recovered_kw,
        input.flow_rate,
        input.flue_temp_in,
    );
    let ai_summary = generate_summary(
        &base,
        &input.fuel_type,
        recommendation.heat_exchanger_type,
        recommendation.dew_point_warning,
    );
    let steam_demand_coverage_pct = input
        .steam_demand
        .filter(|d| *d > 0.0)
        .map(|d| round2(base.steam_saved_kg_hr / d * 100.0));

    AnalysisResult {
        heat_recovered_kw: base.heat_recovered_kw,
        steam_saved_kg_hr: base.steam_saved_kg_hr,
        annual_savings: base.annual_savings,
        payback_years: base.payback_years,
        co2_reduction_tons: base.co2_reduction_tons,
        efficiency_gain_pct: base.efficiency_gain_pct,
        scenarios,
        recommendation,
        climate_impact,
        ai_summary,
        roi_5yr,
        energy,
        steam_demand_coverage_pct,
    }
}
