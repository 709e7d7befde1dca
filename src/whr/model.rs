use serde::{Deserialize, Serialize};
use std::fmt;

use super::fuel::FuelSpec;

fn default_steam_demand() -> Option<f64> {
    Some(5000.0)
}

/// 플랜트 운전 조건 입력.
///
/// 범위 검증은 호출 측(`whr::validation`)의 책임이며, 계산 엔진은 검증된 값을 가정한다.
/// 입구 온도가 출구 온도 이하인 경우도 타입 수준에서는 허용한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantInput {
    /// 배가스 입구 온도 [°C]
    pub flue_temp_in: f64,
    /// 배가스 출구 온도 [°C]
    pub flue_temp_out: f64,
    /// 배가스 질량 유량 [kg/h]
    pub flow_rate: f64,
    /// 연료 종류
    pub fuel_type: FuelSpec,
    /// 연료 단가 [통화/kg]
    pub fuel_cost: f64,
    /// 연간 운전 시간 [h/yr]
    pub operating_hours: f64,
    /// 설치비 [통화]
    pub installation_cost: f64,
    /// 현재 증기 수요 [kg/h]. 계산식에는 쓰이지 않고 커버리지 표시에만 쓴다.
    #[serde(default = "default_steam_demand")]
    pub steam_demand: Option<f64>,
}

impl Default for PlantInput {
    fn default() -> Self {
        Self {
            flue_temp_in: 300.0,
            flue_temp_out: 150.0,
            flow_rate: 50_000.0,
            fuel_type: FuelSpec::Known(super::FuelType::NaturalGas),
            fuel_cost: 0.05,
            operating_hours: 8000.0,
            installation_cost: 2_000_000.0,
            steam_demand: default_steam_demand(),
        }
    }
}

/// 시나리오 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioLabel {
    #[serde(rename = "Base Case")]
    Base,
    #[serde(rename = "Improved Case")]
    Improved,
    #[serde(rename = "Optimized Case")]
    Optimized,
}

impl ScenarioLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioLabel::Base => "Base Case",
            ScenarioLabel::Improved => "Improved Case",
            ScenarioLabel::Optimized => "Optimized Case",
        }
    }
}

impl fmt::Display for ScenarioLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 단일 시나리오 계산 결과. 모든 수치는 소수 둘째 자리로 반올림되어 있다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub label: ScenarioLabel,
    /// 시나리오에 적용된 배가스 출구 온도 [°C]
    pub flue_temp_out: f64,
    /// 시나리오에 적용된 설치비 [통화]
    pub installation_cost: f64,
    #[serde(rename = "heat_recovered_kW")]
    pub heat_recovered_kw: f64,
    pub steam_saved_kg_hr: f64,
    pub annual_savings: f64,
    /// 회수기간 [년]. 절감액이 0 이하이면 `PAYBACK_NEVER`(999.0).
    pub payback_years: f64,
    pub co2_reduction_tons: f64,
    pub efficiency_gain_pct: f64,
}

/// 온도 등급별 열교환기 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeatExchangerType {
    #[serde(rename = "Waste Heat Boiler")]
    WasteHeatBoiler,
    Economizer,
    #[serde(rename = "Air Preheater")]
    AirPreheater,
}

impl HeatExchangerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeatExchangerType::WasteHeatBoiler => "Waste Heat Boiler",
            HeatExchangerType::Economizer => "Economizer",
            HeatExchangerType::AirPreheater => "Air Preheater",
        }
    }

    /// 회수 열 등급에 대한 설명 문구.
    pub fn improvement_note(&self) -> &'static str {
        match self {
            HeatExchangerType::WasteHeatBoiler => {
                "High-grade heat recovery — potential for direct steam generation"
            }
            HeatExchangerType::Economizer => {
                "Medium-grade heat recovery — ideal for boiler feed-water preheating"
            }
            HeatExchangerType::AirPreheater => {
                "Low-grade heat recovery — suitable for combustion air preheating"
            }
        }
    }
}

impl fmt::Display for HeatExchangerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 열교환기 추천 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub heat_exchanger_type: HeatExchangerType,
    /// 권장 출구 온도 [°C]. 산노점 + 10 °C 아래로는 내려가지 않는다.
    pub optimal_exit_temp: f64,
    pub efficiency_improvement: String,
    pub dew_point_warning: bool,
    /// `dew_point_warning`이 참일 때만 존재한다.
    pub warning_message: Option<String>,
}

/// 5년 누적 기후 효과 환산.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClimateImpact {
    pub total_co2_avoided_tons: f64,
    pub equivalent_trees_planted: u64,
    pub equivalent_cars_removed: u64,
}
