//! 열교환기 추천, 비교 시나리오, 5년 ROI, 기후 효과 환산.
//!
//! "최적화" 시나리오는 탐색이 아니라 고정 오프셋 규칙이다.

use super::calculator::{check_dew_point, round2, run_scenario, DEW_POINT_THRESHOLD};
use super::model::{
    ClimateImpact, HeatExchangerType, PlantInput, Recommendation, ScenarioLabel, ScenarioResult,
};

/// 권장 출구 온도에 두는 산노점 여유 [°C]
pub const EXIT_TEMP_MARGIN: f64 = 10.0;
/// 개선 시나리오의 출구 온도 강하량 [°C]
pub const IMPROVED_DROP: f64 = 15.0;
/// 최적 시나리오의 출구 온도 강하량 [°C]
pub const OPTIMIZED_DROP: f64 = 30.0;
/// 최적 시나리오의 출구 온도 하한 여유 [°C]
pub const OPTIMIZED_FLOOR_MARGIN: f64 = 5.0;
pub const IMPROVED_CAPEX_FACTOR: f64 = 1.10;
pub const OPTIMIZED_CAPEX_FACTOR: f64 = 1.25;
pub const ROI_YEARS: usize = 5;

/// 성목 1그루의 연간 CO₂ 흡수량 [t/yr]
const TREE_ABSORPTION_TONS: f64 = 0.022;
/// 승용차 1대의 연간 CO₂ 배출량 [t/yr]
const CAR_EMISSION_TONS: f64 = 4.6;

/// 온도차 등급에 따라 열교환기 형식을 고른다.
///
/// ΔT > 150 → 폐열 보일러, 80 < ΔT ≤ 150 → 이코노마이저, 그 외 공기 예열기.
pub fn heat_exchanger_for_delta(delta_t: f64) -> HeatExchangerType {
    if delta_t > 150.0 {
        HeatExchangerType::WasteHeatBoiler
    } else if delta_t > 80.0 {
        HeatExchangerType::Economizer
    } else {
        HeatExchangerType::AirPreheater
    }
}

/// 입/출구 온도로 열교환기 형식과 권장 출구 온도를 추천한다.
pub fn recommend_heat_exchanger(temp_in: f64, temp_out: f64) -> Recommendation {
    let hx = heat_exchanger_for_delta(temp_in - temp_out);
    let optimal_exit_temp = temp_out.max(DEW_POINT_THRESHOLD + EXIT_TEMP_MARGIN);
    let warning_message = check_dew_point(temp_out);

    Recommendation {
        heat_exchanger_type: hx,
        optimal_exit_temp,
        efficiency_improvement: hx.improvement_note().to_string(),
        dew_point_warning: warning_message.is_some(),
        warning_message,
    }
}

/// 개선 시나리오 출구 온도. 산노점 아래로 내려가지 않는다.
pub fn improved_exit_temp(temp_out: f64) -> f64 {
    (temp_out - IMPROVED_DROP).max(DEW_POINT_THRESHOLD)
}

/// 최적 시나리오 출구 온도. 산노점 + 5 °C 아래로 내려가지 않는다.
pub fn optimized_exit_temp(temp_out: f64) -> f64 {
    (temp_out - OPTIMIZED_DROP).max(DEW_POINT_THRESHOLD + OPTIMIZED_FLOOR_MARGIN)
}

/// 기준/개선/최적 세 시나리오를 고정 순서로 만든다.
pub fn generate_scenarios(input: &PlantInput) -> [ScenarioResult; 3] {
    let improved = PlantInput {
        flue_temp_out: improved_exit_temp(input.flue_temp_out),
        installation_cost: input.installation_cost * IMPROVED_CAPEX_FACTOR,
        ..input.clone()
    };
    let optimized = PlantInput {
        flue_temp_out: optimized_exit_temp(input.flue_temp_out),
        installation_cost: input.installation_cost * OPTIMIZED_CAPEX_FACTOR,
        ..input.clone()
    };

    [
        run_scenario(input, ScenarioLabel::Base),
        run_scenario(&improved, ScenarioLabel::Improved),
        run_scenario(&optimized, ScenarioLabel::Optimized),
    ]
}

/// 연도별 누적 ROI [%].
///
/// ROIₙ = (절감액 × n − 설치비) / 설치비 × 100. 설치비 양수 조건은 호출 측이 보장한다.
pub fn project_roi_5yr(annual_savings: f64, installation_cost: f64) -> [f64; ROI_YEARS] {
    let mut roi = [0.0; ROI_YEARS];
    for (idx, slot) in roi.iter_mut().enumerate() {
        let year = (idx + 1) as f64;
        let cumulative = annual_savings * year;
        *slot = round2((cumulative - installation_cost) / installation_cost * 100.0);
    }
    roi
}

/// 연간 CO₂ 감축량을 5년 누적 나무/자동차 환산치로 바꾼다.
pub fn climate_equivalence(co2_tons_annual: f64) -> ClimateImpact {
    let total_5yr = co2_tons_annual * ROI_YEARS as f64;
    let (trees, cars) = if co2_tons_annual > 0.0 {
        (
            (total_5yr / TREE_ABSORPTION_TONS).floor() as u64,
            (total_5yr / CAR_EMISSION_TONS).floor() as u64,
        )
    } else {
        (0, 0)
    };

    ClimateImpact {
        total_co2_avoided_tons: round2(total_5yr),
        equivalent_trees_planted: trees,
        equivalent_cars_removed: cars,
    }
}
