//! 배가스 폐열 회수의 열역학/경제성 기본 계산식.
//!
//! Q = ṁ·Cp·ΔT [kJ/h] 를 kW로 환산하고, 증기 잠열로 증기 발생량을,
//! 연료 배출계수로 CO₂ 감축량을 구한다. 모든 함수는 순수 함수이며
//! 결과는 소수 둘째 자리로 반올림한다.

use super::fuel::FuelSpec;
use super::model::{PlantInput, ScenarioLabel, ScenarioResult};

/// 배가스 정압비열 [kJ/kg·K]
pub const CP_FLUE_GAS: f64 = 1.0;
/// 증기 증발 잠열 [kJ/kg] (약 100 °C 기준)
pub const LATENT_HEAT_STEAM: f64 = 2257.0;
/// 산노점(황산 응축) 기준 온도 [°C]
pub const DEW_POINT_THRESHOLD: f64 = 120.0;
/// 연간 절감액이 0 이하일 때 반환하는 회수기간 [년].
///
/// 실제 계산값이 아니라 "회수 불가"를 뜻하는 표식이다. 요약문 생성이
/// 유한한 수를 기대하므로 오류 대신 이 값을 돌려준다.
pub const PAYBACK_NEVER: f64 = 999.0;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// 소수 둘째 자리 반올림. 정확히 절반인 값은 짝수 쪽으로 보낸다 (0.125 → 0.12).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// 배가스 전체 보유 열량 [kW] (0 °C 기준).
pub fn total_input_kw(flow_rate_kg_hr: f64, temp_in: f64) -> f64 {
    flow_rate_kg_hr * CP_FLUE_GAS * temp_in / SECONDS_PER_HOUR
}

/// 회수 가능 열량 [kW]. 출구 온도가 입구 이상이면 0 또는 음수가 된다.
pub fn heat_recovered(flow_rate_kg_hr: f64, temp_in: f64, temp_out: f64) -> f64 {
    let q_kj_per_h = flow_rate_kg_hr * CP_FLUE_GAS * (temp_in - temp_out);
    round2(q_kj_per_h / SECONDS_PER_HOUR)
}

/// 회수 열량으로 만들 수 있는 증기량 [kg/h].
pub fn steam_saved(heat_kw: f64) -> f64 {
    round2(heat_kw * SECONDS_PER_HOUR / LATENT_HEAT_STEAM)
}

/// 연간 절감액 [통화/yr].
pub fn annual_savings(steam_saved_kg_hr: f64, operating_hours: f64, fuel_cost: f64) -> f64 {
    round2(steam_saved_kg_hr * operating_hours * fuel_cost)
}

/// 단순 회수기간 [년]. 절감액이 0 이하이면 [`PAYBACK_NEVER`].
pub fn payback(installation_cost: f64, annual_savings: f64) -> f64 {
    if annual_savings <= 0.0 {
        return PAYBACK_NEVER;
    }
    round2(installation_cost / annual_savings)
}

/// 연간 CO₂ 감축량 [t/yr].
pub fn co2_reduction(steam_saved_kg_hr: f64, operating_hours: f64, fuel: &FuelSpec) -> f64 {
    let co2_kg = steam_saved_kg_hr * operating_hours * fuel.emission_factor();
    round2(co2_kg / 1000.0)
}

/// 배가스 보유 열량 대비 회수 열량 비율 [%].
pub fn efficiency_gain(heat_recovered_kw: f64, flow_rate_kg_hr: f64, temp_in: f64) -> f64 {
    let total = total_input_kw(flow_rate_kg_hr, temp_in);
    if total <= 0.0 {
        return 0.0;
    }
    round2(heat_recovered_kw / total * 100.0)
}

/// 출구 온도가 산노점 아래이면 부식 경고 문구를 돌려준다.
pub fn check_dew_point(temp_out: f64) -> Option<String> {
    if temp_out < DEW_POINT_THRESHOLD {
        Some(format!(
            "⚠️ Outlet temperature ({temp_out:?}°C) is below the acid dew point \
             ({DEW_POINT_THRESHOLD:.1}°C). Risk of sulphuric acid condensation and \
             heat-exchanger corrosion. Consider raising exit temperature or \
             using corrosion-resistant materials."
        ))
    } else {
        None
    }
}

/// 여섯 가지 지표를 한 번에 계산해 이름 붙은 시나리오 결과로 묶는다.
pub fn run_scenario(input: &PlantInput, label: ScenarioLabel) -> ScenarioResult {
    let heat = heat_recovered(input.flow_rate, input.flue_temp_in, input.flue_temp_out);
    let steam = steam_saved(heat);
    let savings = annual_savings(steam, input.operating_hours, input.fuel_cost);
    let payback_years = payback(input.installation_cost, savings);
    let co2 = co2_reduction(steam, input.operating_hours, &input.fuel_type);
    let eff = efficiency_gain(heat, input.flow_rate, input.flue_temp_in);

    ScenarioResult {
        label,
        flue_temp_out: input.flue_temp_out,
        installation_cost: input.installation_cost,
        heat_recovered_kw: heat,
        steam_saved_kg_hr: steam,
        annual_savings: savings,
        payback_years,
        co2_reduction_tons: co2,
        efficiency_gain_pct: eff,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::whr::FuelType;
    use approx::assert_abs_diff_eq;

    #[test]
    fn round2_keeps_two_decimals() {
        assert_eq!(round2(2083.333_333), 2083.33);
        assert_eq!(round2(-41.666_7), -41.67);
    }

    #[test]
    fn reversed_temperatures_give_negative_heat() {
        let q = heat_recovered(36_000.0, 100.0, 150.0);
        assert_abs_diff_eq!(q, -500.0, epsilon = 1e-9);
        assert!(steam_saved(q) < 0.0);
    }

    #[test]
    fn payback_sentinel_for_non_positive_savings() {
        assert_eq!(payback(1_000.0, 0.0), PAYBACK_NEVER);
        assert_eq!(payback(1_000.0, -5.0), PAYBACK_NEVER);
        assert_eq!(payback(1_000.0, 400.0), 2.5);
    }

    #[test]
    fn efficiency_zero_for_zero_input() {
        assert_eq!(efficiency_gain(100.0, 0.0, 300.0), 0.0);
        assert_eq!(efficiency_gain(100.0, 1000.0, 0.0), 0.0);
    }

    #[test]
    fn dew_point_message_names_temperatures() {
        let msg = check_dew_point(110.0).expect("below threshold");
        assert!(msg.contains("110.0°C"));
        assert!(msg.contains("120.0°C"));
        assert!(check_dew_point(120.0).is_none());
    }

    #[test]
    fn dew_point_message_keeps_supplied_precision() {
        let msg = check_dew_point(119.96).expect("below threshold");
        assert!(msg.contains("(119.96°C) is below"));
        assert!(msg.contains("(120.0°C)"));
    }

    #[test]
    fn exact_halves_round_to_even() {
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(heat_recovered(450.0, 101.0, 100.0), 0.12);
    }

    #[test]
    fn scenario_keeps_applied_conditions() {
        let input = PlantInput {
            fuel_type: FuelType::Coal.into(),
            ..PlantInput::default()
        };
        let res = run_scenario(&input, ScenarioLabel::Base);
        assert_eq!(res.label, ScenarioLabel::Base);
        assert_eq!(res.flue_temp_out, input.flue_temp_out);
        assert_eq!(res.installation_cost, input.installation_cost);
    }
}
