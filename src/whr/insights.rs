//! 계산 결과를 경영진 보고용 한 문단 요약으로 만든다.
//!
//! 학습 모델 없이 구간 분류와 문자열 템플릿만 사용하므로 같은 입력에는 항상 같은 문장이 나온다.

use super::fuel::FuelSpec;
use super::model::{HeatExchangerType, ScenarioResult};
use crate::format::format_thousands;

/// 연간 절감액 규모 형용사.
pub fn savings_adjective(annual_savings: f64) -> &'static str {
    if annual_savings > 1_000_000.0 {
        "substantial"
    } else if annual_savings > 500_000.0 {
        "significant"
    } else if annual_savings > 100_000.0 {
        "considerable"
    } else {
        "meaningful"
    }
}

/// 회수기간 평가 문구. 수치는 소수 첫째 자리로 넣는다.
pub fn payback_phrase(payback_years: f64) -> String {
    if payback_years < 1.0 {
        format!("an exceptionally rapid payback of {payback_years:.1} years")
    } else if payback_years < 2.0 {
        format!("a highly attractive payback of {payback_years:.1} years")
    } else if payback_years < 3.0 {
        format!("a strong payback of {payback_years:.1} years")
    } else if payback_years < 5.0 {
        format!("an acceptable payback of {payback_years:.1} years")
    } else {
        format!(
            "a payback of {payback_years:.1} years, which indicates further optimization may be required"
        )
    }
}

/// CO₂ 감축 규모 서술.
pub fn co2_narrative(co2_tons: f64) -> String {
    if co2_tons > 1000.0 {
        format!(
            "eliminating approximately {} metric tons of CO₂ annually — equivalent to removing hundreds of vehicles from the road",
            format_thousands(co2_tons, 0)
        )
    } else if co2_tons > 100.0 {
        format!(
            "preventing approximately {} metric tons of CO₂ emissions annually",
            format_thousands(co2_tons, 0)
        )
    } else if co2_tons > 0.0 {
        format!(
            "reducing CO₂ emissions by {} metric tons per year",
            format_thousands(co2_tons, 1)
        )
    } else {
        "utilizing carbon-neutral fuel with no direct fossil CO₂ emissions".to_string()
    }
}

pub const DEW_POINT_NOTE: &str = " However, the proposed outlet temperature operates near the acid dew point; \
corrosion-resistant materials or a slightly elevated exit temperature \
is recommended to safeguard equipment longevity.";

/// 기준 시나리오 지표, 연료, 추천 설비, 노점 경고로 요약 문단을 조립한다.
pub fn generate_summary(
    base: &ScenarioResult,
    fuel: &FuelSpec,
    equipment: HeatExchangerType,
    dew_point_warning: bool,
) -> String {
    let dew_note = if dew_point_warning { DEW_POINT_NOTE } else { "" };

    format!(
        "Based on the thermodynamic analysis, this {fuel}-fired system can recover \
         approximately {heat} kW of thermal energy from the flue gas stream, \
         generating an additional {steam} kg/hr of steam. \
         This translates to {adj} annual fuel savings of ${savings}, \
         yielding {payback}. \
         From an environmental perspective, the installation would be {co2}. \
         The recommended heat recovery equipment is a {equipment}, \
         delivering an estimated {eff:.1}% improvement in overall thermal efficiency.{dew_note}",
        fuel = fuel.name().to_lowercase(),
        heat = format_thousands(base.heat_recovered_kw, 1),
        steam = format_thousands(base.steam_saved_kg_hr, 1),
        adj = savings_adjective(base.annual_savings),
        savings = format_thousands(base.annual_savings, 0),
        payback = payback_phrase(base.payback_years),
        co2 = co2_narrative(base.co2_reduction_tons),
        equipment = equipment,
        eff = base.efficiency_gain_pct,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn savings_tiers_are_strict() {
        assert_eq!(savings_adjective(1_000_000.0), "significant");
        assert_eq!(savings_adjective(1_000_000.01), "substantial");
        assert_eq!(savings_adjective(100_000.0), "meaningful");
    }

    #[test]
    fn payback_tiers() {
        assert!(payback_phrase(0.4).starts_with("an exceptionally rapid payback of 0.4"));
        assert!(payback_phrase(1.5).contains("highly attractive"));
        assert!(payback_phrase(2.0).contains("a strong payback of 2.0"));
        assert!(payback_phrase(4.99).contains("acceptable"));
        assert!(payback_phrase(999.0).contains("further optimization may be required"));
    }

    #[test]
    fn co2_tiers() {
        assert!(co2_narrative(5_000.0).contains("5,000 metric tons"));
        assert!(co2_narrative(150.0).starts_with("preventing approximately 150"));
        assert!(co2_narrative(12.34).contains("12.3 metric tons per year"));
        assert!(co2_narrative(0.0).contains("carbon-neutral"));
    }
}
