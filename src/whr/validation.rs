//! 계산 엔진 앞단의 입력 범위 검증.
//!
//! 엔진은 검증된 입력을 가정하므로 CLI/GUI는 `analyze` 전에 반드시 `validate`를 호출한다.

use thiserror::Error;

use super::model::PlantInput;

/// 입력 검증 실패.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be a finite number (got {value})")]
    NotFinite { field: &'static str, value: f64 },
    #[error("{field} = {value} is out of range {range}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        range: &'static str,
    },
}

#[derive(Clone, Copy)]
enum Bound {
    /// (min, max) 양끝 제외
    Open(f64, f64),
    /// (min, max] 상한 포함
    UpperClosed(f64, f64),
    /// (min, ∞)
    Above(f64),
}

impl Bound {
    fn contains(&self, v: f64) -> bool {
        match *self {
            Bound::Open(lo, hi) => v > lo && v < hi,
            Bound::UpperClosed(lo, hi) => v > lo && v <= hi,
            Bound::Above(lo) => v > lo,
        }
    }
}

type Getter = fn(&PlantInput) -> f64;

/// (필드 이름, 값 읽기, 허용 범위, 범위 표기)
const RULES: [(&str, Getter, Bound, &str); 6] = [
    ("flue_temp_in", |i: &PlantInput| i.flue_temp_in, Bound::Open(50.0, 800.0), "(50, 800) °C"),
    ("flue_temp_out", |i: &PlantInput| i.flue_temp_out, Bound::Open(30.0, 600.0), "(30, 600) °C"),
    ("flow_rate", |i: &PlantInput| i.flow_rate, Bound::Open(0.0, 500_000.0), "(0, 500000) kg/hr"),
    ("fuel_cost", |i: &PlantInput| i.fuel_cost, Bound::Open(0.0, 1000.0), "(0, 1000) per kg"),
    (
        "operating_hours",
        |i: &PlantInput| i.operating_hours,
        Bound::UpperClosed(0.0, 8760.0),
        "(0, 8760] hr/yr",
    ),
    ("installation_cost", |i: &PlantInput| i.installation_cost, Bound::Above(0.0), "(0, inf)"),
];

/// 선언된 범위를 벗어난 첫 번째 필드를 오류로 돌려준다.
pub fn validate(input: &PlantInput) -> Result<(), ValidationError> {
    for (field, get, bound, range) in RULES {
        let value = get(input);
        if !value.is_finite() {
            return Err(ValidationError::NotFinite { field, value });
        }
        if !bound.contains(value) {
            return Err(ValidationError::OutOfRange { field, value, range });
        }
    }
    if let Some(demand) = input.steam_demand {
        if !demand.is_finite() {
            return Err(ValidationError::NotFinite {
                field: "steam_demand",
                value: demand,
            });
        }
        if demand <= 0.0 {
            return Err(ValidationError::OutOfRange {
                field: "steam_demand",
                value: demand,
                range: "(0, inf) kg/hr",
            });
        }
    }
    Ok(())
}

/// 오류는 아니지만 알려야 할 입력 조합.
pub fn cross_field_warnings(input: &PlantInput) -> Vec<String> {
    let mut warnings = Vec::new();
    if input.flue_temp_out >= input.flue_temp_in {
        warnings.push(format!(
            "Outlet temperature ({:.1}°C) is not lower than inlet ({:.1}°C); no heat can be recovered.",
            input.flue_temp_out, input.flue_temp_in
        ));
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_input_is_valid() {
        assert_eq!(validate(&PlantInput::default()), Ok(()));
    }

    #[test]
    fn bounds_are_exclusive_except_hours() {
        let mut input = PlantInput::default();
        input.operating_hours = 8760.0;
        assert!(validate(&input).is_ok());
        input.operating_hours = 8760.5;
        assert!(matches!(
            validate(&input),
            Err(ValidationError::OutOfRange { field: "operating_hours", .. })
        ));

        let mut input = PlantInput::default();
        input.flue_temp_in = 50.0;
        assert!(validate(&input).is_err());
    }

    #[test]
    fn each_rule_reports_its_own_field() {
        let cases: [(&str, fn(&mut PlantInput)); 6] = [
            ("flue_temp_in", |i: &mut PlantInput| i.flue_temp_in = 900.0),
            ("flue_temp_out", |i: &mut PlantInput| i.flue_temp_out = 10.0),
            ("flow_rate", |i: &mut PlantInput| i.flow_rate = -1.0),
            ("fuel_cost", |i: &mut PlantInput| i.fuel_cost = 0.0),
            ("operating_hours", |i: &mut PlantInput| i.operating_hours = 0.0),
            ("installation_cost", |i: &mut PlantInput| i.installation_cost = -5.0),
        ];
        for (expected, breaks) in cases {
            let mut input = PlantInput::default();
            breaks(&mut input);
            match validate(&input) {
                Err(ValidationError::OutOfRange { field, .. }) => assert_eq!(field, expected),
                other => panic!("{expected}: {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_nan_and_zero_cost() {
        let mut input = PlantInput::default();
        input.flow_rate = f64::NAN;
        assert!(matches!(
            validate(&input),
            Err(ValidationError::NotFinite { field: "flow_rate", .. })
        ));
        let mut input = PlantInput::default();
        input.installation_cost = 0.0;
        assert!(validate(&input).is_err());
    }

    #[test]
    fn reversed_temperatures_only_warn() {
        let input = PlantInput {
            flue_temp_in: 150.0,
            flue_temp_out: 200.0,
            ..PlantInput::default()
        };
        assert!(validate(&input).is_ok());
        assert_eq!(cross_field_warnings(&input).len(), 1);
    }
}
