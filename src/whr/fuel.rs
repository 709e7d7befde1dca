use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 보일러에서 연소하는 연료 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    Coal,
    #[serde(rename = "Natural Gas")]
    NaturalGas,
    Bagasse,
    #[serde(rename = "Fuel Oil")]
    FuelOil,
    Biomass,
}

impl FuelType {
    pub const ALL: [FuelType; 5] = [
        FuelType::Coal,
        FuelType::NaturalGas,
        FuelType::Bagasse,
        FuelType::FuelOil,
        FuelType::Biomass,
    ];

    /// 외부 계약에서 쓰는 표시 문자열.
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Coal => "Coal",
            FuelType::NaturalGas => "Natural Gas",
            FuelType::Bagasse => "Bagasse",
            FuelType::FuelOil => "Fuel Oil",
            FuelType::Biomass => "Biomass",
        }
    }

    /// CO₂ 배출계수 [kg CO₂ / kg 연료].
    pub fn emission_factor(&self) -> f64 {
        match self {
            FuelType::Coal => 2.40,
            FuelType::NaturalGas => 2.75,
            FuelType::Bagasse => 0.0,
            FuelType::FuelOil => 3.15,
            FuelType::Biomass => 0.10,
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 알 수 없는 연료 이름.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown fuel type: {0}")]
pub struct UnknownFuel(pub String);

impl FromStr for FuelType {
    type Err = UnknownFuel;

    /// 대소문자, 공백/밑줄 구분 없이 연료 이름을 해석한다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "coal" => Ok(FuelType::Coal),
            "naturalgas" => Ok(FuelType::NaturalGas),
            "bagasse" => Ok(FuelType::Bagasse),
            "fueloil" => Ok(FuelType::FuelOil),
            "biomass" => Ok(FuelType::Biomass),
            _ => Err(UnknownFuel(s.trim().to_string())),
        }
    }
}

/// 경계에서 들어온 연료 문자열.
///
/// 새 연료 이름이 들어와도 계산은 멈추지 않는다. 목록에 없는 연료는
/// 배출계수 0.0으로 취급한다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FuelSpec {
    Known(FuelType),
    Other(String),
}

impl FuelSpec {
    pub fn name(&self) -> &str {
        match self {
            FuelSpec::Known(f) => f.as_str(),
            FuelSpec::Other(name) => name,
        }
    }

    pub fn emission_factor(&self) -> f64 {
        match self {
            FuelSpec::Known(f) => f.emission_factor(),
            FuelSpec::Other(_) => 0.0,
        }
    }
}

impl From<FuelType> for FuelSpec {
    fn from(value: FuelType) -> Self {
        FuelSpec::Known(value)
    }
}

impl From<String> for FuelSpec {
    fn from(value: String) -> Self {
        match value.parse::<FuelType>() {
            Ok(f) => FuelSpec::Known(f),
            Err(_) => FuelSpec::Other(value),
        }
    }
}

impl From<&str> for FuelSpec {
    fn from(value: &str) -> Self {
        FuelSpec::from(value.to_string())
    }
}

impl From<FuelSpec> for String {
    fn from(value: FuelSpec) -> Self {
        value.name().to_string()
    }
}

impl fmt::Display for FuelSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 이름으로 배출계수를 찾는다. 없으면 0.0.
pub fn emission_factor_for(name: &str) -> f64 {
    FuelSpec::from(name).emission_factor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_loose_spellings() {
        assert_eq!("natural gas".parse::<FuelType>(), Ok(FuelType::NaturalGas));
        assert_eq!("FUEL_OIL".parse::<FuelType>(), Ok(FuelType::FuelOil));
        assert_eq!(" Biomass ".parse::<FuelType>(), Ok(FuelType::Biomass));
        assert!("peat".parse::<FuelType>().is_err());
    }

    #[test]
    fn parse_error_names_the_input() {
        let err = " Hydrogen ".parse::<FuelType>().unwrap_err();
        assert_eq!(err, UnknownFuel("Hydrogen".into()));
        assert_eq!(err.to_string(), "unknown fuel type: Hydrogen");
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn unknown_fuel_has_zero_factor() {
        assert_eq!(emission_factor_for("Hydrogen"), 0.0);
        assert_eq!(emission_factor_for("Coal"), 2.40);
        let spec = FuelSpec::from("Hydrogen");
        assert_eq!(spec.name(), "Hydrogen");
    }

    #[test]
    fn serializes_as_display_string() {
        let json = serde_json::to_string(&FuelSpec::Known(FuelType::NaturalGas)).unwrap();
        assert_eq!(json, "\"Natural Gas\"");
        let back: FuelSpec = serde_json::from_str("\"Fuel Oil\"").unwrap();
        assert_eq!(back, FuelSpec::Known(FuelType::FuelOil));
    }
}
