//! 배가스 폐열 회수(WHR) 계산 엔진.
//!
//! 계산기 → 최적화기 → 요약 생성기 → 분석 파사드 순으로 쌓여 있으며 모두 순수 함수다.
//! 공유 상태나 I/O가 없으므로 여러 스레드에서 동시에 호출해도 된다.

pub mod analysis;
pub mod calculator;
pub mod fuel;
pub mod insights;
pub mod model;
pub mod optimizer;
pub mod validation;

pub use analysis::{analyze, AnalysisResult, EnergyBreakdown};
pub use fuel::{emission_factor_for, FuelSpec, FuelType};
pub use model::{
    ClimateImpact, HeatExchangerType, PlantInput, Recommendation, ScenarioLabel, ScenarioResult,
};
pub use validation::{cross_field_warnings, validate, ValidationError};
