use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_ANALYSIS: &str = "main_menu.analysis";
    pub const MAIN_MENU_SCENARIOS: &str = "main_menu.scenarios";
    pub const MAIN_MENU_REPORT: &str = "main_menu.report";
    pub const MAIN_MENU_CHAT: &str = "main_menu.chat";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const ANALYSIS_HEADING: &str = "analysis.heading";
    pub const ANALYSIS_KEEP_DEFAULT: &str = "analysis.keep_default";
    pub const PROMPT_TEMP_IN: &str = "prompt.flue_temp_in";
    pub const PROMPT_TEMP_OUT: &str = "prompt.flue_temp_out";
    pub const PROMPT_FLOW_RATE: &str = "prompt.flow_rate";
    pub const PROMPT_FUEL_TYPE: &str = "prompt.fuel_type";
    pub const PROMPT_FUEL_COST: &str = "prompt.fuel_cost";
    pub const PROMPT_OPERATING_HOURS: &str = "prompt.operating_hours";
    pub const PROMPT_INSTALLATION_COST: &str = "prompt.installation_cost";
    pub const PROMPT_STEAM_DEMAND: &str = "prompt.steam_demand";
    pub const ANALYSIS_INVALID_INPUT: &str = "analysis.invalid_input";
    pub const ANALYSIS_NOTICE: &str = "analysis.notice";
    pub const NO_ANALYSIS_YET: &str = "analysis.none_yet";

    pub const SCENARIOS_HEADING: &str = "scenarios.heading";
    pub const SCENARIO_COL_METRIC: &str = "scenarios.col_metric";
    pub const METRIC_EXIT_TEMP: &str = "metric.exit_temp";
    pub const METRIC_CAPEX: &str = "metric.capex";
    pub const METRIC_HEAT: &str = "metric.heat";
    pub const METRIC_STEAM: &str = "metric.steam";
    pub const METRIC_SAVINGS: &str = "metric.savings";
    pub const METRIC_PAYBACK: &str = "metric.payback";
    pub const METRIC_CO2: &str = "metric.co2";
    pub const METRIC_EFFICIENCY: &str = "metric.efficiency";
    pub const ROI_HEADING: &str = "roi.heading";
    pub const ROI_YEAR: &str = "roi.year";

    pub const REPORT_HEADING: &str = "report.heading";
    pub const PROMPT_REPORT_PATH: &str = "prompt.report_path";
    pub const REPORT_SAVED: &str = "report.saved";

    pub const CHAT_HEADING: &str = "chat.heading";
    pub const CHAT_NO_KEY: &str = "chat.no_key";
    pub const PROMPT_CHAT: &str = "prompt.chat";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_PROMPT_LANG: &str = "settings.prompt_lang";
    pub const SETTINGS_PROMPT_CURRENCY: &str = "settings.prompt_currency";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 언어팩 → 내장 문자열 순으로 찾는다.
    pub fn lookup(&self, key: &str) -> Option<String> {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return Some(v.clone());
        }
        let built_in = match self.lang {
            Language::Ko => ko(key).or_else(|| en(key)),
            Language::En => en(key),
        };
        built_in.map(str::to_string)
    }

    /// 번역을 가져온다. 어디에도 없으면 키 자체를 돌려준다.
    pub fn t(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_else(|| key.to_string())
    }

    /// GUI용: 키가 없으면 호출 측의 기본 문구를 쓴다.
    pub fn text(&self, key: &str, default: &str) -> String {
        self.lookup(key).unwrap_or_else(|| default.to_string())
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().and_then(|loc| normalize_locale_string(&loc)) {
        return Some(code);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 중첩 테이블은 `a.b` 형태의 키로 펼친다.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Table = toml::from_str(src).ok()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    walk(&format!("{prefix}.{k}"), v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in &value {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== 폐열 회수 계산기 (WHR Toolbox) ===",
        MAIN_MENU_ANALYSIS => "1) 새 분석",
        MAIN_MENU_SCENARIOS => "2) 시나리오 비교 / 5년 ROI",
        MAIN_MENU_REPORT => "3) PDF 보고서 저장",
        MAIN_MENU_CHAT => "4) 상담",
        MAIN_MENU_SETTINGS => "5) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        ANALYSIS_HEADING => "\n-- 배가스 폐열 회수 분석 --",
        ANALYSIS_KEEP_DEFAULT => "엔터를 누르면 [ ] 안의 값을 그대로 씁니다.",
        PROMPT_TEMP_IN => "배가스 입구 온도 [°C]",
        PROMPT_TEMP_OUT => "배가스 출구 온도 [°C]",
        PROMPT_FLOW_RATE => "배가스 유량 [kg/h]",
        PROMPT_FUEL_TYPE => "연료 (Coal/Natural Gas/Bagasse/Fuel Oil/Biomass)",
        PROMPT_FUEL_COST => "연료 단가 [/kg]",
        PROMPT_OPERATING_HOURS => "연간 운전 시간 [h]",
        PROMPT_INSTALLATION_COST => "설치비",
        PROMPT_STEAM_DEMAND => "현재 증기 수요 [kg/h]",
        ANALYSIS_INVALID_INPUT => "입력값이 허용 범위를 벗어났습니다",
        ANALYSIS_NOTICE => "주의",
        NO_ANALYSIS_YET => "먼저 분석을 실행하세요.",
        SCENARIOS_HEADING => "\n-- 시나리오 비교 --",
        SCENARIO_COL_METRIC => "항목",
        METRIC_EXIT_TEMP => "출구 온도 [°C]",
        METRIC_CAPEX => "설치비",
        METRIC_HEAT => "회수 열량 [kW]",
        METRIC_STEAM => "증기 절감 [kg/h]",
        METRIC_SAVINGS => "연간 절감액",
        METRIC_PAYBACK => "회수기간 [년]",
        METRIC_CO2 => "CO₂ 감축 [t/yr]",
        METRIC_EFFICIENCY => "효율 향상 [%]",
        ROI_HEADING => "\n-- 5년 누적 ROI --",
        ROI_YEAR => "년차",
        REPORT_HEADING => "\n-- PDF 보고서 --",
        PROMPT_REPORT_PATH => "저장 경로",
        REPORT_SAVED => "보고서를 저장했습니다",
        CHAT_HEADING => "\n-- 상담 (빈 줄 입력 시 종료) --",
        CHAT_NO_KEY => "API 키가 없어 내장 답변과 기본 안내만 제공합니다.",
        PROMPT_CHAT => "질문: ",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 설정",
        SETTINGS_PROMPT_LANG => "언어 (auto/ko/en)",
        SETTINGS_PROMPT_CURRENCY => "통화 표기",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Waste Heat Recovery Toolbox ===",
        MAIN_MENU_ANALYSIS => "1) New analysis",
        MAIN_MENU_SCENARIOS => "2) Scenario comparison / 5-year ROI",
        MAIN_MENU_REPORT => "3) Save PDF report",
        MAIN_MENU_CHAT => "4) Ask the assistant",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ANALYSIS_HEADING => "\n-- Flue Gas Waste Heat Recovery Analysis --",
        ANALYSIS_KEEP_DEFAULT => "Press Enter to keep the value in [ ].",
        PROMPT_TEMP_IN => "Flue gas inlet temperature [°C]",
        PROMPT_TEMP_OUT => "Flue gas outlet temperature [°C]",
        PROMPT_FLOW_RATE => "Flue gas flow rate [kg/hr]",
        PROMPT_FUEL_TYPE => "Fuel (Coal/Natural Gas/Bagasse/Fuel Oil/Biomass)",
        PROMPT_FUEL_COST => "Fuel cost [/kg]",
        PROMPT_OPERATING_HOURS => "Operating hours [hr/yr]",
        PROMPT_INSTALLATION_COST => "Installation cost",
        PROMPT_STEAM_DEMAND => "Current steam demand [kg/hr]",
        ANALYSIS_INVALID_INPUT => "Input is out of the accepted range",
        ANALYSIS_NOTICE => "Notice",
        NO_ANALYSIS_YET => "Run an analysis first.",
        SCENARIOS_HEADING => "\n-- Scenario Comparison --",
        SCENARIO_COL_METRIC => "Metric",
        METRIC_EXIT_TEMP => "Outlet temp [°C]",
        METRIC_CAPEX => "Installation cost",
        METRIC_HEAT => "Heat recovered [kW]",
        METRIC_STEAM => "Steam saved [kg/hr]",
        METRIC_SAVINGS => "Annual savings",
        METRIC_PAYBACK => "Payback [yr]",
        METRIC_CO2 => "CO₂ reduction [t/yr]",
        METRIC_EFFICIENCY => "Efficiency gain [%]",
        ROI_HEADING => "\n-- 5-Year Cumulative ROI --",
        ROI_YEAR => "Year",
        REPORT_HEADING => "\n-- PDF Report --",
        PROMPT_REPORT_PATH => "Output path",
        REPORT_SAVED => "Report saved",
        CHAT_HEADING => "\n-- Assistant (empty line to leave) --",
        CHAT_NO_KEY => "No API key configured; only built-in answers are available.",
        PROMPT_CHAT => "You: ",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current settings",
        SETTINGS_PROMPT_LANG => "Language (auto/ko/en)",
        SETTINGS_PROMPT_CURRENCY => "Currency label",
        SETTINGS_SAVED => "Settings saved.",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn korean_falls_back_to_english_then_key() {
        let tr = Translator::new("ko-kr");
        assert_eq!(tr.t(keys::MAIN_MENU_EXIT), "0) 종료");
        assert_eq!(tr.t("no.such.key"), "no.such.key");
        assert_eq!(tr.text("gui.only", "Fallback"), "Fallback");
    }

    #[test]
    fn explicit_language_wins_over_config() {
        assert_eq!(resolve_language("en", Some("ko")), "en");
        assert_eq!(resolve_language("auto", Some("ko")), "ko");
    }

    #[test]
    fn nested_pack_keys_are_flattened() {
        let map = parse_toml_to_map("[main_menu]\nexit = \"0) Quit\"\n").unwrap();
        assert_eq!(map.get("main_menu.exit").map(String::as_str), Some("0) Quit"));
    }
}
