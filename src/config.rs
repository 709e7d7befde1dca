use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

use crate::report::ReportOptions;
use crate::whr::PlantInput;

const CONFIG_PATH: &str = "config.toml";
/// `.env` 예시 파일에 들어 있는 자리표시 값. 설정되지 않은 것으로 취급한다.
const API_KEY_PLACEHOLDER: &str = "your_groq_api_key_here";

/// 보고서 출력 설정.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub output_path: String,
    pub title: String,
    pub subtitle: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        let opts = ReportOptions::default();
        Self {
            output_path: "WHR_Technical_Report.pdf".into(),
            title: opts.title,
            subtitle: opts.subtitle,
        }
    }
}

/// 외부 대화형 모델(OpenAI 호환 chat-completions) 연결 설정.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub endpoint: String,
    pub model: String,
    /// API 키를 읽을 환경 변수 이름
    pub api_key_env: String,
    pub timeout_secs: u64,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.groq.com/openai/v1/chat/completions".into(),
            model: "llama-3.3-70b-versatile".into(),
            api_key_env: "GROQ_API_KEY".into(),
            timeout_secs: 30,
            max_tokens: 512,
            temperature: 0.6,
        }
    }
}

impl ChatConfig {
    /// 환경 변수에서 API 키를 찾는다. 비어 있거나 자리표시 값이면 `None`.
    pub fn resolve_api_key(&self) -> Option<String> {
        let key = std::env::var(&self.api_key_env).ok()?;
        normalize_api_key(&key)
    }
}

fn normalize_api_key(raw: &str) -> Option<String> {
    let key = raw.trim();
    if key.is_empty() || key == API_KEY_PLACEHOLDER {
        None
    } else {
        Some(key.to_string())
    }
}

/// 로그용으로 키 앞뒤 4글자만 남긴다.
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "****".into();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI 언어 코드 (auto/ko/en)
    pub language: String,
    /// 외부 언어팩 디렉터리
    pub language_pack_dir: Option<String>,
    /// 금액 표시용 통화 표기
    pub currency_label: String,
    pub report: ReportConfig,
    pub chat: ChatConfig,
    /// GUI/대화형 CLI에 미리 채워 둘 입력값
    pub defaults: PlantInput,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            language_pack_dir: None,
            currency_label: "Rs.".into(),
            report: ReportConfig::default(),
            chat: ChatConfig::default(),
            defaults: PlantInput::default(),
        }
    }
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self, Path::new(CONFIG_PATH))
    }

    /// 보고서 렌더러에 넘길 옵션을 만든다.
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            title: self.report.title.clone(),
            subtitle: self.report.subtitle.clone(),
            currency_label: self.currency_label.clone(),
            ..ReportOptions::default()
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_from(Path::new(CONFIG_PATH))
}

/// 지정 경로의 설정을 읽는다. 파일이 없으면 기본값을 저장하고 돌려준다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        debug!(path = %path.display(), "설정 로드");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        info!(path = %path.display(), "기본 설정 파일 생성");
        Ok(cfg)
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_key_counts_as_absent() {
        assert_eq!(normalize_api_key("  "), None);
        assert_eq!(normalize_api_key(API_KEY_PLACEHOLDER), None);
        assert_eq!(normalize_api_key(" gsk_abc "), Some("gsk_abc".into()));
    }

    #[test]
    fn masks_key() {
        assert_eq!(mask_api_key("gsk_1234567890wxyz"), "gsk_...wxyz");
        assert_eq!(mask_api_key("short"), "****");
    }

    #[test]
    fn config_roundtrips_through_toml() {
        let cfg = Config::default();
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.defaults, cfg.defaults);
        assert_eq!(back.chat.api_key_env, "GROQ_API_KEY");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let cfg: Config = toml::from_str("currency_label = \"$\"\n").unwrap();
        assert_eq!(cfg.currency_label, "$");
        assert_eq!(cfg.report.output_path, "WHR_Technical_Report.pdf");
    }
}
