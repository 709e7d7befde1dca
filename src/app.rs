use thiserror::Error;
use tracing::info;

use crate::chat::{ChatClient, ChatError};
use crate::config::{mask_api_key, Config, ConfigError};
use crate::i18n::{self, Translator};
use crate::report::ReportError;
use crate::ui_cli::{self, MenuChoice};
use crate::whr::{AnalysisResult, PlantInput, ValidationError};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("입력 오류: {0}")]
    Validation(#[from] ValidationError),
    #[error("보고서 오류: {0}")]
    Report(#[from] ReportError),
    #[error("상담 오류: {0}")]
    Chat(#[from] ChatError),
    #[error("JSON 출력 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// 대화형 세션 동안 유지하는 마지막 분석 결과.
#[derive(Debug, Default)]
pub struct Session {
    pub last: Option<(PlantInput, AnalysisResult)>,
}

/// 설정에 지정된 환경 변수에서 키를 읽어 상담 클라이언트를 만든다.
pub fn chat_client(config: &Config) -> ChatClient {
    let key = config.chat.resolve_api_key();
    match key.as_deref() {
        Some(k) => info!(key = %mask_api_key(k), env = %config.chat.api_key_env, "API 키 확인"),
        None => info!(
            env = %config.chat.api_key_env,
            "API 키 없음. 상담은 내장 답변으로 동작"
        ),
    }
    ChatClient::new(config.chat.clone(), key)
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &mut Translator) -> Result<(), AppError> {
    let chat = chat_client(config);
    let mut session = Session::default();
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Analysis => ui_cli::handle_analysis(tr, config, &mut session)?,
            MenuChoice::Scenarios => ui_cli::handle_scenarios(tr, config, &session),
            MenuChoice::Report => ui_cli::handle_report(tr, config, &session)?,
            MenuChoice::Chat => ui_cli::handle_chat(tr, &chat)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
                let lang = i18n::resolve_language(&config.language, None);
                *tr = Translator::new_with_pack(&lang, config.language_pack_dir.as_deref());
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
