//! 대화형 상담 창구. 계산 엔진과는 상태를 공유하지 않는다.
//!
//! 자주 묻는 질문은 내장 답변으로 처리하고, 나머지는 OpenAI 호환 chat-completions
//! API로 전달한다. API 키가 없으면 고정 안내 문구를 돌려준다.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::ChatConfig;

/// API 키가 없을 때의 응답.
pub const FALLBACK_REPLY: &str = "The AI assistant is not configured on this installation. \
Set an API key to enable live answers; in the meantime you can ask about the tool, \
how the calculation works, its benefits or acid dew point safety.";

const SYSTEM_PROMPT: &str = "You are an industrial energy consultant specialised in flue-gas \
waste heat recovery. Answer concisely and technically. Relevant facts: recovered heat is \
Q = m * Cp * dT with Cp = 1.0 kJ/kg.K for flue gas; steam generation uses a latent heat of \
2257 kJ/kg; outlet temperatures below 120 C risk sulphuric acid dew point corrosion; \
equipment choice follows the temperature drop (waste heat boiler above 150 C, economizer \
above 80 C, air preheater otherwise).";

/// 키워드(소문자) → 내장 답변. 위에서부터 처음 일치하는 항목을 쓴다.
const CANNED_ANSWERS: [(&str, &str); 8] = [
    (
        "dew point",
        "Keep the flue gas outlet above the acid dew point (about 120 C). Below it, sulphuric \
         acid condenses and corrodes the exchanger; the recommendation engine never proposes an \
         exit temperature closer than 10 C to that threshold.",
    ),
    (
        "safe",
        "The analysis flags any outlet temperature below 120 C with a dew point warning, so \
         the recovered duty never comes at the cost of stack corrosion.",
    ),
    (
        "how does it work",
        "It applies Q = m * Cp * dT to the flue gas stream, converts the recovered heat into \
         equivalent steam with a latent heat of 2257 kJ/kg, then prices the saved fuel and \
         the avoided CO2 using per-fuel emission factors.",
    ),
    (
        "benefit",
        "Typical benefits: lower fuel consumption, a smaller CO2 footprint, higher overall \
         boiler efficiency and a payback that is often between 1.5 and 3 years.",
    ),
    (
        "scenario",
        "Three cases are compared: the base case as entered, an improved case with the outlet \
         15 C lower (never below 120 C) at 10% more capital cost, and an optimized case with \
         the outlet 30 C lower (never below 125 C) at 25% more capital cost.",
    ),
    (
        "what is",
        "This toolbox estimates the feasibility of recovering waste heat from boiler flue gas: \
         recoverable heat, steam, savings, payback, CO2 reduction and a suitable exchanger type.",
    ),
    (
        "hello",
        "Hello! Ask me anything about recovering waste heat from your flue gas.",
    ),
    (
        "hi",
        "Hello! Ask me anything about recovering waste heat from your flue gas.",
    ),
];

/// 상담 요청 실패.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("메시지가 비어 있습니다")]
    EmptyMessage,
    #[error("대화 모델 호출 실패: {0}")]
    Provider(String),
    #[error("대화 모델 응답에 내용이 없습니다")]
    EmptyReply,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

/// 내장 답변 표에서 메시지에 맞는 답을 찾는다. 단어 단위가 아니라 부분 문자열 일치다.
pub fn canned_answer(message: &str) -> Option<&'static str> {
    let lower = message.to_lowercase();
    CANNED_ANSWERS
        .iter()
        .find(|(key, _)| {
            // 짧은 인사말은 단어로만 인정한다 ("this" 안의 "hi" 제외)
            if key.len() <= 2 {
                lower
                    .split(|c: char| !c.is_alphanumeric())
                    .any(|word| word == *key)
            } else {
                lower.contains(key)
            }
        })
        .map(|(_, answer)| *answer)
}

/// 상담 클라이언트. API 키는 생성 시 주입되며 전역 상태를 읽지 않는다.
#[derive(Debug, Clone)]
pub struct ChatClient {
    config: ChatConfig,
    api_key: Option<String>,
}

impl ChatClient {
    pub fn new(config: ChatConfig, api_key: Option<String>) -> Self {
        Self { config, api_key }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// 메시지에 대한 답을 돌려준다.
    pub fn reply(&self, message: &str) -> Result<String, ChatError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if let Some(answer) = canned_answer(message) {
            debug!("내장 답변 사용");
            return Ok(answer.to_string());
        }
        let Some(key) = self.api_key.as_deref() else {
            info!("API 키가 없어 기본 안내 문구로 응답");
            return Ok(FALLBACK_REPLY.to_string());
        };
        self.ask_provider(key, message)
    }

    fn ask_provider(&self, key: &str, message: &str) -> Result<String, ChatError> {
        let body = CompletionRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: message,
                },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };
        debug!(endpoint = %self.config.endpoint, model = %self.config.model, "대화 모델 호출");
        let response: CompletionResponse = ureq::post(&self.config.endpoint)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .set("Authorization", &format!("Bearer {key}"))
            .send_json(&body)
            .map_err(|e| {
                warn!(error = %e, "대화 모델 호출 실패");
                ChatError::Provider(e.to_string())
            })?
            .into_json()
            .map_err(|e| ChatError::Provider(e.to_string()))?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or(ChatError::EmptyReply)
    }
}
