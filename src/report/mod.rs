//! 분석 결과 보고서(PDF/텍스트) 렌더링.
//!
//! 내장 Helvetica 폰트는 기본 라틴 문자만 그리므로 모든 문자열은 `sanitize`를 거친다.

pub mod layout;
pub mod pdf;
pub mod sanitize;

use thiserror::Error;

pub use layout::{build_sections, render_text, LineStyle, ReportLine, ReportOptions, ReportSection};
pub use pdf::{render_report, write_report};
pub use sanitize::sanitize_text;

/// 보고서 생성/저장 오류.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("PDF 렌더링 오류: {0}")]
    Pdf(String),
    #[error("보고서 저장 오류: {0}")]
    Io(#[from] std::io::Error),
}
