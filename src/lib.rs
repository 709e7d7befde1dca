//! 배가스 폐열 회수 타당성 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 함께 쓴다.

pub mod app;
pub mod chat;
pub mod config;
pub mod format;
pub mod i18n;
pub mod logging;
pub mod report;
pub mod ui_cli;
pub mod whr;
