//! tracing 구독자 설정. 로그는 stderr로 보내 stdout(JSON 출력)과 섞이지 않게 한다.

use tracing_subscriber::EnvFilter;

/// `-v` 횟수에 따른 기본 로그 수준. `RUST_LOG`가 있으면 그것을 우선한다.
pub fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// 전역 구독자를 설치한다. 이미 설치되어 있으면 아무 것도 하지 않는다.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
