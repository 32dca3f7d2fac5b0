//! 로깅 설정
//!
//! `RUST_LOG`가 없으면 실행 환경별 기본 필터로 `env_logger`를 초기화합니다.

use env_logger::Env;
use log::SetLoggerError;
use crate::config::environment::Environment;

pub struct LogConfig;

impl LogConfig {
    pub fn default_filter() -> &'static str {
        Self::default_filter_for_env(&Environment::current())
    }

    pub fn default_filter_for_env(env: &Environment) -> &'static str {
        match env {
            Environment::Development | Environment::Test => "info,auth_request_core=debug",
            Environment::Staging | Environment::Production => "info",
        }
    }
}

/// 로깅 시스템을 초기화합니다.
///
/// 이미 로거가 설정되어 있으면 `Err`를 돌려줍니다.
pub fn init_logging() -> Result<(), SetLoggerError> {
    env_logger::Builder::from_env(Env::default().default_filter_or(LogConfig::default_filter()))
        .try_init()
}
