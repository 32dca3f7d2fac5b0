//! 실행 환경 설정
//!
//! `ENVIRONMENT` 변수로 실행 환경을, `PROFILE` 변수로 로드할 `.env` 파일을 결정합니다.

use std::env;
use std::path::PathBuf;
use log::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Production)
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 프로필에 해당하는 `.env` 파일명
///
/// * `prod` - `.env.prod`
/// * `dev` - `.env.dev`
/// * 기타 - 기본 `.env`
pub fn env_file_for_profile(profile: &str) -> &'static str {
    match profile {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => ".env",
    }
}

/// `PROFILE`(기본값 `dev`)에 따라 `.env` 파일을 로드합니다.
///
/// 파일이 없어도 실패하지 않으며, 로드된 파일 경로를 돌려줍니다.
pub fn load_env_file() -> Option<PathBuf> {
    let profile = env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());
    load_env_file_named(env_file_for_profile(&profile))
}

/// 주어진 이름의 환경 파일을 로드합니다. 파일이 없으면 경고만 남기고 `None`을 돌려줍니다.
pub fn load_env_file_named(filename: &str) -> Option<PathBuf> {
    match dotenv::from_filename(filename) {
        Ok(path) => {
            info!("{} 파일 로드 됨", filename);
            Some(path)
        }
        Err(e) => {
            warn!("{} 파일 로드 실패: {}", filename, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("stage"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_env_file_for_profile() {
        assert_eq!(env_file_for_profile("prod"), ".env.prod");
        assert_eq!(env_file_for_profile("dev"), ".env.dev");
        assert_eq!(env_file_for_profile("local"), ".env");
    }

    #[test]
    fn test_load_env_file_tolerates_missing_file() {
        assert!(load_env_file_named(".env.auth-request-core-missing").is_none());
    }
}
