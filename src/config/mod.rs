//! # Configuration Module
//!
//! 실행 환경과 로깅 설정을 관리합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export PROFILE="dev"             # .env.dev / .env.prod 선택
//! export ENVIRONMENT="development" # development | test | staging | production
//! export RUST_LOG="debug"          # 지정하지 않으면 환경별 기본값 사용
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use auth_request_core::config::{init_logging, load_env_file};
//!
//! load_env_file();
//! init_logging().ok();
//! ```

pub mod environment;
pub mod log_config;

pub use environment::*;
pub use log_config::*;
