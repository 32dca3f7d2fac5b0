//! # Core Module
//!
//! 에러 분류 체계와 HTTP 응답 봉투를 제공합니다.
//!
//! - [`errors`]: `AppError`와 `BoxError`
//! - [`http`]: `HttpResponse` 봉투와 `ok`/`bad_request`/`unauthorized`/`conflict`/`server_error` 헬퍼

pub mod errors;
pub mod http;

pub use errors::*;
pub use http::*;
