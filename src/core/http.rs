//! HTTP 응답 봉투와 응답 헬퍼
//!
//! 요청 처리 결과를 `{ statusCode, data }` 형태의 봉투로 표현합니다.
//! 헬퍼 함수들은 모두 순수 함수이며 부작용이 없습니다.
//!
//! | 헬퍼 | 상태 코드 | data |
//! |------|-----------|------|
//! | [`ok`] | 200 | 성공 페이로드 |
//! | [`bad_request`] | 400 | 검증 에러 |
//! | [`unauthorized`] | 401 | `AppError::Unauthorized` |
//! | [`conflict`] | 409 | `AppError::Conflict` |
//! | [`server_error`] | 500 | `AppError::ServerError` (고정 메시지) |
//!
//! 봉투는 `actix_web::Responder`를 구현하므로 전송 계층에서 그대로
//! 반환할 수 있습니다. 상태 코드는 HTTP 상태가 되고 `data`는 JSON 본문이 됩니다.

use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, Responder};
use serde::Serialize;
use crate::core::errors::AppError;

/// 응답 본문: 성공 페이로드 또는 에러
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody<T> {
    Payload(T),
    Error(AppError),
}

/// 요청 하나당 한 번 생성되는 불변 응답 봉투
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse<T> {
    pub status_code: u16,
    pub data: ResponseBody<T>,
}

impl<T> HttpResponse<T> {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    pub fn error(&self) -> Option<&AppError> {
        match &self.data {
            ResponseBody::Payload(_) => None,
            ResponseBody::Error(error) => Some(error),
        }
    }
}

impl<T: Serialize> Responder for HttpResponse<T> {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> actix_web::HttpResponse<Self::Body> {
        let status = StatusCode::from_u16(self.status_code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        actix_web::HttpResponse::build(status).json(&self.data)
    }
}

pub fn ok<T>(data: T) -> HttpResponse<T> {
    HttpResponse {
        status_code: StatusCode::OK.as_u16(),
        data: ResponseBody::Payload(data),
    }
}

pub fn bad_request<T>(error: AppError) -> HttpResponse<T> {
    HttpResponse {
        status_code: StatusCode::BAD_REQUEST.as_u16(),
        data: ResponseBody::Error(error),
    }
}

pub fn unauthorized<T>(message: impl Into<String>) -> HttpResponse<T> {
    HttpResponse {
        status_code: StatusCode::UNAUTHORIZED.as_u16(),
        data: ResponseBody::Error(AppError::unauthorized(message)),
    }
}

pub fn conflict<T>(message: impl Into<String>) -> HttpResponse<T> {
    HttpResponse {
        status_code: StatusCode::CONFLICT.as_u16(),
        data: ResponseBody::Error(AppError::conflict(message)),
    }
}

/// 예상하지 못한 실패를 500 응답으로 변환합니다.
///
/// 원본 메시지는 `ServerError`의 `cause`에만 남고 응답 본문에는
/// 고정된 안내 메시지만 직렬화됩니다.
pub fn server_error<T>(error: impl std::fmt::Display) -> HttpResponse<T> {
    HttpResponse {
        status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
        data: ResponseBody::Error(AppError::server_error(error)),
    }
}
