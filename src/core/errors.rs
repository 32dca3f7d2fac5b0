//! # Application Error Taxonomy
//!
//! 요청 처리 코어에서 사용하는 에러 분류 체계입니다.
//! 각 에러 종류는 응답 헬퍼에서 고정된 HTTP 상태 코드로 매핑됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `RequiredField` | 400 Bad Request | 필수 필드 누락, 값 불일치, 이메일 형식 오류 |
//! | `Conflict` | 409 Conflict | 중복 계정 등 비즈니스 전제 조건 위반 |
//! | `Unauthorized` | 401 Unauthorized | 자격 증명 확인 실패 |
//! | `ServerError` | 500 Internal Server Error | 예상하지 못한 모든 실패 |
//!
//! ## 전파 정책
//!
//! 검증 에러는 **반환 값**입니다. 검증기는 `Option<AppError>`를 돌려주며
//! 절대 panic 하거나 `Err`로 전파하지 않습니다.
//! 예상하지 못한 실패만 `BoxError`로 전파되고, 컨트롤러의 최상위 경계에서
//! 단 한 번 `ServerError`로 변환됩니다.
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! let error = AppError::required_field(Some("name"));
//! assert_eq!(error.to_string(), "The field name is required");
//!
//! let error = AppError::server_error("connection refused");
//! assert_eq!(error.to_string(), "An internal error occured, try again later!");
//! ```

use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

/// `ServerError`가 클라이언트에 노출하는 유일한 메시지
pub const SERVER_ERROR_MESSAGE: &str = "An internal error occured, try again later!";

/// 비즈니스 협력자(use-case)가 돌려주는 예상하지 못한 실패
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// 요청 처리 코어의 에러 타입
///
/// `thiserror`로 `Error` trait을 구현하며, 직렬화 시에는 `name`, `message`,
/// 그리고 알려진 경우 `field`만 포함합니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// 필수 필드 에러 (400 Bad Request)
    ///
    /// 값 누락뿐 아니라 비교 불일치, 이메일 형식 오류도 이 종류로 보고됩니다.
    #[error("{message}")]
    RequiredField {
        field: Option<String>,
        message: String,
    },

    /// 충돌 에러 (409 Conflict)
    #[error("{0}")]
    Conflict(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("{0}")]
    Unauthorized(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    ///
    /// 원본 실패의 메시지는 `cause`에 보관되지만 `Display`와 직렬화 결과에는
    /// 고정 메시지만 나타납니다.
    #[error("An internal error occured, try again later!")]
    ServerError { cause: String },
}

impl AppError {
    /// 필드 누락 에러를 생성합니다.
    ///
    /// 필드명이 주어지면 메시지에 포함하고, 없으면 생략합니다.
    pub fn required_field(field: Option<&str>) -> Self {
        let message = match field {
            Some(name) => format!("The field {} is required", name),
            None => "Field required".to_string(),
        };

        AppError::RequiredField {
            field: field.map(str::to_string),
            message,
        }
    }

    /// 두 값이 일치하지 않을 때의 에러 (RequiredField 종류를 재사용)
    pub fn field_mismatch(field: Option<&str>) -> Self {
        let message = match field {
            Some(name) => format!("The field {} does not match", name),
            None => "Fields do not match".to_string(),
        };

        AppError::RequiredField {
            field: field.map(str::to_string),
            message,
        }
    }

    /// 이메일 형식 에러 (RequiredField 종류를 재사용)
    pub fn invalid_email(field: Option<&str>) -> Self {
        let message = match field {
            Some(name) => format!("The field {} must be a valid email", name),
            None => "Invalid email".to_string(),
        };

        AppError::RequiredField {
            field: field.map(str::to_string),
            message,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        AppError::Conflict(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        AppError::Unauthorized(message.into())
    }

    /// 원본 실패를 감싼 내부 서버 에러를 생성합니다.
    pub fn server_error(cause: impl std::fmt::Display) -> Self {
        AppError::ServerError {
            cause: cause.to_string(),
        }
    }

    /// 직렬화 시 사용하는 에러 이름
    pub fn name(&self) -> &'static str {
        match self {
            AppError::RequiredField { .. } => "RequiredFieldError",
            AppError::Conflict(_) => "ConflictError",
            AppError::Unauthorized(_) => "UnauthorizedError",
            AppError::ServerError { .. } => "ServerError",
        }
    }

    /// RequiredField 에러가 가리키는 필드명
    pub fn field(&self) -> Option<&str> {
        match self {
            AppError::RequiredField { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let field = self.field();
        let len = if field.is_some() { 3 } else { 2 };

        let mut state = serializer.serialize_struct("AppError", len)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("message", &self.to_string())?;
        if let Some(field) = field {
            state.serialize_field("field", field)?;
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_field_message_with_field_name() {
        let error = AppError::required_field(Some("name"));

        assert_eq!(error.to_string(), "The field name is required");
        assert_eq!(error.field(), Some("name"));
    }

    #[test]
    fn test_required_field_message_without_field_name() {
        let error = AppError::required_field(None);

        assert_eq!(error.to_string(), "Field required");
        assert_eq!(error.field(), None);
    }

    #[test]
    fn test_mismatch_and_email_share_required_field_kind() {
        assert_eq!(AppError::field_mismatch(Some("confirmPassword")).name(), "RequiredFieldError");
        assert_eq!(AppError::invalid_email(Some("email")).name(), "RequiredFieldError");
        assert_ne!(
            AppError::field_mismatch(Some("confirmPassword")),
            AppError::required_field(Some("confirmPassword"))
        );
    }

    #[test]
    fn test_server_error_hides_cause() {
        let error = AppError::server_error("Infra error");

        assert_eq!(error.to_string(), SERVER_ERROR_MESSAGE);
        let json = serde_json::to_string(&error).unwrap();
        assert!(!json.contains("Infra error"));
    }

    #[test]
    fn test_error_serialization_shape() {
        let json = serde_json::to_value(AppError::required_field(Some("email"))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "RequiredFieldError",
                "message": "The field email is required",
                "field": "email"
            })
        );

        let json = serde_json::to_value(AppError::conflict("This account already exists")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "ConflictError",
                "message": "This account already exists"
            })
        );
    }
}
