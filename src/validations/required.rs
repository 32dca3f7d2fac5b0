//! 필수 값 검증기
//!
//! 값이 존재하는지, 그리고 문자열/배열/버퍼의 경우 비어 있지 않은지 확인합니다.
//! 누락(`None`)과 빈 값 모두 같은 `RequiredField` 에러로 보고됩니다.

use crate::core::errors::AppError;
use crate::validations::validator::Validator;

/// 값이 존재해야 하는 필드의 검증기
///
/// `None`이면 에러를 돌려주며, 필드명이 주어진 경우 메시지에 포함됩니다.
#[derive(Debug, Clone)]
pub struct RequiredValidator<T> {
    value: Option<T>,
    field_name: Option<String>,
}

impl<T> RequiredValidator<T> {
    pub fn new(value: Option<T>, field_name: Option<&str>) -> Self {
        Self {
            value,
            field_name: field_name.map(str::to_string),
        }
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn field_name(&self) -> Option<&str> {
        self.field_name.as_deref()
    }

    fn missing(&self) -> AppError {
        AppError::required_field(self.field_name())
    }

    /// 누락 검사 후 값이 있으면 `is_empty`로 빈 값 여부를 추가 검사합니다.
    fn validate_non_empty(&self, is_empty: impl Fn(&T) -> bool) -> Option<AppError> {
        match &self.value {
            None => Some(self.missing()),
            Some(value) if is_empty(value) => Some(self.missing()),
            Some(_) => None,
        }
    }
}

impl<T: Send + Sync> Validator for RequiredValidator<T> {
    fn validate(&self) -> Option<AppError> {
        self.validate_non_empty(|_| false)
    }
}

/// 비어 있지 않은 문자열이어야 하는 필드의 검증기
#[derive(Debug, Clone)]
pub struct RequiredStringValidator {
    required: RequiredValidator<String>,
}

impl RequiredStringValidator {
    pub fn new(field_name: &str, value: Option<&str>) -> Self {
        Self {
            required: RequiredValidator::new(value.map(str::to_string), Some(field_name)),
        }
    }

    /// 누락 검사를 담당하는 기반 검증기
    pub fn as_required(&self) -> &RequiredValidator<String> {
        &self.required
    }
}

impl Validator for RequiredStringValidator {
    fn validate(&self) -> Option<AppError> {
        self.required.validate_non_empty(String::is_empty)
    }
}

/// 비어 있지 않은 배열이어야 하는 필드의 검증기
#[derive(Debug, Clone)]
pub struct RequiredArrayValidator<T> {
    required: RequiredValidator<Vec<T>>,
}

impl<T> RequiredArrayValidator<T> {
    pub fn new(field_name: &str, value: Option<Vec<T>>) -> Self {
        Self {
            required: RequiredValidator::new(value, Some(field_name)),
        }
    }

    pub fn as_required(&self) -> &RequiredValidator<Vec<T>> {
        &self.required
    }
}

impl<T: Send + Sync> Validator for RequiredArrayValidator<T> {
    fn validate(&self) -> Option<AppError> {
        self.required.validate_non_empty(Vec::is_empty)
    }
}

/// 비어 있지 않은 바이트 버퍼여야 하는 필드의 검증기 (업로드 파일 등)
#[derive(Debug, Clone)]
pub struct RequiredBufferValidator {
    required: RequiredValidator<Vec<u8>>,
}

impl RequiredBufferValidator {
    pub fn new(field_name: &str, value: Option<Vec<u8>>) -> Self {
        Self {
            required: RequiredValidator::new(value, Some(field_name)),
        }
    }

    pub fn as_required(&self) -> &RequiredValidator<Vec<u8>> {
        &self.required
    }
}

impl Validator for RequiredBufferValidator {
    fn validate(&self) -> Option<AppError> {
        self.required.validate_non_empty(Vec::is_empty)
    }
}
