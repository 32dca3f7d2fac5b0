//! 두 문자열 값의 일치 여부 검증기 (비밀번호 확인 등)

use crate::core::errors::AppError;
use crate::validations::validator::Validator;

/// 두 값이 정확히 같아야 하는 필드의 검증기
///
/// 대소문자를 구분하는 완전 일치만 허용합니다. 불일치는 `RequiredField`
/// 종류로 보고되지만 누락 메시지와는 구분되는 메시지를 사용합니다.
#[derive(Debug, Clone)]
pub struct CompareStringValidator {
    value: Option<String>,
    value_to_compare: Option<String>,
    field_name: Option<String>,
}

impl CompareStringValidator {
    pub fn new(value: Option<&str>, value_to_compare: Option<&str>) -> Self {
        Self {
            value: value.map(str::to_string),
            value_to_compare: value_to_compare.map(str::to_string),
            field_name: None,
        }
    }

    /// 에러 메시지에 사용할 필드명을 지정합니다.
    pub fn with_field_name(mut self, field_name: &str) -> Self {
        self.field_name = Some(field_name.to_string());
        self
    }
}

impl Validator for CompareStringValidator {
    fn validate(&self) -> Option<AppError> {
        if self.value != self.value_to_compare {
            return Some(AppError::field_mismatch(self.field_name.as_deref()));
        }
        None
    }
}
