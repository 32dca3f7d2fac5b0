//! 이메일 형식 검증기
//!
//! `validator` 크레이트의 이메일 검사에 더해 도메인에 점(`.`)이 있는지
//! 확인합니다. `local@domain.tld` 형태만 통과합니다.

use validator::ValidateEmail;
use crate::core::errors::AppError;
use crate::validations::validator::Validator;

/// 이메일 형식 검증기
///
/// 값이 없거나 빈 문자열이면 검사하지 않습니다. 누락은
/// `RequiredStringValidator`와 함께 사용하여 처리합니다.
#[derive(Debug, Clone)]
pub struct EmailValidator {
    value: Option<String>,
    field_name: Option<String>,
}

impl EmailValidator {
    pub fn new(value: Option<&str>) -> Self {
        Self {
            value: value.map(str::to_string),
            field_name: None,
        }
    }

    pub fn with_field_name(mut self, field_name: &str) -> Self {
        self.field_name = Some(field_name.to_string());
        self
    }
}

/// `local@domain.tld` 형태인지 확인합니다.
pub fn is_email_shaped(value: &str) -> bool {
    let has_dotted_domain = value
        .rsplit_once('@')
        .map(|(local, domain)| !local.is_empty() && domain.contains('.'))
        .unwrap_or(false);

    has_dotted_domain && value.validate_email()
}

impl Validator for EmailValidator {
    fn validate(&self) -> Option<AppError> {
        match self.value.as_deref() {
            None | Some("") => None,
            Some(value) if is_email_shaped(value) => None,
            Some(_) => Some(AppError::invalid_email(self.field_name.as_deref())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_well_formed_addresses() {
        assert!(is_email_shaped("user@example.com"));
        assert!(is_email_shaped("first.last+tag@mail.example.co.kr"));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        assert!(!is_email_shaped("any_email"));
        assert!(!is_email_shaped("any@mail"));
        assert!(!is_email_shaped("@example.com"));
        assert!(!is_email_shaped("user@"));
        assert!(!is_email_shaped("user@.com"));
        assert!(!is_email_shaped("user name@example.com"));
    }

    #[test]
    fn test_validator_reports_field_name() {
        let sut = EmailValidator::new(Some("a")).with_field_name("email");

        let error = sut.validate().unwrap();
        assert_eq!(error, AppError::invalid_email(Some("email")));
        assert_eq!(error.field(), Some("email"));
    }

    #[test]
    fn test_missing_or_empty_value_is_left_to_required() {
        assert!(EmailValidator::new(None).validate().is_none());
        assert!(EmailValidator::new(Some("")).validate().is_none());
    }
}
