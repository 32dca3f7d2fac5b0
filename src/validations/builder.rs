//! 필드 단위 검증기 빌더
//!
//! 필드명과 값 하나에 검증기를 순서대로 붙여 목록을 만듭니다.
//! 체인 메서드는 빌더를 소비하고 다음 빌더를 돌려주므로, 완료된 빌더를
//! 재사용하거나 중간에 다른 곳에서 변경할 수 없습니다.
//!
//! ```rust,ignore
//! let validators = ValidationBuilder::of("confirmPassword", request.confirm_password.as_deref())
//!     .required()
//!     .compare_to(request.password.as_deref())
//!     .build();
//! ```

use crate::validations::compare::CompareStringValidator;
use crate::validations::email::EmailValidator;
use crate::validations::required::RequiredStringValidator;
use crate::validations::validator::BoxedValidator;

/// 필드 하나에 대한 검증기 목록 빌더
///
/// 체인 호출 순서가 곧 평가 순서입니다. 중복 제거는 하지 않습니다.
#[must_use = "call build() to obtain the validators"]
pub struct ValidationBuilder {
    field_name: String,
    value: Option<String>,
    validators: Vec<BoxedValidator>,
}

impl ValidationBuilder {
    pub fn of(field_name: &str, value: Option<&str>) -> Self {
        Self {
            field_name: field_name.to_string(),
            value: value.map(str::to_string),
            validators: Vec::new(),
        }
    }

    fn push(mut self, validator: BoxedValidator) -> Self {
        self.validators.push(validator);
        self
    }

    /// 값이 존재하고 비어 있지 않아야 합니다.
    pub fn required(self) -> Self {
        let validator = RequiredStringValidator::new(&self.field_name, self.value.as_deref());
        self.push(Box::new(validator))
    }

    /// 값이 이메일 형식이어야 합니다.
    pub fn email(self) -> Self {
        let validator = EmailValidator::new(self.value.as_deref()).with_field_name(&self.field_name);
        self.push(Box::new(validator))
    }

    /// 값이 `other`와 정확히 같아야 합니다.
    pub fn compare_to(self, other: Option<&str>) -> Self {
        let validator = CompareStringValidator::new(self.value.as_deref(), other)
            .with_field_name(&self.field_name);
        self.push(Box::new(validator))
    }

    pub fn build(self) -> Vec<BoxedValidator> {
        self.validators
    }
}
