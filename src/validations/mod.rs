//! # Field Validation Module
//!
//! 요청 필드를 검증하는 조합 가능한 검증기 모델입니다.
//!
//! ## 구성 요소
//!
//! - [`Validator`]: 필드 하나를 검사하고 최대 한 개의 에러를 돌려주는 단위 검증기
//! - [`ValidationBuilder`]: 필드명과 값에 검증기를 순서대로 붙이는 빌더
//! - [`ValidationComposite`]: 검증기 목록을 순서대로 실행하고 첫 번째 실패를 돌려주는 합성 검증기
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::validations::{ValidationBuilder, ValidationComposite, Validator};
//!
//! let composite = ValidationComposite::from_builders([
//!     ValidationBuilder::of("email", Some("user@example.com")).required().email().build(),
//!     ValidationBuilder::of("password", Some("secret")).required().build(),
//! ]);
//!
//! assert!(composite.validate().is_none());
//! ```
//!
//! 모든 검증기는 순수 함수처럼 동작합니다. I/O가 없고 같은 입력에 항상 같은 결과를 냅니다.

pub mod builder;
pub mod compare;
pub mod composite;
pub mod email;
pub mod required;
pub mod validator;

pub use builder::ValidationBuilder;
pub use compare::CompareStringValidator;
pub use composite::{chain_validators, ValidationComposite};
pub use email::EmailValidator;
pub use required::{
    RequiredArrayValidator, RequiredBufferValidator, RequiredStringValidator, RequiredValidator,
};
pub use validator::{BoxedValidator, Validator};
