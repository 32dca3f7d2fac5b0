//! 검증기 trait

use crate::core::errors::AppError;

/// 필드 하나에 대한 단위 검증
///
/// 생성 이후에는 불변이며, 실패 시 정확히 하나의 에러를 돌려줍니다.
pub trait Validator: Send + Sync {
    fn validate(&self) -> Option<AppError>;
}

pub type BoxedValidator = Box<dyn Validator>;

impl<V: Validator + ?Sized> Validator for Box<V> {
    fn validate(&self) -> Option<AppError> {
        (**self).validate()
    }
}
