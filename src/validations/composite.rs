//! 합성 검증기
//!
//! 여러 필드의 검증기 목록을 생성 순서대로 실행하고, 처음 실패한 검증기의
//! 에러를 돌려줍니다. 첫 실패 이후의 검증기는 실행되지 않습니다.

use crate::core::errors::AppError;
use crate::validations::validator::{BoxedValidator, Validator};

/// 필드별 빌더 결과를 하나의 목록으로 이어 붙입니다. 앞선 필드의 검증기가 먼저 옵니다.
pub fn chain_validators<I>(groups: I) -> Vec<BoxedValidator>
where
    I: IntoIterator<Item = Vec<BoxedValidator>>,
{
    groups.into_iter().flatten().collect()
}

pub struct ValidationComposite {
    validators: Vec<BoxedValidator>,
}

impl ValidationComposite {
    pub fn new(validators: Vec<BoxedValidator>) -> Self {
        Self { validators }
    }

    /// 필드별 빌더 결과를 이어 붙입니다. 앞선 필드의 검증기가 먼저 실행됩니다.
    pub fn from_builders<I>(groups: I) -> Self
    where
        I: IntoIterator<Item = Vec<BoxedValidator>>,
    {
        Self::new(chain_validators(groups))
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl Validator for ValidationComposite {
    fn validate(&self) -> Option<AppError> {
        let error = self.validators.iter().find_map(|validator| validator.validate());

        if let Some(error) = &error {
            log::debug!("검증 실패: {}", error);
        }
        error
    }
}
