//! 비즈니스 use-case 인터페이스
//!
//! 컨트롤러는 구체 구현을 모른 채 이 trait들만 호출합니다.
//! 구현체는 `Arc<dyn ...>`로 주입됩니다.
//!
//! 예상 가능한 결과(중복 계정, 잘못된 자격 증명)는 `Ok` 값으로 표현하고,
//! 인프라 장애 같은 예상하지 못한 실패만 `Err(BoxError)`로 돌려줍니다.

use async_trait::async_trait;
use crate::core::errors::BoxError;
use crate::domain::models::{AddAccountInput, AuthenticatedAccount, LoginAccountInput};

/// 계정 생성 use-case
#[async_trait]
pub trait AddAccount: Send + Sync {
    /// `Ok(true)`: 생성됨, `Ok(false)`: 이미 존재하는 계정
    async fn perform(&self, input: AddAccountInput) -> Result<bool, BoxError>;
}

/// 로그인 use-case
#[async_trait]
pub trait LoginAccount: Send + Sync {
    /// `Ok(None)`: 이메일 또는 비밀번호 불일치
    async fn perform(&self, input: LoginAccountInput) -> Result<Option<AuthenticatedAccount>, BoxError>;
}
