//! # Add Account Controller
//!
//! 계정 생성 요청을 처리합니다.
//!
//! ## 검증 순서
//!
//! | 필드 | 검증기 |
//! |------|--------|
//! | `name` | required |
//! | `email` | required |
//! | `password` | required |
//! | `confirmPassword` | required, compare_to(password) |
//!
//! ## 응답
//!
//! - 400: 첫 번째 검증 실패
//! - 409: `"This account already exists"`
//! - 200: `"Account created successfully"`
//! - 500: use-case 실패 (고정 메시지)

use std::sync::Arc;
use async_trait::async_trait;
use crate::core::errors::BoxError;
use crate::core::http::{conflict, ok, HttpResponse};
use crate::domain::dto::AddAccountRequest;
use crate::domain::models::AddAccountInput;
use crate::domain::use_cases::AddAccount;
use crate::handlers::{validated, Controller};
use crate::validations::{chain_validators, BoxedValidator, ValidationBuilder};

pub const ACCOUNT_EXISTS_MESSAGE: &str = "This account already exists";
pub const ACCOUNT_CREATED_MESSAGE: &str = "Account created successfully";

pub struct AddAccountController {
    add_account: Arc<dyn AddAccount>,
}

impl AddAccountController {
    pub fn new(add_account: Arc<dyn AddAccount>) -> Self {
        Self { add_account }
    }
}

#[async_trait]
impl Controller for AddAccountController {
    type Request = AddAccountRequest;
    type Output = String;

    fn build_validators(&self, request: &AddAccountRequest) -> Vec<BoxedValidator> {
        chain_validators([
            ValidationBuilder::of("name", request.name.as_deref())
                .required()
                .build(),
            ValidationBuilder::of("email", request.email.as_deref())
                .required()
                .build(),
            ValidationBuilder::of("password", request.password.as_deref())
                .required()
                .build(),
            ValidationBuilder::of("confirmPassword", request.confirm_password.as_deref())
                .required()
                .compare_to(request.password.as_deref())
                .build(),
        ])
    }

    async fn perform(&self, request: AddAccountRequest) -> Result<HttpResponse<String>, BoxError> {
        let input = AddAccountInput::new(
            validated(request.name, "name")?,
            validated(request.email, "email")?,
            validated(request.password, "password")?,
        );
        let email = input.email.clone();

        if !self.add_account.perform(input).await? {
            log::warn!("이미 존재하는 계정으로 생성 시도: {}", email);
            return Ok(conflict(ACCOUNT_EXISTS_MESSAGE));
        }

        log::info!("계정 생성 성공: {}", email);
        Ok(ok(ACCOUNT_CREATED_MESSAGE.to_string()))
    }
}
