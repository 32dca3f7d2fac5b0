//! # Login Account Controller
//!
//! 이메일/비밀번호 로그인 요청을 처리합니다.
//! 자격 증명이 틀리면 401, 성공하면 사용자 정보와 토큰을 200으로 돌려줍니다.

use std::sync::Arc;
use async_trait::async_trait;
use crate::core::errors::BoxError;
use crate::core::http::{ok, unauthorized, HttpResponse};
use crate::domain::dto::LoginAccountRequest;
use crate::domain::models::{AuthenticatedAccount, LoginAccountInput};
use crate::domain::use_cases::LoginAccount;
use crate::handlers::{validated, Controller};
use crate::validations::{chain_validators, BoxedValidator, ValidationBuilder};

pub const WRONG_CREDENTIALS_MESSAGE: &str = "The email or password is wrong";

pub struct LoginAccountController {
    login_account: Arc<dyn LoginAccount>,
}

impl LoginAccountController {
    pub fn new(login_account: Arc<dyn LoginAccount>) -> Self {
        Self { login_account }
    }
}

#[async_trait]
impl Controller for LoginAccountController {
    type Request = LoginAccountRequest;
    type Output = AuthenticatedAccount;

    fn build_validators(&self, request: &LoginAccountRequest) -> Vec<BoxedValidator> {
        chain_validators([
            ValidationBuilder::of("email", request.email.as_deref())
                .required()
                .build(),
            ValidationBuilder::of("password", request.password.as_deref())
                .required()
                .build(),
        ])
    }

    async fn perform(
        &self,
        request: LoginAccountRequest,
    ) -> Result<HttpResponse<AuthenticatedAccount>, BoxError> {
        let input = LoginAccountInput {
            email: validated(request.email, "email")?,
            password: validated(request.password, "password")?,
        };
        let email = input.email.clone();

        match self.login_account.perform(input).await? {
            Some(account) => {
                log::info!("로그인 성공: {}", email);
                Ok(ok(account))
            }
            None => {
                log::warn!("로그인 실패 - 잘못된 자격 증명: {}", email);
                Ok(unauthorized(WRONG_CREDENTIALS_MESSAGE))
            }
        }
    }
}
