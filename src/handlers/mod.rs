//! # Request Handlers Module
//!
//! 엔드포인트별 컨트롤러와, 모든 컨트롤러가 공유하는 요청 처리 생명주기를
//! 정의합니다.
//!
//! ## 요청 처리 생명주기
//!
//! ```text
//! idle ──▶ validating ──▶ executing ──▶ responded
//!              │               │
//!              │ 첫 번째 검증 실패  │ Err / panic
//!              ▼               ▼
//!        400 Bad Request   500 Internal Server Error
//! ```
//!
//! 1. 요청 형태에 맞는 검증기 목록을 만듭니다 (`build_validators`).
//! 2. [`ValidationComposite`]로 검증하고, 실패하면 그 에러로 400 응답을 돌려줍니다.
//!    검증 실패는 값으로 처리되며 예외로 전파되지 않습니다.
//! 3. 엔드포인트의 비즈니스 단계를 실행합니다 (`perform`).
//! 4. 비즈니스 결과를 4xx 또는 200 응답으로 매핑합니다.
//! 5. 1~4 단계에서 발생한 예상하지 못한 실패(`Err` 또는 panic)는 최상위
//!    경계에서 단 한 번 잡혀 500 응답이 됩니다. 원본 메시지는 로그에만 남습니다.
//!
//! ## 새 엔드포인트 추가
//!
//! ```rust,ignore
//! pub struct DeleteAccountController {
//!     delete_account: Arc<dyn DeleteAccount>,
//! }
//!
//! #[async_trait]
//! impl Controller for DeleteAccountController {
//!     type Request = DeleteAccountRequest;
//!     type Output = String;
//!
//!     fn build_validators(&self, request: &Self::Request) -> Vec<BoxedValidator> {
//!         ValidationBuilder::of("email", request.email.as_deref()).required().email().build()
//!     }
//!
//!     async fn perform(&self, request: Self::Request) -> Result<HttpResponse<String>, BoxError> {
//!         // ...
//!     }
//! }
//! ```
//!
//! 요청마다 새 검증기 목록과 합성 검증기를 만들며, 요청 간 공유 상태는 없습니다.
//! 비즈니스 단계에 타임아웃을 두지 않으므로 취소는 전송 계층의 책임입니다.

pub mod add_account;
pub mod login_account;

pub use add_account::AddAccountController;
pub use login_account::LoginAccountController;

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use async_trait::async_trait;
use futures_util::FutureExt;
use crate::core::errors::BoxError;
use crate::core::http::{bad_request, server_error, HttpResponse};
use crate::validations::{BoxedValidator, ValidationComposite, Validator};

/// 엔드포인트 컨트롤러
///
/// 구현체는 검증기 구성과 비즈니스 단계만 제공하고, 처리 순서와 500 매핑은
/// 제공 메서드 [`Controller::handle`]이 담당합니다.
#[async_trait]
pub trait Controller: Send + Sync {
    type Request: Send + 'static;
    type Output: Send + 'static;

    /// 요청 필드별 검증기를 평가 순서대로 돌려줍니다. 기본값은 검증 없음입니다.
    fn build_validators(&self, _request: &Self::Request) -> Vec<BoxedValidator> {
        Vec::new()
    }

    /// 비즈니스 단계를 실행하고 결과를 응답으로 매핑합니다.
    async fn perform(&self, request: Self::Request) -> Result<HttpResponse<Self::Output>, BoxError>;

    async fn handle(&self, request: Self::Request) -> HttpResponse<Self::Output> {
        dispatch(
            request,
            |request| self.build_validators(request),
            |request| self.perform(request),
        )
        .await
    }
}

/// 검증 → 비즈니스 단계 → 응답 매핑 순서로 요청 하나를 처리합니다.
///
/// 예상하지 못한 실패를 복구하는 유일한 경계입니다. `perform`이 돌려준
/// `Err`와 두 단계 어디에서든 발생한 panic은 모두 500 응답이 됩니다.
pub async fn dispatch<Req, T, V, P, Fut>(
    request: Req,
    build_validators: V,
    perform: P,
) -> HttpResponse<T>
where
    V: FnOnce(&Req) -> Vec<BoxedValidator>,
    P: FnOnce(Req) -> Fut,
    Fut: Future<Output = Result<HttpResponse<T>, BoxError>>,
{
    let lifecycle = async move {
        let composite = ValidationComposite::new(build_validators(&request));
        if let Some(error) = composite.validate() {
            return Ok(bad_request(error));
        }

        perform(request).await
    };

    match AssertUnwindSafe(lifecycle).catch_unwind().await {
        Ok(Ok(response)) => response,
        Ok(Err(error)) => {
            log::error!("요청 처리 중 예상하지 못한 실패: {}", error);
            server_error(error)
        }
        Err(panic) => {
            let message = panic_message(&*panic);
            log::error!("요청 처리 중 panic 발생: {}", message);
            server_error(message)
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// 검증을 통과한 필드를 꺼냅니다.
///
/// 검증 이후에도 값이 없다면 검증기 구성 오류이므로 예상하지 못한 실패로 다룹니다.
pub(crate) fn validated(value: Option<String>, field_name: &str) -> Result<String, BoxError> {
    value.ok_or_else(|| format!("validated field {} is missing", field_name).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use crate::core::errors::{AppError, SERVER_ERROR_MESSAGE};
    use crate::core::http::{ok, ResponseBody};
    use crate::validations::ValidationBuilder;

    #[actix_web::test]
    async fn test_validation_failure_skips_business_step() {
        let flag = AtomicBool::new(false);
        let performed = &flag;

        let response = dispatch(
            Some(String::new()),
            |value: &Option<String>| ValidationBuilder::of("name", value.as_deref()).required().build(),
            move |_| async move {
                performed.store(true, Ordering::SeqCst);
                Ok(ok("unreachable"))
            },
        )
        .await;

        assert_eq!(response, bad_request(AppError::required_field(Some("name"))));
        assert!(!flag.load(Ordering::SeqCst));
    }

    #[actix_web::test]
    async fn test_business_response_is_returned_as_is() {
        let response = dispatch(
            "payload",
            |_| Vec::new(),
            |request| async move { Ok(ok(request.to_uppercase())) },
        )
        .await;

        assert_eq!(response, ok("PAYLOAD".to_string()));
    }

    #[actix_web::test]
    async fn test_business_failure_maps_to_server_error_without_leaking() {
        let response: HttpResponse<()> = dispatch(
            (),
            |_| Vec::new(),
            |_| async { Err(BoxError::from("Infra error")) },
        )
        .await;

        assert_eq!(response.status_code, 500);
        match &response.data {
            ResponseBody::Error(error @ AppError::ServerError { cause }) => {
                assert_eq!(cause, "Infra error");
                assert_eq!(error.to_string(), SERVER_ERROR_MESSAGE);
            }
            other => panic!("expected ServerError, got {:?}", other),
        }
        assert!(!serde_json::to_string(&response).unwrap().contains("Infra error"));
    }

    #[actix_web::test]
    async fn test_panic_while_building_validators_maps_to_server_error() {
        let response: HttpResponse<()> = dispatch(
            (),
            |_| panic!("validator wiring bug"),
            |_| async { Ok(ok(())) },
        )
        .await;

        assert_eq!(response.status_code, 500);
        assert_eq!(response.error(), Some(&AppError::server_error("validator wiring bug")));
    }

    #[actix_web::test]
    async fn test_panic_in_business_step_maps_to_server_error() {
        let response: HttpResponse<()> = dispatch(
            (),
            |_| Vec::new(),
            |_| async { panic!("{} exploded", "use-case") },
        )
        .await;

        assert_eq!(response.error(), Some(&AppError::server_error("use-case exploded")));
    }

    #[test]
    fn test_validated_field_extraction() {
        assert_eq!(validated(Some("value".to_string()), "name").unwrap(), "value");

        let error = validated(None, "name").unwrap_err();
        assert!(error.to_string().contains("name"));
    }
}
