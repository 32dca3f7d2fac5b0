//! 인증 서비스 요청 처리 코어
//!
//! 계정 생성과 로그인 요청을 검증하고, use-case에 위임한 뒤,
//! 결과를 상태 코드가 붙은 응답 봉투로 매핑합니다.
//!
//! # Features
//!
//! - **조합 가능한 검증기**: 필수 값, 문자열 비교, 이메일 형식
//! - **검증 빌더**: 필드별 검증기 체인을 평가 순서대로 구성
//! - **합성 검증기**: 첫 번째 실패에서 평가를 멈추고 그 에러만 보고
//! - **컨트롤러 생명주기**: 검증 → 비즈니스 단계 → 응답 매핑, 예상하지 못한 실패는 500
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Raw Request    │ ← 전송 계층에서 역직렬화된 DTO
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← Controller::handle / dispatch
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Validations   │ ← ValidationBuilder + ValidationComposite
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Use-cases     │ ← AddAccount / LoginAccount (외부 구현)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  HttpResponse   │ ← { statusCode, data }
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use auth_request_core::domain::AddAccountRequest;
//! use auth_request_core::handlers::{AddAccountController, Controller};
//!
//! let controller = AddAccountController::new(Arc::new(my_add_account_service));
//! let response = controller
//!     .handle(AddAccountRequest::new("John", "john@example.com", "secret", "secret"))
//!     .await;
//!
//! assert_eq!(response.status_code, 200);
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod validations;
pub mod handlers;
