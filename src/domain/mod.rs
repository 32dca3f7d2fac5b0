//! # Domain Module
//!
//! 요청 처리 코어가 다루는 도메인 타입을 정의합니다.
//!
//! - [`dto`]: 전송 계층에서 받은 원시 요청 페이로드
//! - [`models`]: 비즈니스 단계의 입력과 결과 모델
//! - [`use_cases`]: 컨트롤러가 호출하는 비즈니스 협력자 인터페이스
//!
//! 비밀번호 해싱, 영속성, 토큰 발급은 이 크레이트 밖의 협력자가 담당하며
//! [`use_cases`]의 trait을 통해서만 소비됩니다.

pub mod dto;
pub mod models;
pub mod use_cases;

pub use dto::*;
pub use models::*;
pub use use_cases::*;
