//! 요청 DTO 모듈
//!
//! 모든 필드는 `Option<String>`으로 받습니다. 필드가 없더라도 역직렬화는
//! 성공하고, 누락 여부는 검증기가 `RequiredField` 에러로 보고합니다.

pub mod accounts;

pub use accounts::*;
