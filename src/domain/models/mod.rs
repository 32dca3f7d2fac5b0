//! 비즈니스 단계 모델

pub mod account;

pub use account::*;
