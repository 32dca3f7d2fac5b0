//! 계정 모델
//!
//! 컨트롤러가 use-case에 넘기는 입력과, 로그인 성공 시 돌려받는 페이로드입니다.

use serde::{Deserialize, Serialize};

/// 계정 생성 use-case 입력
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddAccountInput {
    pub name: String,
    pub email: String,
    pub password: String,
    /// 프로필 이미지 대체 문자 (이름의 첫 글자, 대문자)
    pub picture: String,
}

impl AddAccountInput {
    /// 프로필 이미지 대체 문자를 이름에서 만들어 입력을 생성합니다.
    pub fn new(name: String, email: String, password: String) -> Self {
        let picture = picture_from_name(&name);

        Self {
            name,
            email,
            password,
            picture,
        }
    }
}

/// 이름의 첫 글자를 대문자로 바꿔 돌려줍니다. 빈 이름이면 빈 문자열입니다.
pub fn picture_from_name(name: &str) -> String {
    name.chars()
        .next()
        .map(|first| first.to_uppercase().collect())
        .unwrap_or_default()
}

/// 로그인 use-case 입력
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginAccountInput {
    pub email: String,
    pub password: String,
}

/// 로그인한 사용자의 공개 정보
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountUser {
    pub name: String,
    pub email: String,
    pub picture: String,
    pub role: String,
}

/// 로그인 성공 페이로드
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedAccount {
    pub user: AccountUser,
    pub access_token: String,
    pub refresh_token: String,
}
