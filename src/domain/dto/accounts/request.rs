//! 계정 관련 요청 DTO
//!
//! JSON 키는 camelCase를 사용합니다 (`confirmPassword`).

use serde::Deserialize;

/// 계정 생성 요청
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAccountRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    /// 비밀번호 확인 (password와 일치해야 함)
    pub confirm_password: Option<String>,
}

impl AddAccountRequest {
    pub fn new(name: &str, email: &str, password: &str, confirm_password: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
            confirm_password: Some(confirm_password.to_string()),
        }
    }
}

/// 로그인 요청
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginAccountRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginAccountRequest {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_account_request_uses_camel_case_keys() {
        let json = r#"{"name":"any_name","email":"any@mail.com","password":"p","confirmPassword":"p"}"#;
        let request: AddAccountRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request, AddAccountRequest::new("any_name", "any@mail.com", "p", "p"));
    }

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let request: AddAccountRequest = serde_json::from_str(r#"{"email":"any@mail.com"}"#).unwrap();

        assert_eq!(request.name, None);
        assert_eq!(request.confirm_password, None);
        assert_eq!(request.email.as_deref(), Some("any@mail.com"));

        let request: LoginAccountRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, LoginAccountRequest::default());
    }
}
