use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::account::entities::{Rate, RateKey};
use crate::domain::account::services::UserProfile;

/// Registration success message, spelled the way existing clients match on it
pub const REGISTERED_MESSAGE: &str = "user sucessfully registered";
pub const ALREADY_EXISTS_MESSAGE: &str = "user already exists";

/// Request for user registration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
  #[validate(nested)]
  pub user: RegisterUserPayload,
}

/// User fields accepted on registration
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserPayload {
  #[serde(default)]
  pub name: String,

  #[validate(email(message = "Invalid email format"))]
  pub email: String,

  /// Length policy is configurable and checked by the use case
  #[validate(length(min = 1, message = "Password is required"))]
  pub password: String,

  #[serde(default, alias = "facebook")]
  pub is_from_facebook: bool,

  #[serde(default)]
  pub salt: Option<String>,

  #[serde(default)]
  pub rates: Vec<Rate>,

  #[serde(default)]
  pub rates_to_do: Vec<Rate>,
}

/// Request for user login
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
  #[serde(default)]
  pub user: LoginUserPayload,
}

/// Credentials; missing fields count as a failed match, not a bad request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginUserPayload {
  #[serde(default)]
  pub email: String,

  #[serde(default)]
  pub password: String,
}

/// Response after a registration attempt that reached the store
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
  pub code: String,

  pub message: String,

  /// Only set by the diagnostic registration
  #[serde(skip_serializing_if = "Option::is_none")]
  pub user: Option<UserProfile>,

  /// Only set by the diagnostic registration
  #[serde(skip_serializing_if = "Option::is_none")]
  pub age: Option<u32>,
}

impl RegisterResponse {
  pub fn registered() -> Self {
    Self {
      code: "200".to_string(),
      message: REGISTERED_MESSAGE.to_string(),
      user: None,
      age: None,
    }
  }
}

/// Response when the email is already taken; `code` is the store's duplicate-key code
#[derive(Debug, Clone, Serialize)]
pub struct AlreadyExistsResponse {
  pub code: i32,
  pub message: String,
}

impl AlreadyExistsResponse {
  pub fn new(code: i32) -> Self {
    Self {
      code,
      message: ALREADY_EXISTS_MESSAGE.to_string(),
    }
  }
}

/// Response to a login attempt
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
  pub success: bool,
  /// Serialized as `null` on failure
  pub user: Option<UserProfile>,
}

impl LoginResponse {
  pub fn failed() -> Self {
    Self {
      success: false,
      user: None,
    }
  }
}

/// Liveness probe payload
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticResponse {
  pub test: bool,
  pub production: bool,
}

/// Request for appending a rate to one of the user's lists
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveRateRequest {
  #[validate(email(message = "Invalid email format"))]
  pub email: String,

  pub rate: Rate,
}

/// Request for removing pending rates
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DeleteRateToDoRequest {
  #[validate(email(message = "Invalid email format"))]
  pub email: String,

  pub rate: RateKey,
}

/// Query parameters of `GET /rates/exam`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RatesInExamParams {
  #[validate(email(message = "Invalid email format"))]
  pub email: String,

  pub user_class: String,

  pub user_class_owner_email: String,

  #[serde(default)]
  pub exam: Option<String>,
}

/// Query parameters of `GET /rates/todo`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RatesToDoParams {
  #[validate(email(message = "Invalid email format"))]
  pub email: String,
}

/// Acknowledgement of a rate write
#[derive(Debug, Clone, Serialize)]
pub struct ResultResponse {
  pub result: bool,
}

/// Standard error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
  /// Error type/code
  pub error: String,

  /// Human-readable error message
  pub message: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_register_request_accepts_facebook_alias() {
    let json = r#"{"user": {"name": "test", "email": "test@test.com", "password": "123456",
      "facebook": true, "salt": "123"}}"#;
    let request: RegisterRequest = serde_json::from_str(json).unwrap();

    assert!(request.user.is_from_facebook);
    assert_eq!(request.user.salt.as_deref(), Some("123"));
    assert!(request.user.rates_to_do.is_empty());
    assert!(request.validate().is_ok());
  }

  #[test]
  fn test_register_request_validation_invalid_email() {
    let json = r#"{"user": {"email": "invalid-email", "password": "123456"}}"#;
    let request: RegisterRequest = serde_json::from_str(json).unwrap();

    assert!(request.validate().is_err());
  }

  #[test]
  fn test_login_request_defaults_missing_fields() {
    let request: LoginRequest = serde_json::from_str(r#"{"user": {}}"#).unwrap();

    assert!(request.user.email.is_empty());
    assert!(request.user.password.is_empty());

    let request: LoginRequest = serde_json::from_str("{}").unwrap();
    assert!(request.user.email.is_empty());
  }

  #[test]
  fn test_register_response_shapes() {
    let json = serde_json::to_value(RegisterResponse::registered()).unwrap();
    assert_eq!(
      json,
      serde_json::json!({"code": "200", "message": "user sucessfully registered"})
    );

    let json = serde_json::to_value(AlreadyExistsResponse::new(11000)).unwrap();
    assert_eq!(
      json,
      serde_json::json!({"code": 11000, "message": "user already exists"})
    );
  }

  #[test]
  fn test_failed_login_serializes_null_user() {
    let json = serde_json::to_value(LoginResponse::failed()).unwrap();
    assert_eq!(json, serde_json::json!({"success": false, "user": null}));
  }

  #[test]
  fn test_rates_in_exam_params_are_camel_case() {
    let params: RatesInExamParams = serde_json::from_str(
      r#"{"email": "test@test.com", "userClass": "class name",
        "userClassOwnerEmail": "teacher@email.com", "exam": "testExam"}"#,
    )
    .unwrap();

    assert_eq!(params.user_class, "class name");
    assert_eq!(params.exam.as_deref(), Some("testExam"));
  }
}
