use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use std::fmt;

use crate::domain::account::errors::AccountError;

use super::dtos::ErrorResponse;

/// API error type that maps domain errors to HTTP responses
#[derive(Debug)]
pub enum ApiError {
  /// Malformed or invalid input (400 Bad Request)
  Validation(String),

  /// No user has the given email (404 Not Found)
  UserNotFound,

  /// Internal server error (500 Internal Server Error)
  Internal(String),
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
      ApiError::UserNotFound => write!(f, "User not found"),
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) => StatusCode::BAD_REQUEST,
      ApiError::UserNotFound => StatusCode::NOT_FOUND,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let (error_type, message) = match self {
      ApiError::Validation(msg) => ("validation_error", msg.clone()),
      ApiError::UserNotFound => ("user_not_found", "User not found".to_string()),
      ApiError::Internal(msg) => {
        // Details stay in the logs
        tracing::error!("Internal error: {}", msg);
        (
          "internal_error",
          "An internal server error occurred".to_string(),
        )
      }
    };

    HttpResponse::build(self.status_code())
      .content_type(ContentType::json())
      .json(ErrorResponse {
        error: error_type.to_string(),
        message,
      })
  }
}

/// Convert AccountError to ApiError
impl From<AccountError> for ApiError {
  fn from(error: AccountError) -> Self {
    match error {
      AccountError::UserNotFound => ApiError::UserNotFound,
      AccountError::Validation(err) => ApiError::Validation(err.to_string()),
      AccountError::ValueObject(err) => ApiError::Validation(err.to_string()),
      AccountError::Repository(err) => ApiError::Internal(err.to_string()),
      AccountError::Hash(err) => ApiError::Internal(err.to_string()),
    }
  }
}

/// Convert validation errors from validator crate
impl From<validator::ValidationErrors> for ApiError {
  fn from(errors: validator::ValidationErrors) -> Self {
    let mut messages: Vec<String> = Vec::new();
    collect_messages(&errors, &mut messages);
    ApiError::Validation(messages.join(", "))
  }
}

fn collect_messages(errors: &validator::ValidationErrors, messages: &mut Vec<String>) {
  use validator::ValidationErrorsKind;

  for (field, kind) in errors.errors() {
    match kind {
      ValidationErrorsKind::Field(field_errors) => {
        messages.extend(field_errors.iter().map(|error| {
          error
            .message
            .as_ref()
            .map(|m| m.to_string())
            .unwrap_or_else(|| format!("Invalid field: {}", field))
        }))
      }
      ValidationErrorsKind::Struct(nested) => collect_messages(nested, messages),
      ValidationErrorsKind::List(items) => {
        for nested in items.values() {
          collect_messages(nested, messages);
        }
      }
    }
  }
}
