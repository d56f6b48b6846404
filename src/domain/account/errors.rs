use thiserror::Error;

use super::value_objects::ValueObjectError;

/// Duplicate-key code reported by the document store on a unique index violation
pub const DUPLICATE_KEY_CODE: i32 = 11000;

/// Main account error type
#[derive(Debug, Error)]
pub enum AccountError {
  #[error("User not found")]
  UserNotFound,

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),

  #[error("Hash error: {0}")]
  Hash(#[from] HashError),

  #[error("Validation error: {0}")]
  Validation(#[from] ValidationError),

  #[error("Value object error: {0}")]
  ValueObject(#[from] ValueObjectError),
}

impl AccountError {
  /// Returns the store's violation code when this error is a duplicate-key violation
  pub fn duplicate_key_code(&self) -> Option<i32> {
    match self {
      AccountError::Repository(RepositoryError::DuplicateKey { code, .. }) => Some(*code),
      _ => None,
    }
  }
}

/// Repository-related errors
#[derive(Debug, Error)]
pub enum RepositoryError {
  #[error("Database connection failed: {0}")]
  ConnectionFailed(String),

  #[error("Query execution failed: {0}")]
  QueryFailed(String),

  #[error("Duplicate key violation ({code}): {message}")]
  DuplicateKey { code: i32, message: String },

  #[error("Document serialization failed: {0}")]
  Serialization(String),
}

/// Password hashing and verification errors
#[derive(Debug, Error)]
pub enum HashError {
  #[error("Failed to hash password: {0}")]
  HashingFailed(String),

  #[error("Failed to verify password: {0}")]
  VerificationFailed(String),

  #[error("Hashing task failed: {0}")]
  TaskFailed(String),
}

/// Input validation errors
#[derive(Debug, Error)]
pub enum ValidationError {
  #[error("Missing required field: {field}")]
  MissingField { field: String },
}

impl From<mongodb::error::Error> for RepositoryError {
  fn from(error: mongodb::error::Error) -> Self {
    use mongodb::error::{ErrorKind, WriteFailure};

    match error.kind.as_ref() {
      ErrorKind::Write(WriteFailure::WriteError(write_error))
        if write_error.code == DUPLICATE_KEY_CODE =>
      {
        RepositoryError::DuplicateKey {
          code: write_error.code,
          message: write_error.message.clone(),
        }
      }
      ErrorKind::ServerSelection { message, .. } => {
        RepositoryError::ConnectionFailed(message.clone())
      }
      ErrorKind::BsonSerialization(e) => RepositoryError::Serialization(e.to_string()),
      ErrorKind::BsonDeserialization(e) => RepositoryError::Serialization(e.to_string()),
      _ => RepositoryError::QueryFailed(error.to_string()),
    }
  }
}

impl From<mongodb::error::Error> for AccountError {
  fn from(error: mongodb::error::Error) -> Self {
    AccountError::Repository(RepositoryError::from(error))
  }
}
