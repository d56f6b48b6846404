use async_trait::async_trait;

use super::entities::{Rate, RateKey, RateList, User};
use super::errors::AccountError;
use super::value_objects::{Email, Password, PasswordHash};

/// Repository trait for user document persistence
#[async_trait]
pub trait UserRepository: Send + Sync {
  /// Inserts a new user; a taken email fails with `RepositoryError::DuplicateKey`
  async fn create(&self, user: User) -> Result<User, AccountError>;

  /// Finds a user by their email address
  async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AccountError>;

  /// Appends a rate to one of the user's lists.
  /// Returns `false` when no user has this email.
  async fn push_rate(&self, email: &Email, list: RateList, rate: Rate)
  -> Result<bool, AccountError>;

  /// Removes every pending rate matching `key`.
  /// Returns `false` when no user has this email.
  async fn pull_rate_to_do(&self, email: &Email, key: &RateKey) -> Result<bool, AccountError>;
}

/// Service trait for password hashing operations
#[async_trait]
pub trait PasswordHasher: Send + Sync {
  /// Hashes a plain text password
  async fn hash(&self, password: &Password) -> Result<PasswordHash, AccountError>;

  /// Verifies a plain text password against a hashed password
  async fn verify(
    &self,
    password: &Password,
    hashed_password: &PasswordHash,
  ) -> Result<bool, AccountError>;
}
