use std::sync::Arc;

use crate::domain::account::errors::AccountError;
use crate::domain::account::services::{AccountService, UserProfile};
use crate::domain::account::value_objects::{Email, Password};

/// Command for checking a credential pair
#[derive(Debug, Clone)]
pub struct AuthenticateUserCommand {
  pub email: String,
  pub password: String,
}

/// Result of a credential check
#[derive(Debug, Clone)]
pub struct AuthenticateUserResponse {
  /// Profile of the matching user, `None` when the credentials do not match
  pub user: Option<UserProfile>,
}

impl AuthenticateUserResponse {
  pub fn success(&self) -> bool {
    self.user.is_some()
  }
}

/// Use case for authenticating a user by email and password
pub struct AuthenticateUserUseCase {
  account_service: Arc<AccountService>,
}

impl AuthenticateUserUseCase {
  /// Creates a new instance of AuthenticateUserUseCase
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }

  /// Executes the authentication use case
  ///
  /// An email that cannot belong to any account is a non-match, not an error.
  ///
  /// # Errors
  /// Returns `AccountError` when the store or the hasher fails
  pub async fn execute(
    &self,
    command: AuthenticateUserCommand,
  ) -> Result<AuthenticateUserResponse, AccountError> {
    let Ok(email) = Email::new(command.email) else {
      return Ok(AuthenticateUserResponse { user: None });
    };
    let password = Password::candidate(command.password);

    let user = self.account_service.authenticate(&email, &password).await?;

    Ok(AuthenticateUserResponse { user })
  }
}
