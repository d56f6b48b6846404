use std::sync::Arc;

use crate::domain::account::entities::Rate;
use crate::domain::account::errors::AccountError;
use crate::domain::account::services::{AccountService, NewUser, RegistrationOutcome};
use crate::domain::account::value_objects::{Email, Password};

/// Command for registering a new user
#[derive(Debug, Clone, Default)]
pub struct RegisterUserCommand {
  /// Display name
  pub name: String,
  /// User's email address
  pub email: String,
  /// User's password (plain text, will be hashed)
  pub password: String,
  /// Legacy client-supplied salt, stored as given
  pub salt: Option<String>,
  pub is_from_facebook: bool,
  pub rates: Vec<Rate>,
  pub rates_to_do: Vec<Rate>,
}

/// Use case for registering a new user
pub struct RegisterUserUseCase {
  account_service: Arc<AccountService>,
}

impl RegisterUserUseCase {
  /// Creates a new instance of RegisterUserUseCase
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }

  /// Executes the user registration use case
  ///
  /// # Returns
  /// `RegistrationOutcome::Registered` with the stored profile, or
  /// `RegistrationOutcome::AlreadyExists` carrying the store's duplicate-key code
  ///
  /// # Errors
  /// Returns `AccountError` for malformed input and for storage failures other
  /// than a duplicate email
  pub async fn execute(
    &self,
    command: RegisterUserCommand,
  ) -> Result<RegistrationOutcome, AccountError> {
    let email = Email::new(command.email)?;
    let password = Password::new(command.password, self.account_service.password_min_length())?;

    self
      .account_service
      .register(NewUser {
        name: command.name,
        email,
        password,
        salt: command.salt,
        is_from_facebook: command.is_from_facebook,
        rates: command.rates,
        rates_to_do: command.rates_to_do,
      })
      .await
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::account::services::AccountServiceConfig;
  use crate::domain::account::value_objects::ValueObjectError;
  use crate::infrastructure::persistence::memory::InMemoryUserRepository;
  use crate::infrastructure::security::Argon2PasswordHasher;

  fn use_case() -> RegisterUserUseCase {
    let service = AccountService::new(
      Arc::new(InMemoryUserRepository::new()),
      Arc::new(Argon2PasswordHasher::default()),
      AccountServiceConfig::default(),
    );
    RegisterUserUseCase::new(Arc::new(service))
  }

  fn command(email: &str, password: &str) -> RegisterUserCommand {
    RegisterUserCommand {
      name: "test".to_string(),
      email: email.to_string(),
      password: password.to_string(),
      salt: Some("123".to_string()),
      ..Default::default()
    }
  }

  #[tokio::test]
  async fn test_register_and_duplicate() {
    let use_case = use_case();

    let outcome = use_case
      .execute(command("test@test.com", "123456"))
      .await
      .unwrap();
    assert!(matches!(outcome, RegistrationOutcome::Registered(_)));

    let outcome = use_case
      .execute(command("test@test.com", "123456"))
      .await
      .unwrap();
    assert!(matches!(
      outcome,
      RegistrationOutcome::AlreadyExists { code: 11000 }
    ));
  }

  #[tokio::test]
  async fn test_rejects_invalid_input() {
    let use_case = use_case();

    let result = use_case.execute(command("not-an-email", "123456")).await;
    assert!(matches!(
      result,
      Err(AccountError::ValueObject(ValueObjectError::InvalidEmail(_)))
    ));

    let result = use_case.execute(command("test@test.com", "123")).await;
    assert!(matches!(
      result,
      Err(AccountError::ValueObject(
        ValueObjectError::PasswordTooShort { min: 6 }
      ))
    ));
  }
}
