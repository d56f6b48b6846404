use std::sync::Arc;

use crate::domain::account::errors::AccountError;
use crate::domain::account::services::{AccountService, NewUser, RegistrationOutcome};
use crate::domain::account::value_objects::{Email, Password};

pub const TEST_USER_NAME: &str = "test";
pub const TEST_USER_EMAIL: &str = "test@test.com";
const TEST_USER_PASSWORD: &str = "123456";

/// Inserts the fixed diagnostic user
pub struct RegisterTestUserUseCase {
  account_service: Arc<AccountService>,
}

impl RegisterTestUserUseCase {
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }

  pub async fn execute(&self) -> Result<RegistrationOutcome, AccountError> {
    self
      .account_service
      .register(NewUser {
        name: TEST_USER_NAME.to_string(),
        email: Email::new(TEST_USER_EMAIL)?,
        // Fixture value, exempt from the configured length policy
        password: Password::candidate(TEST_USER_PASSWORD),
        salt: None,
        is_from_facebook: false,
        rates: Vec::new(),
        rates_to_do: Vec::new(),
      })
      .await
  }
}
