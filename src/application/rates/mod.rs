//! Rate bookkeeping use cases
//!
//! Writes append to or pull from one of the user's rate lists; reads fetch the
//! user document once and filter it.

mod delete_rate_to_do;
mod find_rates;
mod save_rate;

pub use delete_rate_to_do::{DeleteRateToDoCommand, DeleteRateToDoUseCase};
pub use find_rates::{
  FindRatesInExamQuery, FindRatesInExamUseCase, FindRatesToDoQuery, FindRatesToDoUseCase,
};
pub use save_rate::{SaveRateCommand, SaveRateUseCase};

use crate::domain::account::errors::ValidationError;

/// Rejects a blank identifying field
fn require(field: &str, value: &str) -> Result<(), ValidationError> {
  if value.trim().is_empty() {
    Err(ValidationError::MissingField {
      field: field.to_string(),
    })
  } else {
    Ok(())
  }
}

#[cfg(test)]
pub(crate) mod tests {
  use std::sync::Arc;

  use crate::application::account::{RegisterUserCommand, RegisterUserUseCase};
  use crate::domain::account::entities::{Rate, RateKey};
  use crate::domain::account::services::{AccountService, AccountServiceConfig};
  use crate::infrastructure::persistence::memory::InMemoryUserRepository;
  use crate::infrastructure::security::Argon2PasswordHasher;

  /// Account service over an in-memory store holding `test@test.com`
  pub(crate) async fn service_with_user() -> Arc<AccountService> {
    let service = Arc::new(AccountService::new(
      Arc::new(InMemoryUserRepository::new()),
      Arc::new(Argon2PasswordHasher::default()),
      AccountServiceConfig::default(),
    ));

    RegisterUserUseCase::new(service.clone())
      .execute(RegisterUserCommand {
        name: "test".to_string(),
        email: "test@test.com".to_string(),
        password: "123456".to_string(),
        ..Default::default()
      })
      .await
      .unwrap();

    service
  }

  pub(crate) fn rate(exam: &str) -> Rate {
    Rate {
      user_class: "class name".to_string(),
      user_class_owner_email: "teacher@email.com".to_string(),
      exam: Some(exam.to_string()),
      rate: Some(5.0),
    }
  }

  pub(crate) fn key(exam: &str) -> RateKey {
    RateKey {
      user_class: "class name".to_string(),
      user_class_owner_email: "teacher@email.com".to_string(),
      exam: Some(exam.to_string()),
    }
  }
}
