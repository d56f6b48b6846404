use std::sync::Arc;

use super::require;
use crate::domain::account::entities::{Rate, RateList};
use crate::domain::account::errors::AccountError;
use crate::domain::account::services::AccountService;
use crate::domain::account::value_objects::Email;

/// Command for appending a rate to one of the user's lists
#[derive(Debug, Clone)]
pub struct SaveRateCommand {
  pub email: String,
  pub list: RateList,
  pub rate: Rate,
}

/// Use case backing both `saveRates` and `saveRatesToDo`
pub struct SaveRateUseCase {
  account_service: Arc<AccountService>,
}

impl SaveRateUseCase {
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }

  /// # Errors
  /// `AccountError::UserNotFound` when no user has the email, validation
  /// errors for a malformed email or rate, repository errors otherwise
  pub async fn execute(&self, command: SaveRateCommand) -> Result<(), AccountError> {
    let email = Email::new(command.email)?;
    require("userClass", &command.rate.user_class)?;
    require("userClassOwnerEmail", &command.rate.user_class_owner_email)?;

    self
      .account_service
      .save_rate(&email, command.list, command.rate)
      .await?;

    tracing::debug!(email = %email, list = command.list.field_name(), "rate saved");
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::application::rates::tests::{key, rate, service_with_user};
  use crate::domain::account::errors::ValidationError;

  #[tokio::test]
  async fn test_save_to_both_lists() {
    let service = service_with_user().await;
    let use_case = SaveRateUseCase::new(service.clone());

    for list in [RateList::Rates, RateList::RatesToDo] {
      use_case
        .execute(SaveRateCommand {
          email: "test@test.com".to_string(),
          list,
          rate: rate("testExam"),
        })
        .await
        .unwrap();
    }

    let email = Email::new("test@test.com").unwrap();
    assert_eq!(
      service
        .find_rates_in_exam(&email, &key("testExam"))
        .await
        .unwrap(),
      vec![rate("testExam")]
    );
    assert_eq!(
      service.find_rates_to_do(&email).await.unwrap(),
      vec![rate("testExam")]
    );
  }

  #[tokio::test]
  async fn test_unknown_user() {
    let use_case = SaveRateUseCase::new(service_with_user().await);

    let result = use_case
      .execute(SaveRateCommand {
        email: "nobody@test.com".to_string(),
        list: RateList::Rates,
        rate: rate("testExam"),
      })
      .await;
    assert!(matches!(result, Err(AccountError::UserNotFound)));
  }

  #[tokio::test]
  async fn test_blank_class_is_rejected() {
    let use_case = SaveRateUseCase::new(service_with_user().await);
    let mut blank = rate("testExam");
    blank.user_class = " ".to_string();

    let result = use_case
      .execute(SaveRateCommand {
        email: "test@test.com".to_string(),
        list: RateList::Rates,
        rate: blank,
      })
      .await;
    assert!(matches!(
      result,
      Err(AccountError::Validation(ValidationError::MissingField { field })) if field == "userClass"
    ));
  }
}
