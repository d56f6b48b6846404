use std::sync::Arc;

use super::require;
use crate::domain::account::entities::RateKey;
use crate::domain::account::errors::AccountError;
use crate::domain::account::services::AccountService;
use crate::domain::account::value_objects::Email;

/// Command for removing pending rates matching `key`
#[derive(Debug, Clone)]
pub struct DeleteRateToDoCommand {
  pub email: String,
  pub key: RateKey,
}

/// Use case backing `deleteRatesToDo`
pub struct DeleteRateToDoUseCase {
  account_service: Arc<AccountService>,
}

impl DeleteRateToDoUseCase {
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }

  pub async fn execute(&self, command: DeleteRateToDoCommand) -> Result<(), AccountError> {
    let email = Email::new(command.email)?;
    require("userClass", &command.key.user_class)?;
    require("userClassOwnerEmail", &command.key.user_class_owner_email)?;

    self
      .account_service
      .delete_rate_to_do(&email, &command.key)
      .await?;

    tracing::debug!(email = %email, "rate to do removed");
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::application::rates::tests::{key, rate, service_with_user};
  use crate::domain::account::entities::RateList;

  #[tokio::test]
  async fn test_delete_rate_to_do() {
    let service = service_with_user().await;
    let email = Email::new("test@test.com").unwrap();
    for exam in ["testExam", "otherExam"] {
      service
        .save_rate(&email, RateList::RatesToDo, rate(exam))
        .await
        .unwrap();
    }

    DeleteRateToDoUseCase::new(service.clone())
      .execute(DeleteRateToDoCommand {
        email: "test@test.com".to_string(),
        key: key("testExam"),
      })
      .await
      .unwrap();

    assert_eq!(
      service.find_rates_to_do(&email).await.unwrap(),
      vec![rate("otherExam")]
    );
  }

  #[tokio::test]
  async fn test_unknown_user() {
    let use_case = DeleteRateToDoUseCase::new(service_with_user().await);

    let result = use_case
      .execute(DeleteRateToDoCommand {
        email: "nobody@test.com".to_string(),
        key: key("testExam"),
      })
      .await;
    assert!(matches!(result, Err(AccountError::UserNotFound)));
  }
}
