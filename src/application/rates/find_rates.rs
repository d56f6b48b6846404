use std::sync::Arc;

use super::require;
use crate::domain::account::entities::{Rate, RateKey};
use crate::domain::account::errors::AccountError;
use crate::domain::account::services::AccountService;
use crate::domain::account::value_objects::Email;

/// Query for the rates a user gave in one exam of a class
#[derive(Debug, Clone)]
pub struct FindRatesInExamQuery {
  pub email: String,
  pub user_class: String,
  pub user_class_owner_email: String,
  pub exam: Option<String>,
}

/// Use case backing `findUserRateInExam`
pub struct FindRatesInExamUseCase {
  account_service: Arc<AccountService>,
}

impl FindRatesInExamUseCase {
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }

  /// Returns an empty list when no user has the email
  pub async fn execute(&self, query: FindRatesInExamQuery) -> Result<Vec<Rate>, AccountError> {
    let email = Email::new(query.email)?;
    require("userClass", &query.user_class)?;
    require("userClassOwnerEmail", &query.user_class_owner_email)?;

    let key = RateKey {
      user_class: query.user_class,
      user_class_owner_email: query.user_class_owner_email,
      exam: query.exam,
    };

    self.account_service.find_rates_in_exam(&email, &key).await
  }
}

/// Query for the rates a user still has to give
#[derive(Debug, Clone)]
pub struct FindRatesToDoQuery {
  pub email: String,
}

/// Use case backing `findUserRatesToDo`
pub struct FindRatesToDoUseCase {
  account_service: Arc<AccountService>,
}

impl FindRatesToDoUseCase {
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }

  pub async fn execute(&self, query: FindRatesToDoQuery) -> Result<Vec<Rate>, AccountError> {
    let email = Email::new(query.email)?;
    self.account_service.find_rates_to_do(&email).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::application::rates::tests::{rate, service_with_user};
  use crate::domain::account::entities::RateList;

  fn in_exam(email: &str, exam: Option<&str>) -> FindRatesInExamQuery {
    FindRatesInExamQuery {
      email: email.to_string(),
      user_class: "class name".to_string(),
      user_class_owner_email: "teacher@email.com".to_string(),
      exam: exam.map(str::to_string),
    }
  }

  #[tokio::test]
  async fn test_find_rates_in_exam() {
    let service = service_with_user().await;
    let email = Email::new("test@test.com").unwrap();
    for exam in ["testExam", "otherExam"] {
      service
        .save_rate(&email, RateList::Rates, rate(exam))
        .await
        .unwrap();
    }

    let use_case = FindRatesInExamUseCase::new(service);

    let found = use_case
      .execute(in_exam("test@test.com", Some("testExam")))
      .await
      .unwrap();
    assert_eq!(found, vec![rate("testExam")]);

    let all = use_case
      .execute(in_exam("test@test.com", None))
      .await
      .unwrap();
    assert_eq!(all.len(), 2);

    let none = use_case
      .execute(in_exam("nobody@test.com", Some("testExam")))
      .await
      .unwrap();
    assert!(none.is_empty());
  }

  #[tokio::test]
  async fn test_find_rates_to_do() {
    let service = service_with_user().await;
    let email = Email::new("test@test.com").unwrap();
    service
      .save_rate(&email, RateList::RatesToDo, rate("testExam"))
      .await
      .unwrap();

    let use_case = FindRatesToDoUseCase::new(service);

    let found = use_case
      .execute(FindRatesToDoQuery {
        email: "test@test.com".to_string(),
      })
      .await
      .unwrap();
    assert_eq!(found, vec![rate("testExam")]);

    let result = use_case
      .execute(FindRatesToDoQuery {
        email: "".to_string(),
      })
      .await;
    assert!(matches!(result, Err(AccountError::ValueObject(_))));
  }
}
