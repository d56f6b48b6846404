use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::account::{
  entities::{Rate, RateKey, RateList, User},
  errors::{AccountError, DUPLICATE_KEY_CODE, RepositoryError},
  ports::UserRepository,
  value_objects::Email,
};

/// In-memory user store for local development and tests
///
/// Mirrors the MongoDB adapter: emails are unique and a second insert fails
/// with the same duplicate-key code the server reports.
///
/// To enable it, set CLASSRATE_DATABASE__IN_MEMORY=true in your environment
#[derive(Default)]
pub struct InMemoryUserRepository {
  users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
  async fn create(&self, user: User) -> Result<User, AccountError> {
    let mut users = self.users.write().await;

    if users.contains_key(&user.email) {
      return Err(AccountError::Repository(RepositoryError::DuplicateKey {
        code: DUPLICATE_KEY_CODE,
        message: format!("duplicate key: {{ email: \"{}\" }}", user.email),
      }));
    }

    users.insert(user.email.clone(), user.clone());
    Ok(user)
  }

  async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AccountError> {
    Ok(self.users.read().await.get(email.as_str()).cloned())
  }

  async fn push_rate(
    &self,
    email: &Email,
    list: RateList,
    rate: Rate,
  ) -> Result<bool, AccountError> {
    let mut users = self.users.write().await;

    match users.get_mut(email.as_str()) {
      Some(user) => {
        user.rate_list_mut(list).push(rate);
        Ok(true)
      }
      None => Ok(false),
    }
  }

  async fn pull_rate_to_do(&self, email: &Email, key: &RateKey) -> Result<bool, AccountError> {
    let mut users = self.users.write().await;

    match users.get_mut(email.as_str()) {
      Some(user) => {
        user
          .rate_list_mut(RateList::RatesToDo)
          .retain(|rate| !key.matches(rate));
        Ok(true)
      }
      None => Ok(false),
    }
  }
}
