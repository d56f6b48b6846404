use serde::Serialize;
use std::sync::Arc;

use super::entities::{Rate, RateKey, RateList, User};
use super::errors::AccountError;
use super::ports::{PasswordHasher, UserRepository};
use super::value_objects::{Email, Password, PasswordHash};

/// Tunables for the account service
#[derive(Debug, Clone)]
pub struct AccountServiceConfig {
  pub password_min_length: usize,
}

impl Default for AccountServiceConfig {
  fn default() -> Self {
    Self {
      password_min_length: 6,
    }
  }
}

/// Validated input for a registration
#[derive(Debug, Clone)]
pub struct NewUser {
  pub name: String,
  pub email: Email,
  pub password: Password,
  pub salt: Option<String>,
  pub is_from_facebook: bool,
  pub rates: Vec<Rate>,
  pub rates_to_do: Vec<Rate>,
}

/// Result of a registration attempt that reached the store
#[derive(Debug, Clone)]
pub enum RegistrationOutcome {
  Registered(UserProfile),
  /// The email is taken; `code` is the store's violation code
  AlreadyExists { code: i32 },
}

/// Public view of a user: everything except the id and the password hash
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
  pub name: String,
  pub email: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub salt: Option<String>,
  pub is_from_facebook: bool,
  pub rates: Vec<Rate>,
  pub rates_to_do: Vec<Rate>,
}

impl From<User> for UserProfile {
  fn from(user: User) -> Self {
    Self {
      name: user.name,
      email: user.email,
      salt: user.salt,
      is_from_facebook: user.is_from_facebook,
      rates: user.rates,
      rates_to_do: user.rates_to_do,
    }
  }
}

/// Account service implementing registration, authentication and rate bookkeeping
pub struct AccountService {
  user_repo: Arc<dyn UserRepository>,
  password_hasher: Arc<dyn PasswordHasher>,
  config: AccountServiceConfig,
}

impl AccountService {
  pub fn new(
    user_repo: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    config: AccountServiceConfig,
  ) -> Self {
    Self {
      user_repo,
      password_hasher,
      config,
    }
  }

  pub fn password_min_length(&self) -> usize {
    self.config.password_min_length
  }

  /// Registers a new user
  ///
  /// A duplicate email is reported as `RegistrationOutcome::AlreadyExists`,
  /// every other repository failure is returned as an error.
  pub async fn register(&self, new_user: NewUser) -> Result<RegistrationOutcome, AccountError> {
    let password_hash = self.password_hasher.hash(&new_user.password).await?;

    let mut user = User::new(
      new_user.name,
      new_user.email.into_inner(),
      password_hash.into_inner(),
    );
    user.salt = new_user.salt;
    user.is_from_facebook = new_user.is_from_facebook;
    user.rates = new_user.rates;
    user.rates_to_do = new_user.rates_to_do;

    match self.user_repo.create(user).await {
      Ok(created) => {
        tracing::info!(email = %created.email, "user registered");
        Ok(RegistrationOutcome::Registered(created.into()))
      }
      Err(error) => match error.duplicate_key_code() {
        Some(code) => {
          tracing::info!(code, "registration rejected, user already exists");
          Ok(RegistrationOutcome::AlreadyExists { code })
        }
        None => {
          tracing::error!(error = %error, "failed to store user");
          Err(error)
        }
      },
    }
  }

  /// Checks a credential pair and returns the matching profile, if any
  pub async fn authenticate(
    &self,
    email: &Email,
    password: &Password,
  ) -> Result<Option<UserProfile>, AccountError> {
    let Some(user) = self.user_repo.find_by_email(email).await? else {
      return Ok(None);
    };

    let stored_hash = match PasswordHash::from_hash(user.password_hash.as_str()) {
      Ok(hash) => hash,
      Err(_) => {
        tracing::warn!(email = %email, "stored password is not a valid hash");
        return Ok(None);
      }
    };

    if self.password_hasher.verify(password, &stored_hash).await? {
      Ok(Some(user.into()))
    } else {
      Ok(None)
    }
  }

  /// Appends a rate to the user's `list`
  pub async fn save_rate(
    &self,
    email: &Email,
    list: RateList,
    rate: Rate,
  ) -> Result<(), AccountError> {
    if self.user_repo.push_rate(email, list, rate).await? {
      Ok(())
    } else {
      Err(AccountError::UserNotFound)
    }
  }

  /// Rates the user gave in the class and exam identified by `key`
  pub async fn find_rates_in_exam(
    &self,
    email: &Email,
    key: &RateKey,
  ) -> Result<Vec<Rate>, AccountError> {
    Ok(
      self
        .user_repo
        .find_by_email(email)
        .await?
        .map(|user| user.rates_in_exam(key))
        .unwrap_or_default(),
    )
  }

  /// Rates the user still has to give
  pub async fn find_rates_to_do(&self, email: &Email) -> Result<Vec<Rate>, AccountError> {
    Ok(
      self
        .user_repo
        .find_by_email(email)
        .await?
        .map(|user| user.rates_to_do)
        .unwrap_or_default(),
    )
  }

  /// Removes the pending rates matching `key`
  pub async fn delete_rate_to_do(&self, email: &Email, key: &RateKey) -> Result<(), AccountError> {
    if self.user_repo.pull_rate_to_do(email, key).await? {
      Ok(())
    } else {
      Err(AccountError::UserNotFound)
    }
  }
}
