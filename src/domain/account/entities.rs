use serde::{Deserialize, Serialize};

/// User account as stored in the `users` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
  /// Display name
  #[serde(default)]
  pub name: String,
  /// Lower-cased email address (unique)
  pub email: String,
  /// Argon2id PHC string
  #[serde(rename = "password")]
  pub password_hash: String,
  /// Legacy client-supplied salt, kept verbatim and never used for hashing
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub salt: Option<String>,
  /// Whether the account was created through Facebook
  #[serde(default)]
  pub is_from_facebook: bool,
  /// Rates the user has submitted
  #[serde(default)]
  pub rates: Vec<Rate>,
  /// Rates the user still has to submit
  #[serde(default)]
  pub rates_to_do: Vec<Rate>,
}

impl User {
  /// Creates a new user with empty rate lists
  pub fn new(name: String, email: String, password_hash: String) -> Self {
    Self {
      name,
      email,
      password_hash,
      salt: None,
      is_from_facebook: false,
      rates: Vec::new(),
      rates_to_do: Vec::new(),
    }
  }

  /// Returns the user's rates that belong to the given class and exam
  pub fn rates_in_exam(&self, key: &RateKey) -> Vec<Rate> {
    self
      .rates
      .iter()
      .filter(|rate| key.matches(rate))
      .cloned()
      .collect()
  }

  /// Returns the list selected by `list`
  pub fn rate_list(&self, list: RateList) -> &[Rate] {
    match list {
      RateList::Rates => &self.rates,
      RateList::RatesToDo => &self.rates_to_do,
    }
  }

  /// Mutable counterpart of [`User::rate_list`]
  pub fn rate_list_mut(&mut self, list: RateList) -> &mut Vec<Rate> {
    match list {
      RateList::Rates => &mut self.rates,
      RateList::RatesToDo => &mut self.rates_to_do,
    }
  }
}

/// A rate given (or owed) by a user for a class, optionally scoped to an exam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rate {
  pub user_class: String,
  pub user_class_owner_email: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub exam: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub rate: Option<f64>,
}

/// Identifies rates by class, class owner and exam
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateKey {
  pub user_class: String,
  pub user_class_owner_email: String,
  #[serde(default)]
  pub exam: Option<String>,
}

impl RateKey {
  /// A missing `exam` on the key matches rates with any exam
  pub fn matches(&self, rate: &Rate) -> bool {
    rate.user_class == self.user_class
      && rate.user_class_owner_email == self.user_class_owner_email
      && self
        .exam
        .as_ref()
        .is_none_or(|exam| rate.exam.as_ref() == Some(exam))
  }
}

/// The two rate lists held on a user document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateList {
  Rates,
  RatesToDo,
}

impl RateList {
  /// Name of the backing field in the user document
  pub fn field_name(&self) -> &'static str {
    match self {
      RateList::Rates => "rates",
      RateList::RatesToDo => "ratesToDo",
    }
  }
}
