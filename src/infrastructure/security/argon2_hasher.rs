use argon2::password_hash::SaltString;
use argon2::{
  Algorithm, Argon2, Params, Version,
  password_hash::{
    PasswordHash as Argon2PasswordHash, PasswordHasher as Argon2PasswordHasherTrait,
    PasswordVerifier,
  },
};
use async_trait::async_trait;

use crate::domain::account::errors::{AccountError, HashError};
use crate::domain::account::ports::PasswordHasher;
use crate::domain::account::value_objects::{Password, PasswordHash};

/// Argon2id password hasher
///
/// Parameters: 19 MiB memory, 2 iterations, 1 lane, 32-byte output.
/// Hashing and verification run on the blocking thread pool.
#[derive(Clone)]
pub struct Argon2PasswordHasher {
  argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
  pub fn new() -> Result<Self, AccountError> {
    let params = Params::new(19456, 2, 1, Some(32)).map_err(|e| {
      AccountError::Hash(HashError::HashingFailed(format!(
        "Failed to create Argon2 params: {}",
        e
      )))
    })?;

    Ok(Self {
      argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
    })
  }

  fn hash_blocking(&self, password: &Password) -> Result<PasswordHash, AccountError> {
    let salt = SaltString::generate(&mut rand::rngs::OsRng);

    let hash = self
      .argon2
      .hash_password(password.as_str().as_bytes(), &salt)
      .map_err(|e| AccountError::Hash(HashError::HashingFailed(e.to_string())))?;

    PasswordHash::from_hash(hash.to_string())
      .map_err(|e| AccountError::Hash(HashError::HashingFailed(e.to_string())))
  }

  fn verify_blocking(
    &self,
    password: &Password,
    hashed_password: &PasswordHash,
  ) -> Result<bool, AccountError> {
    let parsed_hash = Argon2PasswordHash::new(hashed_password.as_str())
      .map_err(|e| AccountError::Hash(HashError::VerificationFailed(e.to_string())))?;

    // verify_password compares digests in constant time
    match self
      .argon2
      .verify_password(password.as_str().as_bytes(), &parsed_hash)
    {
      Ok(()) => Ok(true),
      Err(argon2::password_hash::Error::Password) => Ok(false),
      Err(e) => Err(AccountError::Hash(HashError::VerificationFailed(
        e.to_string(),
      ))),
    }
  }
}

impl Default for Argon2PasswordHasher {
  fn default() -> Self {
    Self::new().expect("Argon2 parameters are constant and valid")
  }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
  async fn hash(&self, password: &Password) -> Result<PasswordHash, AccountError> {
    let hasher = self.clone();
    let password = password.clone();

    tokio::task::spawn_blocking(move || hasher.hash_blocking(&password))
      .await
      .map_err(|e| AccountError::Hash(HashError::TaskFailed(e.to_string())))?
  }

  async fn verify(
    &self,
    password: &Password,
    hashed_password: &PasswordHash,
  ) -> Result<bool, AccountError> {
    let hasher = self.clone();
    let password = password.clone();
    let hashed_password = hashed_password.clone();

    tokio::task::spawn_blocking(move || hasher.verify_blocking(&password, &hashed_password))
      .await
      .map_err(|e| AccountError::Hash(HashError::TaskFailed(e.to_string())))?
  }
}
