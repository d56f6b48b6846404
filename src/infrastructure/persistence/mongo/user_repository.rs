use async_trait::async_trait;
use mongodb::{
  Client, Collection, Database, IndexModel,
  bson::{Document, doc, to_bson},
  options::{ClientOptions, IndexOptions},
};
use std::time::Duration;

use crate::domain::account::{
  entities::{Rate, RateKey, RateList, User},
  errors::{AccountError, RepositoryError},
  ports::UserRepository,
  value_objects::Email,
};

/// MongoDB implementation of the UserRepository trait
pub struct MongoUserRepository {
  users: Collection<User>,
}

impl MongoUserRepository {
  pub const COLLECTION: &'static str = "users";

  pub fn new(database: &Database) -> Self {
    Self {
      users: database.collection(Self::COLLECTION),
    }
  }

  /// Connects to `url`, pings the server and returns a repository over `database_name`
  pub async fn connect(
    url: &str,
    database_name: &str,
    timeout: Duration,
  ) -> Result<Self, AccountError> {
    let mut options = ClientOptions::parse(url)
      .await
      .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;
    options.app_name = Some("classrate".to_string());
    options.connect_timeout = Some(timeout);
    options.server_selection_timeout = Some(timeout);

    let client =
      Client::with_options(options).map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;
    let database = client.database(database_name);

    database
      .run_command(doc! { "ping": 1 })
      .await
      .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

    Ok(Self::new(&database))
  }

  /// Creates the unique email index that backs duplicate detection
  pub async fn ensure_indexes(&self) -> Result<(), AccountError> {
    let index = IndexModel::builder()
      .keys(doc! { "email": 1 })
      .options(IndexOptions::builder().unique(true).build())
      .build();

    self.users.create_index(index).await?;
    Ok(())
  }

  fn by_email(email: &Email) -> Document {
    doc! { "email": email.as_str() }
  }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
  async fn create(&self, user: User) -> Result<User, AccountError> {
    self.users.insert_one(&user).await?;
    Ok(user)
  }

  async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AccountError> {
    let user = self
      .users
      .find_one(Self::by_email(email))
      .projection(doc! { "_id": 0, "__v": 0 })
      .await?;

    Ok(user)
  }

  async fn push_rate(
    &self,
    email: &Email,
    list: RateList,
    rate: Rate,
  ) -> Result<bool, AccountError> {
    let field = list.field_name();
    let rate = to_bson(&rate).map_err(|e| RepositoryError::Serialization(e.to_string()))?;

    let result = self
      .users
      .update_one(Self::by_email(email), doc! { "$push": { field: rate } })
      .await?;

    Ok(result.matched_count > 0)
  }

  async fn pull_rate_to_do(&self, email: &Email, key: &RateKey) -> Result<bool, AccountError> {
    let mut condition = doc! {
      "userClass": key.user_class.as_str(),
      "userClassOwnerEmail": key.user_class_owner_email.as_str(),
    };
    if let Some(exam) = &key.exam {
      condition.insert("exam", exam.as_str());
    }

    let field = RateList::RatesToDo.field_name();
    let result = self
      .users
      .update_one(Self::by_email(email), doc! { "$pull": { field: condition } })
      .await?;

    Ok(result.matched_count > 0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use testcontainers_modules::mongo::Mongo;
  use testcontainers_modules::testcontainers::{ContainerAsync, runners::AsyncRunner};

  async fn setup_test_db() -> (MongoUserRepository, ContainerAsync<Mongo>) {
    let container = Mongo::default()
      .start()
      .await
      .expect("Failed to start mongo container");

    let host = container.get_host().await.expect("Failed to get host");
    let port = container
      .get_host_port_ipv4(27017)
      .await
      .expect("Failed to get port");
    let url = format!("mongodb://{}:{}", host, port);

    let repo = MongoUserRepository::connect(&url, "classrate_test", Duration::from_secs(10))
      .await
      .expect("Failed to connect to test database");
    repo
      .ensure_indexes()
      .await
      .expect("Failed to create indexes");

    (repo, container)
  }

  fn user(email: &str) -> User {
    User::new(
      "test".to_string(),
      email.to_string(),
      "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
    )
  }

  fn rate(exam: &str) -> Rate {
    Rate {
      user_class: "class name".to_string(),
      user_class_owner_email: "teacher@email.com".to_string(),
      exam: Some(exam.to_string()),
      rate: Some(5.0),
    }
  }

  #[tokio::test]
  #[ignore = "requires a Docker daemon"]
  async fn test_create_and_find_user() {
    let (repo, _container) = setup_test_db().await;

    repo.create(user("test@test.com")).await.unwrap();

    let email = Email::new("test@test.com").unwrap();
    let found = repo.find_by_email(&email).await.unwrap().unwrap();
    assert_eq!(found.name, "test");

    let missing = Email::new("test12@test.com").unwrap();
    assert!(repo.find_by_email(&missing).await.unwrap().is_none());
  }

  #[tokio::test]
  #[ignore = "requires a Docker daemon"]
  async fn test_duplicate_email() {
    let (repo, _container) = setup_test_db().await;

    repo.create(user("duplicate@test.com")).await.unwrap();
    let result = repo.create(user("duplicate@test.com")).await;

    match result {
      Err(AccountError::Repository(RepositoryError::DuplicateKey { code, .. })) => {
        assert_eq!(code, 11000)
      }
      other => panic!("Expected Repository(DuplicateKey) error, got {:?}", other),
    }
  }

  #[tokio::test]
  #[ignore = "requires a Docker daemon"]
  async fn test_push_and_pull_rates() {
    let (repo, _container) = setup_test_db().await;
    repo.create(user("rates@test.com")).await.unwrap();
    let email = Email::new("rates@test.com").unwrap();

    assert!(
      repo
        .push_rate(&email, RateList::Rates, rate("testExam"))
        .await
        .unwrap()
    );
    assert!(
      repo
        .push_rate(&email, RateList::RatesToDo, rate("testExam"))
        .await
        .unwrap()
    );
    assert!(
      repo
        .push_rate(&email, RateList::RatesToDo, rate("otherExam"))
        .await
        .unwrap()
    );

    let key = RateKey {
      user_class: "class name".to_string(),
      user_class_owner_email: "teacher@email.com".to_string(),
      exam: Some("testExam".to_string()),
    };
    assert!(repo.pull_rate_to_do(&email, &key).await.unwrap());

    let stored = repo.find_by_email(&email).await.unwrap().unwrap();
    assert_eq!(stored.rates, vec![rate("testExam")]);
    assert_eq!(stored.rates_to_do, vec![rate("otherExam")]);
  }

  #[tokio::test]
  #[ignore = "requires a Docker daemon"]
  async fn test_updates_report_unknown_user() {
    let (repo, _container) = setup_test_db().await;
    let email = Email::new("nobody@test.com").unwrap();

    assert!(
      !repo
        .push_rate(&email, RateList::Rates, rate("testExam"))
        .await
        .unwrap()
    );
  }
}
