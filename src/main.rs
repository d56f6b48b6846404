use actix_web::{App, HttpServer, middleware::Logger, web};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use classrate::{
  adapters::http::{RequestIdMiddleware, UserRouteDependencies, configure_user_routes},
  domain::account::{
    ports::UserRepository,
    services::{AccountService, AccountServiceConfig},
  },
  infrastructure::{
    config::Config,
    persistence::{memory::InMemoryUserRepository, mongo::MongoUserRepository},
    security::Argon2PasswordHasher,
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "classrate=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting classrate");

  let config = Config::load().map_err(|e| {
    tracing::error!("Failed to load configuration: {}", e);
    std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
  })?;
  tracing::info!("Configuration loaded successfully");

  let user_repo = connect_user_repository(&config).await?;

  let password_hasher = Argon2PasswordHasher::new().map_err(|e| {
    tracing::error!("Failed to initialise password hasher: {}", e);
    std::io::Error::other(e.to_string())
  })?;

  let account_service = Arc::new(AccountService::new(
    user_repo,
    Arc::new(password_hasher),
    AccountServiceConfig {
      password_min_length: config.security.password_min_length,
    },
  ));
  let dependencies = UserRouteDependencies::new(account_service);

  let (server_host, server_port) = config.bind_address();

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  HttpServer::new(move || {
    App::new()
      .wrap(RequestIdMiddleware::new())
      .wrap(Logger::default())
      .service(
        web::scope("/api/user").configure(|cfg| configure_user_routes(cfg, dependencies.clone())),
      )
      .route("/health", web::get().to(health_check))
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await
}

/// Connects the configured user store
///
/// The MongoDB connection and ping are bounded by `database.connect_timeout_seconds`.
async fn connect_user_repository(config: &Config) -> std::io::Result<Arc<dyn UserRepository>> {
  if config.database.in_memory {
    tracing::warn!("Using the in-memory user store; data is lost on restart");
    return Ok(Arc::new(InMemoryUserRepository::new()));
  }

  let timeout = Duration::from_secs(config.database.connect_timeout_seconds);
  tracing::info!(
    "Connecting to MongoDB database '{}'",
    config.database.name
  );

  let repo = tokio::time::timeout(
    timeout,
    MongoUserRepository::connect(&config.database.url, &config.database.name, timeout),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Database connection timed out after {} seconds. Is MongoDB running?",
      config.database.connect_timeout_seconds
    );
    std::io::Error::new(
      std::io::ErrorKind::TimedOut,
      format!(
        "Database connection timed out after {} seconds",
        config.database.connect_timeout_seconds
      ),
    )
  })?
  .map_err(|e| {
    tracing::error!("Failed to connect to database: {}", e);
    std::io::Error::new(
      std::io::ErrorKind::ConnectionRefused,
      format!("Could not connect to MongoDB: {}", e),
    )
  })?;

  repo.ensure_indexes().await.map_err(|e| {
    tracing::error!("Failed to create user indexes: {}", e);
    std::io::Error::other(e.to_string())
  })?;
  tracing::info!("Database connection established");

  Ok(Arc::new(repo))
}

/// Health check endpoint
async fn health_check() -> &'static str {
  "OK"
}
