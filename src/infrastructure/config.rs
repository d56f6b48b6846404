use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::fmt;

fn default_db_connect_timeout() -> u64 {
  5
}

fn default_database_name() -> String {
  "classrate".to_string()
}

fn default_password_min_length() -> usize {
  6
}

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  pub server: ServerConfig,
  pub database: DatabaseConfig,
  pub security: SecurityConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
}

/// Document database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
  /// MongoDB connection string
  pub url: String,
  #[serde(default = "default_database_name")]
  pub name: String,
  #[serde(default = "default_db_connect_timeout")]
  pub connect_timeout_seconds: u64,
  /// Keep users in process memory instead of MongoDB (local development only)
  #[serde(default)]
  pub in_memory: bool,
}

/// Security configuration
#[derive(Clone, Deserialize)]
pub struct SecurityConfig {
  #[serde(default = "default_password_min_length")]
  pub password_min_length: usize,
  /// Signing secret for JWT-protected routes; no mounted route consumes it yet
  pub jwt_secret: String,
}

impl fmt::Debug for SecurityConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SecurityConfig")
      .field("password_min_length", &self.password_min_length)
      .field("jwt_secret", &"***")
      .finish()
  }
}

impl Config {
  /// Load configuration from files and environment variables
  ///
  /// Sources, later ones overriding earlier ones:
  /// 1. config/default.toml
  /// 2. config/local.toml (if exists)
  /// 3. config/{RUN_MODE}.toml (if exists, RUN_MODE defaults to `development`)
  /// 4. Environment variables with the CLASSRATE_ prefix
  ///
  /// Environment variables use double underscores between sections:
  /// - `CLASSRATE_SERVER__PORT=8080`
  /// - `CLASSRATE_DATABASE__URL=mongodb://localhost:27017`
  /// - `CLASSRATE_DATABASE__IN_MEMORY=true`
  /// - `CLASSRATE_SECURITY__JWT_SECRET=...`
  pub fn load() -> Result<Self, ConfigError> {
    let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

    let config = ConfigBuilder::builder()
      .add_source(File::with_name("config/default").required(true))
      .add_source(File::with_name("config/local").required(false))
      .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
      .add_source(
        Environment::with_prefix("CLASSRATE")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .build()?;

    config.try_deserialize()
  }

  /// Address the HTTP server binds to
  pub fn bind_address(&self) -> (String, u16) {
    (self.server.host.clone(), self.server.port)
  }
}
