pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::{Rate, RateKey, RateList, User};
pub use errors::{AccountError, DUPLICATE_KEY_CODE, HashError, RepositoryError, ValidationError};
pub use services::{AccountService, AccountServiceConfig, RegistrationOutcome, UserProfile};
pub use value_objects::{Email, Password, PasswordHash, ValueObjectError};
