//! Account use cases
//!
//! Registration, authentication and the diagnostic test-user fixture.

mod authenticate_user;
mod register_test_user;
mod register_user;

pub use authenticate_user::{
  AuthenticateUserCommand, AuthenticateUserResponse, AuthenticateUserUseCase,
};
pub use register_test_user::{RegisterTestUserUseCase, TEST_USER_EMAIL, TEST_USER_NAME};
pub use register_user::{RegisterUserCommand, RegisterUserUseCase};
