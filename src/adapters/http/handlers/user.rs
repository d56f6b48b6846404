use actix_web::{HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use crate::adapters::http::{
  dtos::{
    AlreadyExistsResponse, DiagnosticResponse, LoginRequest, LoginResponse, RegisterRequest,
    RegisterResponse,
  },
  errors::ApiError,
};
use crate::application::account::{
  AuthenticateUserCommand, AuthenticateUserUseCase, RegisterTestUserUseCase, RegisterUserCommand,
  RegisterUserUseCase,
};
use crate::domain::account::services::RegistrationOutcome;

/// Age reported alongside the diagnostic user
const TEST_USER_AGE: u32 = 20;

/// Handler for user registration
///
/// POST /api/user/register
/// Body: RegisterRequest (JSON)
/// Response: RegisterResponse, or AlreadyExistsResponse for a taken email (both 200)
pub async fn register_handler(
  request: web::Json<RegisterRequest>,
  use_case: web::Data<Arc<RegisterUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let mut request = request.into_inner();
  request.user.email = request.user.email.trim().to_string();
  request.validate()?;

  let user = request.user;
  let command = RegisterUserCommand {
    name: user.name,
    email: user.email,
    password: user.password,
    salt: user.salt,
    is_from_facebook: user.is_from_facebook,
    rates: user.rates,
    rates_to_do: user.rates_to_do,
  };

  match use_case.execute(command).await? {
    RegistrationOutcome::Registered(_) => Ok(HttpResponse::Ok().json(RegisterResponse::registered())),
    RegistrationOutcome::AlreadyExists { code } => {
      Ok(HttpResponse::Ok().json(AlreadyExistsResponse::new(code)))
    }
  }
}

/// Handler for user login
///
/// POST /api/user/login
/// Body: LoginRequest (JSON)
/// Response: LoginResponse (JSON), always 200
///
/// A body that does not decode is answered as a failed login, not a 400.
pub async fn login_handler(
  body: web::Bytes,
  use_case: web::Data<Arc<AuthenticateUserUseCase>>,
) -> HttpResponse {
  let request: LoginRequest = match serde_json::from_slice(&body) {
    Ok(request) => request,
    Err(error) => {
      tracing::debug!(error = %error, "unreadable login body");
      return HttpResponse::Ok().json(LoginResponse::failed());
    }
  };

  let user = request.user;
  let command = AuthenticateUserCommand {
    email: user.email,
    password: user.password,
  };

  let response = match use_case.execute(command).await {
    Ok(result) => LoginResponse {
      success: result.success(),
      user: result.user,
    },
    Err(error) => {
      tracing::error!(error = %error, "login failed");
      LoginResponse::failed()
    }
  };

  HttpResponse::Ok().json(response)
}

/// Liveness probe
///
/// GET /api/user/test
pub async fn test_handler() -> HttpResponse {
  HttpResponse::Ok().json(DiagnosticResponse {
    test: true,
    production: true,
  })
}

/// Inserts the fixed diagnostic user
///
/// GET /api/user/register/test
pub async fn register_test_handler(
  use_case: web::Data<Arc<RegisterTestUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  match use_case.execute().await? {
    RegistrationOutcome::Registered(profile) => Ok(HttpResponse::Ok().json(RegisterResponse {
      user: Some(profile),
      age: Some(TEST_USER_AGE),
      ..RegisterResponse::registered()
    })),
    RegistrationOutcome::AlreadyExists { code } => {
      Ok(HttpResponse::Ok().json(AlreadyExistsResponse::new(code)))
    }
  }
}
