use actix_web::{HttpRequest, error, web};
use std::sync::Arc;

use crate::application::account::{
  AuthenticateUserUseCase, RegisterTestUserUseCase, RegisterUserUseCase,
};
use crate::application::rates::{
  DeleteRateToDoUseCase, FindRatesInExamUseCase, FindRatesToDoUseCase, SaveRateUseCase,
};
use crate::domain::account::services::AccountService;

use super::errors::ApiError;
use super::handlers::rates::{
  delete_rates_to_do_handler, find_rates_in_exam_handler, find_rates_to_do_handler,
  save_rates_handler, save_rates_to_do_handler,
};
use super::handlers::user::{
  login_handler, register_handler, register_test_handler, test_handler,
};

/// Use cases behind the user routes
#[derive(Clone)]
pub struct UserRouteDependencies {
  pub register_user: Arc<RegisterUserUseCase>,
  pub authenticate_user: Arc<AuthenticateUserUseCase>,
  pub register_test_user: Arc<RegisterTestUserUseCase>,
  pub save_rate: Arc<SaveRateUseCase>,
  pub find_rates_in_exam: Arc<FindRatesInExamUseCase>,
  pub find_rates_to_do: Arc<FindRatesToDoUseCase>,
  pub delete_rate_to_do: Arc<DeleteRateToDoUseCase>,
}

impl UserRouteDependencies {
  /// Builds every use case over one account service
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self {
      register_user: Arc::new(RegisterUserUseCase::new(account_service.clone())),
      authenticate_user: Arc::new(AuthenticateUserUseCase::new(account_service.clone())),
      register_test_user: Arc::new(RegisterTestUserUseCase::new(account_service.clone())),
      save_rate: Arc::new(SaveRateUseCase::new(account_service.clone())),
      find_rates_in_exam: Arc::new(FindRatesInExamUseCase::new(account_service.clone())),
      find_rates_to_do: Arc::new(FindRatesToDoUseCase::new(account_service.clone())),
      delete_rate_to_do: Arc::new(DeleteRateToDoUseCase::new(account_service)),
    }
  }
}

fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
  ApiError::Validation(err.to_string()).into()
}

fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
  ApiError::Validation(err.to_string()).into()
}

/// Configure user routes
///
/// Mounts the account and rate endpoints under the provided scope
/// (e.g., /api/user). Malformed JSON bodies and query strings are answered
/// with the standard 400 error body.
///
/// # Routes
///
/// - POST /register - Register a new user account
/// - POST /login - Check a credential pair
/// - GET /test - Liveness probe
/// - GET /register/test - Insert the fixed diagnostic user
/// - POST /rates - Append a submitted rate
/// - GET /rates/exam - Rates given in one exam of a class
/// - POST /rates/todo - Append a pending rate
/// - GET /rates/todo - Pending rates
/// - DELETE /rates/todo - Remove pending rates
///
/// # Example
///
/// ```no_run
/// use actix_web::{App, web};
/// use std::sync::Arc;
/// # use classrate::adapters::http::routes::{UserRouteDependencies, configure_user_routes};
/// # use classrate::domain::account::AccountService;
///
/// # fn example(account_service: Arc<AccountService>) {
/// let dependencies = UserRouteDependencies::new(account_service);
/// let app = App::new().service(
///   web::scope("/api/user")
///     .configure(|cfg| configure_user_routes(cfg, dependencies.clone())),
/// );
/// # }
/// ```
pub fn configure_user_routes(cfg: &mut web::ServiceConfig, dependencies: UserRouteDependencies) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
    .app_data(web::QueryConfig::default().error_handler(query_error_handler))
    // Store use cases in app data so handlers can access them
    .app_data(web::Data::new(dependencies.register_user))
    .app_data(web::Data::new(dependencies.authenticate_user))
    .app_data(web::Data::new(dependencies.register_test_user))
    .app_data(web::Data::new(dependencies.save_rate))
    .app_data(web::Data::new(dependencies.find_rates_in_exam))
    .app_data(web::Data::new(dependencies.find_rates_to_do))
    .app_data(web::Data::new(dependencies.delete_rate_to_do))
    .route("/register", web::post().to(register_handler))
    .route("/login", web::post().to(login_handler))
    .route("/test", web::get().to(test_handler))
    .route("/register/test", web::get().to(register_test_handler))
    .route("/rates", web::post().to(save_rates_handler))
    .route("/rates/exam", web::get().to(find_rates_in_exam_handler))
    .service(
      web::resource("/rates/todo")
        .route(web::post().to(save_rates_to_do_handler))
        .route(web::get().to(find_rates_to_do_handler))
        .route(web::delete().to(delete_rates_to_do_handler)),
    );
}
