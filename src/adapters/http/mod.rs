pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;

// Re-export commonly used types
pub use dtos::{
  AlreadyExistsResponse, DiagnosticResponse, ErrorResponse, LoginRequest, LoginResponse,
  RegisterRequest, RegisterResponse, ResultResponse,
};
pub use errors::ApiError;
pub use middleware::{RequestId, RequestIdMiddleware};
pub use routes::{UserRouteDependencies, configure_user_routes};
