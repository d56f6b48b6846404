//! Application layer
//!
//! This layer contains use cases that orchestrate domain logic to implement
//! application-specific workflows. Use cases coordinate the account service
//! and its ports to fulfill each HTTP operation.

pub mod account;
pub mod rates;
