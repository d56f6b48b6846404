pub mod rates;
pub mod user;
