pub mod account;

// Re-export account module for easier access
pub use account::*;
