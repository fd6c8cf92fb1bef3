//! HTTP inbound adapter exposing REST endpoints.

pub mod customers;
pub mod error;
pub mod health;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;
