//! Driving port for customer reads.
//!
//! HTTP handlers list customers through this port without importing
//! persistence concerns.

use async_trait::async_trait;

use crate::domain::Customer;

use super::CustomerServiceError;

/// Domain use-case port for listing customers.
#[async_trait]
pub trait CustomersQuery: Send + Sync {
    /// Return every stored customer; order is store-determined.
    async fn list_customers(&self) -> Result<Vec<Customer>, CustomerServiceError>;
}
