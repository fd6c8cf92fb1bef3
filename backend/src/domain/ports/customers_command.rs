//! Driving port for customer mutations.

use async_trait::async_trait;

use crate::domain::{Customer, CustomerDetails, CustomerId};

use super::CustomerServiceError;

/// Domain use-case port for creating, updating and deleting customers.
#[async_trait]
pub trait CustomersCommand: Send + Sync {
    /// Persist a new customer and return it with its assigned identifier.
    async fn add_customer(&self, details: CustomerDetails)
    -> Result<Customer, CustomerServiceError>;

    /// Overwrite every field of an existing customer.
    ///
    /// Fails with [`CustomerServiceError::NotFound`] when `id` does not
    /// resolve; nothing is written in that case.
    async fn update_customer(
        &self,
        id: CustomerId,
        details: CustomerDetails,
    ) -> Result<Customer, CustomerServiceError>;

    /// Permanently remove a customer.
    ///
    /// Fails with [`CustomerServiceError::NotFound`] when `id` does not
    /// resolve.
    async fn delete_customer(&self, id: CustomerId) -> Result<(), CustomerServiceError>;
}
