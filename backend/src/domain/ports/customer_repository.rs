//! Driven port for customer persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Customer, CustomerDraft, CustomerId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by customer repository adapters.
    pub enum CustomerPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "customer repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "customer repository query failed: {message}",
    }
}

/// Typed access to the customer table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Return every stored customer in store order; empty when none exist.
    async fn find_all(&self) -> Result<Vec<Customer>, CustomerPersistenceError>;

    /// Fetch a customer by identifier, returning `None` when absent.
    async fn find_by_id(&self, id: &CustomerId)
    -> Result<Option<Customer>, CustomerPersistenceError>;

    /// Insert a draft without an identifier, or overwrite the row it names.
    ///
    /// Returns the persisted record, including the store-assigned identifier
    /// on insert.
    async fn save(&self, draft: &CustomerDraft) -> Result<Customer, CustomerPersistenceError>;

    /// Remove the row matching the customer's identifier.
    ///
    /// Callers confirm existence beforehand; removing an absent row is not
    /// reported as an error.
    async fn delete(&self, customer: &Customer) -> Result<(), CustomerPersistenceError>;
}
