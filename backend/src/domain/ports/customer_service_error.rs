//! Outcome type shared by the customer driving ports.
//!
//! `NotFound` is the single domain failure; store failures pass through
//! untouched so the inbound adapter can translate them once.

use crate::domain::CustomerId;

use super::CustomerPersistenceError;

/// Failure raised by customer use-cases.
///
/// # Examples
/// ```
/// use customer_api::domain::CustomerId;
/// use customer_api::domain::ports::CustomerServiceError;
///
/// let err = CustomerServiceError::not_found(CustomerId::new(999));
/// assert_eq!(err.to_string(), "Customer with ID 999 not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CustomerServiceError {
    /// No customer matches the requested identifier.
    #[error("Customer with ID {id} not found")]
    NotFound {
        /// Identifier that failed to resolve.
        id: CustomerId,
    },
    /// The customer store failed.
    #[error(transparent)]
    Persistence(#[from] CustomerPersistenceError),
}

impl CustomerServiceError {
    /// Build the not-found outcome for `id`.
    #[must_use]
    pub fn not_found(id: CustomerId) -> Self {
        Self::NotFound { id }
    }
}
