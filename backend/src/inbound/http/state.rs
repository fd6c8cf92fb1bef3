//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::CustomerService;
use crate::domain::ports::{CustomerRepository, CustomersCommand, CustomersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub customers: Arc<dyn CustomersCommand>,
    pub customers_query: Arc<dyn CustomersQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(
        customers: Arc<dyn CustomersCommand>,
        customers_query: Arc<dyn CustomersQuery>,
    ) -> Self {
        Self {
            customers,
            customers_query,
        }
    }

    /// Wire both customer ports to one [`CustomerService`] over `repository`.
    pub fn from_repository<R>(repository: Arc<R>) -> Self
    where
        R: CustomerRepository + 'static,
    {
        let service = Arc::new(CustomerService::new(repository));
        Self::new(service.clone(), service)
    }
}
