//! Domain ports and supporting types for the hexagonal boundary.
//!
//! `CustomerRepository` is the driven port implemented by persistence
//! adapters. `CustomersQuery` and `CustomersCommand` are the driving ports
//! consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod customer_repository;
mod customer_service_error;
mod customers_command;
mod customers_query;

#[cfg(test)]
pub use customer_repository::MockCustomerRepository;
pub use customer_repository::{CustomerPersistenceError, CustomerRepository};
pub use customer_service_error::CustomerServiceError;
pub use customers_command::CustomersCommand;
pub use customers_query::CustomersQuery;
