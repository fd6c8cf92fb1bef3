//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of domain repository ports backed by PostgreSQL
//! via `diesel-async`, with connections pooled by `bb8`.
//!
//! - Repository implementations only translate between Diesel rows and
//!   domain values. No business logic resides here.
//! - Row structs (`models.rs`) and the table definition (`schema.rs`) stay
//!   private to this module.
//! - Every database failure is mapped to [`CustomerPersistenceError`].
//!
//! [`CustomerPersistenceError`]: crate::domain::ports::CustomerPersistenceError
//!
//! # Example
//!
//! ```ignore
//! use customer_api::outbound::persistence::{DbPool, DieselCustomerRepository, PoolConfig};
//!
//! let config = PoolConfig::new("postgres://localhost/customer");
//! let pool = DbPool::new(config).await?;
//! let repo = DieselCustomerRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_customer_repository;
mod models;
mod pool;
mod schema;

pub use diesel_customer_repository::DieselCustomerRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
