//! Customer management service library.
//!
//! Layout follows ports and adapters:
//! - [`domain`] holds the customer model, use-case ports and the service.
//! - [`outbound`] implements the persistence port on PostgreSQL via Diesel.
//! - [`inbound`] exposes the use-cases over HTTP with Actix.
//! - [`middleware`] carries request lifecycle concerns such as tracing.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

pub use domain::TraceId;
pub use middleware::Trace;
