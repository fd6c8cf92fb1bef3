//! Domain primitives, ports and use-case services.
//!
//! Purpose: define the customer aggregate, the transport-agnostic error
//! envelope and the services that drive the persistence port. Nothing here
//! depends on actix or Diesel.
//!
//! Public surface:
//! - Customer, CustomerId, CustomerDetails, CustomerDraft: customer values.
//! - CustomerService: implements the customer driving ports.
//! - Error, ErrorCode: error payload returned to adapters.
//! - TraceId: request correlation identifier.

pub mod customer;
mod customer_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::customer::{Customer, CustomerDetails, CustomerDraft, CustomerId};
pub use self::customer_service::CustomerService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
