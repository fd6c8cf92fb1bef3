//! Request middleware.
//!
//! Purpose: define middleware components for request lifecycle concerns such
//! as correlating logs and error payloads with a trace identifier.

pub mod trace;

pub use trace::Trace;
