//! Outbound adapters implementing domain ports against external systems.
//!
//! Persistence lives under [`persistence`]; adapters translate between
//! infrastructure types and domain values and keep driver details out of the
//! domain.

pub mod persistence;
