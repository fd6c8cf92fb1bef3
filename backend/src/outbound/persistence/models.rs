//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Conversion to and from domain values
//! happens explicitly in the repository adapter.

use diesel::prelude::*;

use super::schema::customer;

/// Row struct for reading from the customer table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = customer)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CustomerRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
}

/// Insertable struct for creating customer records; the id comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = customer)]
pub(crate) struct NewCustomerRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub age: Option<i32>,
}

/// Changeset struct overwriting every mutable customer column.
///
/// `age: None` clears the column rather than leaving it untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = customer)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct CustomerUpdate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub age: Option<i32>,
}
