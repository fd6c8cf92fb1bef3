//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly. Regenerate with
//! `diesel print-schema` when a migration changes the table.

diesel::table! {
    /// Customer records.
    ///
    /// The `id` column is a store-assigned serial primary key.
    customer (id) {
        /// Primary key assigned by the `SERIAL` sequence.
        id -> Int4,
        /// Customer name.
        name -> Text,
        /// Contact email; not unique.
        email -> Text,
        /// Optional age in years.
        age -> Nullable<Int4>,
    }
}
