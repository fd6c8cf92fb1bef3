//! PostgreSQL-backed `CustomerRepository` implementation using Diesel ORM.
//!
//! Each call checks a connection out of the pool and issues a single
//! statement; consistency of individual writes is left to PostgreSQL.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CustomerPersistenceError, CustomerRepository};
use crate::domain::{Customer, CustomerDetails, CustomerDraft, CustomerId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{CustomerRow, CustomerUpdate, NewCustomerRow};
use super::pool::{DbPool, PoolError};
use super::schema::customer;

/// Diesel-backed implementation of the [`CustomerRepository`] port.
#[derive(Clone)]
pub struct DieselCustomerRepository {
    pool: DbPool,
}

impl DieselCustomerRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain customer repository errors.
fn map_pool_error(error: PoolError) -> CustomerPersistenceError {
    map_basic_pool_error(error, CustomerPersistenceError::connection)
}

/// Map Diesel errors to domain customer repository errors.
fn map_diesel_error(error: diesel::result::Error) -> CustomerPersistenceError {
    map_basic_diesel_error(
        error,
        CustomerPersistenceError::query,
        CustomerPersistenceError::connection,
    )
}

fn row_to_customer(row: CustomerRow) -> Customer {
    Customer::new(
        CustomerId::new(row.id),
        CustomerDetails {
            name: row.name,
            email: row.email,
            age: row.age,
        },
    )
}

fn new_row(details: &CustomerDetails) -> NewCustomerRow<'_> {
    NewCustomerRow {
        name: details.name.as_str(),
        email: details.email.as_str(),
        age: details.age,
    }
}

fn update_row(details: &CustomerDetails) -> CustomerUpdate<'_> {
    CustomerUpdate {
        name: details.name.as_str(),
        email: details.email.as_str(),
        age: details.age,
    }
}

#[async_trait]
impl CustomerRepository for DieselCustomerRepository {
    async fn find_all(&self) -> Result<Vec<Customer>, CustomerPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CustomerRow> = customer::table
            .order(customer::id.asc())
            .select(CustomerRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_customer).collect())
    }

    async fn find_by_id(
        &self,
        id: &CustomerId,
    ) -> Result<Option<Customer>, CustomerPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<CustomerRow> = customer::table
            .find(id.get())
            .select(CustomerRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_customer))
    }

    async fn save(&self, draft: &CustomerDraft) -> Result<Customer, CustomerPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: CustomerRow = match draft.id() {
            None => diesel::insert_into(customer::table)
                .values(&new_row(draft.details()))
                .returning(CustomerRow::as_returning())
                .get_result(&mut conn)
                .await
                .map_err(map_diesel_error)?,
            // A row deleted since the caller's lookup surfaces as a query error.
            Some(id) => diesel::update(customer::table.find(id.get()))
                .set(&update_row(draft.details()))
                .returning(CustomerRow::as_returning())
                .get_result(&mut conn)
                .await
                .map_err(map_diesel_error)?,
        };

        Ok(row_to_customer(row))
    }

    async fn delete(&self, target: &Customer) -> Result<(), CustomerPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(customer::table.find(target.id().get()))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
