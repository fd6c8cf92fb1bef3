//! Customer use-case service.
//!
//! Implements the customer driving ports on top of a [`CustomerRepository`].
//! Update and delete look the record up first and report
//! [`CustomerServiceError::NotFound`] when it is missing. The lookup and the
//! write are separate store calls, so two concurrent requests for the same
//! identifier may interleave.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    CustomerRepository, CustomerServiceError, CustomersCommand, CustomersQuery,
};
use crate::domain::{Customer, CustomerDetails, CustomerDraft, CustomerId};

/// Customer service implementing [`CustomersQuery`] and [`CustomersCommand`].
#[derive(Clone)]
pub struct CustomerService<R> {
    repository: Arc<R>,
}

impl<R> CustomerService<R> {
    /// Create a new service backed by `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> CustomerService<R>
where
    R: CustomerRepository,
{
    async fn require_customer(&self, id: CustomerId) -> Result<Customer, CustomerServiceError> {
        match self.repository.find_by_id(&id).await? {
            Some(customer) => Ok(customer),
            None => {
                debug!(customer_id = %id, "customer lookup missed");
                Err(CustomerServiceError::not_found(id))
            }
        }
    }
}

#[async_trait]
impl<R> CustomersQuery for CustomerService<R>
where
    R: CustomerRepository,
{
    async fn list_customers(&self) -> Result<Vec<Customer>, CustomerServiceError> {
        Ok(self.repository.find_all().await?)
    }
}

#[async_trait]
impl<R> CustomersCommand for CustomerService<R>
where
    R: CustomerRepository,
{
    async fn add_customer(
        &self,
        details: CustomerDetails,
    ) -> Result<Customer, CustomerServiceError> {
        let saved = self.repository.save(&CustomerDraft::new(details)).await?;
        info!(
            customer_id = %saved.id(),
            name = %saved.details().name,
            email = %saved.details().email,
            "added new customer"
        );
        Ok(saved)
    }

    async fn update_customer(
        &self,
        id: CustomerId,
        details: CustomerDetails,
    ) -> Result<Customer, CustomerServiceError> {
        let existing = self.require_customer(id).await?;
        let draft = CustomerDraft::from(existing.with_details(details));
        let saved = self.repository.save(&draft).await?;
        info!(customer_id = %saved.id(), "updated customer");
        Ok(saved)
    }

    async fn delete_customer(&self, id: CustomerId) -> Result<(), CustomerServiceError> {
        let existing = self.require_customer(id).await?;
        self.repository.delete(&existing).await?;
        info!(customer_id = %id, "deleted customer");
        Ok(())
    }
}

#[cfg(test)]
#[path = "customer_service_tests.rs"]
mod tests;
