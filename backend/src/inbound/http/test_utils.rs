//! Test helpers for inbound HTTP components.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::ports::{CustomerPersistenceError, CustomerRepository};
use crate::domain::{Customer, CustomerDetails, CustomerDraft, CustomerId};
use crate::inbound::http::state::HttpState;

#[derive(Debug, Default)]
struct Rows {
    next_id: i32,
    customers: Vec<Customer>,
}

/// In-memory customer store assigning identifiers from 1 upwards.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCustomerRepository {
    rows: Arc<Mutex<Rows>>,
}

impl InMemoryCustomerRepository {
    /// Insert `details` as if they had been created through the API.
    pub fn seed(&self, details: CustomerDetails) -> Customer {
        let mut rows = self.rows.lock().expect("rows lock");
        rows.next_id += 1;
        let customer = Customer::new(CustomerId::new(rows.next_id), details);
        rows.customers.push(customer.clone());
        customer
    }

    /// Copy of the stored rows in identifier order.
    pub fn snapshot(&self) -> Vec<Customer> {
        self.rows.lock().expect("rows lock").customers.clone()
    }

    /// Build HTTP state wired to this repository through the real service.
    pub fn http_state(&self) -> HttpState {
        HttpState::from_repository(Arc::new(self.clone()))
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_all(&self) -> Result<Vec<Customer>, CustomerPersistenceError> {
        Ok(self.snapshot())
    }

    async fn find_by_id(
        &self,
        id: &CustomerId,
    ) -> Result<Option<Customer>, CustomerPersistenceError> {
        let rows = self.rows.lock().expect("rows lock");
        Ok(rows.customers.iter().find(|c| c.id() == *id).cloned())
    }

    async fn save(&self, draft: &CustomerDraft) -> Result<Customer, CustomerPersistenceError> {
        let Some(id) = draft.id() else {
            return Ok(self.seed(draft.details().clone()));
        };
        let mut rows = self.rows.lock().expect("rows lock");
        let slot = rows
            .customers
            .iter_mut()
            .find(|c| c.id() == id)
            .ok_or_else(|| CustomerPersistenceError::query("record not found"))?;
        *slot = Customer::new(id, draft.details().clone());
        Ok(slot.clone())
    }

    async fn delete(&self, customer: &Customer) -> Result<(), CustomerPersistenceError> {
        let mut rows = self.rows.lock().expect("rows lock");
        rows.customers.retain(|c| c.id() != customer.id());
        Ok(())
    }
}
