//! Customer API handlers.
//!
//! ```text
//! GET /api/v1/customers
//! POST /api/v1/customers {"name":"Abdi Ali","email":"AbdiAli@example.com","age":30}
//! PUT /api/v1/customers/2 {"name":"alice","email":"alice@gmail.com","age":20}
//! DELETE /api/v1/customers/2
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Customer, CustomerDetails, CustomerId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request body shared by `POST` and `PUT`.
///
/// Example JSON:
/// `{"name":"Abdi Ali","email":"AbdiAli@example.com","age":30}`
///
/// Any `id` supplied by the client is ignored.
#[derive(Debug, Deserialize, Serialize)]
pub struct CustomerRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub age: Option<i32>,
}

impl From<CustomerRequest> for CustomerDetails {
    fn from(value: CustomerRequest) -> Self {
        Self::new(value.name, value.email, value.age)
    }
}

/// Customer representation returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CustomerResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
}

impl From<Customer> for CustomerResponse {
    fn from(value: Customer) -> Self {
        let (id, details) = value.into_parts();
        Self {
            id: id.get(),
            name: details.name,
            email: details.email,
            age: details.age,
        }
    }
}

/// Confirmation body for successful deletes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// List every stored customer.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use customer_api::inbound::http::customers::list_customers;
///
/// let app = App::new().service(list_customers);
/// ```
#[get("/customers")]
pub async fn list_customers(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<CustomerResponse>>> {
    let customers = state.customers_query.list_customers().await?;
    Ok(web::Json(
        customers.into_iter().map(CustomerResponse::from).collect(),
    ))
}

/// Create a customer and return it with its assigned identifier.
#[post("/customers")]
pub async fn add_customer(
    state: web::Data<HttpState>,
    payload: web::Json<CustomerRequest>,
) -> ApiResult<HttpResponse> {
    let created = state
        .customers
        .add_customer(payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(CustomerResponse::from(created)))
}

/// Overwrite every field of an existing customer.
#[put("/customers/{customer_id}")]
pub async fn update_customer(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<CustomerRequest>,
) -> ApiResult<web::Json<CustomerResponse>> {
    let id = CustomerId::new(path.into_inner());
    let updated = state
        .customers
        .update_customer(id, payload.into_inner().into())
        .await?;
    Ok(web::Json(updated.into()))
}

/// Remove a customer permanently.
#[delete("/customers/{customer_id}")]
pub async fn delete_customer(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<MessageResponse>> {
    let id = CustomerId::new(path.into_inner());
    state.customers.delete_customer(id).await?;
    Ok(web::Json(MessageResponse {
        message: format!("Customer with ID {id} was deleted successfully."),
    }))
}

#[cfg(test)]
#[path = "customers_tests.rs"]
mod tests;
