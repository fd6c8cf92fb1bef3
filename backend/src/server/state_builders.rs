//! Builders for the HTTP state from a database pool.

use std::sync::Arc;

use actix_web::web;

use customer_api::inbound::http::state::HttpState;
use customer_api::outbound::persistence::{DbPool, DieselCustomerRepository};

/// Wire the pool into the repository, the repository into the customer
/// service, and the service into both HTTP ports.
pub(super) fn build_http_state(pool: &DbPool) -> web::Data<HttpState> {
    let repository = Arc::new(DieselCustomerRepository::new(pool.clone()));
    web::Data::new(HttpState::from_repository(repository))
}
