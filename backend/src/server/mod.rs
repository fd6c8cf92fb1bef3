//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::AppSettings;

use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use customer_api::Trace;
use customer_api::inbound::http::customers::{
    add_customer, delete_customer, list_customers, update_customer,
};
use customer_api::inbound::http::health::{HealthState, live, ready};
use customer_api::inbound::http::state::HttpState;
use customer_api::inbound::http::validation::{json_config, path_config};
use customer_api::outbound::persistence::DbPool;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let api = web::scope("/api/v1")
        .service(list_customers)
        .service(add_customer)
        .service(update_customer)
        .service(delete_customer);

    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .app_data(path_config())
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live)
}

/// Construct an Actix HTTP server bound to `bind_addr`.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    pool: &DbPool,
    bind_addr: (String, u16),
) -> std::io::Result<Server> {
    let http_state = build_http_state(pool);
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
