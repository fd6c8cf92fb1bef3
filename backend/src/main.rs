//! Customer service entry-point: loads settings, builds the store pool and
//! serves the REST endpoints.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, Result};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use customer_api::inbound::http::health::HealthState;
use customer_api::outbound::persistence::DbPool;
use server::{AppSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        AppSettings::load_from_iter(std::env::args_os()).wrap_err("failed to load settings")?;
    let pool_config = settings.pool_config()?;
    let pool = DbPool::new(pool_config)
        .await
        .wrap_err("failed to build customer store pool")?;

    let bind_addr = settings.bind_addr();
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), &pool, bind_addr.clone())
        .wrap_err_with(|| format!("failed to bind {}:{}", bind_addr.0, bind_addr.1))?;
    info!(host = %bind_addr.0, port = bind_addr.1, "customer service listening");

    server.await.wrap_err("server terminated with an error")?;
    health_state.mark_unhealthy();
    Ok(())
}
