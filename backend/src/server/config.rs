//! Service settings loaded via OrthoConfig.
//!
//! Values are merged from configuration files and `CUSTOMERS_*` environment
//! variables, with CLI flags taking precedence.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use customer_api::outbound::persistence::PoolConfig;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Settings controlling the listener and the customer store connection.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CUSTOMERS")]
pub struct AppSettings {
    /// PostgreSQL connection string for the customer store.
    pub database_url: Option<String>,
    /// Address the HTTP listener binds to.
    pub host: Option<String>,
    /// Port the HTTP listener binds to.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Upper bound on pooled connections.
    pub pool_max_size: Option<u32>,
    /// Connections kept open while idle.
    pub pool_min_idle: Option<u32>,
    /// Seconds to wait for a pooled connection before failing the request.
    pub pool_connection_timeout_secs: Option<u64>,
}

/// Errors raised while turning loaded settings into runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// No database URL was supplied.
    #[error("missing database url; set CUSTOMERS_DATABASE_URL or --database-url")]
    MissingDatabaseUrl,
}

impl AppSettings {
    /// Return the configured database URL.
    pub fn database_url(&self) -> Result<&str, SettingsError> {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or(SettingsError::MissingDatabaseUrl)
    }

    /// Return the host and port to bind; the host falls back to `0.0.0.0`.
    pub fn bind_addr(&self) -> (String, u16) {
        (
            self.host.clone().unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            self.port,
        )
    }

    /// Build the connection pool configuration, keeping the pool's own
    /// defaults for any limit left unset.
    pub fn pool_config(&self) -> Result<PoolConfig, SettingsError> {
        let mut config = PoolConfig::new(self.database_url()?);
        if let Some(max_size) = self.pool_max_size {
            config = config.with_max_size(max_size);
        }
        if let Some(min_idle) = self.pool_min_idle {
            config = config.with_min_idle(Some(min_idle));
        }
        if let Some(secs) = self.pool_connection_timeout_secs {
            config = config.with_connection_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}
