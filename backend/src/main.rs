//! Directory server entry-point: loads settings, prepares the store, and
//! serves the HTML pages.

mod server;

use std::io;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use directory::config::ServerSettings;
use ortho_config::OrthoConfig;
use directory::inbound::http::health::HealthState;
use directory::inbound::http::views::{DEFAULT_STATIC_PREFIX, Views};
use directory::outbound::persistence::{DbPool, PoolConfig, bootstrap_schema};

use server::{ServerConfig, create_server, drain_on_signal};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let views = Views::new(settings.title(), DEFAULT_STATIC_PREFIX);
    let mut config = ServerConfig::new(bind_addr, settings.static_dir(), views);

    if let Some(database_url) = settings.database_url() {
        let pool = connect(database_url, &settings).await?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(drain_on_signal(health_state, server.handle()));
    info!(%bind_addr, "directory server listening");
    server.await
}

/// Apply pending migrations, then open the connection pool.
async fn connect(database_url: &str, settings: &ServerSettings) -> io::Result<DbPool> {
    bootstrap_schema(database_url.to_owned())
        .await
        .map_err(|e| io::Error::other(format!("schema bootstrap failed: {e}")))?;

    let max_size = settings
        .pool_max_size()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    DbPool::new(PoolConfig::new(database_url).with_max_size(max_size))
        .await
        .map_err(|e| io::Error::other(format!("database pool unavailable: {e}")))
}
