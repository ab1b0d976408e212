//! Builders for the HTTP state and its repository adapter.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use directory::domain::ports::UserRepository;
use directory::inbound::http::state::HttpState;
use directory::inbound::http::static_files::StaticFiles;
use directory::outbound::memory::InMemoryUserRepository;
use directory::outbound::persistence::DieselUserRepository;

use super::ServerConfig;

/// Pick the PostgreSQL adapter when a pool is configured, else the in-memory one.
fn build_repository(config: &ServerConfig) -> Arc<dyn UserRepository> {
    match &config.db_pool {
        Some(pool) => {
            info!(store = "postgres", "user repository selected");
            Arc::new(DieselUserRepository::new(pool.clone()))
        }
        None => {
            warn!(
                store = "memory",
                "no database URL configured; records will not survive a restart"
            );
            Arc::new(InMemoryUserRepository::default())
        }
    }
}

/// Build the shared handler state.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    web::Data::new(HttpState::from_repository(
        build_repository(config),
        config.views.clone(),
    ))
}

/// Open the static asset root, or skip asset serving when it is unusable.
pub(super) fn build_static_files(config: &ServerConfig) -> Option<web::Data<StaticFiles>> {
    match StaticFiles::open(config.static_dir()) {
        Ok(files) => Some(web::Data::new(files)),
        Err(error) => {
            warn!(
                path = %config.static_dir().display(),
                %error,
                "static directory unavailable; assets will not be served"
            );
            None
        }
    }
}
