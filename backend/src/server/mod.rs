//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::{build_http_state, build_static_files};

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use directory::{ErrorPages, Trace};
use directory::inbound::http::health::{HealthState, live, ready};
use directory::inbound::http::state::HttpState;
use directory::inbound::http::static_files::{StaticFiles, serve_static};
use directory::inbound::http::users;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    static_files: Option<web::Data<StaticFiles>>,
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
        static_files,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(ErrorPages)
        .wrap(Trace)
        .service(ready)
        .service(live)
        .configure(users::configure);

    match static_files {
        Some(files) => app.app_data(files).service(serve_static),
        None => app,
    }
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// Actix signal handling is disabled; pair the server with
/// [`drain_on_signal`] so liveness fails before connections close.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);
    let static_files = build_static_files(&config);
    let bind_addr = config.bind_addr();

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            static_files: static_files.clone(),
        })
    })
    .disable_signals()
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

/// Fail liveness probes, then stop the server once in-flight requests finish.
pub async fn drain(health_state: web::Data<HealthState>, handle: ServerHandle) {
    health_state.mark_unhealthy();
    handle.stop(true).await;
}

/// Wait for SIGINT or SIGTERM, then [`drain`] the server.
pub async fn drain_on_signal(health_state: web::Data<HealthState>, handle: ServerHandle) {
    match shutdown_signal().await {
        Ok(()) => {
            info!("shutdown signal received, draining");
            drain(health_state, handle).await;
        }
        Err(error) => warn!(%error, "failed to install shutdown signal handler"),
    }
}

#[cfg(unix)]
async fn shutdown_signal() -> std::io::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        result = tokio::signal::ctrl_c() => result,
        _ = terminate.recv() => Ok(()),
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}
