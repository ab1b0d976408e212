//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use directory::inbound::http::views::Views;
use directory::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) static_dir: PathBuf,
    pub(crate) views: Views,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration without persistence.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, static_dir: PathBuf, views: Views) -> Self {
        Self {
            bind_addr,
            static_dir,
            views,
            db_pool: None,
        }
    }

    /// Attach a database connection pool.
    ///
    /// When provided, the directory is stored in PostgreSQL; otherwise the
    /// in-memory store is used.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Directory served under `/static`.
    #[must_use]
    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }
}
