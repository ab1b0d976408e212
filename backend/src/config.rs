//! Server settings loaded via OrthoConfig.
//!
//! Values layer from CLI flags, `DIRECTORY_*` environment variables, and an
//! optional configuration file. Every field is optional; accessors supply the
//! defaults so an empty environment still yields a runnable server backed by
//! the in-memory store.

use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::inbound::http::views::DEFAULT_TITLE;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
const DEFAULT_STATIC_DIR: &str = "static";

/// Settings values that parse but cannot be used.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The bind address is not `host:port`.
    #[error("invalid bind address {value:?}: {source}")]
    BindAddr {
        /// Rejected input.
        value: String,
        /// Parse failure.
        #[source]
        source: AddrParseError,
    },
    /// A pool must hold at least one connection.
    #[error("pool max size must be at least 1")]
    EmptyPool,
}

/// Configuration for the directory server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DIRECTORY")]
pub struct ServerSettings {
    /// Socket address to listen on, e.g. `127.0.0.1:8080`.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL; the in-memory store is used when unset.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Directory served under `/static`.
    pub static_dir: Option<PathBuf>,
    /// Site title shown in page headers.
    pub title: Option<String>,
}

impl ServerSettings {
    /// Parsed listen address, defaulting to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|source| SettingsError::BindAddr {
            value: value.to_owned(),
            source,
        })
    }

    /// Database URL when persistence is configured.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Pool size, defaulting to 10 and rejecting zero.
    pub fn pool_max_size(&self) -> Result<u32, SettingsError> {
        match self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE) {
            0 => Err(SettingsError::EmptyPool),
            size => Ok(size),
        }
    }

    /// Static asset directory, defaulting to `./static`.
    pub fn static_dir(&self) -> PathBuf {
        self.static_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR))
    }

    /// Page title, defaulting to "Staff directory".
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 5] = [
        "DIRECTORY_BIND_ADDR",
        "DIRECTORY_DATABASE_URL",
        "DIRECTORY_POOL_MAX_SIZE",
        "DIRECTORY_STATIC_DIR",
        "DIRECTORY_TITLE",
    ];

    fn unset() -> ServerSettings {
        ServerSettings {
            bind_addr: None,
            database_url: None,
            pool_max_size: None,
            static_dir: None,
            title: None,
        }
    }

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("directory")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("default address parses"),
            "0.0.0.0:8080".parse::<SocketAddr>().expect("literal parses")
        );
        assert!(settings.database_url().is_none());
        assert_eq!(settings.pool_max_size().expect("default size"), 10);
        assert_eq!(settings.static_dir(), PathBuf::from("static"));
        assert_eq!(settings.title(), DEFAULT_TITLE);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("DIRECTORY_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            (
                "DIRECTORY_DATABASE_URL",
                Some("postgres://staff@localhost/directory".to_owned()),
            ),
            ("DIRECTORY_POOL_MAX_SIZE", Some("4".to_owned())),
            ("DIRECTORY_STATIC_DIR", Some("/srv/assets".to_owned())),
            ("DIRECTORY_TITLE", Some("Acme staff".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("address parses"),
            "127.0.0.1:9000".parse::<SocketAddr>().expect("literal parses")
        );
        assert_eq!(
            settings.database_url(),
            Some("postgres://staff@localhost/directory")
        );
        assert_eq!(settings.pool_max_size().expect("size"), 4);
        assert_eq!(settings.static_dir(), PathBuf::from("/srv/assets"));
        assert_eq!(settings.title(), "Acme staff");
    }

    #[rstest]
    #[case(Some("   "))]
    #[case(Some(""))]
    #[case(None)]
    fn blank_database_url_selects_memory_store(#[case] url: Option<&str>) {
        let settings = ServerSettings {
            database_url: url.map(str::to_owned),
            ..unset()
        };
        assert!(settings.database_url().is_none());
    }

    #[rstest]
    fn malformed_bind_address_is_reported() {
        let settings = ServerSettings {
            bind_addr: Some("localhost".to_owned()),
            ..unset()
        };
        let err = settings.bind_addr().expect_err("missing port rejected");
        assert!(matches!(err, SettingsError::BindAddr { ref value, .. } if value == "localhost"));
    }

    #[rstest]
    fn zero_pool_size_is_rejected() {
        let settings = ServerSettings {
            pool_max_size: Some(0),
            ..unset()
        };
        assert!(matches!(settings.pool_max_size(), Err(SettingsError::EmptyPool)));
    }
}
