//! Server-rendered staff directory.
//!
//! The crate follows a hexagonal layout: [`domain`] holds the records, the
//! directory service, and its ports; [`outbound`] provides PostgreSQL and
//! in-memory stores; [`inbound`] renders HTML over actix-web.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

pub use middleware::{ErrorPages, Trace};
