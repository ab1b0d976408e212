//! Shared helpers for integration tests that need embedded PostgreSQL.

pub mod cluster_skip;
pub mod pg_embed;
