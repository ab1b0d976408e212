//! HTTP inbound adapter serving the directory pages.

pub mod error;
pub mod health;
pub mod state;
pub mod static_files;
pub mod users;
pub mod views;

pub use error::ApiResult;
