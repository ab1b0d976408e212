//! Request middleware.

pub mod error_pages;
pub mod trace;

pub use error_pages::ErrorPages;
pub use trace::Trace;
