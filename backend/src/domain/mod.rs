//! Domain primitives, ports, and use-cases.
//!
//! Public surface:
//! - [`UserRecord`], [`UserDetails`], [`UserId`]: the directory entry.
//! - [`Error`], [`ErrorCode`]: transport-agnostic failures.
//! - [`TraceId`]: request correlation identifier.
//! - [`UserDirectoryService`]: use-cases over [`ports::UserRepository`].

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
mod user_directory_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::trace_id::TraceId;
pub use self::user::{UserDetails, UserId, UserRecord};
pub use self::user_directory_service::UserDirectoryService;
