//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data`, so they depend only on the
//! directory port and the view renderer and can be tested without I/O.

use std::sync::Arc;

use crate::domain::ports::{UserDirectory, UserRepository};
use crate::domain::UserDirectoryService;
use crate::inbound::http::views::Views;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Directory use-cases.
    pub directory: Arc<dyn UserDirectory>,
    /// Page renderer.
    pub views: Views,
}

impl HttpState {
    /// Bundle a directory port with a renderer.
    pub fn new(directory: Arc<dyn UserDirectory>, views: Views) -> Self {
        Self { directory, views }
    }

    /// Wire the default service over a repository adapter.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use directory::inbound::http::state::HttpState;
    /// use directory::inbound::http::views::Views;
    /// use directory::outbound::memory::InMemoryUserRepository;
    ///
    /// let state = HttpState::from_repository(
    ///     Arc::new(InMemoryUserRepository::default()),
    ///     Views::default(),
    /// );
    /// assert_eq!(state.views.title(), "Staff directory");
    /// ```
    pub fn from_repository(repository: Arc<dyn UserRepository>, views: Views) -> Self {
        Self::new(Arc::new(UserDirectoryService::new(repository)), views)
    }
}
