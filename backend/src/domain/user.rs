//! Directory user record model.
//!
//! A [`UserRecord`] pairs a store-assigned [`UserId`] with the three mutable
//! text fields held in [`UserDetails`]. The identifier never changes after the
//! store assigns it; updates replace the details wholesale.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::Deserialize;

/// Store-assigned identifier of a directory entry.
///
/// # Examples
/// ```
/// use directory::domain::UserId;
///
/// let id: UserId = "42".parse().expect("numeric id");
/// assert_eq!(id.get(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Return the raw identifier.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for UserId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// The editable fields of a directory entry.
///
/// All three fields are required at the form boundary; empty strings are
/// accepted as values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserDetails {
    name: String,
    position: String,
    office: String,
}

impl UserDetails {
    /// Bundle the three text fields.
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        office: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            office: office.into(),
        }
    }

    /// Person's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Job title.
    #[must_use]
    pub fn position(&self) -> &str {
        &self.position
    }

    /// Office location.
    #[must_use]
    pub fn office(&self) -> &str {
        &self.office
    }
}

/// A persisted directory entry.
///
/// # Examples
/// ```
/// use directory::domain::{UserDetails, UserId, UserRecord};
///
/// let record = UserRecord::new(UserId::new(1), UserDetails::new("Ann", "Engineer", "NY"));
/// assert_eq!(record.details().office(), "NY");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    id: UserId,
    details: UserDetails,
}

impl UserRecord {
    /// Pair an identifier with its details.
    #[must_use]
    pub const fn new(id: UserId, details: UserDetails) -> Self {
        Self { id, details }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Current field values.
    #[must_use]
    pub const fn details(&self) -> &UserDetails {
        &self.details
    }

    /// Person's name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.details.name()
    }

    /// Job title.
    #[must_use]
    pub fn position(&self) -> &str {
        self.details.position()
    }

    /// Office location.
    #[must_use]
    pub fn office(&self) -> &str {
        self.details.office()
    }
}
