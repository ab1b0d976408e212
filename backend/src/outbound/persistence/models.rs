//! Internal Diesel row structs.
//!
//! These types never leave the persistence layer.

use diesel::prelude::*;

use crate::domain::{UserDetails, UserId, UserRecord};

use super::schema::users;

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub name: String,
    pub position: String,
    pub office: String,
}

impl From<UserRow> for UserRecord {
    fn from(row: UserRow) -> Self {
        Self::new(
            UserId::new(row.id),
            UserDetails::new(row.name, row.position, row.office),
        )
    }
}

/// Field values written by both insert and update.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserFieldsRow<'a> {
    pub name: &'a str,
    pub position: &'a str,
    pub office: &'a str,
}

impl<'a> From<&'a UserDetails> for UserFieldsRow<'a> {
    fn from(details: &'a UserDetails) -> Self {
        Self {
            name: details.name(),
            position: details.position(),
            office: details.office(),
        }
    }
}
