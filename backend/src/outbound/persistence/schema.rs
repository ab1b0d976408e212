//! Diesel table definitions.
//!
//! Kept in step with `migrations/`.

diesel::table! {
    /// Directory entries. `id` is a `SERIAL` primary key.
    users (id) {
        id -> Int4,
        name -> Text,
        position -> Text,
        office -> Text,
    }
}
