//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use rusqlite::Row;

use usercache_core::users::User;

/// Convert a SQLite row to a User.
///
/// Expected columns: id, name, email
pub fn row_to_user(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
    })
}
