//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL CHECK (length(trim(name)) > 0),
    email TEXT NOT NULL CHECK (length(trim(email)) > 0)
);
"#;

pub const INSERT_USER: &str = r#"
INSERT INTO users (name, email)
VALUES (?1, ?2)
"#;

pub const SELECT_ALL_USERS: &str = r#"
SELECT id, name, email
FROM users
ORDER BY id
"#;
