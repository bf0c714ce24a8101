//! This module acts as a central hub for all database-related logic.
//! Each submodule owns one table: `registry` for `/iam` names, `obtained` for pet logs.

pub mod init;
pub mod obtained;
pub mod registry;

use sqlx::{Pool, Sqlite};

/// A type alias for the database connection pool (`Pool<Sqlite>`).
pub type DbPool = Pool<Sqlite>;
