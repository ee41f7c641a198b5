//! Database layer for Quotebox
//!
//! A single `SQLite` file holds the durable key-value entries the widget
//! persists between sessions.

mod connection;
mod kv_repository;
mod location;
mod migrations;

pub use connection::Database;
pub use location::{default_db_path, resolve_db_path, DB_PATH_ENV};
