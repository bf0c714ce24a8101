// Library entry so integration tests and external tools can reference internal modules.
// Re-export the same modules used by the binary (`main.rs`).
pub mod catalog;
pub mod commands;
pub mod config;
pub mod database;
pub mod error;
pub mod fuzzy;
pub mod handler;
pub mod model;
pub mod prices;

pub use model::AppState;
