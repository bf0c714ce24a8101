//! Error types shared across the bot.
//!
//! `LoadError` covers everything that can go wrong before the gateway connects and is
//! always fatal. `CommandError` is local to one invocation and ends up as the generic
//! failure reply at the dispatch boundary.

use std::path::PathBuf;
use thiserror::Error;

/// A failed call to the remote price index.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("malformed response body from {url}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Startup failures. Any of these stops the process before commands are served.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),
    #[error("environment variable {name} has invalid value {value:?}")]
    InvalidVar { name: &'static str, value: String },
    #[error("failed to fetch item catalog")]
    Items(#[from] TransportError),
    #[error("failed to read pet data file {}", .path.display())]
    PetsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse pet data file {}", .path.display())]
    PetsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{0} catalog is empty")]
    EmptyCatalog(&'static str),
    #[error("failed to open database")]
    Database(#[from] sqlx::Error),
    #[error("failed to run database migrations")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Failures of a single command invocation.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("no match for {0:?}")]
    NotFound(String),
    #[error("no price data for {0:?}")]
    NoPriceData(String),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("database error")]
    Database(#[from] sqlx::Error),
}
