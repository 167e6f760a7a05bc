use thiserror::Error;

/// Everything the store and summary layers can report.
///
/// The first two variants are validation failures (bad input, nothing was
/// written); the rest are storage failures.
#[derive(Debug, Error)]
pub enum Error {
    #[error("app name must not be empty")]
    EmptyName,

    #[error("app size must be a positive number, got {0}")]
    InvalidSize(f64),

    #[error("table 'updates' already exists; pass --force to drop and recreate it")]
    TableExists,

    #[error("table 'updates' does not exist; run 'init' first")]
    TableMissing,

    #[error("stored date {0:?} is not a calendar date: {1}")]
    DateParse(String, chrono::ParseError),

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
