//! Error type for `jobline-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A stored enum column held a value the domain does not recognise.
  #[error("core error: {0}")]
  Core(#[from] jobline_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// A row written moments ago could not be read back.
  #[error("{table} row {id} vanished after write")]
  MissingAfterWrite { table: &'static str, id: i64 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
