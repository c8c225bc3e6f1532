//! Error types for `jobline-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid resume link format: {0:?}")]
  InvalidResumeLink(String),

  #[error("invalid interaction type: {0:?}")]
  UnknownInteractionKind(String),

  #[error("unknown job type: {0:?}")]
  UnknownJobType(String),

  #[error("unknown account role: {0:?}")]
  UnknownRole(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
