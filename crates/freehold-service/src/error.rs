//! Service error type.

use thiserror::Error;

/// An error returned by a [`PropertyService`](crate::PropertyService)
/// operation.
///
/// Absence of a looked-up entity is expressed as `None` by the operations
/// themselves; an `Error` always means the storage collaborator failed.
/// Storage failures are propagated unchanged — no retry.
#[derive(Debug, Error)]
pub enum Error {
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub(crate) fn store<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(err))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
