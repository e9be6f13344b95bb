//! Error type for `freehold-store-memory`.

use thiserror::Error;

/// Errors from the in-memory store.
///
/// The map-backed store has no failure modes, so this enum is uninhabited;
/// it exists to satisfy the `PropertyStore::Error` contract. Backends with a
/// real connection put their connectivity failures here.
#[derive(Debug, Error)]
pub enum Error {}

pub type Result<T, E = Error> = std::result::Result<T, E>;
