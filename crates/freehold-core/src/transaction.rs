//! Transaction — a single sale event from the price-paid data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A sale event.
///
/// Created once on ingest and never mutated; removal is a soft-delete
/// timestamp set by the store. The id is source-provided and opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
  pub transaction_id:   String,
  /// The owning property's derived id.
  pub property_id:      String,
  pub postcode:         String,
  /// Sale price in whole pounds.
  pub price:            u64,
  /// Expected to begin with a 4-digit year (e.g. "2019-05-01").
  pub date_of_transfer: String,
  /// Soft-delete marker, set only by the store.
  pub removed_at:       Option<DateTime<Utc>>,
}

impl Transaction {
  pub fn new(
    transaction_id: impl Into<String>,
    property_id: impl Into<String>,
    postcode: impl Into<String>,
    price: u64,
    date_of_transfer: impl Into<String>,
  ) -> Self {
    Self {
      transaction_id: transaction_id.into(),
      property_id: property_id.into(),
      postcode: postcode.into(),
      price,
      date_of_transfer: date_of_transfer.into(),
      removed_at: None,
    }
  }

  /// Whether the transaction is live (not soft-deleted).
  pub fn is_live(&self) -> bool { self.removed_at.is_none() }
}
