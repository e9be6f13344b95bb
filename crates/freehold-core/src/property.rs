//! Property — a physical property, observed once per transaction record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::{AddressKey, resolve_id};

/// Descriptive address attributes carried on a property but excluded from
/// its identity key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressDetail {
  pub street:    Option<String>,
  pub locality:  Option<String>,
  pub town_city: Option<String>,
  pub district:  Option<String>,
  pub country:   Option<String>,
}

/// A physical property.
///
/// The id is set at construction — derived from the [`AddressKey`] or
/// supplied by the caller — and never reassigned afterwards. The transaction
/// list is append-only with first-appearance order preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
  pub unique_id:    String,
  pub postcode:     Option<String>,
  pub paon:         Option<String>,
  pub saon:         Option<String>,
  pub street:       Option<String>,
  pub locality:     Option<String>,
  pub town_city:    Option<String>,
  pub district:     Option<String>,
  pub country:      Option<String>,
  /// Ids of the transactions recorded against this property.
  pub transactions: Vec<String>,
  /// Soft-delete marker, set only by the store.
  pub removed_at:   Option<DateTime<Utc>>,
}

impl Property {
  /// Build a property whose id is derived from `key`.
  ///
  /// Identity is computed first, as a pure function of the key, and the
  /// value is created with the id already in place — there is no
  /// construct-then-patch step.
  pub fn from_key(key: AddressKey, detail: AddressDetail) -> Self {
    let unique_id = key.derive_id();
    Self::assemble(unique_id, key, detail)
  }

  /// Build a property with a caller-supplied id.
  ///
  /// A non-empty id is used as-is and never overwritten by the derived one;
  /// an empty id falls back to derivation.
  pub fn with_id(
    unique_id: impl Into<String>,
    key: AddressKey,
    detail: AddressDetail,
  ) -> Self {
    let unique_id = unique_id.into();
    let unique_id = resolve_id(Some(&unique_id), &key);
    Self::assemble(unique_id, key, detail)
  }

  fn assemble(unique_id: String, key: AddressKey, detail: AddressDetail) -> Self {
    Self {
      unique_id,
      postcode: key.postcode,
      paon: key.paon,
      saon: key.saon,
      street: detail.street,
      locality: detail.locality,
      town_city: detail.town_city,
      district: detail.district,
      country: detail.country,
      transactions: Vec::new(),
      removed_at: None,
    }
  }

  /// Append a transaction id. Idempotent: an id already present is not
  /// appended again.
  pub fn add_transaction(&mut self, transaction_id: impl Into<String>) {
    let transaction_id = transaction_id.into();
    if !self.transactions.contains(&transaction_id) {
      self.transactions.push(transaction_id);
    }
  }

  /// The identity key this property derives (or would derive) its id from.
  pub fn address_key(&self) -> AddressKey {
    AddressKey {
      paon:     self.paon.clone(),
      saon:     self.saon.clone(),
      postcode: self.postcode.clone(),
    }
  }

  /// Whether the property is live (not soft-deleted).
  pub fn is_live(&self) -> bool { self.removed_at.is_none() }
}
