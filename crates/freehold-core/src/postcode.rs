//! Postcode — a full postcode with back-references to its properties.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A full postcode and the ids of the properties sharing it.
///
/// Denormalised navigation aid maintained by ingestion; aggregation does not
/// depend on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Postcode {
  pub postcode:   String,
  /// Ids of properties observed at this postcode, append-only.
  pub properties: Vec<String>,
  /// Soft-delete marker, set only by the store.
  pub removed_at: Option<DateTime<Utc>>,
}

impl Postcode {
  pub fn new(postcode: impl Into<String>) -> Self {
    Self {
      postcode:   postcode.into(),
      properties: Vec::new(),
      removed_at: None,
    }
  }

  /// Append a property id. Idempotent: an id already present is not
  /// appended again.
  pub fn add_property(&mut self, property_id: impl Into<String>) {
    let property_id = property_id.into();
    if !self.properties.contains(&property_id) {
      self.properties.push(property_id);
    }
  }

  /// Whether the postcode entry is live (not soft-deleted).
  pub fn is_live(&self) -> bool { self.removed_at.is_none() }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn add_property_is_idempotent() {
    let mut entry = Postcode::new("ST10 4BS");
    entry.add_property("aaaa");
    entry.add_property("bbbb");
    entry.add_property("aaaa");
    assert_eq!(entry.properties, vec!["aaaa", "bbbb"]);
  }
}
