//! Property identity derivation.
//!
//! A property appears once per transaction in the price-paid data and
//! carries no identifier of its own. Identity is derived from the
//! (PAON, SAON, postcode) triple: the fields are serialised into a canonical
//! string and content-hashed, so repeated observations of the same physical
//! property collapse to one id regardless of which transaction carried them.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Separator between key fields in the canonical string.
const SEPARATOR: &str = "-|-";

/// Literal token serialised for an absent field. Fields are never omitted
/// from the canonical string, so `(A, "", B)` and `(A, B, "")` cannot
/// collide.
const NULL_MARKER: &str = "<null>";

// ─── Key ─────────────────────────────────────────────────────────────────────

/// The address fields that determine a property's identity.
///
/// The descriptive fields (street, locality, town/city, district, country)
/// are not part of the key: they vary across observations of the same
/// property and would fragment identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressKey {
  pub paon:     Option<String>,
  pub saon:     Option<String>,
  pub postcode: Option<String>,
}

impl AddressKey {
  /// The canonical string form: the three key fields joined with
  /// [`SEPARATOR`], absent fields replaced by [`NULL_MARKER`].
  fn canonical(&self) -> String {
    fn part(field: &Option<String>) -> &str {
      field.as_deref().unwrap_or(NULL_MARKER)
    }
    [part(&self.paon), part(&self.saon), part(&self.postcode)]
      .join(SEPARATOR)
  }

  /// Derive the unique property id for this key: SHA-256 over the canonical
  /// string, truncated to 128 bits, lowercase hex (32 chars).
  ///
  /// Total and deterministic: identical triples always produce identical
  /// ids, independent of call order, and missing fields never fail.
  pub fn derive_id(&self) -> String {
    let digest = Sha256::digest(self.canonical().as_bytes());
    hex::encode(&digest[..16])
  }
}

/// Resolve a property id: an explicit non-empty id wins over the derived
/// one. Seed and fixture data carry fixed ids; everything else derives.
pub fn resolve_id(explicit: Option<&str>, key: &AddressKey) -> String {
  match explicit {
    Some(id) if !id.is_empty() => id.to_owned(),
    _ => key.derive_id(),
  }
}
