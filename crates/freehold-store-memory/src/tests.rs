//! Integration tests for `MemoryStore`.

use freehold_core::{
  identity::AddressKey,
  postcode::Postcode,
  property::{AddressDetail, Property},
  store::PropertyStore,
  transaction::Transaction,
};

use crate::MemoryStore;

fn property(paon: &str, postcode: &str) -> Property {
  Property::from_key(
    AddressKey {
      paon:     Some(paon.to_owned()),
      saon:     None,
      postcode: Some(postcode.to_owned()),
    },
    AddressDetail::default(),
  )
}

fn transaction(id: &str, property_id: &str, date: &str) -> Transaction {
  Transaction::new(id, property_id, "ST10 4BS", 250_000, date)
}

// ─── Properties ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn save_and_get_property() {
  let store = MemoryStore::new();

  let saved = store.save_property(property("12", "ST10 4BS")).await.unwrap();
  let fetched = store.get_property(&saved.unique_id).await.unwrap();
  assert_eq!(fetched, Some(saved));
}

#[tokio::test]
async fn get_property_missing_returns_none() {
  let store = MemoryStore::new();
  assert_eq!(store.get_property("no-such-id").await.unwrap(), None);
}

#[tokio::test]
async fn save_property_is_an_upsert() {
  let store = MemoryStore::new();

  let mut p = store.save_property(property("12", "ST10 4BS")).await.unwrap();
  p.add_transaction("{TXN-A}");
  store.save_property(p.clone()).await.unwrap();

  let fetched = store.get_property(&p.unique_id).await.unwrap().unwrap();
  assert_eq!(fetched.transactions, vec!["{TXN-A}"]);
  assert_eq!(store.list_properties().await.unwrap().len(), 1);
}

#[tokio::test]
async fn properties_by_postcode_matches_exactly() {
  let store = MemoryStore::new();
  store.save_property(property("12", "ST10 4BS")).await.unwrap();
  store.save_property(property("14", "ST10 4BS")).await.unwrap();
  store.save_property(property("1", "M15 1AB")).await.unwrap();

  let matched = store.properties_by_postcode("ST10 4BS").await.unwrap();
  assert_eq!(matched.len(), 2);
  assert!(
    matched
      .iter()
      .all(|p| p.postcode.as_deref() == Some("ST10 4BS"))
  );

  // The sector alone is not a full postcode.
  assert!(store.properties_by_postcode("ST10").await.unwrap().is_empty());
}

#[tokio::test]
async fn soft_deleted_property_is_hidden_from_reads() {
  let store = MemoryStore::new();
  let saved = store.save_property(property("12", "ST10 4BS")).await.unwrap();

  assert!(store.soft_delete_property(&saved.unique_id).await.unwrap());
  assert_eq!(store.get_property(&saved.unique_id).await.unwrap(), None);
  assert!(store.list_properties().await.unwrap().is_empty());
  assert!(store.properties_by_postcode("ST10 4BS").await.unwrap().is_empty());

  // A second soft-delete finds nothing live.
  assert!(!store.soft_delete_property(&saved.unique_id).await.unwrap());
}

#[tokio::test]
async fn purge_property_is_distinct_from_soft_delete() {
  let store = MemoryStore::new();
  let saved = store.save_property(property("12", "ST10 4BS")).await.unwrap();

  // Soft-deleted rows are still purgeable; purge of an unknown id is not.
  assert!(store.soft_delete_property(&saved.unique_id).await.unwrap());
  assert!(store.purge_property(&saved.unique_id).await.unwrap());
  assert!(!store.purge_property(&saved.unique_id).await.unwrap());
}

// ─── Transactions ────────────────────────────────────────────────────────────

#[tokio::test]
async fn save_and_get_transaction() {
  let store = MemoryStore::new();

  let saved = store
    .save_transaction(transaction("{TXN-A}", "prop-1", "2019-05-01"))
    .await
    .unwrap();
  assert_eq!(
    store.get_transaction("{TXN-A}").await.unwrap(),
    Some(saved)
  );
  assert_eq!(store.get_transaction("{TXN-B}").await.unwrap(), None);
}

#[tokio::test]
async fn soft_deleted_transaction_is_hidden_and_uncounted() {
  let store = MemoryStore::new();
  store
    .save_transaction(transaction("{TXN-A}", "prop-1", "2019-05-01"))
    .await
    .unwrap();
  store
    .save_transaction(transaction("{TXN-B}", "prop-1", "2019-08-01"))
    .await
    .unwrap();

  assert!(store.soft_delete_transaction("{TXN-A}").await.unwrap());
  assert_eq!(store.get_transaction("{TXN-A}").await.unwrap(), None);
  assert_eq!(store.list_transactions().await.unwrap().len(), 1);

  let counts = store.transaction_counts_by_sector_and_year().await.unwrap();
  assert_eq!(counts["2019"]["ST10"], 1);
}

// ─── Postcodes ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn save_and_get_postcode() {
  let store = MemoryStore::new();

  let mut entry = Postcode::new("ST10 4BS");
  entry.add_property("prop-1");
  store.save_postcode(entry).await.unwrap();

  let fetched = store.get_postcode("ST10 4BS").await.unwrap().unwrap();
  assert_eq!(fetched.properties, vec!["prop-1"]);

  assert!(store.soft_delete_postcode("ST10 4BS").await.unwrap());
  assert_eq!(store.get_postcode("ST10 4BS").await.unwrap(), None);
  assert!(store.purge_postcode("ST10 4BS").await.unwrap());
}

// ─── Aggregation ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn counts_group_by_sector_and_year() {
  let store = MemoryStore::new();
  for (id, postcode, date) in [
    ("{TXN-A}", "M15 1AB", "2019-01-10"),
    ("{TXN-B}", "M15 2CD", "2019-06-30"),
    ("{TXN-C}", "M15 9ZZ", "2020-02-14"),
  ] {
    store
      .save_transaction(Transaction::new(id, "prop-1", postcode, 1, date))
      .await
      .unwrap();
  }

  let counts = store.transaction_counts_by_sector_and_year().await.unwrap();
  assert_eq!(counts.len(), 2);
  assert_eq!(counts["2019"]["M15"], 2);
  assert_eq!(counts["2020"]["M15"], 1);
}

#[tokio::test]
async fn cloned_handles_share_tables() {
  let store = MemoryStore::new();
  let other = store.clone();

  store.save_property(property("12", "ST10 4BS")).await.unwrap();
  assert_eq!(other.list_properties().await.unwrap().len(), 1);
}
