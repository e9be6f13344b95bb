//! The `PropertyStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `freehold-store-memory`). The service layer depends on this abstraction,
//! not on any concrete backend. Absence is always `None`, never an error —
//! an `Err` from any method means the storage collaborator itself failed.
//!
//! Removal is split into two distinct operations: `soft_delete_*` stamps the
//! entity's removal timestamp and hides it from every read, while `purge_*`
//! removes it bodily. One name never covers both.
//!
//! All methods return `Send` futures so the trait can be used in
//! multi-threaded async runtimes.

use std::future::Future;

use crate::{
  aggregate::{self, SectorYearCounts},
  postcode::Postcode,
  property::Property,
  transaction::Transaction,
};

pub trait PropertyStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Properties ────────────────────────────────────────────────────────

  /// Retrieve a live property by derived id. `None` if unknown or
  /// soft-deleted.
  fn get_property<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<Property>, Self::Error>> + Send + 'a;

  /// List all live properties.
  fn list_properties(
    &self,
  ) -> impl Future<Output = Result<Vec<Property>, Self::Error>> + Send + '_;

  /// Upsert a property and return the stored value.
  fn save_property(
    &self,
    property: Property,
  ) -> impl Future<Output = Result<Property, Self::Error>> + Send + '_;

  /// Stamp a property's removal timestamp. Returns `false` when the id is
  /// unknown or the property is already soft-deleted.
  fn soft_delete_property<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  /// Physically remove a property. Returns `false` when the id is unknown.
  fn purge_property<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  /// All live properties whose full postcode matches `postcode` exactly.
  fn properties_by_postcode<'a>(
    &'a self,
    postcode: &'a str,
  ) -> impl Future<Output = Result<Vec<Property>, Self::Error>> + Send + 'a;

  // ── Transactions ──────────────────────────────────────────────────────

  /// Retrieve a live transaction by source id. `None` if unknown or
  /// soft-deleted.
  fn get_transaction<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<Transaction>, Self::Error>> + Send + 'a;

  /// List all live transactions.
  fn list_transactions(
    &self,
  ) -> impl Future<Output = Result<Vec<Transaction>, Self::Error>> + Send + '_;

  /// Upsert a transaction and return the stored value.
  fn save_transaction(
    &self,
    transaction: Transaction,
  ) -> impl Future<Output = Result<Transaction, Self::Error>> + Send + '_;

  /// Stamp a transaction's removal timestamp. Returns `false` when the id
  /// is unknown or the transaction is already soft-deleted.
  fn soft_delete_transaction<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  /// Physically remove a transaction. Returns `false` when the id is
  /// unknown.
  fn purge_transaction<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  // ── Postcodes ─────────────────────────────────────────────────────────

  /// Retrieve a live postcode entry. `None` if unknown or soft-deleted.
  fn get_postcode<'a>(
    &'a self,
    postcode: &'a str,
  ) -> impl Future<Output = Result<Option<Postcode>, Self::Error>> + Send + 'a;

  /// List all live postcode entries.
  fn list_postcodes(
    &self,
  ) -> impl Future<Output = Result<Vec<Postcode>, Self::Error>> + Send + '_;

  /// Upsert a postcode entry and return the stored value.
  fn save_postcode(
    &self,
    postcode: Postcode,
  ) -> impl Future<Output = Result<Postcode, Self::Error>> + Send + '_;

  /// Stamp a postcode entry's removal timestamp. Returns `false` when the
  /// postcode is unknown or already soft-deleted.
  fn soft_delete_postcode<'a>(
    &'a self,
    postcode: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  /// Physically remove a postcode entry. Returns `false` when the postcode
  /// is unknown.
  fn purge_postcode<'a>(
    &'a self,
    postcode: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  // ── Aggregation ───────────────────────────────────────────────────────

  /// Live transaction counts per postcode sector per year.
  ///
  /// The default body lists all transactions and groups in-process — the
  /// portable path. A backend may push the grouping down to its engine
  /// instead, provided the output is identical to
  /// [`aggregate::sector_year_counts`].
  fn transaction_counts_by_sector_and_year(
    &self,
  ) -> impl Future<Output = Result<SectorYearCounts, Self::Error>> + Send + '_
  {
    async move {
      let transactions = self.list_transactions().await?;
      Ok(aggregate::sector_year_counts(&transactions))
    }
  }
}
