//! Service layer over any [`PropertyStore`].
//!
//! [`PropertyService`] exposes the lookup and reporting operations as plain
//! value-in/value-out calls: properties by postcode, transaction by id, the
//! property owning a transaction, per-sector/per-year transaction counts,
//! and the highest-increase ranking. Ingestion of raw price-paid records
//! lives in [`ingest`].

pub mod error;
pub mod ingest;

use freehold_core::{
  aggregate::{self, SectorIncrease, SectorYearCounts},
  property::Property,
  store::PropertyStore,
  transaction::Transaction,
};

pub use error::{Error, Result};

/// How many sectors the highest-increase ranking returns.
const TOP_RANKED_SECTORS: usize = 5;

/// The lookup and reporting surface over a property store.
///
/// Every operation is one bounded, single-pass read (or an idempotent
/// ingest); the ranking works from one counts snapshot per call, never
/// recomputed per year.
#[derive(Debug, Clone)]
pub struct PropertyService<S> {
  store: S,
}

impl<S: PropertyStore> PropertyService<S> {
  pub fn new(store: S) -> Self { Self { store } }

  /// Borrow the underlying store.
  pub fn store(&self) -> &S { &self.store }

  // ── Lookups ───────────────────────────────────────────────────────────

  /// All live properties whose full postcode matches `postcode` exactly.
  pub async fn properties_by_postcode(
    &self,
    postcode: &str,
  ) -> Result<Vec<Property>> {
    self
      .store
      .properties_by_postcode(postcode)
      .await
      .map_err(Error::store)
  }

  /// The transaction with `transaction_id`, or `None` when unknown.
  pub async fn transaction(
    &self,
    transaction_id: &str,
  ) -> Result<Option<Transaction>> {
    self
      .store
      .get_transaction(transaction_id)
      .await
      .map_err(Error::store)
  }

  /// The property the transaction belongs to.
  ///
  /// `None` both when the transaction is unknown and when its property id
  /// dangles — absence, never an error.
  pub async fn property_for_transaction(
    &self,
    transaction_id: &str,
  ) -> Result<Option<Property>> {
    let transaction = self
      .store
      .get_transaction(transaction_id)
      .await
      .map_err(Error::store)?;
    let Some(transaction) = transaction else {
      return Ok(None);
    };
    self
      .store
      .get_property(&transaction.property_id)
      .await
      .map_err(Error::store)
  }

  // ── Reporting ─────────────────────────────────────────────────────────

  /// Live transaction counts per postcode sector per year.
  pub async fn transaction_counts_by_sector_and_year(
    &self,
  ) -> Result<SectorYearCounts> {
    self
      .store
      .transaction_counts_by_sector_and_year()
      .await
      .map_err(Error::store)
  }

  /// The five sectors with the largest cumulative year-over-year increase
  /// in transaction count across `years`.
  ///
  /// Years may arrive in any order and may repeat; years with no data are
  /// skipped. An empty `years` slice yields an empty ranking rather than
  /// an error.
  pub async fn highest_increase_postcodes(
    &self,
    years: &[String],
  ) -> Result<Vec<SectorIncrease>> {
    let counts = self
      .store
      .transaction_counts_by_sector_and_year()
      .await
      .map_err(Error::store)?;
    let ranked =
      aggregate::highest_increase(&counts, years, TOP_RANKED_SECTORS);
    tracing::debug!(
      years = years.len(),
      sectors = ranked.len(),
      "ranked sectors by cumulative increase"
    );
    Ok(ranked)
  }
}
