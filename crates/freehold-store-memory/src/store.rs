//! [`MemoryStore`] — the map-backed implementation of [`PropertyStore`].

use std::{collections::BTreeMap, sync::Arc};

use chrono::Utc;
use tokio::sync::RwLock;

use freehold_core::{
  postcode::Postcode, property::Property, store::PropertyStore,
  transaction::Transaction,
};

use crate::Result;

/// All three entity tables behind one lock, so a multi-step ingest observes
/// a consistent snapshot per call.
#[derive(Debug, Default)]
struct Tables {
  properties:   BTreeMap<String, Property>,
  transactions: BTreeMap<String, Transaction>,
  postcodes:    BTreeMap<String, Postcode>,
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A property store held entirely in process memory.
///
/// Cloning is cheap — the tables are reference-counted. `BTreeMap` tables
/// keep `list_*` order deterministic across runs.
///
/// Soft-deleted rows stay in their table with `removed_at` set and are
/// filtered out of every read; `purge_*` removes them bodily.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
  pub fn new() -> Self { Self::default() }
}

// ─── PropertyStore impl ──────────────────────────────────────────────────────

impl PropertyStore for MemoryStore {
  type Error = crate::Error;

  // ── Properties ────────────────────────────────────────────────────────

  async fn get_property(&self, id: &str) -> Result<Option<Property>> {
    let tables = self.tables.read().await;
    Ok(tables.properties.get(id).filter(|p| p.is_live()).cloned())
  }

  async fn list_properties(&self) -> Result<Vec<Property>> {
    let tables = self.tables.read().await;
    Ok(
      tables
        .properties
        .values()
        .filter(|p| p.is_live())
        .cloned()
        .collect(),
    )
  }

  async fn save_property(&self, property: Property) -> Result<Property> {
    let mut tables = self.tables.write().await;
    tables
      .properties
      .insert(property.unique_id.clone(), property.clone());
    Ok(property)
  }

  async fn soft_delete_property(&self, id: &str) -> Result<bool> {
    let mut tables = self.tables.write().await;
    match tables.properties.get_mut(id) {
      Some(property) if property.is_live() => {
        property.removed_at = Some(Utc::now());
        Ok(true)
      }
      _ => Ok(false),
    }
  }

  async fn purge_property(&self, id: &str) -> Result<bool> {
    let mut tables = self.tables.write().await;
    Ok(tables.properties.remove(id).is_some())
  }

  async fn properties_by_postcode(
    &self,
    postcode: &str,
  ) -> Result<Vec<Property>> {
    let tables = self.tables.read().await;
    Ok(
      tables
        .properties
        .values()
        .filter(|p| p.is_live() && p.postcode.as_deref() == Some(postcode))
        .cloned()
        .collect(),
    )
  }

  // ── Transactions ──────────────────────────────────────────────────────

  async fn get_transaction(&self, id: &str) -> Result<Option<Transaction>> {
    let tables = self.tables.read().await;
    Ok(tables.transactions.get(id).filter(|t| t.is_live()).cloned())
  }

  async fn list_transactions(&self) -> Result<Vec<Transaction>> {
    let tables = self.tables.read().await;
    Ok(
      tables
        .transactions
        .values()
        .filter(|t| t.is_live())
        .cloned()
        .collect(),
    )
  }

  async fn save_transaction(
    &self,
    transaction: Transaction,
  ) -> Result<Transaction> {
    let mut tables = self.tables.write().await;
    tables
      .transactions
      .insert(transaction.transaction_id.clone(), transaction.clone());
    Ok(transaction)
  }

  async fn soft_delete_transaction(&self, id: &str) -> Result<bool> {
    let mut tables = self.tables.write().await;
    match tables.transactions.get_mut(id) {
      Some(transaction) if transaction.is_live() => {
        transaction.removed_at = Some(Utc::now());
        Ok(true)
      }
      _ => Ok(false),
    }
  }

  async fn purge_transaction(&self, id: &str) -> Result<bool> {
    let mut tables = self.tables.write().await;
    Ok(tables.transactions.remove(id).is_some())
  }

  // ── Postcodes ─────────────────────────────────────────────────────────

  async fn get_postcode(&self, postcode: &str) -> Result<Option<Postcode>> {
    let tables = self.tables.read().await;
    Ok(tables.postcodes.get(postcode).filter(|p| p.is_live()).cloned())
  }

  async fn list_postcodes(&self) -> Result<Vec<Postcode>> {
    let tables = self.tables.read().await;
    Ok(
      tables
        .postcodes
        .values()
        .filter(|p| p.is_live())
        .cloned()
        .collect(),
    )
  }

  async fn save_postcode(&self, postcode: Postcode) -> Result<Postcode> {
    let mut tables = self.tables.write().await;
    tables
      .postcodes
      .insert(postcode.postcode.clone(), postcode.clone());
    Ok(postcode)
  }

  async fn soft_delete_postcode(&self, postcode: &str) -> Result<bool> {
    let mut tables = self.tables.write().await;
    match tables.postcodes.get_mut(postcode) {
      Some(entry) if entry.is_live() => {
        entry.removed_at = Some(Utc::now());
        Ok(true)
      }
      _ => Ok(false),
    }
  }

  async fn purge_postcode(&self, postcode: &str) -> Result<bool> {
    let mut tables = self.tables.write().await;
    Ok(tables.postcodes.remove(postcode).is_some())
  }
}
