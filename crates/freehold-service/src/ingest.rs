//! Ingestion of raw price-paid records.
//!
//! A [`SaleRecord`] is one row of the HM Land Registry price-paid file. Each
//! row describes a transaction and, implicitly, a property; the property's
//! identity is derived from the row's address key, so repeated observations
//! of the same physical property collapse to one entity and re-ingesting a
//! row is a no-op.

use serde::{Deserialize, Serialize};

use freehold_core::{
  identity::AddressKey,
  postcode::Postcode,
  property::{AddressDetail, Property},
  store::PropertyStore,
  transaction::Transaction,
};

use crate::{Error, PropertyService, Result};

/// One row of the price-paid data.
///
/// The field set is the static allowed-column table for ingestion: columns
/// are known at compile time, and a row carrying an unknown column is
/// rejected during deserialisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SaleRecord {
  pub transaction_id:    String,
  pub price:             u64,
  pub date_of_transfer:  String,
  pub postcode:          Option<String>,
  pub property_type:     Option<String>,
  pub old_new:           Option<String>,
  pub duration:          Option<String>,
  pub paon:              Option<String>,
  pub saon:              Option<String>,
  pub street:            Option<String>,
  pub locality:          Option<String>,
  pub town_city:         Option<String>,
  pub district:          Option<String>,
  pub country:           Option<String>,
  pub ppd_category_type: Option<String>,
  pub record_status:     Option<String>,
}

impl SaleRecord {
  /// The identity key carried by this row.
  pub fn address_key(&self) -> AddressKey {
    AddressKey {
      paon:     self.paon.clone(),
      saon:     self.saon.clone(),
      postcode: self.postcode.clone(),
    }
  }

  fn address_detail(&self) -> AddressDetail {
    AddressDetail {
      street:    self.street.clone(),
      locality:  self.locality.clone(),
      town_city: self.town_city.clone(),
      district:  self.district.clone(),
      country:   self.country.clone(),
    }
  }
}

/// What one [`PropertyService::ingest`] call did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestOutcome {
  pub property_id:     String,
  pub new_property:    bool,
  pub new_transaction: bool,
}

impl<S: PropertyStore> PropertyService<S> {
  /// Ingest one raw record.
  ///
  /// Finds or creates the property by derived id, appends the transaction
  /// id to it, saves the transaction if its id is unseen (a transaction is
  /// never duplicated and never mutated), and upserts the postcode
  /// back-reference when the row carries a postcode. Re-ingesting an
  /// identical record changes nothing and reports both flags false.
  ///
  /// An existing property keeps its descriptive fields as first observed;
  /// a later record with the same derived id describes the same property.
  pub async fn ingest(&self, record: SaleRecord) -> Result<IngestOutcome> {
    let key = record.address_key();
    let property_id = key.derive_id();

    let existing = self
      .store()
      .get_property(&property_id)
      .await
      .map_err(Error::store)?;
    let new_property = existing.is_none();
    let mut property = match existing {
      Some(found) => found,
      None => Property::from_key(key, record.address_detail()),
    };
    property.add_transaction(record.transaction_id.clone());
    self
      .store()
      .save_property(property)
      .await
      .map_err(Error::store)?;

    let new_transaction = self
      .store()
      .get_transaction(&record.transaction_id)
      .await
      .map_err(Error::store)?
      .is_none();
    if new_transaction {
      // A row without a postcode still counts; it groups under the empty
      // sector.
      let transaction = Transaction::new(
        record.transaction_id.clone(),
        property_id.clone(),
        record.postcode.clone().unwrap_or_default(),
        record.price,
        record.date_of_transfer.clone(),
      );
      self
        .store()
        .save_transaction(transaction)
        .await
        .map_err(Error::store)?;
    }

    if let Some(postcode) = &record.postcode {
      let mut entry = self
        .store()
        .get_postcode(postcode)
        .await
        .map_err(Error::store)?
        .unwrap_or_else(|| Postcode::new(postcode.clone()));
      entry.add_property(property_id.clone());
      self
        .store()
        .save_postcode(entry)
        .await
        .map_err(Error::store)?;
    }

    tracing::debug!(
      property_id = %property_id,
      transaction_id = %record.transaction_id,
      new_property,
      new_transaction,
      "ingested price-paid record"
    );

    Ok(IngestOutcome {
      property_id,
      new_property,
      new_transaction,
    })
  }

  /// Ingest a batch of records, preserving record order in the returned
  /// outcomes.
  pub async fn ingest_all<I>(&self, records: I) -> Result<Vec<IngestOutcome>>
  where
    I: IntoIterator<Item = SaleRecord>,
  {
    let mut outcomes = Vec::new();
    for record in records {
      outcomes.push(self.ingest(record).await?);
    }
    tracing::info!(records = outcomes.len(), "ingested batch");
    Ok(outcomes)
  }
}
