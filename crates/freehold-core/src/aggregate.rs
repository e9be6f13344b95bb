//! Transaction-count aggregation by postcode sector and year.
//!
//! Operation A ([`sector_year_counts`]) groups the full transaction set into
//! per-year, per-sector counts. Operation B ([`highest_increase`]) folds one
//! counts snapshot over an ascending year sequence into cumulative
//! year-over-year increases and ranks the sectors. Both are pure functions
//! over already-materialised data; `BTreeMap` keys keep the output identical
//! across runs for fixed input.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::transaction::Transaction;

/// Year → postcode sector → live transaction count.
pub type SectorYearCounts = BTreeMap<String, BTreeMap<String, u64>>;

// ─── Key extraction ──────────────────────────────────────────────────────────

/// The postcode sector: the substring before the first space, or the whole
/// string when no space exists. `"ST10 4BS"` → `"ST10"`.
pub fn sector(postcode: &str) -> &str {
  match postcode.find(' ') {
    Some(space) => &postcode[..space],
    None => postcode,
  }
}

/// The leading 4-digit year of a transfer date. A date shorter than four
/// bytes groups under the whole string rather than failing.
pub fn transfer_year(date_of_transfer: &str) -> &str {
  date_of_transfer.get(..4).unwrap_or(date_of_transfer)
}

// ─── Operation A ─────────────────────────────────────────────────────────────

/// Count live transactions per (year, sector) pair.
///
/// Grouping is exact — no partial matches — and soft-deleted transactions
/// are excluded. Map entry order carries no semantic meaning.
pub fn sector_year_counts<'a, I>(transactions: I) -> SectorYearCounts
where
  I: IntoIterator<Item = &'a Transaction>,
{
  let mut counts = SectorYearCounts::new();
  for transaction in transactions {
    if !transaction.is_live() {
      continue;
    }
    let year = transfer_year(&transaction.date_of_transfer).to_owned();
    let sector = sector(&transaction.postcode).to_owned();
    *counts.entry(year).or_default().entry(sector).or_insert(0) += 1;
  }
  counts
}

// ─── Operation B ─────────────────────────────────────────────────────────────

/// A sector with its cumulative year-over-year increase in transaction
/// count. Increases can be negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorIncrease {
  pub sector:   String,
  pub increase: i64,
}

/// Rank sectors by cumulative transaction-count increase across `years`.
///
/// The requested years are sorted ascending (lexicographic, safe for fixed
/// 4-digit years) and processed in order, duplicates included — the
/// sort-and-iterate fold has no duplicate special case, and a repeated year
/// contributes a zero delta. A year absent from `counts` is skipped without
/// resetting the running state. Each sector enters the ranking at 0 on
/// first appearance and accumulates `count - previous_count` for every
/// later processed year; the previous count is updated unconditionally.
///
/// The result is sorted by increase descending — ties broken by sector name
/// ascending — and truncated to `top`. Fewer than `top` sectors yields all
/// of them. An empty `years` slice, or one naming only absent years, yields
/// an empty ranking rather than an error.
pub fn highest_increase(
  counts: &SectorYearCounts,
  years: &[String],
  top: usize,
) -> Vec<SectorIncrease> {
  let mut years = years.to_vec();
  years.sort();

  let mut cumulative: BTreeMap<&str, i64> = BTreeMap::new();
  let mut previous: BTreeMap<&str, i64> = BTreeMap::new();

  for year in &years {
    let Some(sectors) = counts.get(year) else {
      continue;
    };
    for (sector, &count) in sectors {
      let count = count as i64;
      let entry = cumulative.entry(sector.as_str()).or_insert(0);
      if let Some(prev) = previous.get(sector.as_str()) {
        *entry += count - prev;
      }
      previous.insert(sector.as_str(), count);
    }
  }

  let mut ranked: Vec<SectorIncrease> = cumulative
    .into_iter()
    .map(|(sector, increase)| SectorIncrease {
      sector: sector.to_owned(),
      increase,
    })
    .collect();
  ranked.sort_by(|a, b| {
    b.increase
      .cmp(&a.increase)
      .then_with(|| a.sector.cmp(&b.sector))
  });
  ranked.truncate(top);
  ranked
}
