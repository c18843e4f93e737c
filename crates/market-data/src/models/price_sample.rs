use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::types::Symbol;

/// One price observation as served by the price snapshot endpoint.
///
/// The snapshot may contain several samples for the same currency; see
/// [`latest_per_currency`] for the reduction applied before use.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceSample {
    /// Currency / token symbol
    pub currency: Symbol,

    /// ISO-8601 timestamp of the observation
    pub date: String,

    /// Unit price in the snapshot's common quote currency
    pub price: Decimal,
}

impl PriceSample {
    pub fn new(currency: impl Into<Symbol>, date: impl Into<String>, price: Decimal) -> Self {
        Self {
            currency: currency.into(),
            date: date.into(),
            price,
        }
    }

    /// Returns true when this sample is strictly more recent than `other`.
    ///
    /// Both dates are compared as instants when they parse; otherwise the raw
    /// strings are compared, which orders ISO-8601 values correctly as long as
    /// they share a format.
    pub fn is_newer_than(&self, other: &PriceSample) -> bool {
        match (sample_instant(&self.date), sample_instant(&other.date)) {
            (Some(candidate), Some(current)) => candidate > current,
            _ => self.date > other.date,
        }
    }
}

/// Parses a sample date into a UTC instant.
///
/// Accepts RFC 3339 timestamps (`2023-08-29T07:10:40.000Z`) and plain dates
/// (`2024-01-02`, read as midnight UTC).
pub fn sample_instant(date: &str) -> Option<DateTime<Utc>> {
    let date = date.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(date) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Keeps only the most recent sample for each currency.
///
/// The output preserves the order in which each currency first appears in
/// `samples`. A later sample only replaces the retained one when it is
/// strictly newer, so on equal dates the first-seen sample wins.
pub fn latest_per_currency(samples: Vec<PriceSample>) -> Vec<PriceSample> {
    let mut retained: Vec<PriceSample> = Vec::new();
    let mut positions: HashMap<Symbol, usize> = HashMap::new();

    for sample in samples {
        match positions.get(&sample.currency) {
            Some(&idx) => {
                if sample.is_newer_than(&retained[idx]) {
                    retained[idx] = sample;
                }
            }
            None => {
                positions.insert(sample.currency.clone(), retained.len());
                retained.push(sample);
            }
        }
    }

    retained
}
