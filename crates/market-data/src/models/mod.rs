//! Market data models
//!
//! - `types` - Type aliases for common identifiers (Symbol)
//! - `price_sample` - Wire format of one price observation and the
//!   latest-per-currency reduction applied to a snapshot

mod price_sample;
mod types;

pub use price_sample::{latest_per_currency, sample_instant, PriceSample};
pub use types::Symbol;
