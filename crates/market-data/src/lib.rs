//! CoinSwap Market Data Crate
//!
//! This crate fetches the static price snapshot used by the swap calculator.
//!
//! # Overview
//!
//! ```text
//! +------------------+     +------------------+     +----------------------+
//! |  PriceProvider   | --> |  Vec<PriceSample> | --> | latest_per_currency  |
//! | (HTTP / static)  |     | (duplicates kept) |     | (one per currency)   |
//! +------------------+     +------------------+     +----------------------+
//! ```
//!
//! # Core Types
//!
//! - [`PriceSample`] - One `{currency, date, price}` observation
//! - [`PriceProvider`] - Source of a price snapshot
//! - [`SnapshotPriceProvider`] - One-shot HTTP GET of a JSON snapshot
//! - [`StaticPriceProvider`] - Fixed in-memory snapshot
//! - [`MarketDataError`] - Failure while fetching or decoding

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{latest_per_currency, sample_instant, PriceSample, Symbol};
pub use provider::snapshot::{SnapshotPriceProvider, DEFAULT_PRICE_URL};
pub use provider::{PriceProvider, StaticPriceProvider};
