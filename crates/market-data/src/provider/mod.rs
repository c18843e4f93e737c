//! Price provider abstractions and implementations.
//!
//! - The `PriceProvider` trait that all providers implement
//! - `SnapshotPriceProvider`: one-shot HTTP GET of a static JSON snapshot
//! - `StaticPriceProvider`: fixed in-memory samples (offline runs, tests)

mod static_feed;
mod traits;

pub mod snapshot;

// Re-exports
pub use static_feed::StaticPriceProvider;
pub use traits::PriceProvider;
