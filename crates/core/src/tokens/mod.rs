//! Tokens module - price snapshot loading, lookup and search.

mod tokens_model;
mod tokens_service;
mod tokens_traits;

pub use tokens_model::{tokens_from_samples, PriceLoadOutcome, Token};
pub use tokens_service::TokenService;
pub use tokens_traits::TokenServiceTrait;
