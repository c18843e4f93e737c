//! Core of the CoinSwap token swap calculator.
//!
//! Loads a price snapshot into a token set, converts amounts between any two
//! tokens through their common quote price, formats exchange rates, and
//! simulates swap submission with toast notifications. Also holds the theme
//! preference and token icon lookup used by the server.

pub mod constants;
pub mod errors;
pub mod icons;
pub mod notifications;
pub mod settings;
pub mod swap;
pub mod tokens;

pub use errors::Error;
pub use errors::Result;
