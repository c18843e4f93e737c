//! Swap module - amount conversion, rate formatting, input validation,
//! form state and the simulated swap.

pub mod amount;
pub mod converter;
pub mod input;
pub mod rate;
mod swap_errors;
mod swap_form;
mod swap_service;
mod swap_traits;

pub use amount::{format_amount, parse_amount, usd_value};
pub use converter::{convert_back, convert_forward, exchange_rate};
pub use input::{apply_amount_input, normalize_amount_input};
pub use rate::{exchange_rate_label, format_rate};
pub use swap_errors::SwapError;
pub use swap_form::{SwapAction, SwapForm, SwapView};
pub use swap_service::{SwapReceipt, SwapService};
pub use swap_traits::SwapServiceTrait;
