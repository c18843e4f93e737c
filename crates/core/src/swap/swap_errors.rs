use thiserror::Error;

use crate::constants::{INVALID_AMOUNT_MESSAGE, SAME_TOKEN_MESSAGE};

/// Reasons a swap submission is refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwapError {
    #[error("A swap is already in progress")]
    InFlight,

    /// Missing token or non-positive sell amount
    #[error("Invalid amount")]
    InvalidAmount,

    #[error("Cannot swap the same token")]
    SameToken,
}

impl SwapError {
    /// Text of the toast shown for this error, if any.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            SwapError::InFlight => None,
            SwapError::InvalidAmount => Some(INVALID_AMOUNT_MESSAGE),
            SwapError::SameToken => Some(SAME_TOKEN_MESSAGE),
        }
    }
}
