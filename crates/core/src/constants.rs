use std::time::Duration;

/// Symbol preselected as the token being sold after prices load
pub const DEFAULT_FROM_SYMBOL: &str = "ETH";

/// Symbol preselected as the token being bought after prices load
pub const DEFAULT_TO_SYMBOL: &str = "USDC";

/// Decimal places kept by the amount converter
pub const AMOUNT_DECIMAL_PRECISION: u32 = 8;

/// Decimal places for fiat value hints
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Decimal places for regular exchange rates
pub const RATE_DECIMAL_PRECISION: u32 = 6;

/// Simulated network delay of a swap submission
pub const SWAP_DELAY: Duration = Duration::from_millis(1500);

/// How long a toast stays visible unless dismissed
pub const TOAST_TTL: Duration = Duration::from_millis(4000);

/// Preference key holding the theme
pub const THEME_PREFERENCE_KEY: &str = "theme";

/// Base URL of the token icon set; icons live at `<base>/<SYMBOL>.svg`
pub const DEFAULT_ICON_BASE_URL: &str =
    "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens";

/// Toast shown when the price snapshot cannot be loaded
pub const PRICE_LOAD_FAILED_MESSAGE: &str = "Failed to load token prices.";

/// Toast shown when a swap is submitted without tokens or a positive amount
pub const INVALID_AMOUNT_MESSAGE: &str = "Please enter a valid amount to swap.";

/// Toast shown when both sides of the swap are the same token
pub const SAME_TOKEN_MESSAGE: &str = "Swap failed: Cannot swap the same token.";
