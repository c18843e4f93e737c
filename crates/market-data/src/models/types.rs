/// Currency / token symbol as it appears on the wire (e.g. "ETH", "USDC")
pub type Symbol = String;
