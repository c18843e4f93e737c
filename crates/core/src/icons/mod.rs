//! Icons module - token icon URLs with a placeholder fallback.

mod icon_resolver;

pub use icon_resolver::{icon_url, IconResolver, TokenIcon, PLACEHOLDER_ICON_SVG};
