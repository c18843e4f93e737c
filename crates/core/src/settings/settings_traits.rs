use super::Theme;
use crate::errors::Result;

/// Trait defining the contract for the theme preference.
pub trait ThemeServiceTrait: Send + Sync {
    /// Saved theme, or the system default when nothing valid is saved.
    fn theme(&self) -> Result<Theme>;

    fn set_theme(&self, theme: Theme) -> Result<Theme>;

    fn toggle_theme(&self) -> Result<Theme>;
}
