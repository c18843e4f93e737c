use log::warn;
use std::sync::Arc;

use super::{PreferenceStore, Theme, ThemeServiceTrait};
use crate::constants::THEME_PREFERENCE_KEY;
use crate::errors::Result;

pub struct ThemeService {
    store: Arc<dyn PreferenceStore>,
    system_default: Theme,
}

impl ThemeService {
    pub fn new(store: Arc<dyn PreferenceStore>, system_default: Theme) -> Self {
        Self {
            store,
            system_default,
        }
    }
}

impl ThemeServiceTrait for ThemeService {
    fn theme(&self) -> Result<Theme> {
        match self.store.get(THEME_PREFERENCE_KEY)? {
            Some(saved) => Ok(saved.parse().unwrap_or_else(|_| {
                warn!("Ignoring unknown saved theme '{}'", saved);
                self.system_default
            })),
            None => Ok(self.system_default),
        }
    }

    fn set_theme(&self, theme: Theme) -> Result<Theme> {
        self.store.set(THEME_PREFERENCE_KEY, theme.as_str())?;
        Ok(theme)
    }

    fn toggle_theme(&self) -> Result<Theme> {
        let next = self.theme()?.toggled();
        self.set_theme(next)
    }
}
