//! Settings module - the persisted theme preference.

mod preference_store;
mod settings_model;
mod settings_service;
mod settings_traits;

pub use preference_store::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use settings_model::Theme;
pub use settings_service::ThemeService;
pub use settings_traits::ThemeServiceTrait;
