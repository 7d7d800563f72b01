use thiserror::Error;

use crate::config;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to write preference")]
    WriteFailed,
}

/// Key-value collaborator holding the dark mode preference. Reads are
/// best-effort: anything unreadable counts as absent.
pub trait PreferenceStore {
    fn read_dark_mode(&self) -> Option<bool>;
    fn write_dark_mode(&self, value: bool) -> Result<(), StoreError>;
}

/// Browser localStorage, storing `"true"`/`"false"` under the darkMode
/// key. Quota errors and blocked storage surface as [`StoreError`]; the
/// caller decides whether that matters.
pub struct BrowserStore;

impl PreferenceStore for BrowserStore {
    fn read_dark_mode(&self) -> Option<bool> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        let raw = storage.get_item(config::DARK_MODE_KEY).ok().flatten()?;
        raw.parse().ok()
    }

    fn write_dark_mode(&self, value: bool) -> Result<(), StoreError> {
        let storage = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)?;
        storage
            .set_item(config::DARK_MODE_KEY, if value { "true" } else { "false" })
            .map_err(|_| StoreError::WriteFailed)
    }
}
