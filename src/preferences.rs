use std::rc::Rc;

use crate::storage::Storage;

pub const CURSOR_STORAGE_KEY: &str = "portfolio-custom-cursor-enabled";

/// Flags rehydrated from storage at startup.
pub struct Preferences {
    storage: Rc<dyn Storage>,
    custom_cursor_enabled: bool,
}

fn default_custom_cursor_enabled() -> bool {
    true
}

impl Preferences {
    pub fn load(storage: Rc<dyn Storage>) -> Self {
        let custom_cursor_enabled = match storage.get_item(CURSOR_STORAGE_KEY) {
            Some(saved) => match serde_json::from_str::<bool>(&saved) {
                Ok(enabled) => {
                    log::info!("[preferences] custom cursor enabled={enabled}");
                    enabled
                }
                Err(error) => {
                    log::warn!("[preferences] failed to parse {CURSOR_STORAGE_KEY}: {error}");
                    default_custom_cursor_enabled()
                }
            },
            None => {
                log::info!("[preferences] no saved cursor preference, using defaults");
                default_custom_cursor_enabled()
            }
        };
        let preferences = Self {
            storage,
            custom_cursor_enabled,
        };
        preferences.save();
        preferences
    }

    pub fn save(&self) {
        match serde_json::to_string(&self.custom_cursor_enabled) {
            Ok(content) => {
                if let Err(error) = self.storage.set_item(CURSOR_STORAGE_KEY, &content) {
                    log::warn!("[preferences] failed to write {CURSOR_STORAGE_KEY}: {error}");
                }
            }
            Err(error) => {
                log::warn!("[preferences] failed to serialize cursor preference: {error}");
            }
        }
    }

    pub fn custom_cursor_enabled(&self) -> bool {
        self.custom_cursor_enabled
    }

    pub fn set_custom_cursor_enabled(&mut self, enabled: bool) {
        self.custom_cursor_enabled = enabled;
        self.save();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn cursor_defaults_to_enabled() {
        let storage = Rc::new(MemoryStorage::new());
        let preferences = Preferences::load(storage.clone());
        assert!(preferences.custom_cursor_enabled());
        assert_eq!(storage.get_item(CURSOR_STORAGE_KEY).as_deref(), Some("true"));
    }

    #[test]
    fn cursor_flag_survives_reload() {
        let storage = Rc::new(MemoryStorage::new());
        let mut preferences = Preferences::load(storage.clone());
        preferences.set_custom_cursor_enabled(false);

        let reloaded = Preferences::load(storage);
        assert!(!reloaded.custom_cursor_enabled());
    }

    #[test]
    fn garbage_flag_falls_back_to_enabled() {
        let storage = Rc::new(MemoryStorage::new());
        storage.set_item(CURSOR_STORAGE_KEY, "maybe").unwrap();
        assert!(Preferences::load(storage).custom_cursor_enabled());
    }
}
