use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};

use crate::{device::DeviceProfile, mode::ThemeMode, storage::configuration_directory, theme::*};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub mode: ThemeMode,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "DeviceProfile::desktop")]
    pub device: DeviceProfile,
}

fn default_debounce_ms() -> u64 {
    EDIT_DEBOUNCE_MS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: ThemeMode::default(),
            debounce_ms: default_debounce_ms(),
            device: DeviceProfile::desktop(),
        }
    }
}

impl Settings {
    pub fn settings_file_path() -> PathBuf {
        configuration_directory().join("settings.toml")
    }

    pub fn load() -> Self {
        Self::load_from(&Self::settings_file_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => {
                    log::info!("[settings] loaded from {}", path.display());
                    settings
                }
                Err(error) => {
                    log::warn!("[settings] failed to parse {}: {error}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!(
                    "[settings] no settings file at {}, using defaults",
                    path.display()
                );
                Self::default()
            }
        }
    }

    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let directory = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&directory.path().join("settings.toml"));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.debounce_window(), Duration::from_millis(150));
    }

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("settings.toml");
        std::fs::write(
            &path,
            "mode = \"light\"\n\n[device]\ntouch = true\ncoarse_pointer = true\nuser_agent = \"Android Mobile\"\n",
        )
        .unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings.mode, ThemeMode::Light);
        assert_eq!(settings.debounce_ms, 150);
        assert!(settings.device.is_mobile());
    }

    #[test]
    fn unparsable_file_gives_defaults() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("settings.toml");
        std::fs::write(&path, "mode = 3").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }
}
