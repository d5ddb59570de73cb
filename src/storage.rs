use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    io,
    path::{Path, PathBuf},
};

use crate::error::ThemeError;

pub const STORAGE_DIRECTORY: &str = "portfolio-theme";
const STORAGE_FILE: &str = "storage.toml";

/// Durable string key/value store, the equivalent of browser local storage.
pub trait Storage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

pub fn configuration_directory() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(STORAGE_DIRECTORY)
}

/// All keys in one TOML table on disk.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_configuration_directory() -> Self {
        Self::new(configuration_directory().join(STORAGE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> BTreeMap<String, String> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => {
                log::debug!("[storage] no storage file at {}", self.path.display());
                return BTreeMap::new();
            }
        };
        match toml::from_str(&content) {
            Ok(items) => items,
            Err(error) => {
                log::warn!("[storage] failed to parse {}: {error}", self.path.display());
                BTreeMap::new()
            }
        }
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.load().remove(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        let mut items = self.load();
        items.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ThemeError::Storage {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content = toml::to_string_pretty(&items)?;
        std::fs::write(&self.path, content).map_err(|source| ThemeError::Storage {
            path: self.path.clone(),
            source,
        })
    }
}

#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<BTreeMap<String, String>>,
    read_only: Cell<bool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects every write, like a browser with storage disabled.
    pub fn read_only() -> Self {
        let storage = Self::default();
        storage.read_only.set(true);
        storage
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        if self.read_only.get() {
            return Err(ThemeError::Storage {
                path: PathBuf::from(key),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "storage is read-only"),
            });
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
