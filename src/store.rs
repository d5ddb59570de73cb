//! The single owner of the live color model.
//!
//! Every mutation goes through [`ColorStore::update`] or
//! [`ColorStore::reset`]. Each one bumps the revision, writes a JSON snapshot
//! to storage (best effort) and notifies subscribers in registration order.

use std::rc::Rc;

use crate::{
    color::ColorValue,
    error::ThemeError,
    model::{ColorModel, DEFAULT_COLORS, LeafPath},
    storage::Storage,
};

pub const COLORS_STORAGE_KEY: &str = "portfolio-custom-colors";

/// Read access to whatever color model is current.
pub trait ColorSource {
    fn current(&self) -> &ColorModel;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&ColorModel)>;

pub struct ColorStore {
    colors: ColorModel,
    storage: Rc<dyn Storage>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
    revision: u64,
}

impl ColorStore {
    /// Starts from the default palette. Persisted colors are not read back.
    pub fn new(storage: Rc<dyn Storage>) -> Self {
        Self::with_colors(storage, DEFAULT_COLORS)
    }

    /// Starts from the last persisted snapshot, or the defaults when there is none.
    pub fn rehydrated(storage: Rc<dyn Storage>) -> Self {
        let colors = match storage.get_item(COLORS_STORAGE_KEY) {
            Some(json) => match serde_json::from_str(&json) {
                Ok(colors) => {
                    log::info!("[store] rehydrated colors from storage");
                    colors
                }
                Err(error) => {
                    log::warn!("[store] ignoring unreadable color snapshot: {error}");
                    DEFAULT_COLORS
                }
            },
            None => DEFAULT_COLORS,
        };
        Self::with_colors(storage, colors)
    }

    fn with_colors(storage: Rc<dyn Storage>, colors: ColorModel) -> Self {
        let store = Self {
            colors,
            storage,
            subscribers: Vec::new(),
            next_subscription: 0,
            revision: 0,
        };
        store.persist();
        store
    }

    pub fn get(&self) -> &ColorModel {
        &self.colors
    }

    /// Increments on every update or reset.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn update(&mut self, path: LeafPath, value: ColorValue) {
        log::debug!("[store] {path} = {value}");
        self.colors.set(path, value);
        self.changed();
    }

    /// Three-part addressing; see [`LeafPath::from_parts`].
    pub fn update_by_name(
        &mut self,
        category: &str,
        subcategory: Option<&str>,
        property: Option<&str>,
        value: ColorValue,
    ) -> Result<LeafPath, ThemeError> {
        let path = LeafPath::from_parts(category, subcategory, property).ok_or_else(|| {
            ThemeError::UnknownPath(format!(
                "{category}.{}.{}",
                subcategory.unwrap_or("-"),
                property.unwrap_or("-")
            ))
        })?;
        self.update(path, value);
        Ok(path)
    }

    pub fn reset(&mut self) {
        log::info!("[store] reset to default colors");
        self.colors = DEFAULT_COLORS;
        self.changed();
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&ColorModel) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    fn changed(&mut self) {
        self.revision += 1;
        self.persist();
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.colors);
        }
    }

    fn persist(&self) {
        let json = match serde_json::to_string(&self.colors) {
            Ok(json) => json,
            Err(error) => {
                log::warn!("[store] failed to serialize colors: {error}");
                return;
            }
        };
        if let Err(error) = self.storage.set_item(COLORS_STORAGE_KEY, &json) {
            log::warn!("[store] failed to persist colors: {error}");
        }
    }
}

impl ColorSource for ColorStore {
    fn current(&self) -> &ColorModel {
        &self.colors
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{color::Rgb, storage::MemoryStorage};

    fn memory() -> Rc<MemoryStorage> {
        Rc::new(MemoryStorage::new())
    }

    #[test]
    fn update_changes_exactly_one_leaf() {
        let mut store = ColorStore::new(memory());
        let value: ColorValue = "#123456".parse().unwrap();
        store
            .update_by_name("primary", None, Some("main"), value)
            .unwrap();

        assert_eq!(store.get().primary.main, value);
        for (path, leaf) in store.get().leaves() {
            if path != LeafPath::PrimaryMain {
                assert_eq!(leaf, DEFAULT_COLORS.get(path), "{path} changed");
            }
        }
    }

    #[test]
    fn unknown_paths_are_rejected() {
        let mut store = ColorStore::new(memory());
        let value = ColorValue::Hex(Rgb(0, 0, 0));
        assert!(store.update_by_name("background", Some("paper"), None, value).is_err());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn reset_restores_defaults_after_any_edit() {
        let mut store = ColorStore::new(memory());
        for path in LeafPath::ALL {
            store.update(path, ColorValue::Rgba(Rgb(9, 9, 9), 0.1));
        }
        store.reset();
        assert_eq!(*store.get(), DEFAULT_COLORS);
    }

    #[test]
    fn every_change_persists_a_snapshot() {
        let storage = memory();
        let mut store = ColorStore::new(storage.clone());
        let initial = storage.get_item(COLORS_STORAGE_KEY).unwrap();
        assert_eq!(serde_json::from_str::<ColorModel>(&initial).unwrap(), DEFAULT_COLORS);

        store.update(LeafPath::CursorAccentDark, ColorValue::Hex(Rgb(1, 2, 3)));
        let saved: ColorModel =
            serde_json::from_str(&storage.get_item(COLORS_STORAGE_KEY).unwrap()).unwrap();
        assert_eq!(saved.cursor.accent.dark, ColorValue::Hex(Rgb(1, 2, 3)));
    }

    #[test]
    fn startup_ignores_persisted_colors() {
        let storage = memory();
        let mut first = ColorStore::new(storage.clone());
        first.update(LeafPath::BackgroundDark, ColorValue::Hex(Rgb(1, 1, 1)));

        let second = ColorStore::new(storage);
        assert_eq!(*second.get(), DEFAULT_COLORS);
    }

    #[test]
    fn rehydrated_store_reads_persisted_colors() {
        let storage = memory();
        let mut first = ColorStore::new(storage.clone());
        first.update(LeafPath::BackgroundDark, ColorValue::Hex(Rgb(1, 1, 1)));

        let second = ColorStore::rehydrated(storage.clone());
        assert_eq!(second.get().background.dark, ColorValue::Hex(Rgb(1, 1, 1)));

        storage.set_item(COLORS_STORAGE_KEY, "{not json").unwrap();
        let third = ColorStore::rehydrated(storage);
        assert_eq!(*third.get(), DEFAULT_COLORS);
    }

    #[test]
    fn storage_failures_are_swallowed() {
        let mut store = ColorStore::new(Rc::new(MemoryStorage::read_only()));
        store.update(LeafPath::PrimaryLight, ColorValue::Hex(Rgb(4, 5, 6)));
        assert_eq!(store.get().primary.light, ColorValue::Hex(Rgb(4, 5, 6)));
    }

    #[test]
    fn subscribers_see_every_change_until_removed() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = ColorStore::new(memory());
        let id = store.subscribe({
            let seen = seen.clone();
            move |colors: &ColorModel| seen.borrow_mut().push(colors.primary.main)
        });

        store.update(LeafPath::PrimaryMain, ColorValue::Hex(Rgb(1, 1, 1)));
        store.reset();
        assert!(store.unsubscribe(id));
        store.update(LeafPath::PrimaryMain, ColorValue::Hex(Rgb(2, 2, 2)));

        assert_eq!(
            *seen.borrow(),
            vec![ColorValue::Hex(Rgb(1, 1, 1)), DEFAULT_COLORS.primary.main]
        );
        assert!(!store.unsubscribe(id));
    }
}
