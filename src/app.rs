//! Page-level coordination of the theme.
//!
//! [`ThemeRuntime`] owns the color store, the cursor preference, the editor
//! and the document style target. After anything that can change the
//! projected colors it rebuilds the theme object, rewrites the CSS variables
//! and regenerates the cursor.

use std::{cell::Cell, rc::Rc, time::Instant};

use crate::{
    color::ColorValue,
    css::{StyleTarget, sync_css_variables},
    cursor::{CursorDirective, build_cursor_glyph},
    device::DeviceProfile,
    editor::{ColorEditor, InputOutcome},
    mode::ThemeMode,
    model::{ColorModel, LeafPath},
    preferences::Preferences,
    projection::{ThemeObject, create_theme},
    settings::Settings,
    storage::Storage,
    store::ColorStore,
};

pub struct ThemeRuntime<T: StyleTarget> {
    store: ColorStore,
    preferences: Preferences,
    editor: ColorEditor,
    mode: ThemeMode,
    device: DeviceProfile,
    target: T,
    theme: ThemeObject,
    cursor: CursorDirective,
    colors_changed: Rc<Cell<bool>>,
}

impl<T: StyleTarget> ThemeRuntime<T> {
    pub fn new(storage: Rc<dyn Storage>, settings: &Settings, target: T) -> Self {
        let mut store = ColorStore::new(storage.clone());
        let colors_changed = Rc::new(Cell::new(false));
        store.subscribe({
            let colors_changed = colors_changed.clone();
            move |_: &ColorModel| colors_changed.set(true)
        });
        let preferences = Preferences::load(storage);
        let theme = create_theme(settings.mode, store.get());

        let mut runtime = Self {
            editor: ColorEditor::new(settings.debounce_window()),
            mode: settings.mode,
            device: settings.device.clone(),
            target,
            theme,
            cursor: CursorDirective::Default,
            colors_changed,
            store,
            preferences,
        };
        runtime.apply();
        log::info!(
            "[runtime] started in {} mode (custom cursor={}, mobile={})",
            runtime.mode,
            runtime.preferences.custom_cursor_enabled(),
            runtime.device.is_mobile(),
        );
        runtime
    }

    fn apply(&mut self) {
        self.theme = create_theme(self.mode, self.store.get());
        sync_css_variables(self.mode, &self.store, &mut self.target);
        self.cursor = build_cursor_glyph(
            self.mode,
            self.store.get(),
            self.preferences.custom_cursor_enabled(),
            &self.device,
        );
        self.target.set_cursor(&self.cursor);
        self.colors_changed.set(false);
    }

    /// Re-applies after store notifications and keeps an open editor's draft current.
    fn apply_if_changed(&mut self) {
        if self.colors_changed.get() {
            self.editor.sync_from(&self.store);
            self.apply();
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        if self.mode == mode {
            return;
        }
        log::info!("[runtime] switching to {mode} mode");
        self.mode = mode;
        self.apply();
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    pub fn custom_cursor_enabled(&self) -> bool {
        self.preferences.custom_cursor_enabled()
    }

    pub fn set_custom_cursor_enabled(&mut self, enabled: bool) {
        self.preferences.set_custom_cursor_enabled(enabled);
        self.apply();
    }

    pub fn update_color(&mut self, path: LeafPath, value: ColorValue) {
        self.store.update(path, value);
        self.apply_if_changed();
    }

    pub fn open_editor(&mut self) {
        self.editor.open(&self.store);
    }

    pub fn close_editor(&mut self) {
        self.editor.close();
    }

    pub fn edit(&mut self, path: LeafPath, text: &str, now: Instant) -> InputOutcome {
        self.editor.input(path, text, now)
    }

    pub fn finish_editing(&mut self, path: LeafPath) -> bool {
        self.editor.finish_editing(path)
    }

    /// Resets through the editor when it is open so its draft stays in step.
    pub fn reset_colors(&mut self) {
        if self.editor.is_open() {
            self.editor.reset(&mut self.store);
        } else {
            self.store.reset();
        }
        self.apply_if_changed();
    }

    /// Fires due editor commits. Called from the host's event loop.
    pub fn tick(&mut self, now: Instant) -> Vec<LeafPath> {
        let committed = self.editor.tick(now, &mut self.store);
        self.apply_if_changed();
        committed
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.editor.next_deadline()
    }

    pub fn store(&self) -> &ColorStore {
        &self.store
    }

    pub fn editor(&self) -> &ColorEditor {
        &self.editor
    }

    pub fn theme(&self) -> &ThemeObject {
        &self.theme
    }

    pub fn cursor(&self) -> &CursorDirective {
        &self.cursor
    }

    pub fn target(&self) -> &T {
        &self.target
    }
}
