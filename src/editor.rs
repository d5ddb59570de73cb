//! The "Customize Colors" dialog.
//!
//! Each field keeps its own input text and last valid text, separate from
//! the committed colors. Valid hex input is committed to the store after a
//! quiet period; invalid input reverts when the field loses focus. Commits
//! are live, so closing the dialog never rolls anything back.

use std::{
    collections::BTreeMap,
    time::{Duration, Instant},
};

use crate::{
    color::{ColorValue, alpha_of, filter_hex_input, hex_to_rgba, is_valid_hex, rgba_to_hex},
    debounce::Debouncer,
    mode::ThemeMode,
    model::{ColorModel, DEFAULT_COLORS, LeafPath},
    store::{ColorSource, ColorStore},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldPhase {
    Viewing,
    Editing,
    InvalidPendingRevert,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    /// The edit removed the leading `#` and was dropped.
    Ignored,
    Scheduled,
    Invalid,
}

struct FieldState {
    input: String,
    last_valid: String,
}

struct PendingEdit {
    hex: String,
    previous: ColorValue,
}

pub struct ColorEditor {
    open: bool,
    draft: ColorModel,
    fields: BTreeMap<LeafPath, FieldState>,
    debouncer: Debouncer<LeafPath, PendingEdit>,
}

impl ColorEditor {
    pub fn new(debounce_window: Duration) -> Self {
        Self {
            open: false,
            draft: DEFAULT_COLORS,
            fields: BTreeMap::new(),
            debouncer: Debouncer::new(debounce_window),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self, source: &dyn ColorSource) {
        self.draft = *source.current();
        self.populate_fields();
        self.open = true;
        log::info!("[editor] opened with {} fields", self.fields.len());
    }

    /// Follows a store change made outside the dialog.
    ///
    /// Every field's last valid text tracks the new colors. Input text is
    /// replaced only for fields that are neither awaiting a commit nor
    /// holding invalid text.
    pub fn sync_from(&mut self, source: &dyn ColorSource) {
        if !self.open {
            return;
        }
        self.draft = *source.current();
        for (path, field) in self.fields.iter_mut() {
            let display = rgba_to_hex(&self.draft.get(*path).to_string());
            let viewing = !self.debouncer.is_pending(path) && is_valid_hex(&field.input);
            if viewing {
                field.input = display.clone();
            }
            field.last_valid = display;
        }
    }

    fn populate_fields(&mut self) {
        self.fields = self
            .draft
            .leaves()
            .map(|(path, value)| {
                let display = rgba_to_hex(&value.to_string());
                (
                    path,
                    FieldState {
                        input: display.clone(),
                        last_valid: display,
                    },
                )
            })
            .collect();
    }

    pub fn input(&mut self, path: LeafPath, text: &str, now: Instant) -> InputOutcome {
        if !self.open {
            log::debug!("[editor] ignoring input for {path} while closed");
            return InputOutcome::Ignored;
        }
        let Some(filtered) = filter_hex_input(text) else {
            return InputOutcome::Ignored;
        };
        let Some(field) = self.fields.get_mut(&path) else {
            return InputOutcome::Ignored;
        };
        field.input = filtered.clone();

        if !is_valid_hex(&filtered) {
            return InputOutcome::Invalid;
        }
        let edit = PendingEdit {
            hex: filtered,
            previous: self.draft.get(path),
        };
        if self.debouncer.schedule(path, edit, now) {
            log::debug!("[editor] {path}: superseded pending edit");
        }
        InputOutcome::Scheduled
    }

    /// Commits every field whose quiet period has elapsed. Returns the committed paths.
    pub fn tick(&mut self, now: Instant, store: &mut ColorStore) -> Vec<LeafPath> {
        let mut committed = Vec::new();
        for (path, edit) in self.debouncer.take_due(now) {
            let text = if edit.previous.is_alpha() {
                hex_to_rgba(&edit.hex, alpha_of(&edit.previous.to_string()))
            } else {
                edit.hex.clone()
            };
            let value: ColorValue = match text.parse() {
                Ok(value) => value,
                Err(error) => {
                    log::warn!("[editor] dropping edit for {path}: {error}");
                    continue;
                }
            };

            self.draft.set(path, value);
            store.update(path, value);
            if let Some(field) = self.fields.get_mut(&path) {
                field.last_valid = edit.hex;
            }
            committed.push(path);
        }
        committed
    }

    /// Blur or Enter. Returns `true` when the field reverted to its last valid text.
    pub fn finish_editing(&mut self, path: LeafPath) -> bool {
        let Some(field) = self.fields.get_mut(&path) else {
            return false;
        };
        if is_valid_hex(&field.input) {
            return false;
        }
        log::debug!("[editor] {path}: reverting {:?} to {}", field.input, field.last_valid);
        field.input = field.last_valid.clone();
        true
    }

    /// Writes the default palette to the draft and the store, one leaf at a time.
    pub fn reset(&mut self, store: &mut ColorStore) {
        let cancelled = self.debouncer.cancel_all();
        if cancelled > 0 {
            log::debug!("[editor] reset cancelled {cancelled} pending edits");
        }
        self.draft = DEFAULT_COLORS;
        for (path, value) in DEFAULT_COLORS.leaves() {
            store.update(path, value);
        }
        self.populate_fields();
    }

    pub fn close(&mut self) {
        let cancelled = self.debouncer.cancel_all();
        self.fields.clear();
        self.open = false;
        log::info!("[editor] closed, discarded {cancelled} pending edits");
    }

    pub fn draft(&self) -> &ColorModel {
        &self.draft
    }

    pub fn input_text(&self, path: LeafPath) -> Option<&str> {
        self.fields.get(&path).map(|field| field.input.as_str())
    }

    pub fn last_valid(&self, path: LeafPath) -> Option<&str> {
        self.fields.get(&path).map(|field| field.last_valid.as_str())
    }

    pub fn phase(&self, path: LeafPath) -> FieldPhase {
        if self.debouncer.is_pending(&path) {
            return FieldPhase::Editing;
        }
        match self.input_text(path) {
            Some(input) if !is_valid_hex(input) => FieldPhase::InvalidPendingRevert,
            _ => FieldPhase::Viewing,
        }
    }

    /// Whether the leaf carries transparency that the hex field does not show.
    pub fn is_alpha(&self, path: LeafPath) -> bool {
        self.draft.get(path).is_alpha()
    }

    pub fn pending_count(&self) -> usize {
        self.debouncer.pending_count()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.next_deadline()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorField {
    pub label: &'static str,
    pub path: LeafPath,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorSection {
    pub title: &'static str,
    pub fields: Vec<EditorField>,
}

fn field(label: &'static str, mode: ThemeMode, dark: LeafPath, light: LeafPath) -> EditorField {
    EditorField {
        label,
        path: *mode.pick(&dark, &light),
    }
}

/// Dialog layout for one mode's accordion.
pub fn editor_sections(mode: ThemeMode, custom_cursor_enabled: bool) -> Vec<EditorSection> {
    use LeafPath::*;

    let mut sections = vec![
        EditorSection {
            title: "Text Colors",
            fields: vec![
                field("Primary", mode, PrimaryMain, PrimaryLight),
                field("Secondary", mode, SecondaryMain, SecondaryLight),
                field("Tertiary", mode, TextTertiaryDark, TextTertiaryLight),
                field("Quaternary", mode, TextQuaternaryDark, TextQuaternaryLight),
            ],
        },
        EditorSection {
            title: "Background Colors",
            fields: vec![
                field("Odd Sections", mode, BackgroundPaperDark, BackgroundPaperLight),
                field("Even Sections", mode, BackgroundDark, BackgroundLight),
            ],
        },
        EditorSection {
            title: "Utility Colors",
            fields: vec![
                field("Experience Image", mode, UtilityOverlayDark, UtilityOverlayLight),
                field("Hover Shadow", mode, UtilityShadowDark, UtilityShadowLight),
            ],
        },
        EditorSection {
            title: "Scrollbar Colors",
            fields: vec![
                field("Track", mode, ScrollbarTrackDark, ScrollbarTrackLight),
                field("Thumb", mode, ScrollbarThumbDark, ScrollbarThumbLight),
            ],
        },
    ];
    if custom_cursor_enabled {
        sections.push(EditorSection {
            title: "Cursor Colors",
            fields: vec![
                field("Body Color", mode, CursorPrimaryDark, CursorPrimaryLight),
                field("Accent", mode, CursorAccentDark, CursorAccentLight),
            ],
        });
    }
    sections
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{color::Rgb, storage::MemoryStorage};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn setup() -> (ColorEditor, ColorStore) {
        let store = ColorStore::new(Rc::new(MemoryStorage::new()));
        let mut editor = ColorEditor::new(ms(150));
        editor.open(&store);
        (editor, store)
    }

    #[test]
    fn open_populates_every_field_from_the_store() {
        let (editor, store) = setup();
        for (path, value) in store.get().leaves() {
            let expected = value.to_string();
            assert_eq!(editor.input_text(path), Some(expected.as_str()));
            assert_eq!(editor.phase(path), FieldPhase::Viewing);
        }
    }

    #[test]
    fn only_the_last_edit_in_the_window_commits() {
        let (mut editor, mut store) = setup();
        let start = Instant::now();
        let path = LeafPath::BackgroundDark;

        editor.input(path, "#111111", start);
        editor.input(path, "#222222", start + ms(50));
        editor.input(path, "#333333", start + ms(100));
        assert_eq!(editor.phase(path), FieldPhase::Editing);

        assert!(editor.tick(start + ms(200), &mut store).is_empty());
        assert_eq!(store.revision(), 0);

        assert_eq!(editor.tick(start + ms(250), &mut store), vec![path]);
        assert_eq!(store.get().background.dark, ColorValue::Hex(Rgb(0x33, 0x33, 0x33)));
        assert_eq!(store.revision(), 1);
        assert_eq!(editor.last_valid(path), Some("#333333"));
        assert_eq!(editor.phase(path), FieldPhase::Viewing);
    }

    #[test]
    fn fields_debounce_independently() {
        let (mut editor, mut store) = setup();
        let start = Instant::now();

        editor.input(LeafPath::PrimaryMain, "#abcdef", start);
        editor.input(LeafPath::SecondaryMain, "#fedcba", start + ms(100));

        assert_eq!(editor.tick(start + ms(150), &mut store), vec![LeafPath::PrimaryMain]);
        assert_eq!(editor.tick(start + ms(250), &mut store), vec![LeafPath::SecondaryMain]);
    }

    #[test]
    fn invalid_input_reverts_on_blur_without_touching_the_store() {
        let (mut editor, mut store) = setup();
        let start = Instant::now();
        let path = LeafPath::PrimaryMain;
        assert_eq!(editor.input_text(path), Some("#00bcd4"));

        assert_eq!(editor.input(path, "#zzzzzz", start), InputOutcome::Invalid);
        assert_eq!(editor.input_text(path), Some("#"));
        assert_eq!(editor.phase(path), FieldPhase::InvalidPendingRevert);

        assert!(editor.finish_editing(path));
        assert_eq!(editor.input_text(path), Some("#00bcd4"));
        assert!(editor.tick(start + ms(1000), &mut store).is_empty());
        assert_eq!(store.revision(), 0);
        assert_eq!(store.get().primary.main, DEFAULT_COLORS.primary.main);
    }

    #[test]
    fn revert_uses_the_fields_own_last_valid_text() {
        let (mut editor, mut store) = setup();
        let start = Instant::now();
        let path = LeafPath::CursorAccentDark;

        editor.input(path, "#010203", start);
        editor.tick(start + ms(150), &mut store);
        editor.input(path, "#0102", start + ms(200));

        assert!(editor.finish_editing(path));
        assert_eq!(editor.input_text(path), Some("#010203"));
        assert!(!editor.finish_editing(path));
    }

    #[test]
    fn removing_the_hash_is_ignored() {
        let (mut editor, _store) = setup();
        let path = LeafPath::PrimaryLight;
        assert_eq!(editor.input(path, "005577", Instant::now()), InputOutcome::Ignored);
        assert_eq!(editor.input_text(path), Some("#005577"));
    }

    #[test]
    fn alpha_blended_leaves_keep_their_alpha() {
        let mut store = ColorStore::new(Rc::new(MemoryStorage::new()));
        store.update(
            LeafPath::UtilityOverlayDark,
            ColorValue::Rgba(Rgb(255, 255, 255), 0.5),
        );
        let mut editor = ColorEditor::new(ms(150));
        editor.open(&store);
        let path = LeafPath::UtilityOverlayDark;
        assert!(editor.is_alpha(path));
        assert_eq!(editor.input_text(path), Some("#ffffff"));

        let start = Instant::now();
        editor.input(path, "#102030", start);
        editor.tick(start + ms(150), &mut store);

        assert_eq!(
            store.get().utility.overlay.dark,
            ColorValue::Rgba(Rgb(0x10, 0x20, 0x30), 0.5)
        );
        assert_eq!(editor.draft().utility.overlay.dark, store.get().utility.overlay.dark);
    }

    #[test]
    fn outside_store_changes_refresh_the_draft() {
        let (mut editor, mut store) = setup();
        let start = Instant::now();
        editor.input(LeafPath::PrimaryMain, "#abcabc", start);
        editor.input(LeafPath::SecondaryMain, "#zz", start);

        store.update(LeafPath::UtilityShadowDark, ColorValue::Rgba(Rgb(0, 0, 0), 0.2));
        store.update(LeafPath::PrimaryMain, ColorValue::Hex(Rgb(1, 1, 1)));
        store.update(LeafPath::SecondaryMain, ColorValue::Hex(Rgb(2, 2, 2)));
        editor.sync_from(&store);

        assert!(editor.is_alpha(LeafPath::UtilityShadowDark));
        assert_eq!(editor.input_text(LeafPath::UtilityShadowDark), Some("#000000"));
        assert_eq!(editor.input_text(LeafPath::PrimaryMain), Some("#abcabc"));
        assert_eq!(editor.last_valid(LeafPath::PrimaryMain), Some("#010101"));
        assert_eq!(editor.input_text(LeafPath::SecondaryMain), Some("#"));

        assert!(editor.finish_editing(LeafPath::SecondaryMain));
        assert_eq!(editor.input_text(LeafPath::SecondaryMain), Some("#020202"));
    }

    #[test]
    fn close_discards_pending_edits_but_keeps_commits() {
        let (mut editor, mut store) = setup();
        let start = Instant::now();

        editor.input(LeafPath::PrimaryMain, "#111111", start);
        editor.tick(start + ms(150), &mut store);
        editor.input(LeafPath::SecondaryMain, "#222222", start + ms(160));
        editor.close();

        assert!(editor.tick(start + ms(1000), &mut store).is_empty());
        assert_eq!(store.get().primary.main, ColorValue::Hex(Rgb(0x11, 0x11, 0x11)));
        assert_eq!(store.get().secondary.main, DEFAULT_COLORS.secondary.main);
        assert_eq!(editor.input_text(LeafPath::PrimaryMain), None);

        editor.open(&store);
        assert_eq!(editor.input_text(LeafPath::PrimaryMain), Some("#111111"));
    }

    #[test]
    fn reset_writes_defaults_leaf_by_leaf() {
        let (mut editor, mut store) = setup();
        let start = Instant::now();
        editor.input(LeafPath::PrimaryMain, "#111111", start);
        editor.tick(start + ms(150), &mut store);
        editor.input(LeafPath::TextTertiaryDark, "#222222", start + ms(200));

        let before = store.revision();
        editor.reset(&mut store);

        assert_eq!(store.revision(), before + LeafPath::ALL.len() as u64);
        assert_eq!(*store.get(), DEFAULT_COLORS);
        assert_eq!(*editor.draft(), DEFAULT_COLORS);
        assert_eq!(editor.pending_count(), 0);
        assert_eq!(editor.input_text(LeafPath::PrimaryMain), Some("#00bcd4"));
    }

    #[test]
    fn cursor_section_follows_the_cursor_flag() {
        let with_cursor = editor_sections(ThemeMode::Light, true);
        let without_cursor = editor_sections(ThemeMode::Light, false);
        assert_eq!(with_cursor.len(), 5);
        assert_eq!(without_cursor.len(), 4);
        assert_eq!(
            with_cursor[4].fields[0],
            EditorField {
                label: "Body Color",
                path: LeafPath::CursorPrimaryLight,
            }
        );
        assert_eq!(
            editor_sections(ThemeMode::Dark, false)[1].fields[0].path,
            LeafPath::BackgroundPaperDark
        );
    }
}
