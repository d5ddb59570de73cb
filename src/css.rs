//! Document-level style: root custom properties and the body cursor.

use std::{collections::BTreeMap, fmt::Write};

use crate::{cursor::CursorDirective, mode::ThemeMode, projection::project, store::ColorSource};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CssVariable {
    Background,
    Text,
    TextSecondary,
    ScrollbarTrack,
    ScrollbarThumb,
    CursorPrimary,
    CursorAccent,
}

impl CssVariable {
    pub const ALL: [CssVariable; 7] = [
        Self::Background,
        Self::Text,
        Self::TextSecondary,
        Self::ScrollbarTrack,
        Self::ScrollbarThumb,
        Self::CursorPrimary,
        Self::CursorAccent,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Background => "--color-background",
            Self::Text => "--color-text",
            Self::TextSecondary => "--color-text-secondary",
            Self::ScrollbarTrack => "--color-scrollbar-track",
            Self::ScrollbarThumb => "--color-scrollbar-thumb",
            Self::CursorPrimary => "--color-cursor-primary",
            Self::CursorAccent => "--color-cursor-accent",
        }
    }
}

/// Global document style the theme writes into.
pub trait StyleTarget {
    fn set_property(&mut self, name: &str, value: &str);
    fn set_cursor(&mut self, cursor: &CursorDirective);
}

pub fn sync_css_variables(mode: ThemeMode, source: &dyn ColorSource, target: &mut dyn StyleTarget) {
    let theme = project(mode, source.current());
    let values = [
        (CssVariable::Background, theme.background.default),
        (CssVariable::Text, theme.text.primary),
        (CssVariable::TextSecondary, theme.text.secondary),
        (CssVariable::ScrollbarTrack, theme.scrollbar.track),
        (CssVariable::ScrollbarThumb, theme.scrollbar.thumb),
        (CssVariable::CursorPrimary, theme.cursor.primary),
        (CssVariable::CursorAccent, theme.cursor.accent),
    ];
    for (variable, value) in values {
        target.set_property(variable.name(), &value.to_string());
    }
    log::debug!("[css] synced {} variables for {mode} mode", values.len());
}

/// In-memory document style, rendered as CSS text by the host binary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleSheet {
    properties: BTreeMap<String, String>,
    cursor: Option<String>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn variable(&self, variable: CssVariable) -> Option<&str> {
        self.property(variable.name())
    }

    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in &self.properties {
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push_str("}\n");
        if let Some(cursor) = &self.cursor {
            let _ = write!(css, "body {{\n  cursor: {cursor};\n}}\n");
        }
        css
    }
}

impl StyleTarget for StyleSheet {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn set_cursor(&mut self, cursor: &CursorDirective) {
        self.cursor = Some(cursor.to_string());
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{ColorModel, DEFAULT_COLORS};

    struct Fixed(ColorModel);

    impl ColorSource for Fixed {
        fn current(&self) -> &ColorModel {
            &self.0
        }
    }

    #[test]
    fn writes_all_seven_variables_for_dark_mode() {
        let mut sheet = StyleSheet::new();
        sync_css_variables(ThemeMode::Dark, &Fixed(DEFAULT_COLORS), &mut sheet);

        assert_eq!(sheet.variable(CssVariable::Background), Some("#0a192f"));
        assert_eq!(sheet.variable(CssVariable::Text), Some("#8892b0"));
        assert_eq!(sheet.variable(CssVariable::TextSecondary), Some("#8892b0"));
        assert_eq!(sheet.variable(CssVariable::ScrollbarTrack), Some("#0a192f"));
        assert_eq!(sheet.variable(CssVariable::ScrollbarThumb), Some("#00bcd4"));
        assert_eq!(sheet.variable(CssVariable::CursorPrimary), Some("#005577"));
        assert_eq!(sheet.variable(CssVariable::CursorAccent), Some("#00bcd4"));
    }

    #[test]
    fn light_mode_writes_light_branches() {
        let mut sheet = StyleSheet::new();
        sync_css_variables(ThemeMode::Light, &Fixed(DEFAULT_COLORS), &mut sheet);
        assert_eq!(sheet.variable(CssVariable::Background), Some("#f5f7fa"));
        assert_eq!(sheet.variable(CssVariable::ScrollbarThumb), Some("#005577"));
        assert_eq!(sheet.variable(CssVariable::CursorAccent), Some("#00bcd4"));
    }

    #[test]
    fn sync_is_idempotent() {
        let source = Fixed(DEFAULT_COLORS);
        let mut once = StyleSheet::new();
        sync_css_variables(ThemeMode::Light, &source, &mut once);
        let mut twice = once.clone();
        sync_css_variables(ThemeMode::Light, &source, &mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn renders_root_block_and_cursor() {
        let mut sheet = StyleSheet::new();
        sheet.set_property("--color-text", "#ffffff");
        sheet.set_cursor(&CursorDirective::Default);
        assert_eq!(
            sheet.to_css(),
            ":root {\n  --color-text: #ffffff;\n}\nbody {\n  cursor: default;\n}\n"
        );
    }
}
