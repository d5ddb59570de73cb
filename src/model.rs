//! The color model: a fixed schema of semantic roles with dark/light leaves.
//!
//! Leaves are addressed through [`LeafPath`], a closed enumeration of every
//! schema leaf, so there is no string-keyed mutation anywhere in the crate.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{color::ColorValue, error::ThemeError, mode::ThemeMode, theme::*};

/// `main` is used in dark mode, `light` in light mode.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MainLight {
    pub main: ColorValue,
    pub light: ColorValue,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DarkLight {
    pub dark: ColorValue,
    pub light: ColorValue,
}

impl DarkLight {
    pub fn for_mode(&self, mode: ThemeMode) -> ColorValue {
        *mode.pick(&self.dark, &self.light)
    }
}

impl MainLight {
    pub fn for_mode(&self, mode: ThemeMode) -> ColorValue {
        *mode.pick(&self.main, &self.light)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackgroundColors {
    pub dark: ColorValue,
    pub light: ColorValue,
    pub paper: DarkLight,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextColors {
    pub tertiary: DarkLight,
    pub quaternary: DarkLight,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilityColors {
    pub overlay: DarkLight,
    pub shadow: DarkLight,
    pub pdf_background: ColorValue,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScrollbarColors {
    pub track: DarkLight,
    pub thumb: DarkLight,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CursorColors {
    pub primary: DarkLight,
    pub accent: DarkLight,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorModel {
    pub primary: MainLight,
    pub secondary: MainLight,
    pub background: BackgroundColors,
    pub text: TextColors,
    pub utility: UtilityColors,
    pub scrollbar: ScrollbarColors,
    pub cursor: CursorColors,
}

const fn pair(dark: u32, light: u32) -> DarkLight {
    DarkLight {
        dark: ColorValue::from_u32(dark),
        light: ColorValue::from_u32(light),
    }
}

pub const DEFAULT_COLORS: ColorModel = ColorModel {
    primary: MainLight {
        main: ColorValue::from_u32(PRIMARY_MAIN),
        light: ColorValue::from_u32(PRIMARY_LIGHT),
    },
    secondary: MainLight {
        main: ColorValue::from_u32(SECONDARY_MAIN),
        light: ColorValue::from_u32(SECONDARY_LIGHT),
    },
    background: BackgroundColors {
        dark: ColorValue::from_u32(BACKGROUND_DARK),
        light: ColorValue::from_u32(BACKGROUND_LIGHT),
        paper: pair(PAPER_DARK, PAPER_LIGHT),
    },
    text: TextColors {
        tertiary: pair(TEXT_TERTIARY_DARK, TEXT_TERTIARY_LIGHT),
        quaternary: pair(TEXT_QUATERNARY_DARK, TEXT_QUATERNARY_LIGHT),
    },
    utility: UtilityColors {
        overlay: pair(OVERLAY_DARK, OVERLAY_LIGHT),
        shadow: pair(SHADOW_DARK, SHADOW_LIGHT),
        pdf_background: ColorValue::from_u32(PDF_BACKGROUND),
    },
    scrollbar: ScrollbarColors {
        track: pair(SCROLLBAR_TRACK_DARK, SCROLLBAR_TRACK_LIGHT),
        thumb: pair(SCROLLBAR_THUMB_DARK, SCROLLBAR_THUMB_LIGHT),
    },
    cursor: CursorColors {
        primary: pair(CURSOR_PRIMARY_DARK, CURSOR_PRIMARY_LIGHT),
        accent: pair(CURSOR_ACCENT_DARK, CURSOR_ACCENT_LIGHT),
    },
};

impl Default for ColorModel {
    fn default() -> Self {
        DEFAULT_COLORS
    }
}

impl ColorModel {
    pub fn get(&self, path: LeafPath) -> ColorValue {
        use LeafPath::*;
        match path {
            PrimaryMain => self.primary.main,
            PrimaryLight => self.primary.light,
            SecondaryMain => self.secondary.main,
            SecondaryLight => self.secondary.light,
            BackgroundDark => self.background.dark,
            BackgroundLight => self.background.light,
            BackgroundPaperDark => self.background.paper.dark,
            BackgroundPaperLight => self.background.paper.light,
            TextTertiaryDark => self.text.tertiary.dark,
            TextTertiaryLight => self.text.tertiary.light,
            TextQuaternaryDark => self.text.quaternary.dark,
            TextQuaternaryLight => self.text.quaternary.light,
            UtilityOverlayDark => self.utility.overlay.dark,
            UtilityOverlayLight => self.utility.overlay.light,
            UtilityShadowDark => self.utility.shadow.dark,
            UtilityShadowLight => self.utility.shadow.light,
            UtilityPdfBackground => self.utility.pdf_background,
            ScrollbarTrackDark => self.scrollbar.track.dark,
            ScrollbarTrackLight => self.scrollbar.track.light,
            ScrollbarThumbDark => self.scrollbar.thumb.dark,
            ScrollbarThumbLight => self.scrollbar.thumb.light,
            CursorPrimaryDark => self.cursor.primary.dark,
            CursorPrimaryLight => self.cursor.primary.light,
            CursorAccentDark => self.cursor.accent.dark,
            CursorAccentLight => self.cursor.accent.light,
        }
    }

    fn slot(&mut self, path: LeafPath) -> &mut ColorValue {
        use LeafPath::*;
        match path {
            PrimaryMain => &mut self.primary.main,
            PrimaryLight => &mut self.primary.light,
            SecondaryMain => &mut self.secondary.main,
            SecondaryLight => &mut self.secondary.light,
            BackgroundDark => &mut self.background.dark,
            BackgroundLight => &mut self.background.light,
            BackgroundPaperDark => &mut self.background.paper.dark,
            BackgroundPaperLight => &mut self.background.paper.light,
            TextTertiaryDark => &mut self.text.tertiary.dark,
            TextTertiaryLight => &mut self.text.tertiary.light,
            TextQuaternaryDark => &mut self.text.quaternary.dark,
            TextQuaternaryLight => &mut self.text.quaternary.light,
            UtilityOverlayDark => &mut self.utility.overlay.dark,
            UtilityOverlayLight => &mut self.utility.overlay.light,
            UtilityShadowDark => &mut self.utility.shadow.dark,
            UtilityShadowLight => &mut self.utility.shadow.light,
            UtilityPdfBackground => &mut self.utility.pdf_background,
            ScrollbarTrackDark => &mut self.scrollbar.track.dark,
            ScrollbarTrackLight => &mut self.scrollbar.track.light,
            ScrollbarThumbDark => &mut self.scrollbar.thumb.dark,
            ScrollbarThumbLight => &mut self.scrollbar.thumb.light,
            CursorPrimaryDark => &mut self.cursor.primary.dark,
            CursorPrimaryLight => &mut self.cursor.primary.light,
            CursorAccentDark => &mut self.cursor.accent.dark,
            CursorAccentLight => &mut self.cursor.accent.light,
        }
    }

    pub fn set(&mut self, path: LeafPath, value: ColorValue) {
        *self.slot(path) = value;
    }

    pub fn leaves(&self) -> impl Iterator<Item = (LeafPath, ColorValue)> + '_ {
        LeafPath::ALL
            .into_iter()
            .map(move |path| (path, self.get(path)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LeafPath {
    PrimaryMain,
    PrimaryLight,
    SecondaryMain,
    SecondaryLight,
    BackgroundDark,
    BackgroundLight,
    BackgroundPaperDark,
    BackgroundPaperLight,
    TextTertiaryDark,
    TextTertiaryLight,
    TextQuaternaryDark,
    TextQuaternaryLight,
    UtilityOverlayDark,
    UtilityOverlayLight,
    UtilityShadowDark,
    UtilityShadowLight,
    UtilityPdfBackground,
    ScrollbarTrackDark,
    ScrollbarTrackLight,
    ScrollbarThumbDark,
    ScrollbarThumbLight,
    CursorPrimaryDark,
    CursorPrimaryLight,
    CursorAccentDark,
    CursorAccentLight,
}

impl LeafPath {
    pub const ALL: [LeafPath; 25] = [
        Self::PrimaryMain,
        Self::PrimaryLight,
        Self::SecondaryMain,
        Self::SecondaryLight,
        Self::BackgroundDark,
        Self::BackgroundLight,
        Self::BackgroundPaperDark,
        Self::BackgroundPaperLight,
        Self::TextTertiaryDark,
        Self::TextTertiaryLight,
        Self::TextQuaternaryDark,
        Self::TextQuaternaryLight,
        Self::UtilityOverlayDark,
        Self::UtilityOverlayLight,
        Self::UtilityShadowDark,
        Self::UtilityShadowLight,
        Self::UtilityPdfBackground,
        Self::ScrollbarTrackDark,
        Self::ScrollbarTrackLight,
        Self::ScrollbarThumbDark,
        Self::ScrollbarThumbLight,
        Self::CursorPrimaryDark,
        Self::CursorPrimaryLight,
        Self::CursorAccentDark,
        Self::CursorAccentLight,
    ];

    /// `(category, subcategory, property)` of the leaf in the serialized schema.
    pub fn parts(self) -> (&'static str, Option<&'static str>, &'static str) {
        use LeafPath::*;
        match self {
            PrimaryMain => ("primary", None, "main"),
            PrimaryLight => ("primary", None, "light"),
            SecondaryMain => ("secondary", None, "main"),
            SecondaryLight => ("secondary", None, "light"),
            BackgroundDark => ("background", None, "dark"),
            BackgroundLight => ("background", None, "light"),
            BackgroundPaperDark => ("background", Some("paper"), "dark"),
            BackgroundPaperLight => ("background", Some("paper"), "light"),
            TextTertiaryDark => ("text", Some("tertiary"), "dark"),
            TextTertiaryLight => ("text", Some("tertiary"), "light"),
            TextQuaternaryDark => ("text", Some("quaternary"), "dark"),
            TextQuaternaryLight => ("text", Some("quaternary"), "light"),
            UtilityOverlayDark => ("utility", Some("overlay"), "dark"),
            UtilityOverlayLight => ("utility", Some("overlay"), "light"),
            UtilityShadowDark => ("utility", Some("shadow"), "dark"),
            UtilityShadowLight => ("utility", Some("shadow"), "light"),
            UtilityPdfBackground => ("utility", None, "pdfBackground"),
            ScrollbarTrackDark => ("scrollbar", Some("track"), "dark"),
            ScrollbarTrackLight => ("scrollbar", Some("track"), "light"),
            ScrollbarThumbDark => ("scrollbar", Some("thumb"), "dark"),
            ScrollbarThumbLight => ("scrollbar", Some("thumb"), "light"),
            CursorPrimaryDark => ("cursor", Some("primary"), "dark"),
            CursorPrimaryLight => ("cursor", Some("primary"), "light"),
            CursorAccentDark => ("cursor", Some("accent"), "dark"),
            CursorAccentLight => ("cursor", Some("accent"), "light"),
        }
    }

    /// `category-subcategory-property`, missing parts written as `main`.
    pub fn field_key(self) -> String {
        let (category, subcategory, property) = self.parts();
        format!("{category}-{}-{property}", subcategory.unwrap_or("main"))
    }

    /// Resolves a three-part address.
    ///
    /// A missing part means the path ends one level higher, so
    /// `("primary", None, Some("main"))` and `("primary", Some("main"), None)`
    /// name the same leaf. Addresses of whole groups resolve to `None`.
    pub fn from_parts(
        category: &str,
        subcategory: Option<&str>,
        property: Option<&str>,
    ) -> Option<Self> {
        let (subcategory, property) = match (subcategory, property) {
            (Some(subcategory), Some(property)) => (Some(subcategory), property),
            (None, Some(property)) | (Some(property), None) => (None, property),
            (None, None) => return None,
        };
        Self::ALL
            .into_iter()
            .find(|path| path.parts() == (category, subcategory, property))
    }

    /// Mode whose projection reads this leaf; `None` for mode-independent leaves.
    pub fn mode(self) -> Option<ThemeMode> {
        match self.parts().2 {
            "main" | "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }
}

impl fmt::Display for LeafPath {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.pad(&self.field_key())
    }
}

impl FromStr for LeafPath {
    type Err = ThemeError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|path| path.field_key() == key)
            .ok_or_else(|| ThemeError::UnknownPath(key.to_string()))
    }
}
