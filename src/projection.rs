//! Projection of the color model onto one mode.
//!
//! [`project`] flattens every dark/light pair into the single value the
//! active mode reads. [`create_theme`] wraps that palette with the fixed
//! typography into the object handed to the rendering framework.

use serde::Serialize;

use crate::{color::ColorValue, mode::ThemeMode, model::ColorModel, theme::*};

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MainColor {
    pub main: ColorValue,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BackgroundRoles {
    pub default: ColorValue,
    pub paper: ColorValue,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TextRoles {
    pub primary: ColorValue,
    pub secondary: ColorValue,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilityRoles {
    pub overlay: ColorValue,
    pub shadow: ColorValue,
    pub pdf_background: ColorValue,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CursorRoles {
    pub primary: ColorValue,
    pub accent: ColorValue,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScrollbarRoles {
    pub track: ColorValue,
    pub thumb: ColorValue,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ThemeColors {
    pub primary: MainColor,
    pub secondary: MainColor,
    pub background: BackgroundRoles,
    pub text: TextRoles,
    pub utility: UtilityRoles,
    pub cursor: CursorRoles,
    pub scrollbar: ScrollbarRoles,
}

impl ThemeColors {
    /// Every role as `(name, value)`, in declaration order.
    pub fn roles(&self) -> [(&'static str, ColorValue); 13] {
        [
            ("primary.main", self.primary.main),
            ("secondary.main", self.secondary.main),
            ("background.default", self.background.default),
            ("background.paper", self.background.paper),
            ("text.primary", self.text.primary),
            ("text.secondary", self.text.secondary),
            ("utility.overlay", self.utility.overlay),
            ("utility.shadow", self.utility.shadow),
            ("utility.pdfBackground", self.utility.pdf_background),
            ("cursor.primary", self.cursor.primary),
            ("cursor.accent", self.cursor.accent),
            ("scrollbar.track", self.scrollbar.track),
            ("scrollbar.thumb", self.scrollbar.thumb),
        ]
    }
}

pub fn project(mode: ThemeMode, colors: &ColorModel) -> ThemeColors {
    ThemeColors {
        primary: MainColor {
            main: colors.primary.for_mode(mode),
        },
        secondary: MainColor {
            main: colors.secondary.for_mode(mode),
        },
        background: BackgroundRoles {
            default: *mode.pick(&colors.background.dark, &colors.background.light),
            paper: colors.background.paper.for_mode(mode),
        },
        text: TextRoles {
            primary: colors.text.tertiary.for_mode(mode),
            secondary: colors.text.quaternary.for_mode(mode),
        },
        utility: UtilityRoles {
            overlay: colors.utility.overlay.for_mode(mode),
            shadow: colors.utility.shadow.for_mode(mode),
            pdf_background: colors.utility.pdf_background,
        },
        cursor: CursorRoles {
            primary: colors.cursor.primary.for_mode(mode),
            accent: colors.cursor.accent.for_mode(mode),
        },
        scrollbar: ScrollbarRoles {
            track: colors.scrollbar.track.for_mode(mode),
            thumb: colors.scrollbar.thumb.for_mode(mode),
        },
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingStyle {
    pub font_size: &'static str,
    pub font_weight: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: &'static str,
    pub h1: HeadingStyle,
    pub h2: HeadingStyle,
    pub h3: HeadingStyle,
}

pub const TYPOGRAPHY: Typography = Typography {
    font_family: FONT_FAMILY,
    h1: HeadingStyle {
        font_size: H1_SIZE,
        font_weight: HEADING_WEIGHT,
    },
    h2: HeadingStyle {
        font_size: H2_SIZE,
        font_weight: HEADING_WEIGHT,
    },
    h3: HeadingStyle {
        font_size: H3_SIZE,
        font_weight: HEADING_WEIGHT,
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ThemeObject {
    pub mode: ThemeMode,
    pub palette: ThemeColors,
    pub typography: Typography,
}

pub fn create_theme(mode: ThemeMode, colors: &ColorModel) -> ThemeObject {
    ThemeObject {
        mode,
        palette: project(mode, colors),
        typography: TYPOGRAPHY,
    }
}

/// Named color lookup used by plain stylesheet rules.
///
/// `secondary` resolves to the primary pair, and unknown names fall back to
/// the dark-mode primary.
pub fn theme_color(key: &str, mode: ThemeMode, colors: &ColorModel) -> ColorValue {
    match key {
        "background" => *mode.pick(&colors.background.dark, &colors.background.light),
        "text" => colors.text.tertiary.for_mode(mode),
        "text-secondary" => colors.text.quaternary.for_mode(mode),
        "primary" | "secondary" => colors.primary.for_mode(mode),
        _ => colors.primary.main,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionBackground {
    Paper,
    Default,
}

impl SectionBackground {
    pub fn resolve(self, theme: &ThemeColors) -> ColorValue {
        match self {
            Self::Paper => theme.background.paper,
            Self::Default => theme.background.default,
        }
    }
}

/// Page sections alternate backgrounds, starting with paper.
pub fn section_background(index: usize) -> SectionBackground {
    if index % 2 == 0 {
        SectionBackground::Paper
    } else {
        SectionBackground::Default
    }
}
