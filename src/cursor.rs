use std::fmt;

use crate::{
    color::ColorValue, device::DeviceProfile, mode::ThemeMode, model::ColorModel,
    projection::project, theme::*,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CursorDirective {
    Default,
    Image {
        data_uri: String,
        hotspot: (u32, u32),
    },
}

impl CursorDirective {
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Image { .. })
    }
}

impl fmt::Display for CursorDirective {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => formatter.write_str("default"),
            Self::Image { data_uri, hotspot } => {
                write!(formatter, "url('{data_uri}') {} {}, auto", hotspot.0, hotspot.1)
            }
        }
    }
}

pub fn build_cursor_glyph(
    mode: ThemeMode,
    colors: &ColorModel,
    enabled: bool,
    device: &DeviceProfile,
) -> CursorDirective {
    if !enabled || device.is_mobile() {
        return CursorDirective::Default;
    }

    let theme = project(mode, colors);
    CursorDirective::Image {
        data_uri: format!(
            "data:image/svg+xml;utf8,{}",
            cursor_svg(theme.cursor.primary, theme.cursor.accent)
        ),
        hotspot: CURSOR_HOTSPOT,
    }
}

/// Arrow glyph: a filled triangle, a white accent ring and a short tail line.
///
/// Colors are escaped with `urlencoding`, which also escapes `(`, `)` and `'`,
/// so an rgba color is written `rgba%28...%29` rather than the
/// `encodeURIComponent` form `rgba(...)`. Browsers decode both inside `url('...')`.
fn cursor_svg(body: ColorValue, accent: ColorValue) -> String {
    let body = urlencoding::encode(&body.to_string()).into_owned();
    let accent = urlencoding::encode(&accent.to_string()).into_owned();
    let size = CURSOR_SIZE;
    let center = size / 2;

    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#,
            r#"<g transform="rotate({rotation} {center} {center})">"#,
            r#"<polygon points="8,8 24,16 8,24" fill="{body}" stroke="{accent}" stroke-width="2"/>"#,
            r#"<circle cx="26" cy="16" r="3" fill="white" stroke="{accent}" stroke-width="2"/>"#,
            r#"<line x1="4" y1="16" x2="8" y2="16" stroke="{accent}" stroke-width="2"/>"#,
            "</g></svg>",
        ),
        size = size,
        center = center,
        rotation = CURSOR_ROTATION,
        body = body,
        accent = accent,
    )
}
