// Default palette: dark navy surfaces with a cyan accent
//
// Dark mode reads the `main`/`dark` branch of each pair, light mode the
// `light` branch. Values are 0xRRGGBB like the rest of the crate's literals.

// Brand
pub const PRIMARY_MAIN: u32 = 0x00bcd4; // cyan, links and highlights on dark
pub const PRIMARY_LIGHT: u32 = 0x005577; // deep teal, same role on light
pub const SECONDARY_MAIN: u32 = 0x8892b0; // slate, navigation text
pub const SECONDARY_LIGHT: u32 = 0x222b3a;

// Backgrounds: page sections alternate between the base and the paper tier
pub const BACKGROUND_DARK: u32 = 0x0a192f;
pub const BACKGROUND_LIGHT: u32 = 0xf5f7fa;
pub const PAPER_DARK: u32 = 0x112240;
pub const PAPER_LIGHT: u32 = 0xffffff;

// Text
pub const TEXT_TERTIARY_DARK: u32 = 0x8892b0;
pub const TEXT_TERTIARY_LIGHT: u32 = 0x8892b0;
pub const TEXT_QUATERNARY_DARK: u32 = 0x8892b0;
pub const TEXT_QUATERNARY_LIGHT: u32 = 0x8892b0;

// Utility
pub const OVERLAY_DARK: u32 = 0xffffff; // experience image overlay
pub const OVERLAY_LIGHT: u32 = 0xffffff;
pub const SHADOW_DARK: u32 = 0x000000; // card hover shadow
pub const SHADOW_LIGHT: u32 = 0x000000;
pub const PDF_BACKGROUND: u32 = 0x222222; // resume viewer, both modes

// Scrollbar
pub const SCROLLBAR_TRACK_DARK: u32 = 0x0a192f;
pub const SCROLLBAR_TRACK_LIGHT: u32 = 0xf5f7fa;
pub const SCROLLBAR_THUMB_DARK: u32 = 0x00bcd4;
pub const SCROLLBAR_THUMB_LIGHT: u32 = 0x005577;

// Cursor
pub const CURSOR_PRIMARY_DARK: u32 = 0x005577;
pub const CURSOR_PRIMARY_LIGHT: u32 = 0x005577;
pub const CURSOR_ACCENT_DARK: u32 = 0x00bcd4;
pub const CURSOR_ACCENT_LIGHT: u32 = 0x00bcd4;

// Typography
pub const FONT_FAMILY: &str = "\"Roboto Mono\", monospace";
pub const HEADING_WEIGHT: u16 = 600;
pub const H1_SIZE: &str = "4rem";
pub const H2_SIZE: &str = "2.5rem";
pub const H3_SIZE: &str = "1.75rem";

// Cursor glyph
pub const CURSOR_SIZE: u32 = 32;
pub const CURSOR_HOTSPOT: (u32, u32) = (8, 6);
pub const CURSOR_ROTATION: i32 = -120;

// Editor
pub const EDIT_DEBOUNCE_MS: u64 = 150;
