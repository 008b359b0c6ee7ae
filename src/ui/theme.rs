//! Colors shared by the widgets.

use ratatui::style::Color;

/// Active record and spinners.
pub const ACCENT: Color = Color::Rgb(0x5b, 0x9b, 0xd5);
pub const BORDER: Color = Color::Rgb(0x3a, 0x3f, 0x4b);
pub const TEXT: Color = Color::Rgb(0xe6, 0xe6, 0xe6);
pub const SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED: Color = Color::Rgb(0x94, 0x9b, 0xa8);

/// Data is in the cache / the first render settled.
pub const SETTLED: Color = Color::Rgb(0x4a, 0xc2, 0x6b);
/// A fetch or a press is outstanding.
pub const IN_FLIGHT: Color = Color::Rgb(0xe0, 0xb0, 0x2a);
pub const FAILED: Color = Color::Rgb(0xe5, 0x53, 0x4b);

/// Background of the highlighted sidebar row.
pub const HIGHLIGHT_BG: Color = Color::Rgb(0x24, 0x28, 0x30);
