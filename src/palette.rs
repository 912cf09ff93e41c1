use macroquad::prelude::Color;

/// The fixed paint palette. Entries are heavily transparent so overlapping
/// trace marks build up density the way layered ink does.
pub struct Palette;

impl Palette {
    pub const LEN: usize = 11;

    /// Paint alpha shared by every palette entry.
    const ALPHA: u8 = 20;

    const ENTRIES: [(u8, u8, u8); Self::LEN] = [
        (33, 60, 132),
        (48, 88, 188),
        (195, 175, 227),
        (108, 86, 169),
        (230, 102, 175),
        (200, 85, 96),
        (236, 102, 93),
        (235, 73, 63),
        (208, 128, 91),
        (234, 180, 159),
        (237, 211, 83),
    ];

    /// Bounds-checked lookup: out-of-range indices clamp to the last entry.
    pub fn color(index: usize) -> Color {
        let (r, g, b) = Self::ENTRIES[index.min(Self::LEN - 1)];
        Color::from_rgba(r, g, b, Self::ALPHA)
    }
}

/// Foreground/background/guide colors plus the active palette slot.
pub struct ColorState {
    pub foreground: Color,
    pub background: Color,
    pub guide: Color,
    pub palette_index: usize,
}

impl ColorState {
    pub fn new() -> Self {
        let palette_index = Palette::LEN - 1;
        Self {
            foreground: Palette::color(palette_index),
            background: Color::from_rgba(255, 255, 255, 255),
            guide: Color::from_rgba(200, 200, 200, 255),
            palette_index,
        }
    }

    /// Step to the previous palette entry. Clamped: at index 0 this is a
    /// no-op and returns false so the caller can skip its side effects.
    pub fn cycle_prev(&mut self) -> bool {
        if self.palette_index == 0 {
            return false;
        }
        self.palette_index -= 1;
        self.foreground = Palette::color(self.palette_index);
        true
    }

    /// Set the foreground paint color from raw channel values, clamping each
    /// channel into 0..=255.
    pub fn set_foreground_rgb(&mut self, r: i64, g: i64, b: i64) {
        self.foreground = Color::from_rgba(
            r.clamp(0, 255) as u8,
            g.clamp(0, 255) as u8,
            b.clamp(0, 255) as u8,
            255,
        );
    }
}

impl Default for ColorState {
    fn default() -> Self {
        Self::new()
    }
}
