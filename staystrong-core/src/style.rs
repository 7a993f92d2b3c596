use ratatui::style::Color;

use crate::types::Theme;

/// Colours for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub dim: Color,
    pub accent: Color,
    pub done: Color,
    pub streak: Color,
    pub level: Color,
    pub quote: Color,
}

const LIGHT: Palette = Palette {
    fg: Color::Rgb(0x11, 0x18, 0x27),
    bg: Color::Rgb(0xF5, 0xF3, 0xFF),
    dim: Color::Rgb(0x6B, 0x72, 0x80),
    accent: Color::Rgb(0x25, 0x63, 0xEB),
    done: Color::Rgb(0x16, 0xA3, 0x4A),
    streak: Color::Rgb(0xEA, 0x58, 0x0C),
    level: Color::Rgb(0x93, 0x33, 0xEA),
    quote: Color::Rgb(0xDB, 0x27, 0x77),
};

const DARK: Palette = Palette {
    fg: Color::Rgb(0xF3, 0xF4, 0xF6),
    bg: Color::Rgb(0x11, 0x18, 0x27),
    dim: Color::DarkGray,
    accent: Color::Rgb(0x89, 0xB4, 0xFA),
    done: Color::Rgb(0xA6, 0xE3, 0xA1),
    streak: Color::Rgb(0xFA, 0xB3, 0x87),
    level: Color::Rgb(0xCB, 0xA6, 0xF7),
    quote: Color::Rgb(0xF5, 0xC2, 0xE7),
};

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => LIGHT,
        Theme::Dark => DARK,
    }
}
