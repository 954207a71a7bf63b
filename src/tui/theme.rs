//! Theme system for TUI colors and styles

use iocraft::prelude::Color;

const GREY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Table colors
    pub owner: Color,
    pub repo_name: Color,
    pub stars: Color,
    pub avatar: Color,

    // Status colors
    pub error: Color,
    pub loading: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub disabled: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            owner: Color::Cyan,
            repo_name: Color::White,
            stars: Color::Yellow,
            avatar: Color::Magenta,

            error: Color::Red,
            loading: Color::Yellow,

            border: GREY,
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: GREY,
            highlight: Color::Blue,
            disabled: Color::DarkGrey,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
