//! Light and dark color themes.
//!
//! The theme is an explicit value owned by the front-end and resolved to a
//! [`Palette`] that is passed into every render call. The engine and session
//! never see it.

use ratatui::style::Color;

/// UI color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Theme {
    /// Dark background, bright marks.
    Dark,
    /// Light background, saturated marks.
    Light,
}

impl Theme {
    /// Switches light to dark and back.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Resolves the color palette for this theme.
    ///
    /// X is blue, O is green, draws are magenta, matching the scoreboard
    /// badges.
    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                background: Color::Rgb(15, 23, 42),
                text: Color::Rgb(248, 250, 252),
                dim: Color::DarkGray,
                border: Color::Rgb(71, 85, 105),
                x_mark: Color::Rgb(56, 189, 248),
                o_mark: Color::Rgb(52, 211, 153),
                draw: Color::Rgb(192, 132, 252),
            },
            Theme::Light => Palette {
                background: Color::Rgb(248, 250, 252),
                text: Color::Rgb(45, 55, 72),
                dim: Color::Gray,
                border: Color::Rgb(203, 213, 225),
                x_mark: Color::Rgb(2, 132, 199),
                o_mark: Color::Rgb(5, 150, 105),
                draw: Color::Rgb(147, 51, 234),
            },
        }
    }

    /// Short label for the title bar.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// Resolved colors for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Screen background.
    pub background: Color,
    /// Primary text.
    pub text: Color,
    /// De-emphasized text (placeholders, help line).
    pub dim: Color,
    /// Grid and panel borders.
    pub border: Color,
    /// Color of the X mark.
    pub x_mark: Color,
    /// Color of the O mark.
    pub o_mark: Color,
    /// Color used for draw counts and draw status.
    pub draw: Color,
}

#[cfg(test)]
mod tests {
    use super::Theme;

    #[test]
    fn toggle_is_an_involution() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    }
}
