use ratatui::style::{Color, Modifier, Style};

use crate::application::ThemeSink;
use crate::domain::Theme;

/// Colours for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub highlight: Color,
    pub border: Color,
    pub error: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: Color::Rgb(17, 24, 39),
                foreground: Color::Rgb(243, 244, 246),
                muted: Color::Rgb(156, 163, 175),
                accent: Color::Rgb(34, 211, 238),
                highlight: Color::Rgb(168, 85, 247),
                border: Color::Rgb(55, 65, 81),
                error: Color::Rgb(248, 113, 113),
            },
            Theme::Light => Self {
                background: Color::Rgb(249, 250, 251),
                foreground: Color::Rgb(31, 41, 55),
                muted: Color::Rgb(107, 114, 128),
                accent: Color::Rgb(8, 145, 178),
                highlight: Color::Rgb(147, 51, 234),
                border: Color::Rgb(209, 213, 219),
                error: Color::Rgb(185, 28, 28),
            },
        }
    }

    /// Style of the root block every frame is painted on.
    pub fn root(&self) -> Style {
        Style::default().bg(self.background).fg(self.foreground)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error)
    }
}

/// The terminal screen as a [`ThemeSink`]: applying a theme swaps the palette
/// the next frame is drawn with.
#[derive(Debug, Clone)]
pub struct TerminalSurface {
    theme: Theme,
    palette: Palette,
}

impl TerminalSurface {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            palette: Palette::for_theme(theme),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

impl ThemeSink for TerminalSurface {
    fn apply_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.palette = Palette::for_theme(theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_theme_swaps_palette() {
        let mut surface = TerminalSurface::new(Theme::Dark);
        assert_eq!(surface.palette(), &Palette::for_theme(Theme::Dark));

        surface.apply_theme(Theme::Light);

        assert_eq!(surface.theme(), Theme::Light);
        assert_eq!(surface.palette().background, Color::Rgb(249, 250, 251));
    }

    #[test]
    fn test_themes_differ() {
        assert_ne!(Palette::for_theme(Theme::Dark), Palette::for_theme(Theme::Light));
    }
}
