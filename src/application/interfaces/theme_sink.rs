use crate::domain::Theme;

/// Receives theme changes and applies them to whatever surface renders the view.
pub trait ThemeSink {
    fn apply_theme(&mut self, theme: Theme);
}
