//! Fixed chrome colors for panel borders, captions, and hints.
//! These style the frame around the playground; the previewed element's own
//! color always comes from the selected palette preset, never from here.

use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Color,      // Focused panel borders, key hints
    pub text: Color,        // Primary text
    pub text_dim: Color,    // Captions, placeholder text, footer
    pub inactive: Color,    // Unfocused borders
    pub bg_selected: Color, // Highlight behind the selected option
    pub header: Color,      // Title and section headings
}

impl Default for Theme {
    fn default() -> Self {
        // Slate-and-blue palette echoing the playground's subject matter
        Self {
            accent: Color::Rgb(59, 130, 246),
            text: Color::Rgb(226, 232, 240),
            text_dim: Color::Rgb(148, 163, 184),
            inactive: Color::Rgb(71, 85, 105),
            bg_selected: Color::Rgb(30, 41, 59),
            header: Color::Rgb(241, 245, 249),
        }
    }
}
