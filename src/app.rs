use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::palette::{self, PRESETS};

/// The UI element being previewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Button,
    Card,
}

impl ElementKind {
    pub fn title(self) -> &'static str {
        match self {
            ElementKind::Button => "Button",
            ElementKind::Card => "Card",
        }
    }
}

/// Which control panel currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Element,
    Color,
    Label,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    None,
    Help,
}

/// Number of swatch columns in the color grid; vertical movement in the
/// color panel jumps by this much.
const COLOR_COLUMNS: usize = 3;

/// All selection state for the session. Discarded on exit; there is no
/// persistence and no background activity, so every value here is owned by
/// the single event-dispatch thread.
pub struct App {
    pub panel: Panel,
    pub popup: Popup,

    // The three selection values the preview is a pure function of.
    pub element: ElementKind,
    pub color_index: usize,
    pub label: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            panel: Panel::Element,
            popup: Popup::None,
            element: ElementKind::Button,
            color_index: palette::DEFAULT_PRESET,
            label: "Click Me".to_string(),
        }
    }

    /// Replace the previewed element kind. Never touches color or label.
    pub fn set_element(&mut self, kind: ElementKind) {
        self.element = kind;
    }

    /// Replace the selected preset. Callers pass indices produced by the
    /// color panel's own movement, so the value is always in range.
    pub fn set_color(&mut self, index: usize) {
        debug_assert!(index < PRESETS.len(), "color index out of range: {index}");
        self.color_index = index.min(PRESETS.len() - 1);
    }

    /// Replace the label verbatim. Empty is allowed; there is no length cap
    /// and no sanitization.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn selected_preset(&self) -> &'static palette::Preset {
        palette::preset(self.color_index)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.popup == Popup::Help {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter | KeyCode::Char('q')
            ) {
                self.popup = Popup::None;
            }
            return;
        }

        // Panel focus cycling works from anywhere, including the label
        // field (Tab is not a printable character).
        match key.code {
            KeyCode::Tab => {
                self.panel = match self.panel {
                    Panel::Element => Panel::Color,
                    Panel::Color => Panel::Label,
                    Panel::Label => Panel::Element,
                };
                return;
            }
            KeyCode::BackTab => {
                self.panel = match self.panel {
                    Panel::Element => Panel::Label,
                    Panel::Color => Panel::Element,
                    Panel::Label => Panel::Color,
                };
                return;
            }
            _ => {}
        }

        // '?' opens help from the pick-list panels; in the label field it
        // is ordinary text.
        if key.code == KeyCode::Char('?') && self.panel != Panel::Label {
            self.popup = Popup::Help;
            return;
        }

        match self.panel {
            Panel::Element => self.handle_element_key(key),
            Panel::Color => self.handle_color_key(key),
            Panel::Label => self.handle_label_key(key),
        }
    }

    /// Two fixed options; moving the highlight is selecting.
    fn handle_element_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
                self.set_element(ElementKind::Button);
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
                self.set_element(ElementKind::Card);
            }
            _ => {}
        }
    }

    /// Six swatches in a 3x2 grid; moving the highlight is selecting.
    /// Horizontal movement wraps through the whole table, vertical movement
    /// wraps between the two rows.
    fn handle_color_key(&mut self, key: KeyEvent) {
        let len = PRESETS.len();
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.set_color(self.color_index.checked_sub(1).unwrap_or(len - 1));
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.set_color((self.color_index + 1) % len);
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Down | KeyCode::Char('j') => {
                self.set_color((self.color_index + COLOR_COLUMNS) % len);
            }
            _ => {}
        }
    }

    /// Free-text editing. The key event carries the character; it is
    /// appended verbatim, no transformation.
    fn handle_label_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.label.clear();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.label.push(c);
            }
            KeyCode::Backspace => {
                self.label.pop();
            }
            _ => {}
        }
    }
}
