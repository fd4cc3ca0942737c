//! The six fixed color presets users can pick from.
//! The table is ordered and never mutated; selection is stored as an index
//! into it, so the selected color is always one of these values.

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub hex: &'static str,
}

pub const PRESETS: [Preset; 6] = [
    Preset { name: "Blue", hex: "#3b82f6" },
    Preset { name: "Purple", hex: "#8b5cf6" },
    Preset { name: "Green", hex: "#10b981" },
    Preset { name: "Orange", hex: "#f97316" },
    Preset { name: "Pink", hex: "#ec4899" },
    Preset { name: "Teal", hex: "#14b8a6" },
];

/// Index of the startup preset (Blue, `#3b82f6`).
pub const DEFAULT_PRESET: usize = 0;

impl Preset {
    pub fn color(&self) -> Color {
        // Preset hex values are fixed literals; a parse failure here is a
        // table typo, surfaced by the tests below.
        parse_hex_color(self.hex).unwrap_or(Color::White)
    }
}

/// Look up a preset by index. The index comes from the color panel's key
/// handling and is always in range; anything else is a bug.
pub fn preset(index: usize) -> &'static Preset {
    debug_assert!(index < PRESETS.len(), "preset index out of range: {index}");
    &PRESETS[index.min(PRESETS.len() - 1)]
}

/// Parse a hex color string (#RRGGBB or #RGB)
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let s = s.trim().trim_start_matches('#');

    if s.len() == 6 {
        let r = u8::from_str_radix(&s[0..2], 16).ok()?;
        let g = u8::from_str_radix(&s[2..4], 16).ok()?;
        let b = u8::from_str_radix(&s[4..6], 16).ok()?;
        Some(Color::Rgb(r, g, b))
    } else if s.len() == 3 {
        let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
        let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
        let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
        Some(Color::Rgb(r, g, b))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preset_is_blue() {
        let p = preset(DEFAULT_PRESET);
        assert_eq!(p.name, "Blue");
        assert_eq!(p.hex, "#3b82f6");
    }

    #[test]
    fn test_every_preset_parses() {
        for p in &PRESETS {
            assert!(
                parse_hex_color(p.hex).is_some(),
                "preset {} has unparseable hex {}",
                p.name,
                p.hex
            );
        }
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#10b981"), Some(Color::Rgb(16, 185, 129)));
        assert_eq!(parse_hex_color("#fff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_hex_color("not-a-color"), None);
    }

    #[test]
    fn test_preset_names_are_unique() {
        for (i, a) in PRESETS.iter().enumerate() {
            for b in &PRESETS[i + 1..] {
                assert_ne!(a.name, b.name);
                assert_ne!(a.hex, b.hex);
            }
        }
    }
}
