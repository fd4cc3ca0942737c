//! Static design advice shown alongside the preview.

use crate::app::ElementKind;

/// Contextual tip for the currently previewed element. Depends on the
/// element kind and nothing else.
pub fn tip_for(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::Button => {
            "Keep button labels short and action-oriented. \
             Use contrasting colors for better visibility."
        }
        ElementKind::Card => {
            "Cards should have clear visual hierarchy. \
             Use padding and spacing to improve readability."
        }
    }
}

/// The three fixed principle blurbs shown under the main panels.
pub const PRINCIPLES: [(&str, &str); 3] = [
    (
        "Simplicity",
        "Keep your designs clean and uncluttered. Focus on the essential elements only.",
    ),
    (
        "Clarity",
        "Make sure labels are readable and colors have good contrast for accessibility.",
    ),
    (
        "Consistency",
        "Use the same styles and colors throughout your design for a cohesive look.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tips_are_distinct_per_kind() {
        let button_tip = tip_for(ElementKind::Button);
        let card_tip = tip_for(ElementKind::Card);
        assert!(!button_tip.is_empty());
        assert!(!card_tip.is_empty());
        assert_ne!(button_tip, card_tip);
    }

    #[test]
    fn test_tip_content() {
        assert!(tip_for(ElementKind::Button).contains("short and action-oriented"));
        assert!(tip_for(ElementKind::Card).contains("visual hierarchy"));
    }
}
