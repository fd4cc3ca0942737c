//! The live preview stage. A pure function of (element kind, selected
//! color, label text): identical state always draws the identical buffer.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, ElementKind};

/// Fixed explanatory copy inside the card preview.
pub const CARD_BODY: &str = "This is a simple card component with your custom color \
and label. Cards are great for grouping related content.";

/// Fixed caption above the card heading.
pub const CARD_CAPTION: &str = "CARD HEADER";

pub fn draw_preview(f: &mut Frame, app: &App, area: Rect) {
    match app.element {
        ElementKind::Button => draw_button(f, app, area),
        ElementKind::Card => draw_card(f, app, area),
    }
}

fn draw_button(f: &mut Frame, app: &App, area: Rect) {
    // Wide enough for the label plus padding; an empty label still renders
    // an empty button.
    let label_width = app.label.chars().count() as u16;
    let rect = centered_fixed(label_width.saturating_add(10).max(16), 3, area);

    let button = Paragraph::new(Line::from(app.label.as_str()))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .bg(app.selected_preset().color())
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(button, rect);
}

fn draw_card(f: &mut Frame, app: &App, area: Rect) {
    let rect = centered_fixed(area.width.min(44), area.height.min(11), area);

    let lines = vec![
        Line::styled(
            CARD_CAPTION,
            Style::default().fg(Color::White).add_modifier(Modifier::DIM),
        ),
        Line::default(),
        Line::styled(
            app.label.as_str(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Line::default(),
        Line::styled(CARD_BODY, Style::default().fg(Color::White)),
    ];

    let card = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(app.selected_preset().color()).fg(Color::White))
        .block(Block::default().padding(Padding::new(2, 2, 1, 1)));

    f.render_widget(card, rect);
}

/// Center a fixed-size rect inside `area`, clamped to fit.
fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, buffer::Buffer, style::Color, Terminal};

    fn render(app: &App) -> (String, Buffer) {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|f| draw_preview(f, app, f.area()))
            .unwrap();
        let buf = terminal.backend().buffer().clone();
        (buffer_to_string(&buf), buf)
    }

    fn buffer_to_string(buf: &Buffer) -> String {
        let mut lines = Vec::new();
        for y in 0..buf.area.height {
            let mut line = String::new();
            for x in 0..buf.area.width {
                line.push_str(buf[(x, y)].symbol());
            }
            lines.push(line);
        }
        lines.join("\n")
    }

    fn has_bg(buf: &Buffer, color: Color) -> bool {
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                if buf[(x, y)].style().bg == Some(color) {
                    return true;
                }
            }
        }
        false
    }

    #[test]
    fn test_label_shown_verbatim_for_both_kinds() {
        let labels = ["x", "Click Me", "A fairly long label for the preview"];
        for kind in [ElementKind::Button, ElementKind::Card] {
            for label in labels {
                let mut app = App::new();
                app.set_element(kind);
                app.set_label(label);
                let (snapshot, _) = render(&app);
                assert!(
                    snapshot.contains(label),
                    "{kind:?} preview missing label {label:?}"
                );
            }
        }
    }

    #[test]
    fn test_empty_label_renders_without_panic() {
        for kind in [ElementKind::Button, ElementKind::Card] {
            let mut app = App::new();
            app.set_element(kind);
            app.set_label("");
            let _ = render(&app);
        }
    }

    #[test]
    fn test_default_is_blue_button() {
        let app = App::new();
        let (snapshot, buf) = render(&app);
        assert!(snapshot.contains("Click Me"));
        assert!(!snapshot.contains(CARD_CAPTION));
        // #3b82f6
        assert!(has_bg(&buf, Color::Rgb(59, 130, 246)));
    }

    #[test]
    fn test_green_card_with_custom_heading() {
        let mut app = App::new();
        app.set_element(ElementKind::Card);
        app.set_color(2); // Green
        app.set_label("Welcome");
        let (snapshot, buf) = render(&app);
        assert!(snapshot.contains(CARD_CAPTION));
        assert!(snapshot.contains("Welcome"));
        assert!(snapshot.contains("grouping related content"));
        // #10b981
        assert!(has_bg(&buf, Color::Rgb(16, 185, 129)));
    }

    #[test]
    fn test_identical_state_draws_identical_buffer() {
        let mut app = App::new();
        app.set_element(ElementKind::Card);
        app.set_label("Stable");
        let (first, _) = render(&app);
        let (second, _) = render(&app);
        assert_eq!(first, second);
    }
}
