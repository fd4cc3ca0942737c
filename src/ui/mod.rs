mod preview;

use std::sync::OnceLock;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, ElementKind, Panel, Popup};
use crate::palette::PRESETS;
use crate::theme::Theme;
use crate::tips;

static THEME: OnceLock<Theme> = OnceLock::new();

fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}

// Helper functions to get theme colors
fn accent() -> Color { theme().accent }
fn text() -> Color { theme().text }
fn text_dim() -> Color { theme().text_dim }
fn inactive() -> Color { theme().inactive }
fn bg_selected() -> Color { theme().bg_selected }
fn header() -> Color { theme().header }

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Title + explainer
            Constraint::Min(14),   // Controls + preview
            Constraint::Length(4), // Key principles strip
            Constraint::Length(1), // Footer
        ])
        .split(area);

    draw_header(f, chunks[0]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(42), Constraint::Percentage(58)])
        .split(chunks[1]);

    draw_controls(f, app, main[0]);
    draw_preview_panel(f, app, main[1]);
    draw_principles(f, chunks[2]);
    draw_footer(f, app, chunks[3]);

    if app.popup == Popup::Help {
        draw_help_popup(f);
    }
}

fn draw_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Simple Element Design",
            Style::default().fg(header()).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Learn basic UI element design principles by experimenting with buttons \
             and cards. Choose an element, select a color, and customize the label.",
            Style::default().fg(text_dim()),
        )),
    ];

    let title = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(title, area);
}

fn draw_controls(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Element picker
            Constraint::Length(4), // Color swatches
            Constraint::Length(3), // Label input
            Constraint::Min(0),
        ])
        .split(area);

    draw_element_picker(f, app, chunks[0]);
    draw_color_picker(f, app, chunks[1]);
    draw_label_input(f, app, chunks[2]);
}

fn panel_block(title: &str, focused: bool) -> Block<'_> {
    let border_color = if focused { accent() } else { inactive() };
    let title_style = if focused {
        Style::default().fg(accent()).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(text_dim())
    };

    Block::default()
        .title(Span::styled(title, title_style))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
}

fn draw_element_picker(f: &mut Frame, app: &App, area: Rect) {
    let block = panel_block(" 1. Choose UI Element ", app.panel == Panel::Element);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(inner);

    for (i, kind) in [ElementKind::Button, ElementKind::Card].into_iter().enumerate() {
        let selected = app.element == kind;
        let glyph = match kind {
            ElementKind::Button => "■",
            ElementKind::Card => "●",
        };

        let style = if selected {
            Style::default()
                .bg(bg_selected())
                .fg(accent())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(text_dim())
        };

        let cell = Paragraph::new(Line::from(format!("{} {}", glyph, kind.title())))
            .alignment(Alignment::Center)
            .style(style);
        f.render_widget(cell, cells[i]);
    }
}

fn draw_color_picker(f: &mut Frame, app: &App, area: Rect) {
    let block = panel_block(" 2. Select a Color ", app.panel == Panel::Color);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    for (row_idx, row) in rows.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(*row);

        for col in 0..3 {
            let i = row_idx * 3 + col;
            let preset = &PRESETS[i];
            let selected = i == app.color_index;

            let marker = if selected { "▸" } else { " " };
            let name_style = if selected {
                Style::default().fg(accent()).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(text())
            };

            let line = Line::from(vec![
                Span::styled(marker, Style::default().fg(accent())),
                Span::styled("  ", Style::default().bg(preset.color())),
                Span::raw(" "),
                Span::styled(preset.name, name_style),
            ]);

            let cell_style = if selected {
                Style::default().bg(bg_selected())
            } else {
                Style::default()
            };

            f.render_widget(Paragraph::new(line).style(cell_style), cells[col]);
        }
    }
}

fn draw_label_input(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.panel == Panel::Label;
    let block = panel_block(" 3. Add a Label ", focused);

    let line = if app.label.is_empty() && !focused {
        Line::from(Span::styled(
            "Enter label text...",
            Style::default().fg(text_dim()),
        ))
    } else {
        let cursor = if focused { "_" } else { "" };
        Line::from(Span::styled(
            format!("{}{}", app.label, cursor),
            Style::default().fg(text()),
        ))
    };

    f.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_preview_panel(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(Span::styled(" Preview ", Style::default().fg(header())))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(inactive()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(4)])
        .split(inner);

    preview::draw_preview(f, app, chunks[0]);
    draw_tip(f, app, chunks[1]);
}

fn draw_tip(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(Span::styled(" Design Tip ", Style::default().fg(accent())))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(inactive()));

    let tip = Paragraph::new(Span::styled(
        tips::tip_for(app.element),
        Style::default().fg(text_dim()),
    ))
    .wrap(Wrap { trim: true })
    .block(block);

    f.render_widget(tip, area);
}

fn draw_principles(f: &mut Frame, area: Rect) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for (i, (name, blurb)) in tips::PRINCIPLES.into_iter().enumerate() {
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", name),
                Style::default().fg(header()),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(inactive()));

        let card = Paragraph::new(Span::styled(blurb, Style::default().fg(text_dim())))
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(card, cells[i]);
    }
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let hints: Vec<(&str, &str)> = match app.panel {
        Panel::Element | Panel::Color => vec![
            ("Tab", "Panel"),
            ("←→↑↓", "Pick"),
            ("?", "Help"),
            ("q", "Quit"),
        ],
        Panel::Label => vec![
            ("Tab", "Panel"),
            ("type", "Edit"),
            ("Ctrl+U", "Clear"),
            ("Ctrl+C", "Quit"),
        ],
    };

    let hint_spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            vec![
                Span::styled(*key, Style::default().fg(accent())),
                Span::styled(format!(" {} │ ", action), Style::default().fg(text_dim())),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(hint_spans)).alignment(Alignment::Center);
    f.render_widget(footer, area);
}

fn draw_help_popup(f: &mut Frame) {
    let popup_area = centered_rect(60, 70, f.area());

    f.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(Span::styled(
            "═══ Navigation ═══",
            Style::default().fg(header()).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("  Tab/Shift+Tab ", Style::default().fg(accent())),
            Span::raw("Cycle panel focus (Element → Color → Label)"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Picking ═══",
            Style::default().fg(header()).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("  ←/→ h/l       ", Style::default().fg(accent())),
            Span::raw("Pick Button or Card / move through swatches"),
        ]),
        Line::from(vec![
            Span::styled("  ↑/↓ k/j       ", Style::default().fg(accent())),
            Span::raw("Jump between swatch rows"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Label ═══",
            Style::default().fg(header()).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("  typing        ", Style::default().fg(accent())),
            Span::raw("Appended to the label verbatim"),
        ]),
        Line::from(vec![
            Span::styled("  Backspace     ", Style::default().fg(accent())),
            Span::raw("Delete the last character"),
        ]),
        Line::from(vec![
            Span::styled("  Ctrl+U        ", Style::default().fg(accent())),
            Span::raw("Clear the label"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Quitting ═══",
            Style::default().fg(header()).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("  q             ", Style::default().fg(accent())),
            Span::raw("Quit (outside the label field)"),
        ]),
        Line::from(vec![
            Span::styled("  Ctrl+C        ", Style::default().fg(accent())),
            Span::raw("Quit from anywhere"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Press ", Style::default().fg(text_dim())),
            Span::styled("?", Style::default().fg(accent())),
            Span::styled("/", Style::default().fg(text_dim())),
            Span::styled("Esc", Style::default().fg(accent())),
            Span::styled(" to close", Style::default().fg(text_dim())),
        ]),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(Span::styled(" Help ", Style::default().fg(accent())))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent())),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn render(app: &App) -> (String, Buffer) {
        let mut terminal = Terminal::new(TestBackend::new(110, 32)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
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
    fn test_default_screen() {
        let app = App::new();
        let (snapshot, buf) = render(&app);

        assert!(snapshot.contains("Simple Element Design"));
        assert!(snapshot.contains("1. Choose UI Element"));
        assert!(snapshot.contains("2. Select a Color"));
        assert!(snapshot.contains("3. Add a Label"));
        assert!(snapshot.contains("Click Me"));
        assert!(snapshot.contains("short and action-oriented"));
        assert!(snapshot.contains("Simplicity"));
        assert!(snapshot.contains("Clarity"));
        assert!(snapshot.contains("Consistency"));
        // The default blue preset fills the previewed button
        assert!(has_bg(&buf, Color::Rgb(59, 130, 246)));
    }

    #[test]
    fn test_green_card_scenario() {
        let mut app = App::new();
        app.set_element(ElementKind::Card);
        app.set_color(2); // Green
        app.set_label("Welcome");
        let (snapshot, buf) = render(&app);

        assert!(snapshot.contains("Welcome"));
        assert!(snapshot.contains("visual hierarchy"));
        assert!(!snapshot.contains("short and action-oriented"));
        assert!(has_bg(&buf, Color::Rgb(16, 185, 129)));
    }

    #[test]
    fn test_empty_label_draws_without_panic() {
        for kind in [ElementKind::Button, ElementKind::Card] {
            let mut app = App::new();
            app.set_element(kind);
            app.set_label("");
            let _ = render(&app);
        }
    }

    #[test]
    fn test_tip_ignores_color_and_label() {
        let mut app = App::new();
        app.set_element(ElementKind::Card);
        let (first, _) = render(&app);
        assert!(first.contains("visual hierarchy"));

        app.set_color(4);
        app.set_label("something else entirely");
        let (second, _) = render(&app);
        assert!(second.contains("visual hierarchy"));
    }

    #[test]
    fn test_help_popup_renders() {
        let mut app = App::new();
        app.popup = Popup::Help;
        let (snapshot, _) = render(&app);
        assert!(snapshot.contains("Cycle panel focus"));
    }
}
