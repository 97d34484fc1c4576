use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::state::AppState;

pub fn draw_ready(f: &mut Frame, area: Rect, state: &AppState) {
    let session = &state.session;
    let name = session.details().map(|d| d.name.as_str()).unwrap_or("");

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            &state.title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Welcome, {}.", name)),
        Line::from(format!("{} questions, one at a time. You cannot go back.", session.questions().len())),
        Line::from(""),
    ];

    for text in &state.preamble {
        lines.push(Line::from(text.as_str()));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Switching away from this window ends your attempt immediately.",
        Style::default().fg(Color::Red),
    )));
    lines.push(Line::from(""));

    if session.is_online() {
        lines.push(Line::from(Span::styled(
            "○ Internet connection detected. Turn it off to start.",
            Style::default().fg(Color::Yellow),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "● Offline. Press Enter to start.",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(""));

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}
