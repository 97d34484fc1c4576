use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::AppState;

/// One line holding the latest notice from the session, if any.
pub fn draw_statusbar(f: &mut Frame, area: Rect, state: &AppState) {
    let line = match state.notice {
        Some(notice) => {
            let style = if notice.is_warning() {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            };
            let icon = if notice.is_warning() { "⚠" } else { "✓" };
            Line::from(vec![
                Span::raw(" "),
                Span::styled(format!("{} {}", icon, notice.message()), style),
            ])
        }
        None => Line::from(vec![
            Span::raw(" "),
            Span::styled("[F1] help", Style::default().fg(Color::DarkGray)),
        ]),
    };

    let widget = Paragraph::new(line).style(Style::default().bg(Color::Rgb(30, 30, 30)));
    f.render_widget(widget, area);
}
