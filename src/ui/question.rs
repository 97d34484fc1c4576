use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::state::AppState;

pub fn draw_question(f: &mut Frame, area: Rect, state: &AppState) {
    let session = &state.session;
    let Some(question) = session.current_question() else {
        return;
    };
    let total = session.questions().len();
    let idx = session.current_index();

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Question {} of {}", idx + 1, total),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            question.prompt.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for text in &question.body {
        lines.push(Line::from(text.as_str()));
    }
    if !question.body.is_empty() {
        lines.push(Line::from(""));
    }

    let selection = session.selection();
    for (i, option) in question.options.iter().enumerate() {
        let label = (b'a' + i as u8) as char;
        let selected = selection == Some(option.as_str());
        let (marker, style) = if selected {
            (
                "(●)",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("( )", Style::default().fg(Color::White))
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", marker), style),
            Span::styled(format!("{}. ", label), Style::default().fg(Color::Cyan)),
            Span::styled(option.clone(), style),
        ]));
    }

    lines.push(Line::from(""));
    let next_label = if idx + 1 < total { "[Enter] Next" } else { "[Enter] Finish" };
    lines.push(Line::from(Span::styled(
        next_label,
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Q{} ", question.number));
    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}
