use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::state::{AppState, DetailsField};

const LABEL_WIDTH: usize = 17;

pub fn draw_details(f: &mut Frame, area: Rect, state: &AppState) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", state.title),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  Enter your details and the passcode announced by the proctor."),
        Line::from(""),
    ];

    let box_width = (area.width as usize).saturating_sub(LABEL_WIDTH + 8).min(48);

    for field in DetailsField::ALL {
        if field == DetailsField::Submit {
            continue;
        }
        let focused = state.focus == field;
        let value = state.field_value(field);
        let value_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };
        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let cursor = if focused { "▏" } else { "" };
        let shown = format!("{}{}", value, cursor);
        let padded = format!("{:<width$}", shown, width = box_width);

        lines.push(Line::from(vec![
            Span::styled(format!("  {:<width$}", field.label(), width = LABEL_WIDTH), label_style),
            Span::raw("│"),
            Span::styled(padded, value_style),
            Span::raw("│"),
        ]));
        lines.push(Line::from(""));
    }

    let submit_style = if state.focus == DetailsField::Submit {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    lines.push(Line::from(vec![
        Span::raw(" ".repeat(LABEL_WIDTH + 3)),
        Span::styled(format!("[ {} ]", DetailsField::Submit.label()), submit_style),
    ]));
    lines.push(Line::from(""));

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines).block(block);
    f.render_widget(widget, area);
}
