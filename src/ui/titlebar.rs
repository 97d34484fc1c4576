use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::session::Screen;
use crate::state::AppState;

pub fn draw_titlebar(f: &mut Frame, area: Rect, state: &AppState) {
    let session = &state.session;

    let (net_text, net_style) = if session.is_online() {
        (" ● online ", Style::default().fg(Color::Green))
    } else {
        (" ○ offline ", Style::default().fg(Color::Rgb(200, 200, 120)))
    };

    let progress = if session.screen() == Screen::Quiz {
        format!(
            " {}/{} ",
            session.current_index() + 1,
            session.questions().len()
        )
    } else {
        String::new()
    };

    let title_text = format!("[ {} ]", state.title);
    let title_span = Span::styled(
        title_text.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    // Center the title: pad left so title sits in the middle of the full width
    let available = area.width as usize;
    let title_len = title_text.chars().count();
    let right_len = net_text.chars().count() + progress.chars().count();
    let center_pad = available.saturating_sub(title_len) / 2;
    let right_pad = available.saturating_sub(center_pad + title_len + right_len);

    let line = Line::from(vec![
        Span::raw(" ".repeat(center_pad)),
        title_span,
        Span::raw(" ".repeat(right_pad)),
        Span::styled(progress, Style::default().fg(Color::Cyan)),
        Span::styled(net_text, net_style),
    ]);

    let widget = Paragraph::new(line)
        .style(Style::default().bg(Color::DarkGray))
        .alignment(Alignment::Left);
    f.render_widget(widget, area);
}
