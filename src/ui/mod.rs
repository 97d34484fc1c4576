pub mod details;
pub mod dialog;
pub mod keybar;
pub mod layout;
pub mod question;
pub mod ready;
pub mod result;
pub mod statusbar;
pub mod titlebar;

use ratatui::Frame;

use crate::session::Screen;
use crate::state::AppState;

pub fn draw(f: &mut Frame, state: &AppState) {
    let area = f.area();
    let layout = layout::compute_layout(area);

    titlebar::draw_titlebar(f, layout.titlebar, state);

    match state.screen() {
        Screen::DetailsEntry => details::draw_details(f, layout.main, state),
        Screen::Ready => ready::draw_ready(f, layout.main, state),
        Screen::Quiz => question::draw_question(f, layout.main, state),
        Screen::Result => result::draw_result(f, layout.main, state),
    }

    statusbar::draw_statusbar(f, layout.statusbar, state);
    keybar::draw_keybar(f, layout.keybar, state);

    // Draw dialog overlay if any
    if state.has_dialog() {
        dialog::draw_dialog(f, area, state);
    }
}
