use std::io;
use std::sync::mpsc;
use std::time::Duration;

use chrono::Utc;
use ratatui::crossterm::event::{
    self, DisableFocusChange, EnableFocusChange, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;

use crate::error::Result;
use crate::model::Submission;
use crate::passcode::PASSCODE_LEN;
use crate::session::{Event as SessionEvent, Notice, Screen, SubmissionState};
use crate::state::*;
use crate::submit::{self, SubmitOutcome};

const MAX_FIELD_LEN: usize = 64;

/// Where finished attempts are sent. Outcomes come back on the channel the
/// main loop drains.
struct Collector {
    url: Option<String>,
    tx: mpsc::Sender<SubmitOutcome>,
}

impl Collector {
    fn send(&self, payload: Submission) {
        tracing::info!(score = payload.score, "dispatching result to collector");
        submit::spawn_submission(self.url.clone(), payload, self.tx.clone());
    }
}

pub fn run_tui(
    mut state: AppState,
    net_rx: mpsc::Receiver<bool>,
    collector_url: Option<String>,
) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (submit_tx, submit_rx) = mpsc::channel::<SubmitOutcome>();
    let collector = Collector {
        url: collector_url,
        tx: submit_tx,
    };

    let result = main_loop(&mut terminal, &mut state, &net_rx, &submit_rx, &collector);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableFocusChange).ok();
    terminal.show_cursor().ok();

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    net_rx: &mpsc::Receiver<bool>,
    submit_rx: &mpsc::Receiver<SubmitOutcome>,
    collector: &Collector,
) -> Result<()> {
    loop {
        terminal.draw(|f| crate::ui::draw(f, state))?;

        if state.should_quit {
            break;
        }

        let mut outbound = Vec::new();

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    outbound.extend(handle_key(key, state));
                }
                Event::FocusLost => {
                    outbound.extend(state.dispatch(SessionEvent::FocusChanged(false)));
                }
                Event::FocusGained => {
                    outbound.extend(state.dispatch(SessionEvent::FocusChanged(true)));
                }
                _ => {}
            }
        }

        // Connectivity monitor
        while let Ok(online) = net_rx.try_recv() {
            outbound.extend(state.dispatch(SessionEvent::ConnectivityChanged(online)));
        }

        // Collector outcomes
        while let Ok(outcome) = submit_rx.try_recv() {
            outbound.extend(state.dispatch(SessionEvent::SubmissionFinished(outcome)));
        }

        for payload in outbound {
            collector.send(payload);
        }
    }

    Ok(())
}

/// Routes one key press. Returns the payload to post when the key submitted
/// the result.
pub fn handle_key(key: KeyEvent, state: &mut AppState) -> Option<Submission> {
    // Handle dialog keys first
    if state.has_dialog() {
        handle_dialog_key(key, state);
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c')) {
        return request_quit(state);
    }
    if key.code == KeyCode::F(1) {
        state.push_dialog(Dialog::Help);
        return None;
    }

    match state.screen() {
        Screen::DetailsEntry => handle_details_key(key, state),
        Screen::Ready => handle_ready_key(key, state),
        Screen::Quiz => handle_quiz_key(key, state),
        Screen::Result => handle_result_key(key, state),
    }
}

/// Quitting is the terminal's version of the back button: blocked while the
/// quiz is running, and held back while a submission is in flight.
fn request_quit(state: &mut AppState) -> Option<Submission> {
    match state.screen() {
        Screen::Quiz => return state.dispatch(SessionEvent::BackPressed),
        Screen::Result if state.session.submission() == SubmissionState::InFlight => {
            state.notice = Some(Notice::SubmissionPending);
        }
        _ => state.should_quit = true,
    }
    None
}

fn handle_details_key(key: KeyEvent, state: &mut AppState) -> Option<Submission> {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            state.focus = state.focus.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.focus = state.focus.prev();
        }
        KeyCode::Enter => {
            if matches!(state.focus, DetailsField::Passcode | DetailsField::Submit) {
                let event = state.details_event(Utc::now());
                return state.dispatch(event);
            }
            state.focus = state.focus.next();
        }
        KeyCode::Backspace => {
            if let Some(input) = state.focused_input() {
                input.pop();
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let is_passcode = state.focus == DetailsField::Passcode;
            if let Some(input) = state.focused_input() {
                if is_passcode {
                    if input.len() < PASSCODE_LEN && c.is_ascii_alphanumeric() {
                        input.push(c.to_ascii_uppercase());
                    }
                } else if input.chars().count() < MAX_FIELD_LEN {
                    input.push(c);
                }
            }
        }
        _ => {}
    }
    None
}

fn handle_ready_key(key: KeyEvent, state: &mut AppState) -> Option<Submission> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('s') => state.dispatch(SessionEvent::Start),
        _ => None,
    }
}

fn handle_quiz_key(key: KeyEvent, state: &mut AppState) -> Option<Submission> {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_lowercase() => {
            let idx = (c as u8 - b'a') as usize;
            state.dispatch(SessionEvent::SelectOption(idx))
        }
        KeyCode::Enter | KeyCode::Right => state.dispatch(SessionEvent::Advance),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => {
            state.dispatch(SessionEvent::BackPressed)
        }
        _ => None,
    }
}

fn handle_result_key(key: KeyEvent, state: &mut AppState) -> Option<Submission> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('s') => state.dispatch(SessionEvent::SubmitResult),
        KeyCode::Char('q') => request_quit(state),
        _ => None,
    }
}

fn handle_dialog_key(key: KeyEvent, state: &mut AppState) {
    match state.top_dialog() {
        Some(Dialog::BackBlocked) | Some(Dialog::Interrupted) => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                state.pop_dialog();
            }
        }
        Some(Dialog::Help) => {
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Enter) {
                state.pop_dialog();
            }
        }
        None => {}
    }
}
