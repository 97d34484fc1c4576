use chrono::{TimeZone, Utc};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use lockquiz::model::{Question, Quiz};
use lockquiz::passcode::{PasscodeGenerator, WINDOW_MS};
use lockquiz::session::{Event, Notice, QuizSession, Screen, SubmissionState};
use lockquiz::state::{AppState, Dialog};
use lockquiz::tui::handle_key;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// An app already unlocked, offline, and on the first question.
fn app_in_quiz() -> AppState {
    let questions = vec![
        Question::new("2 + 2?", vec!["3".to_string(), "4".to_string()], "4"),
        Question::new("3 + 3?", vec!["6".to_string(), "9".to_string()], "6"),
    ];
    let quiz = Quiz {
        title: "Arithmetic".to_string(),
        preamble: Vec::new(),
        questions: Vec::new(),
        quiz_file: "arith.md".to_string(),
    };
    let session = QuizSession::in_order(questions, PasscodeGenerator::new("gsaarc"));
    let mut state = AppState::new(quiz, session, true);

    state.form.name = "Ravi".to_string();
    state.form.register_number = "21EC044".to_string();
    state.form.department = "ECE".to_string();
    state.form.year = "2".to_string();
    state.passcode_input = "CD9016".to_string();
    let at = Utc.timestamp_millis_opt(5_870_000 * WINDOW_MS + 1_000).unwrap();
    let event = state.details_event(at);
    state.dispatch(event);
    state.dispatch(Event::ConnectivityChanged(false));
    state.dispatch(Event::Start);
    assert_eq!(state.screen(), Screen::Quiz);
    state
}

#[test]
fn test_back_keys_are_blocked_during_quiz() {
    for k in [ctrl('c'), ctrl('q'), key(KeyCode::Esc), key(KeyCode::Left)] {
        let mut state = app_in_quiz();
        assert!(handle_key(k, &mut state).is_none());
        assert_eq!(state.screen(), Screen::Quiz, "{:?}", k);
        assert!(!state.should_quit, "{:?}", k);
        assert_eq!(state.dialog_stack, vec![Dialog::BackBlocked], "{:?}", k);
    }
}

#[test]
fn test_ctrl_c_is_swallowed_by_open_dialog() {
    let mut state = app_in_quiz();
    handle_key(key(KeyCode::Esc), &mut state);
    assert_eq!(state.top_dialog(), Some(&Dialog::BackBlocked));

    handle_key(ctrl('c'), &mut state);
    assert!(!state.should_quit);
    assert_eq!(state.dialog_stack, vec![Dialog::BackBlocked]);
    assert_eq!(state.screen(), Screen::Quiz);

    // Enter dismisses, the quiz carries on
    handle_key(key(KeyCode::Enter), &mut state);
    assert!(!state.has_dialog());
    assert_eq!(state.screen(), Screen::Quiz);
}

#[test]
fn test_option_keys_and_advance() {
    let mut state = app_in_quiz();
    handle_key(key(KeyCode::Char('b')), &mut state);
    assert_eq!(state.session.selection(), Some("4"));

    // Out of range letters are ignored
    handle_key(key(KeyCode::Char('z')), &mut state);
    assert_eq!(state.session.selection(), Some("4"));

    handle_key(key(KeyCode::Enter), &mut state);
    handle_key(key(KeyCode::Right), &mut state);
    assert_eq!(state.screen(), Screen::Result);
    assert_eq!(state.session.score(), Some(1));
}

#[test]
fn test_quit_waits_for_submission_in_flight() {
    let mut state = app_in_quiz();
    handle_key(key(KeyCode::Enter), &mut state);
    handle_key(key(KeyCode::Enter), &mut state);
    state.dispatch(Event::ConnectivityChanged(true));

    let payload = handle_key(key(KeyCode::Enter), &mut state).unwrap();
    assert_eq!(payload.name, "Ravi");
    assert_eq!(state.session.submission(), SubmissionState::InFlight);

    handle_key(key(KeyCode::Char('q')), &mut state);
    assert!(!state.should_quit);
    assert_eq!(state.notice, Some(Notice::SubmissionPending));

    handle_key(ctrl('c'), &mut state);
    assert!(!state.should_quit);

    state.dispatch(Event::SubmissionFinished(Ok(())));
    handle_key(key(KeyCode::Char('q')), &mut state);
    assert!(state.should_quit);
}

#[test]
fn test_ctrl_q_quits_outside_quiz() {
    let mut state = app_in_quiz();
    handle_key(key(KeyCode::Enter), &mut state);
    handle_key(key(KeyCode::Enter), &mut state);
    assert_eq!(state.screen(), Screen::Result);

    handle_key(ctrl('q'), &mut state);
    assert!(state.should_quit);
}
