//! Lockdown state machine for a single quiz attempt.
//!
//! The machine never reads ambient state. Connectivity, focus, key presses
//! and submission outcomes all arrive as [`Event`] values, one at a time, and
//! each call to [`QuizSession::handle`] runs to completion before the next.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::model::{Details, Question, Submission};
use crate::passcode::PasscodeGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    DetailsEntry,
    Ready,
    Quiz,
    Result,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    InFlight,
    Submitted,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SubmitDetails {
        details: Details,
        passcode: String,
        at: DateTime<Utc>,
    },
    Start,
    SelectOption(usize),
    Advance,
    ConnectivityChanged(bool),
    FocusChanged(bool),
    BackPressed,
    SubmitResult,
    SubmissionFinished(Result<(), String>),
}

impl Event {
    /// Short name for logs. Never includes the entered passcode.
    pub fn name(&self) -> &'static str {
        match self {
            Event::SubmitDetails { .. } => "submit_details",
            Event::Start => "start",
            Event::SelectOption(_) => "select_option",
            Event::Advance => "advance",
            Event::ConnectivityChanged(_) => "connectivity_changed",
            Event::FocusChanged(_) => "focus_changed",
            Event::BackPressed => "back_pressed",
            Event::SubmitResult => "submit_result",
            Event::SubmissionFinished(_) => "submission_finished",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    MissingInfo,
    WrongPasscode,
    TurnOffInternet,
    TurnOnInternet,
    BackBlocked,
    Interrupted,
    SubmissionPending,
    Submitted,
    SubmissionFailed,
    AlreadySubmitted,
    NoCollector,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::MissingInfo => "Please fill in all the details.",
            Notice::WrongPasscode => "Wrong passcode. Ask the proctor for the current code.",
            Notice::TurnOffInternet => "Turn off your internet connection to start the quiz.",
            Notice::TurnOnInternet => "Turn on your internet connection to submit your result.",
            Notice::BackBlocked => "You cannot leave the quiz until it is finished.",
            Notice::Interrupted => "You left the quiz window. Your attempt has been ended.",
            Notice::SubmissionPending => "Your result is already being submitted.",
            Notice::Submitted => "Result submitted.",
            Notice::SubmissionFailed => "Submission failed. Check your connection and try again.",
            Notice::AlreadySubmitted => "Your result has already been submitted.",
            Notice::NoCollector => "No collector is configured. Show this screen to the proctor.",
        }
    }

    pub fn is_warning(&self) -> bool {
        !matches!(self, Notice::Submitted)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Notify(Notice),
    /// Hand the payload to the collector. The machine does not wait for it;
    /// the outcome comes back as [`Event::SubmissionFinished`].
    Submit(Submission),
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    screen: Screen,
    questions: Vec<Question>,
    current_index: usize,
    answers: HashMap<usize, String>,
    selection: Option<String>,
    score: Option<u32>,
    online: bool,
    foreground: bool,
    interrupted: bool,
    details: Option<Details>,
    submission: SubmissionState,
    passcodes: PasscodeGenerator,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>, passcodes: PasscodeGenerator) -> Self {
        Self::with_rng(questions, passcodes, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        mut questions: Vec<Question>,
        passcodes: PasscodeGenerator,
        rng: &mut R,
    ) -> Self {
        shuffle(&mut questions, rng);
        Self::in_order(questions, passcodes)
    }

    /// Keeps the question order as given.
    pub fn in_order(questions: Vec<Question>, passcodes: PasscodeGenerator) -> Self {
        Self {
            screen: Screen::DetailsEntry,
            questions,
            current_index: 0,
            answers: HashMap::new(),
            selection: None,
            score: None,
            // Until the first probe reports otherwise, treat the machine as
            // online so the quiz cannot be started early.
            online: true,
            foreground: true,
            interrupted: false,
            details: None,
            submission: SubmissionState::Idle,
            passcodes,
        }
    }

    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        let from = self.screen;
        let name = event.name();

        let effects = match (self.screen, event) {
            (_, Event::ConnectivityChanged(online)) => {
                if self.online != online {
                    tracing::info!(online, "connectivity changed");
                }
                self.online = online;
                Vec::new()
            }
            (_, Event::FocusChanged(foreground)) => self.focus_changed(foreground),
            (Screen::DetailsEntry, Event::SubmitDetails { details, passcode, at }) => {
                self.submit_details(details, &passcode, at)
            }
            (Screen::Ready, Event::Start) => self.start(),
            (Screen::Quiz, Event::SelectOption(idx)) => {
                self.select_option(idx);
                Vec::new()
            }
            (Screen::Quiz, Event::Advance) => {
                self.advance();
                Vec::new()
            }
            (Screen::Quiz, Event::BackPressed) => vec![Effect::Notify(Notice::BackBlocked)],
            (Screen::Result, Event::SubmitResult) => self.submit_result(),
            (Screen::Result, Event::SubmissionFinished(outcome)) => {
                self.submission_finished(outcome)
            }
            (screen, _) => {
                tracing::trace!(?screen, event = name, "event ignored");
                Vec::new()
            }
        };

        if from != self.screen {
            tracing::info!(from = ?from, to = ?self.screen, event = name, "screen transition");
        }
        for effect in &effects {
            if let Effect::Notify(notice) = effect {
                tracing::debug!(?notice, event = name, "notice");
            }
        }

        effects
    }

    fn submit_details(&mut self, details: Details, passcode: &str, at: DateTime<Utc>) -> Vec<Effect> {
        let details = details.trimmed();
        if details.has_empty_field() {
            return vec![Effect::Notify(Notice::MissingInfo)];
        }
        if !self.passcodes.verify(passcode.trim(), at) {
            return vec![Effect::Notify(Notice::WrongPasscode)];
        }
        self.details = Some(details);
        self.screen = Screen::Ready;
        Vec::new()
    }

    fn start(&mut self) -> Vec<Effect> {
        if self.online {
            return vec![Effect::Notify(Notice::TurnOffInternet)];
        }
        self.current_index = 0;
        self.answers.clear();
        self.selection = None;
        self.screen = Screen::Quiz;
        Vec::new()
    }

    fn select_option(&mut self, idx: usize) {
        let Some(option) = self
            .questions
            .get(self.current_index)
            .and_then(|q| q.options.get(idx))
            .cloned()
        else {
            return;
        };
        self.answers.insert(self.current_index, option.clone());
        self.selection = Some(option);
    }

    fn advance(&mut self) {
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.selection = self.answers.get(&self.current_index).cloned();
        } else {
            self.finish();
        }
    }

    fn focus_changed(&mut self, foreground: bool) -> Vec<Effect> {
        self.foreground = foreground;
        if foreground || self.screen != Screen::Quiz {
            return Vec::new();
        }
        tracing::warn!(
            index = self.current_index,
            answered = self.answers.len(),
            "focus lost during quiz, ending attempt"
        );
        self.interrupted = true;
        self.finish();
        vec![Effect::Notify(Notice::Interrupted)]
    }

    fn finish(&mut self) {
        if self.score.is_none() {
            self.score = Some(compute_score(&self.questions, &self.answers));
        }
        self.selection = None;
        self.screen = Screen::Result;
    }

    fn submit_result(&mut self) -> Vec<Effect> {
        match self.submission {
            SubmissionState::InFlight => return vec![Effect::Notify(Notice::SubmissionPending)],
            SubmissionState::Submitted => return vec![Effect::Notify(Notice::AlreadySubmitted)],
            SubmissionState::Idle | SubmissionState::Failed => {}
        }
        if !self.online {
            return vec![Effect::Notify(Notice::TurnOnInternet)];
        }
        let Some(details) = &self.details else {
            return Vec::new();
        };
        let payload = Submission::new(details, self.score.unwrap_or(0));
        self.submission = SubmissionState::InFlight;
        vec![Effect::Submit(payload)]
    }

    fn submission_finished(&mut self, outcome: Result<(), String>) -> Vec<Effect> {
        if self.submission != SubmissionState::InFlight {
            return Vec::new();
        }
        match outcome {
            Ok(()) => {
                tracing::info!(score = self.score.unwrap_or(0), "result submitted");
                self.submission = SubmissionState::Submitted;
                vec![Effect::Notify(Notice::Submitted)]
            }
            Err(e) => {
                tracing::warn!(error = %e, "result submission failed");
                self.submission = SubmissionState::Failed;
                vec![Effect::Notify(Notice::SubmissionFailed)]
            }
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn answers(&self) -> &HashMap<usize, String> {
        &self.answers
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn score(&self) -> Option<u32> {
        self.score
    }

    pub fn is_online(&self) -> bool {
        self.online
    }

    pub fn is_foreground(&self) -> bool {
        self.foreground
    }

    pub fn was_interrupted(&self) -> bool {
        self.interrupted
    }

    pub fn details(&self) -> Option<&Details> {
        self.details.as_ref()
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission
    }
}

/// Fisher-Yates: for each index from the last down to 1, swap it with a
/// uniformly chosen index in `0..=i`.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Unanswered indices have no entry and never count.
pub fn compute_score(questions: &[Question], answers: &HashMap<usize, String>) -> u32 {
    questions
        .iter()
        .enumerate()
        .filter(|(i, q)| answers.get(i).is_some_and(|a| *a == q.answer))
        .count() as u32
}
