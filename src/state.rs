use chrono::{DateTime, Utc};

use crate::model::{Details, Quiz, Submission};
use crate::session::{Effect, Event, Notice, QuizSession, Screen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailsField {
    Name,
    RegisterNumber,
    Department,
    Year,
    Passcode,
    Submit,
}

impl DetailsField {
    pub const ALL: [DetailsField; 6] = [
        DetailsField::Name,
        DetailsField::RegisterNumber,
        DetailsField::Department,
        DetailsField::Year,
        DetailsField::Passcode,
        DetailsField::Submit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DetailsField::Name => "Name",
            DetailsField::RegisterNumber => "Register number",
            DetailsField::Department => "Department",
            DetailsField::Year => "Year",
            DetailsField::Passcode => "Passcode",
            DetailsField::Submit => "Continue",
        }
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    BackBlocked,
    Interrupted,
    Help,
}

#[derive(Debug)]
pub struct AppState {
    pub session: QuizSession,
    pub title: String,
    pub preamble: Vec<String>,
    pub form: Details,
    pub passcode_input: String,
    pub focus: DetailsField,
    pub dialog_stack: Vec<Dialog>,
    pub notice: Option<Notice>,
    pub collector_configured: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(quiz: Quiz, session: QuizSession, collector_configured: bool) -> Self {
        Self {
            session,
            title: quiz.title,
            preamble: quiz.preamble,
            form: Details::default(),
            passcode_input: String::new(),
            focus: DetailsField::Name,
            dialog_stack: Vec::new(),
            notice: None,
            collector_configured,
            should_quit: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.session.screen()
    }

    pub fn field_value(&self, field: DetailsField) -> &str {
        match field {
            DetailsField::Name => &self.form.name,
            DetailsField::RegisterNumber => &self.form.register_number,
            DetailsField::Department => &self.form.department,
            DetailsField::Year => &self.form.year,
            DetailsField::Passcode => &self.passcode_input,
            DetailsField::Submit => "",
        }
    }

    pub fn focused_input(&mut self) -> Option<&mut String> {
        match self.focus {
            DetailsField::Name => Some(&mut self.form.name),
            DetailsField::RegisterNumber => Some(&mut self.form.register_number),
            DetailsField::Department => Some(&mut self.form.department),
            DetailsField::Year => Some(&mut self.form.year),
            DetailsField::Passcode => Some(&mut self.passcode_input),
            DetailsField::Submit => None,
        }
    }

    pub fn details_event(&self, at: DateTime<Utc>) -> Event {
        Event::SubmitDetails {
            details: self.form.clone(),
            passcode: self.passcode_input.clone(),
            at,
        }
    }

    /// Feeds one event to the session and applies its notices. Returns the
    /// payload to hand to the collector, if the event produced one.
    pub fn dispatch(&mut self, event: Event) -> Option<Submission> {
        // Nothing to post to
        if matches!(event, Event::SubmitResult)
            && self.screen() == Screen::Result
            && !self.collector_configured
        {
            tracing::warn!("submit requested with no collector_url configured");
            self.notice = Some(Notice::NoCollector);
            return None;
        }

        let before = self.session.screen();
        let effects = self.session.handle(event);
        if self.session.screen() != before {
            self.notice = None;
        }
        self.apply(effects)
    }

    fn apply(&mut self, effects: Vec<Effect>) -> Option<Submission> {
        let mut outbound = None;
        for effect in effects {
            match effect {
                Effect::Notify(Notice::BackBlocked) => {
                    if self.top_dialog() != Some(&Dialog::BackBlocked) {
                        self.push_dialog(Dialog::BackBlocked);
                    }
                }
                Effect::Notify(Notice::Interrupted) => {
                    self.dialog_stack.clear();
                    self.push_dialog(Dialog::Interrupted);
                    self.notice = Some(Notice::Interrupted);
                }
                Effect::Notify(notice) => {
                    if notice == Notice::WrongPasscode {
                        self.passcode_input.clear();
                    }
                    self.notice = Some(notice);
                }
                Effect::Submit(payload) => outbound = Some(payload),
            }
        }
        outbound
    }

    pub fn has_dialog(&self) -> bool {
        !self.dialog_stack.is_empty()
    }

    pub fn top_dialog(&self) -> Option<&Dialog> {
        self.dialog_stack.last()
    }

    pub fn push_dialog(&mut self, dialog: Dialog) {
        self.dialog_stack.push(dialog);
    }

    pub fn pop_dialog(&mut self) -> Option<Dialog> {
        self.dialog_stack.pop()
    }
}
