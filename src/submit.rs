use std::sync::mpsc;
use std::thread;

use crate::error::{Error, Result};
use crate::model::Submission;

/// Outcome of one collector call, fed back to the session as
/// `Event::SubmissionFinished`.
pub type SubmitOutcome = std::result::Result<(), String>;

pub fn post_submission(url: &str, submission: &Submission) -> Result<()> {
    let body = build_payload_json(submission)?;
    let client = reqwest::blocking::Client::new();
    let response = client
        .post(url)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(body)
        .send()?;

    if !response.status().is_success() {
        return Err(Error::Submission(format!(
            "collector returned status {}",
            response.status()
        )));
    }
    Ok(())
}

/// Fire-and-forget: posts on a background thread and reports once on `tx`.
/// No retry; the user can submit again after a failure.
pub fn spawn_submission(
    collector_url: Option<String>,
    submission: Submission,
    tx: mpsc::Sender<SubmitOutcome>,
) {
    thread::spawn(move || {
        let outcome = match collector_url {
            Some(url) => post_submission(&url, &submission).map_err(|e| e.to_string()),
            None => Err("no collector_url configured".to_string()),
        };
        let _ = tx.send(outcome);
    });
}

pub fn build_payload_json(submission: &Submission) -> Result<String> {
    serde_json::to_string(submission).map_err(|e| Error::Submission(e.to_string()))
}
