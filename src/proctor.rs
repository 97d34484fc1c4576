use std::thread;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::passcode::PasscodeGenerator;

pub fn code_line(passcodes: &PasscodeGenerator, now: DateTime<Utc>) -> String {
    format!(
        "{}  (valid for {})",
        passcodes.generate(now),
        format_duration(passcodes.seconds_remaining(now))
    )
}

/// Prints a fresh line each time the window rolls over. Runs until killed.
pub fn watch(passcodes: &PasscodeGenerator) {
    loop {
        let now = Utc::now();
        println!("{}", code_line(passcodes, now));
        let wait_ms = passcodes.window_ms() - now.timestamp_millis().rem_euclid(passcodes.window_ms());
        thread::sleep(Duration::from_millis(wait_ms.max(1) as u64));
    }
}

pub fn format_duration(total_secs: i64) -> String {
    if total_secs <= 0 {
        return "0s".to_string();
    }
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    if minutes > 0 {
        format!("{}m {:02}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
