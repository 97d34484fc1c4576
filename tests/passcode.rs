use chrono::{TimeZone, Utc};

use lockquiz::passcode::{PasscodeGenerator, DEFAULT_SECRET, PASSCODE_LEN, WINDOW_MS};
use lockquiz::proctor;

// Start of bucket 5_870_000 for a 5-minute window.
const BUCKET_START_MS: i64 = 5_870_000 * WINDOW_MS;

#[test]
fn test_known_codes_for_default_secret() {
    let gen = PasscodeGenerator::new("gsaarc");
    assert_eq!(gen.generate_at_ms(0), "A27BCA");
    assert_eq!(gen.generate_at_ms(WINDOW_MS), "14FA68");
    assert_eq!(gen.generate_at_ms(BUCKET_START_MS), "CD9016");
    assert_eq!(gen.generate_at_ms(BUCKET_START_MS + WINDOW_MS), "E069B9");
}

#[test]
fn test_same_bucket_same_code() {
    let a = PasscodeGenerator::new(DEFAULT_SECRET);
    let b = PasscodeGenerator::new(DEFAULT_SECRET);

    let first = a.generate_at_ms(BUCKET_START_MS);
    for offset in [1, 999, 60_000, 150_000, WINDOW_MS - 1] {
        assert_eq!(b.generate_at_ms(BUCKET_START_MS + offset), first);
    }
}

#[test]
fn test_code_changes_when_bucket_increments() {
    let gen = PasscodeGenerator::new(DEFAULT_SECRET);
    let last_ms_of_window = BUCKET_START_MS + WINDOW_MS - 1;
    assert_ne!(
        gen.generate_at_ms(last_ms_of_window),
        gen.generate_at_ms(last_ms_of_window + 1)
    );
}

#[test]
fn test_code_shape() {
    let gen = PasscodeGenerator::new("another-secret");
    for bucket in 0..50 {
        let code = gen.generate_at_ms(bucket * WINDOW_MS);
        assert_eq!(code.len(), PASSCODE_LEN);
        assert!(code
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
    }
}

#[test]
fn test_secret_changes_code() {
    let a = PasscodeGenerator::new("gsaarc");
    let b = PasscodeGenerator::new("gsaarc2");
    assert_ne!(a.generate_at_ms(BUCKET_START_MS), b.generate_at_ms(BUCKET_START_MS));
}

#[test]
fn test_time_bucket_floors() {
    let gen = PasscodeGenerator::new(DEFAULT_SECRET);
    assert_eq!(gen.time_bucket(0), 0);
    assert_eq!(gen.time_bucket(WINDOW_MS - 1), 0);
    assert_eq!(gen.time_bucket(WINDOW_MS), 1);
    assert_eq!(gen.time_bucket(-1), -1);
}

#[test]
fn test_verify_only_accepts_current_bucket() {
    let gen = PasscodeGenerator::new(DEFAULT_SECRET);
    let now = Utc.timestamp_millis_opt(BUCKET_START_MS + 10_000).unwrap();
    let previous = gen.generate_at_ms(BUCKET_START_MS - 1);

    assert!(gen.verify("CD9016", now));
    assert!(!gen.verify("cd9016", now));
    assert!(!gen.verify(&previous, now));
    assert!(!gen.verify("", now));
}

#[test]
fn test_seconds_remaining() {
    let gen = PasscodeGenerator::new(DEFAULT_SECRET);
    let at_start = Utc.timestamp_millis_opt(BUCKET_START_MS).unwrap();
    let near_end = Utc.timestamp_millis_opt(BUCKET_START_MS + WINDOW_MS - 1500).unwrap();

    assert_eq!(gen.seconds_remaining(at_start), 300);
    assert_eq!(gen.seconds_remaining(near_end), 2);
}

#[test]
fn test_custom_window() {
    let gen = PasscodeGenerator::with_window(DEFAULT_SECRET, 60_000);
    assert_eq!(gen.time_bucket(119_999), 1);
    assert_ne!(gen.generate_at_ms(0), gen.generate_at_ms(60_000));
}

#[test]
fn test_zero_window_is_raised_to_one_ms() {
    let gen = PasscodeGenerator::with_window(DEFAULT_SECRET, 0);
    assert_eq!(gen.window_ms(), 1);
    assert_eq!(gen.time_bucket(42), 42);
    assert_eq!(gen.generate_at_ms(42).len(), 6);
}

#[test]
fn test_proctor_code_line() {
    let gen = PasscodeGenerator::new(DEFAULT_SECRET);
    let now = Utc.timestamp_millis_opt(BUCKET_START_MS + 55_000).unwrap();
    assert_eq!(proctor::code_line(&gen, now), "CD9016  (valid for 4m 05s)");
    assert_eq!(proctor::format_duration(9), "9s");
    assert_eq!(proctor::format_duration(0), "0s");
}
