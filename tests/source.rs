use std::fs;

use lockquiz::source::{load_quiz, resolve_quiz_path};

const MINI: &str = "# Mini\n\n## 1. Two plus two?\n\n- [ ] 3\n- [x] 4\n";

#[test]
fn test_resolve_directory_with_single_quiz() {
    let tmp_dir = std::env::temp_dir().join("lockquiz_test_source_single");
    let _ = fs::remove_dir_all(&tmp_dir);
    fs::create_dir_all(&tmp_dir).unwrap();
    fs::write(tmp_dir.join("round1.md"), MINI).unwrap();
    fs::write(tmp_dir.join("notes.txt"), "ignored").unwrap();

    let path = resolve_quiz_path(tmp_dir.to_str().unwrap()).unwrap();
    assert_eq!(path.file_name().unwrap(), "round1.md");

    let quiz = load_quiz(&path).unwrap();
    assert_eq!(quiz.quiz_file, "round1.md");
    assert_eq!(quiz.questions.len(), 1);

    let _ = fs::remove_dir_all(&tmp_dir);
}

#[test]
fn test_resolve_directory_with_several_quizzes() {
    let tmp_dir = std::env::temp_dir().join("lockquiz_test_source_multi");
    let _ = fs::remove_dir_all(&tmp_dir);
    fs::create_dir_all(&tmp_dir).unwrap();
    fs::write(tmp_dir.join("a.md"), MINI).unwrap();
    fs::write(tmp_dir.join("b.md"), MINI).unwrap();

    let err = resolve_quiz_path(tmp_dir.to_str().unwrap()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("Multiple .md files"));
    assert!(msg.contains("a.md") && msg.contains("b.md"));

    let _ = fs::remove_dir_all(&tmp_dir);
}

#[test]
fn test_resolve_fixture_file_and_missing_path() {
    let path = resolve_quiz_path("fixtures/sample_quiz.md").unwrap();
    assert!(path.is_absolute());
    assert_eq!(load_quiz(&path).unwrap().questions.len(), 4);

    assert!(resolve_quiz_path("fixtures/does_not_exist.md").is_err());
}
