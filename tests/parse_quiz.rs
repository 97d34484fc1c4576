use std::fs;

use lockquiz::parser::parse_quiz;

#[test]
fn test_parse_sample_quiz() {
    let content = fs::read_to_string("fixtures/sample_quiz.md").expect("Cannot read fixture");
    let quiz = parse_quiz(&content, "sample_quiz.md").unwrap();

    assert_eq!(quiz.title, "Placement Aptitude Round 1");
    assert_eq!(quiz.quiz_file, "sample_quiz.md");
    assert_eq!(quiz.questions.len(), 4);

    let q1 = &quiz.questions[0];
    assert_eq!(q1.number, 1);
    assert!(q1.prompt.starts_with("Which data structure"));
    assert_eq!(q1.options.len(), 4);
    assert_eq!(q1.options[1], "Hash map");
    assert_eq!(q1.answer, "Hash map");

    let q2 = &quiz.questions[1];
    assert_eq!(q2.prompt, "What does `git rebase` do?");
    assert_eq!(q2.body, vec!["It rewrites history, so think before answering.".to_string()]);
    assert_eq!(q2.answer, "Replays commits on top of another base");

    let q4 = &quiz.questions[3];
    assert_eq!(q4.answer, "443");
    assert!(q4.body.iter().any(|l| l.contains("scheme://host:port/path")));
}

#[test]
fn test_preamble_includes_instructions() {
    let content = fs::read_to_string("fixtures/sample_quiz.md").expect("Cannot read fixture");
    let quiz = parse_quiz(&content, "sample_quiz.md").unwrap();

    assert_eq!(quiz.preamble.len(), 2);
    assert!(quiz.preamble[0].contains("no negative marking"));
    assert!(quiz.preamble[1].contains("Read each question carefully"));
}

#[test]
fn test_frontmatter_is_optional() {
    let content = "# Mini Quiz\n\n## 1. Two plus two?\n\n- [ ] 3\n- [x] 4\n";
    let quiz = parse_quiz(content, "mini.md").unwrap();

    assert_eq!(quiz.title, "Mini Quiz");
    assert_eq!(quiz.questions.len(), 1);
    assert_eq!(quiz.questions[0].answer, "4");
}

#[test]
fn test_title_falls_back_to_file_name() {
    let content = "## 1. Two plus two?\n\n- [ ] 3\n- [x] 4\n";
    let quiz = parse_quiz(content, "untitled.md").unwrap();
    assert_eq!(quiz.title, "untitled.md");
}

#[test]
fn test_rejects_question_without_marked_answer() {
    let content = "## 1. Two plus two?\n\n- [ ] 3\n- [ ] 4\n";
    let err = parse_quiz(content, "bad.md").unwrap_err();
    assert!(err.to_string().contains("exactly one option"));
}

#[test]
fn test_rejects_question_with_two_marked_answers() {
    let content = "## 1. Two plus two?\n\n- [x] 3\n- [x] 4\n";
    let err = parse_quiz(content, "bad.md").unwrap_err();
    assert!(err.to_string().contains("found 2"));
}

#[test]
fn test_rejects_question_without_options() {
    let content = "## 1. Explain ownership.\n\nWrite a paragraph.\n";
    let err = parse_quiz(content, "bad.md").unwrap_err();
    assert!(err.to_string().contains("no options"));
}

#[test]
fn test_rejects_empty_quiz() {
    let content = "# Nothing here\n\nJust a preamble.\n";
    let err = parse_quiz(content, "empty.md").unwrap_err();
    assert!(err.to_string().contains("no questions"));
}

#[test]
fn test_rejects_bad_heading() {
    let content = "## Two plus two?\n\n- [ ] 3\n- [x] 4\n";
    let err = parse_quiz(content, "bad.md").unwrap_err();
    assert!(err.to_string().contains("## N. Prompt"));
}
