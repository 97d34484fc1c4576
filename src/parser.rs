use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::error::{Error, Result};
use crate::model::*;

/// Options are picked with the keys `a`..`z`.
pub const MAX_OPTIONS: usize = 26;

pub fn parse_quiz(content: &str, quiz_file: &str) -> Result<Quiz> {
    let (frontmatter, body) = split_frontmatter(content)?;
    let fm: Frontmatter = match frontmatter {
        Some(raw) => serde_yaml::from_str(&raw)
            .map_err(|e| Error::Quiz(format!("Invalid frontmatter: {}", e)))?,
        None => Frontmatter::default(),
    };

    let (title, mut preamble, questions) = parse_body(&body)?;

    if questions.is_empty() {
        return Err(Error::Quiz(format!("{} contains no questions", quiz_file)));
    }

    if let Some(instructions) = fm.instructions {
        preamble.insert(0, instructions.trim().to_string());
    }

    let title = fm
        .title
        .or_else(|| (!title.is_empty()).then_some(title))
        .unwrap_or_else(|| quiz_file.to_string());

    Ok(Quiz {
        title,
        preamble,
        questions,
        quiz_file: quiz_file.to_string(),
    })
}

/// Frontmatter is optional; a file that does not open with `---` is all body.
fn split_frontmatter(content: &str) -> Result<(Option<String>, String)> {
    let trimmed = content.trim_start();
    let Some(after_first) = trimmed.strip_prefix("---") else {
        return Ok((None, content.to_string()));
    };

    let end_pos = after_first
        .find("\n---")
        .ok_or_else(|| Error::Quiz("No closing --- for frontmatter".to_string()))?;

    let fm = after_first[..end_pos].trim().to_string();
    let body = after_first[end_pos + 4..].to_string();

    Ok((Some(fm), body))
}

#[derive(Default)]
struct PendingQuestion {
    heading: String,
    body: Vec<String>,
    options: Vec<String>,
    correct: Vec<String>,
}

fn parse_body(body: &str) -> Result<(String, Vec<String>, Vec<Question>)> {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TASKLISTS);
    opts.insert(Options::ENABLE_STRIKETHROUGH);

    let mut title = String::new();
    let mut preamble: Vec<String> = Vec::new();
    let mut questions: Vec<Question> = Vec::new();

    let mut current: Option<PendingQuestion> = None;
    let mut in_h1 = false;
    let mut in_h2 = false;
    let mut in_list_item = false;
    let mut list_item_text = String::new();
    let mut task_list_checked: Option<bool> = None;
    let mut in_paragraph = false;
    let mut paragraph_text = String::new();
    let mut in_code_block = false;
    let mut code_block_text = String::new();

    for event in Parser::new_ext(body, opts) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => match level {
                HeadingLevel::H1 => in_h1 = true,
                HeadingLevel::H2 => {
                    if let Some(done) = current.take() {
                        questions.push(finalize_question(done)?);
                    }
                    current = Some(PendingQuestion::default());
                    in_h2 = true;
                }
                _ => {}
            },
            Event::End(TagEnd::Heading(level)) => match level {
                HeadingLevel::H1 => in_h1 = false,
                HeadingLevel::H2 => in_h2 = false,
                _ => {}
            },
            Event::Start(Tag::Item) => {
                in_list_item = true;
                list_item_text.clear();
                task_list_checked = None;
            }
            Event::End(TagEnd::Item) => {
                in_list_item = false;
                let text = list_item_text.trim().to_string();
                if let Some(q) = current.as_mut() {
                    match task_list_checked {
                        Some(checked) => {
                            if checked {
                                q.correct.push(text.clone());
                            }
                            q.options.push(text);
                        }
                        None if !text.is_empty() => q.body.push(format!("• {}", text)),
                        None => {}
                    }
                }
                task_list_checked = None;
            }
            Event::TaskListMarker(checked) => {
                task_list_checked = Some(checked);
            }
            Event::Start(Tag::Paragraph) => {
                in_paragraph = true;
                paragraph_text.clear();
            }
            Event::End(TagEnd::Paragraph) => {
                in_paragraph = false;
                let text = paragraph_text.trim().to_string();
                if !text.is_empty() && !in_list_item {
                    match current.as_mut() {
                        Some(q) => q.body.push(text),
                        None => preamble.push(text),
                    }
                }
            }
            Event::Start(Tag::CodeBlock(_)) => {
                in_code_block = true;
                code_block_text.clear();
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                if let Some(q) = current.as_mut() {
                    q.body.extend(code_block_text.lines().map(|l| format!("    {}", l)));
                }
            }
            Event::Text(text) => {
                if in_h1 {
                    title.push_str(&text);
                } else if in_h2 {
                    if let Some(q) = current.as_mut() {
                        q.heading.push_str(&text);
                    }
                } else if in_code_block {
                    code_block_text.push_str(&text);
                } else if in_list_item {
                    list_item_text.push_str(&text);
                } else if in_paragraph {
                    paragraph_text.push_str(&text);
                }
            }
            Event::Code(code) => {
                let c = format!("`{}`", code);
                if in_h2 {
                    if let Some(q) = current.as_mut() {
                        q.heading.push_str(&c);
                    }
                } else if in_list_item {
                    list_item_text.push_str(&c);
                } else if in_paragraph {
                    paragraph_text.push_str(&c);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if in_list_item {
                    list_item_text.push(' ');
                } else if in_paragraph {
                    paragraph_text.push(' ');
                }
            }
            _ => {}
        }
    }

    if let Some(done) = current.take() {
        questions.push(finalize_question(done)?);
    }

    Ok((title.trim().to_string(), preamble, questions))
}

fn finalize_question(pending: PendingQuestion) -> Result<Question> {
    let (number, prompt) = parse_h2_title(&pending.heading)?;

    if pending.options.is_empty() {
        return Err(Error::Quiz(format!(
            "Question {} has no options (use a task list: - [ ] / - [x])",
            number
        )));
    }

    if pending.options.len() > MAX_OPTIONS {
        return Err(Error::Quiz(format!(
            "Question {} has {} options, at most {} are supported",
            number,
            pending.options.len(),
            MAX_OPTIONS
        )));
    }

    let mut correct = pending.correct;
    if correct.len() != 1 {
        return Err(Error::Quiz(format!(
            "Question {} must mark exactly one option with [x], found {}",
            number,
            correct.len()
        )));
    }

    Ok(Question {
        number,
        prompt,
        body: pending.body,
        options: pending.options,
        answer: correct.remove(0),
    })
}

fn parse_h2_title(text: &str) -> Result<(u32, String)> {
    let trimmed = text.trim();
    // Expected format: "1. Prompt text"
    let Some((num_str, prompt)) = trimmed.split_once('.') else {
        return Err(Error::Quiz(format!(
            "Question heading must be in format '## N. Prompt', got: {}",
            trimmed
        )));
    };
    let number: u32 = num_str
        .trim()
        .parse()
        .map_err(|_| Error::Quiz(format!("Invalid question number in heading: {}", trimmed)))?;
    Ok((number, prompt.trim().to_string()))
}
