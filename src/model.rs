use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Frontmatter {
    pub title: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Quiz {
    pub title: String,
    pub preamble: Vec<String>,
    pub questions: Vec<Question>,
    pub quiz_file: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub number: u32,
    pub prompt: String,
    pub body: Vec<String>,
    pub options: Vec<String>,
    /// Matched against the recorded option by exact string equality.
    pub answer: String,
}

impl Question {
    pub fn new(prompt: impl Into<String>, options: Vec<String>, answer: impl Into<String>) -> Self {
        Self {
            number: 0,
            prompt: prompt.into(),
            body: Vec::new(),
            options,
            answer: answer.into(),
        }
    }
}

/// Candidate details collected before the quiz is unlocked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Details {
    pub name: String,
    pub register_number: String,
    pub department: String,
    pub year: String,
}

impl Details {
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            register_number: self.register_number.trim().to_string(),
            department: self.department.trim().to_string(),
            year: self.year.trim().to_string(),
        }
    }

    pub fn has_empty_field(&self) -> bool {
        [&self.name, &self.register_number, &self.department, &self.year]
            .iter()
            .any(|f| f.trim().is_empty())
    }
}

/// Payload posted to the collector once the quiz is over.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub name: String,
    pub register_number: String,
    pub department: String,
    pub year: String,
    pub score: u32,
}

impl Submission {
    pub fn new(details: &Details, score: u32) -> Self {
        Self {
            name: details.name.clone(),
            register_number: details.register_number.clone(),
            department: details.department.clone(),
            year: details.year.clone(),
            score,
        }
    }
}
