use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::model::Quiz;
use crate::parser;

/// Accepts either a `.md` file or a directory holding exactly one.
pub fn resolve_quiz_path(path: &str) -> Result<PathBuf> {
    let path = Path::new(path).to_path_buf();
    let path = if path.is_relative() {
        std::env::current_dir()
            .map_err(|e| Error::io(".", e))?
            .join(path)
    } else {
        path
    };

    if path.is_file() && is_markdown(&path) {
        Ok(path)
    } else if path.is_dir() {
        find_quiz_file(&path)
    } else {
        Err(Error::Quiz(format!("Path not found: {}", path.display())))
    }
}

pub fn load_quiz(path: &Path) -> Result<Quiz> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let quiz_filename = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    parser::parse_quiz(&content, &quiz_filename)
}

fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "md")
}

fn find_quiz_file(dir: &Path) -> Result<PathBuf> {
    let mut md_files: Vec<PathBuf> = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    for entry in entries {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if path.is_file() && is_markdown(&path) {
            md_files.push(path);
        }
    }

    match md_files.len() {
        0 => Err(Error::Quiz(format!(
            "No .md quiz files found in {}",
            dir.display()
        ))),
        1 => Ok(md_files.remove(0)),
        _ => {
            md_files.sort();
            let names: Vec<String> = md_files
                .iter()
                .map(|p| format!("  - {}", p.file_name().unwrap_or_default().to_string_lossy()))
                .collect();
            Err(Error::Quiz(format!(
                "Multiple .md files found. Specify which one:\n{}",
                names.join("\n")
            )))
        }
    }
}
