//! Command implementations and shared output handling.

pub mod catalog;
pub mod config;
pub mod matches;
pub mod profile;
pub mod session;
pub mod shell;

use std::io::Write;

use serde::Serialize;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Shown when a profile offers no courses to start a session for.
pub const NO_COURSES: &str = "No courses available. Add courses to your profile first.";

/// Where command results go, as text or as pretty JSON.
pub struct Output<W: Write> {
    writer: W,
    json: bool,
}

impl<W: Write> Output<W> {
    pub fn new(writer: W, json: bool) -> Self {
        Self { writer, json }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Write one line of text.
    pub fn line(&mut self, text: impl AsRef<str>) -> std::io::Result<()> {
        writeln!(self.writer, "{}", text.as_ref())
    }

    /// Write a value as pretty JSON.
    pub fn json<T: Serialize + ?Sized>(&mut self, value: &T) -> CommandResult {
        writeln!(self.writer, "{}", serde_json::to_string_pretty(value)?)?;
        Ok(())
    }

    /// Text unless JSON output was requested, in which case `value` is
    /// written instead.
    pub fn message<T: Serialize + ?Sized>(&mut self, text: impl AsRef<str>, value: &T) -> CommandResult {
        if self.json {
            self.json(value)
        } else {
            self.line(text)?;
            Ok(())
        }
    }

    pub fn prompt(&mut self) -> std::io::Result<()> {
        write!(self.writer, "> ")?;
        self.writer.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Split a command line into words. Single or double quotes group words
/// containing spaces, e.g. `--spot "Novak Café"`.
pub fn split_words(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for ch in line.chars() {
        match (quote, ch) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(ch);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("unterminated {q} quote"));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

/// Comma-separated list, trimmed, empty items dropped.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
