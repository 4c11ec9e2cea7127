//! Prompt reader for the interactive demo using rustyline
//!
//! Presenters drive the demo from confirmation gates and one free-form
//! query prompt; everything is trimmed, nothing is validated beyond that.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Line-based prompt collector wrapping a readline editor
pub struct PromptReader {
    editor: DefaultEditor,
}

impl PromptReader {
    /// Create new prompt reader
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()?;
        Ok(PromptReader { editor })
    }

    /// Ask a yes/no question, defaulting to no.
    ///
    /// Returns:
    /// - Ok(true) only for an explicit `y`/`Y`
    /// - Ok(false) for anything else, including EOF (Ctrl-D)
    /// - Err on interrupt (Ctrl-C)
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        match self.read_line(&format!("{} (y/N): ", question))? {
            Some(answer) => Ok(answer.eq_ignore_ascii_case("y")),
            None => Ok(false),
        }
    }

    /// Read one trimmed line of free-form input.
    ///
    /// Returns Ok(None) on EOF (Ctrl-D).
    pub fn read_query(&mut self, prompt: &str) -> Result<Option<String>> {
        self.read_line(prompt)
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line.trim().to_string())),
            Err(ReadlineError::Interrupted) => Err(anyhow::anyhow!("Interrupted")),
            Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(anyhow::anyhow!("Readline error: {}", err)),
        }
    }
}
