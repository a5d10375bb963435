//! Input handler for the command loop using rustyline.
//!
//! Provides line editing and optional persistent history.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Prompt shown before every command.
pub const PROMPT: &str = "Enter a command: ";

/// One read from the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A line of input, trimmed (possibly empty)
    Line(String),

    /// Ctrl-C
    Interrupted,

    /// Ctrl-D or closed stdin
    Eof,
}

/// Input handler managing the readline interface and command history.
pub struct InputHandler {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
}

impl InputHandler {
    /// Create an input handler, loading history from `history_path` if the
    /// file exists.
    pub fn new(history_path: Option<PathBuf>) -> Result<Self> {
        let mut editor = DefaultEditor::new()?;

        if let Some(ref path) = history_path {
            if path.exists() {
                if let Err(e) = editor.load_history(path) {
                    tracing::warn!(path = %path.display(), error = %e, "Could not load history");
                }
            }
        }

        Ok(InputHandler {
            editor,
            history_path,
        })
    }

    /// Read a line of input from the user.
    pub fn read_line(&mut self) -> Result<InputEvent> {
        match self.editor.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = self.editor.add_history_entry(trimmed);
                }
                Ok(InputEvent::Line(trimmed.to_string()))
            }
            Err(ReadlineError::Interrupted) => Ok(InputEvent::Interrupted),
            Err(ReadlineError::Eof) => Ok(InputEvent::Eof),
            Err(err) => Err(anyhow::anyhow!("Readline error: {}", err)),
        }
    }

    /// Save history to disk, if a history file is configured.
    pub fn save_history(&mut self) -> Result<()> {
        if let Some(ref path) = self.history_path {
            self.editor.save_history(path)?;
        }
        Ok(())
    }
}
