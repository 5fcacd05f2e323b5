use std::{io::BufRead, path::PathBuf};

use log::warn;
use rustyline::{error::ReadlineError, history::FileHistory, Editor};

use super::completer::CommandCompleter;
use crate::error::ShellError;

/// Result of asking for the next line of input
#[derive(Debug, PartialEq, Eq)]
pub enum Line {
    Input(String),
    /// Ctrl-C at the prompt
    Interrupted,
    Eof,
}

pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<Line, ShellError>;

    /// Called once after the loop ends
    fn finish(&mut self) {}
}

/// Interactive reader with history and command completion
pub struct EditorReader {
    editor: Editor<CommandCompleter, FileHistory>,
    history_path: PathBuf,
}

impl EditorReader {
    pub fn new(commands: Vec<&'static str>, history_path: PathBuf) -> Result<Self, ShellError> {
        let mut editor = Editor::new()?;
        editor.set_helper(Some(CommandCompleter::new(commands)));
        let _ = editor.load_history(&history_path);

        Ok(Self {
            editor,
            history_path,
        })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<Line, ShellError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Line::Input(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Line::Interrupted),
            Err(ReadlineError::Eof) => Ok(Line::Eof),
            Err(e) => Err(e.into()),
        }
    }

    fn finish(&mut self) {
        if let Err(e) = self.editor.save_history(&self.history_path) {
            warn!(
                "Unable to save history to {}: {}",
                self.history_path.display(),
                e
            );
        }
    }
}

/// Reads lines from any buffered stream, for piped input and tests
pub struct ScriptReader<R> {
    input: R,
}

impl<R: BufRead> ScriptReader<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> LineReader for ScriptReader<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<Line, ShellError> {
        let mut buffer = String::new();
        if self.input.read_line(&mut buffer)? == 0 {
            return Ok(Line::Eof);
        }
        let line = buffer.trim_end_matches(['\n', '\r']).to_string();
        Ok(Line::Input(line))
    }
}
