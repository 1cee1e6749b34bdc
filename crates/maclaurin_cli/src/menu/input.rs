//! Line sources for the menu loop.
//!
//! A terminal gets a rustyline editor (history, completion of series names);
//! piped input is read line by line from stdin.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use rustyline::error::ReadlineError;

use crate::completer::MenuHelper;

pub trait LineSource {
    /// Next line, or `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;

    /// Called once when the session ends.
    fn finish(&mut self) {}
}

pub struct EditorSource {
    editor: rustyline::Editor<MenuHelper, rustyline::history::DefaultHistory>,
    history_path: Option<PathBuf>,
}

impl EditorSource {
    pub fn new(keep_history: bool) -> anyhow::Result<Self> {
        let config = rustyline::Config::builder()
            .max_history_size(100)?
            .completion_type(rustyline::CompletionType::List)
            .build();
        let mut editor =
            rustyline::Editor::<MenuHelper, rustyline::history::DefaultHistory>::with_config(config)
                .context("initializing line editor")?;
        editor.set_helper(Some(MenuHelper::new()));

        // History file path: ~/.maclaurin_history
        let history_path = keep_history.then(|| {
            dirs::home_dir()
                .map(|p| p.join(".maclaurin_history"))
                .unwrap_or_else(|| PathBuf::from(".maclaurin_history"))
        });
        if let Some(path) = &history_path {
            // A missing history file is normal on first run
            if let Err(e) = editor.load_history(path) {
                tracing::debug!("no history loaded from {}: {}", path.display(), e);
            }
        }

        Ok(Self {
            editor,
            history_path,
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.trim())?;
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err).context("reading input"),
        }
    }

    fn finish(&mut self) {
        if let Some(path) = &self.history_path {
            if let Err(e) = self.editor.save_history(path) {
                tracing::warn!("could not save history to {}: {}", path.display(), e);
            }
        }
    }
}

/// Plain buffered reader; echoes the prompt to `out` before each read.
pub struct PipedSource<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> PipedSource<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }
}

impl PipedSource<io::StdinLock<'static>, io::Stdout> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineSource for PipedSource<R, W> {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line).context("reading stdin")? == 0 {
            return Ok(None);
        }
        // Keep prompts and echoed answers on separate lines in captured output
        writeln!(self.out)?;
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
