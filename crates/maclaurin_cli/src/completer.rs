use maclaurin_math::SeriesKind;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// Completes series names and exit words at the menu prompt.
pub struct MenuHelper {
    words: Vec<String>,
}

impl MenuHelper {
    pub fn new() -> Self {
        let mut words: Vec<String> = SeriesKind::ALL
            .iter()
            .map(|k| k.name().to_string())
            .collect();
        words.push("exit".to_string());
        words.push("quit".to_string());
        Self { words }
    }

    fn candidates(&self, word: &str) -> Vec<Pair> {
        self.words
            .iter()
            .filter(|w| w.starts_with(word))
            .map(|w| Pair {
                display: w.clone(),
                replacement: w.clone(),
            })
            .collect()
    }
}

impl Default for MenuHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl Completer for MenuHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let (start, word) = extract_word(line, pos);
        Ok((start, self.candidates(word)))
    }
}

impl Hinter for MenuHelper {
    type Hint = String;
    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for MenuHelper {}

impl Validator for MenuHelper {}

impl Helper for MenuHelper {}

fn extract_word(line: &str, pos: usize) -> (usize, &str) {
    let line = &line[..pos];
    let start = line
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    (start, &line[start..])
}
