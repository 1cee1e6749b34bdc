//! JSON output types for the non-interactive `eval` command.

use serde::Serialize;

/// Result of one successful evaluation
#[derive(Serialize, Debug)]
pub struct EvalJsonOutput {
    pub ok: bool,
    /// Short series name (`sin`, `pow1p`, ...)
    pub function: String,
    /// Approximated function, e.g. `(1+x)^m`
    pub label: String,
    pub x: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m: Option<f64>,
    pub iterations: i64,
    pub result: f64,
    /// Individual summands, present with `--terms`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<Vec<f64>>,
}

/// An error result
#[derive(Serialize, Debug)]
pub struct ErrorJsonOutput {
    pub ok: bool,
    pub error: String,
    /// Stable error tag (`out_of_domain`, `invalid_iteration_count`, `missing_exponent`)
    pub kind: String,
}

impl ErrorJsonOutput {
    pub fn new(error: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
            kind: kind.into(),
        }
    }
}

/// One row of `list --format json`
#[derive(Serialize, Debug)]
pub struct SeriesInfoJson {
    pub number: u32,
    pub name: String,
    pub label: String,
    /// `None` when every real `x` is accepted
    pub domain: Option<String>,
    pub needs_exponent: bool,
}

pub fn print_pretty_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
