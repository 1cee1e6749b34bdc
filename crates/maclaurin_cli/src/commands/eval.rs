//! `eval`: one evaluation without the menu.

use std::process::ExitCode;

use clap::Args;
use maclaurin_math::{SeriesError, SeriesKind};

use super::OutputFormat;
use crate::json_types::{print_pretty_json, ErrorJsonOutput, EvalJsonOutput};

/// Arguments for the eval subcommand
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Series to evaluate: sin, cos, ln1m, ln1p, pow1m, pow1p
    pub function: SeriesKind,

    /// Argument x
    #[arg(allow_negative_numbers = true)]
    pub x: f64,

    /// Exponent m (required by pow1m and pow1p)
    #[arg(long, allow_negative_numbers = true)]
    pub m: Option<f64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also print every summand
    #[arg(long, default_value_t = false)]
    pub terms: bool,
}

#[derive(Debug)]
enum EvalFailure {
    MissingExponent(SeriesKind),
    Series(SeriesError),
}

impl EvalFailure {
    fn message(&self) -> String {
        match self {
            EvalFailure::MissingExponent(kind) => {
                format!("{} requires an exponent: pass --m <M>", kind.label())
            }
            EvalFailure::Series(e) => e.to_string(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            EvalFailure::MissingExponent(_) => "missing_exponent",
            EvalFailure::Series(e) => e.kind(),
        }
    }
}

struct Evaluated {
    result: f64,
    terms: Option<Vec<f64>>,
}

fn evaluate(args: &EvalArgs, iterations: i64) -> Result<Evaluated, EvalFailure> {
    let kind = args.function;
    let m = match (kind.needs_exponent(), args.m) {
        (true, None) => return Err(EvalFailure::MissingExponent(kind)),
        (true, Some(m)) => m,
        (false, _) => 0.0,
    };
    let terms = if args.terms {
        Some(kind.terms(args.x, m, iterations).map_err(EvalFailure::Series)?)
    } else {
        None
    };
    let result = kind
        .evaluate(args.x, m, iterations)
        .map_err(EvalFailure::Series)?;
    Ok(Evaluated { result, terms })
}

/// `<label> ≈ <value>`
fn text_line(kind: SeriesKind, result: f64) -> String {
    format!("{} ≈ {}", kind.label(), result)
}

/// Run the eval command. Evaluation failures are reported, not propagated.
pub fn run(args: EvalArgs, iterations: i64) -> anyhow::Result<ExitCode> {
    tracing::debug!(series = args.function.name(), x = args.x, iterations, "eval");
    match (evaluate(&args, iterations), args.format) {
        (Ok(evaluated), OutputFormat::Text) => {
            if let Some(terms) = &evaluated.terms {
                for (i, term) in terms.iter().enumerate() {
                    println!("term {}: {}", i + 1, term);
                }
            }
            println!("{}", text_line(args.function, evaluated.result));
            Ok(ExitCode::SUCCESS)
        }
        (Ok(evaluated), OutputFormat::Json) => {
            let kind = args.function;
            print_pretty_json(&EvalJsonOutput {
                ok: true,
                function: kind.name().to_string(),
                label: kind.label().to_string(),
                x: args.x,
                m: if kind.needs_exponent() { args.m } else { None },
                iterations,
                result: evaluated.result,
                terms: evaluated.terms,
            })?;
            Ok(ExitCode::SUCCESS)
        }
        (Err(failure), OutputFormat::Text) => {
            eprintln!("Error: {}", failure.message());
            Ok(ExitCode::FAILURE)
        }
        (Err(failure), OutputFormat::Json) => {
            print_pretty_json(&ErrorJsonOutput::new(failure.message(), failure.kind()))?;
            Ok(ExitCode::FAILURE)
        }
    }
}
