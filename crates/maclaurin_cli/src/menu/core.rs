//! Core menu logic without I/O.
//!
//! MenuCore turns one line of user text into a parsed choice or number and
//! dispatches one fully collected request to the series evaluators. Nothing
//! is remembered between requests; the outer loop in `menu` does the I/O.

use maclaurin_math::SeriesKind;

use super::output::{MenuReply, MenuReplyExt};

/// Menu number of the exit entry.
pub const EXIT_NUMBER: u32 = 7;

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Series(SeriesKind),
    Exit,
}

/// Everything needed for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuRequest {
    pub kind: SeriesKind,
    pub x: f64,
    /// Only read for the power series.
    pub m: Option<f64>,
}

/// Core menu logic - pure computation without I/O.
#[derive(Debug, Clone)]
pub struct MenuCore {
    /// Terms summed per evaluation
    pub iterations: i64,
    /// When true, every summand is reported before the result
    pub show_terms: bool,
}

impl MenuCore {
    pub fn new(iterations: i64, show_terms: bool) -> Self {
        Self {
            iterations,
            show_terms,
        }
    }

    /// Menu listing shown before every selection.
    pub fn menu_text(&self) -> String {
        let mut text = format!("Maclaurin series approximations ({} terms)\n", self.iterations);
        for kind in SeriesKind::ALL {
            let line = match kind.domain() {
                Some(domain) => format!("  {}. {:<8} x in {}\n", kind.menu_number(), kind.label(), domain),
                None => format!("  {}. {}\n", kind.menu_number(), kind.label()),
            };
            text.push_str(&line);
        }
        text.push_str(&format!("  {}. Exit", EXIT_NUMBER));
        text
    }

    /// Greeting printed once when the session starts.
    pub fn banner(&self) -> MenuReply {
        let mut reply = MenuReply::new();
        reply.push_info("Truncated Maclaurin series calculator. Choose 7 (or 'exit') to quit.");
        if self.iterations < 1 {
            reply.push_warn(format!(
                "iteration count is {}; sin(x) and cos(x) will reject it",
                self.iterations
            ));
        }
        reply
    }

    /// Accepts a menu number, a series name (`sin`, `pow1p`, ...) or `exit`/`quit`.
    pub fn parse_choice(&self, line: &str) -> Result<MenuChoice, String> {
        let line = line.trim();
        if matches!(line, "exit" | "quit" | "q") {
            return Ok(MenuChoice::Exit);
        }
        if let Ok(number) = line.parse::<u32>() {
            if number == EXIT_NUMBER {
                return Ok(MenuChoice::Exit);
            }
            return SeriesKind::from_menu_number(number)
                .map(MenuChoice::Series)
                .ok_or_else(|| format!("Unknown option '{}': choose 1-{}", line, EXIT_NUMBER));
        }
        line.parse::<SeriesKind>()
            .map(MenuChoice::Series)
            .map_err(|_| format!("Unknown option '{}': choose 1-{}", line, EXIT_NUMBER))
    }

    /// Parse one numeric input. Non-finite values are rejected here so the
    /// evaluators only ever see ordinary numbers from the menu.
    pub fn parse_number(&self, name: &str, line: &str) -> Result<f64, String> {
        let text = line.trim();
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            Ok(_) => Err(format!("{} must be a finite number, got '{}'", name, text)),
            Err(_) => Err(format!("Invalid number for {}: '{}'", name, text)),
        }
    }

    /// Evaluate one request and render the outcome.
    pub fn handle(&self, request: &MenuRequest) -> MenuReply {
        let mut reply = MenuReply::new();
        let kind = request.kind;
        let m = request.m.unwrap_or(0.0);
        tracing::debug!(
            series = kind.name(),
            x = request.x,
            m,
            iterations = self.iterations,
            "evaluating"
        );

        if self.show_terms {
            match kind.terms(request.x, m, self.iterations) {
                Ok(terms) => {
                    let mut partial = 0.0;
                    for (i, term) in terms.iter().enumerate() {
                        partial += term;
                        reply.push_steps(format!("  term {:>3}: {:>24e}   sum = {}", i + 1, term, partial));
                    }
                }
                Err(e) => {
                    reply.push_error(e.to_string());
                    return reply;
                }
            }
        }

        match kind.evaluate(request.x, m, self.iterations) {
            Ok(value) => reply.push_output(format!("{} ≈ {}", describe(request), value)),
            Err(e) => reply.push_error(e.to_string()),
        }
        reply
    }
}

/// `sin(x)` with the actual arguments filled in, e.g. `(1+0.5)^2`.
fn describe(request: &MenuRequest) -> String {
    let x = request.x;
    let m = request.m.unwrap_or(0.0);
    match request.kind {
        SeriesKind::Sin => format!("sin({})", x),
        SeriesKind::Cos => format!("cos({})", x),
        SeriesKind::Ln1MinusX => format!("ln(1-{})", paren(x)),
        SeriesKind::Ln1PlusX => format!("ln(1+{})", paren(x)),
        SeriesKind::PowerMinus => format!("(1-{})^{}", paren(x), paren(m)),
        SeriesKind::PowerPlus => format!("(1+{})^{}", paren(x), paren(m)),
    }
}

fn paren(v: f64) -> String {
    if v < 0.0 {
        format!("({})", v)
    } else {
        v.to_string()
    }
}
