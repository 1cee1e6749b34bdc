//! Interactive menu session.
//!
//! One cycle: show the menu, read a choice, collect `x` (and `m` for the power
//! series), hand the request to [`MenuCore::handle`] and print its reply.
//! Bad input is reported and the cycle starts over.

mod core;
pub mod input;
pub mod output;

use std::io::IsTerminal;

pub use self::core::{MenuChoice, MenuCore, MenuRequest, EXIT_NUMBER};
use self::input::{EditorSource, LineSource, PipedSource};
pub use self::output::{print_reply, MenuMsg, MenuReply};

/// Outcome of reading one request from the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Collected {
    Request(MenuRequest),
    /// Input was rejected; the reply explains why
    Rejected(MenuReply),
    /// Exit chosen or input ended
    Exit,
}

/// Read the lines for one request from `source`.
pub fn collect_request(
    core: &MenuCore,
    source: &mut dyn LineSource,
) -> anyhow::Result<Collected> {
    let Some(line) = source.read_line(&format!("Choose an option (1-{}): ", EXIT_NUMBER))? else {
        return Ok(Collected::Exit);
    };
    if line.trim().is_empty() {
        return Ok(Collected::Rejected(MenuReply::new()));
    }

    let kind = match core.parse_choice(&line) {
        Ok(MenuChoice::Exit) => return Ok(Collected::Exit),
        Ok(MenuChoice::Series(kind)) => kind,
        Err(msg) => return Ok(Collected::Rejected(vec![MenuMsg::error(msg)])),
    };

    let domain_hint = kind
        .domain()
        .map(|d| format!(" {}", d))
        .unwrap_or_default();
    let Some(line) = source.read_line(&format!("Enter x{}: ", domain_hint))? else {
        return Ok(Collected::Exit);
    };
    let x = match core.parse_number("x", &line) {
        Ok(x) => x,
        Err(msg) => return Ok(Collected::Rejected(vec![MenuMsg::error(msg)])),
    };

    let m = if kind.needs_exponent() {
        let Some(line) = source.read_line("Enter m: ")? else {
            return Ok(Collected::Exit);
        };
        match core.parse_number("m", &line) {
            Ok(m) => Some(m),
            Err(msg) => return Ok(Collected::Rejected(vec![MenuMsg::error(msg)])),
        }
    } else {
        None
    };

    Ok(Collected::Request(MenuRequest { kind, x, m }))
}

/// Drive the menu until exit or end of input.
pub fn run_session(core: &MenuCore, source: &mut dyn LineSource) -> anyhow::Result<()> {
    print_reply(core.banner())?;
    loop {
        print_reply(vec![MenuMsg::info(core.menu_text())])?;
        let reply = match collect_request(core, source)? {
            Collected::Request(request) => core.handle(&request),
            Collected::Rejected(reply) => reply,
            Collected::Exit => break,
        };
        print_reply(reply)?;
    }
    println!("Goodbye!");
    source.finish();
    Ok(())
}

/// Run the menu on the process's stdin.
pub fn run(core: &MenuCore, keep_history: bool) -> anyhow::Result<()> {
    if std::io::stdin().is_terminal() {
        let mut source = EditorSource::new(keep_history)?;
        run_session(core, &mut source)
    } else {
        let mut source = PipedSource::stdin();
        run_session(core, &mut source)
    }
}
