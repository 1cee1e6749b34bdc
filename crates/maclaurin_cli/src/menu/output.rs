//! What a menu cycle says back to the user.
//!
//! `MenuCore` only builds messages; `render` decides which stream each one
//! goes to. Errors go to stderr so piped stdout carries results only.

use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq)]
pub enum MenuMsg {
    /// Menu listing, banner, farewell
    Info(String),
    Warn(String),
    /// Rejected input or evaluator failure; the loop continues
    Error(String),
    /// `label ≈ value`
    Output(String),
    /// One summand with its running sum
    Steps(String),
}

impl MenuMsg {
    pub fn info(s: impl Into<String>) -> Self {
        MenuMsg::Info(s.into())
    }

    pub fn error(s: impl Into<String>) -> Self {
        MenuMsg::Error(s.into())
    }

    fn is_error(&self) -> bool {
        matches!(self, MenuMsg::Error(_))
    }

    /// Text as it appears on screen.
    fn rendered(&self) -> String {
        match self {
            MenuMsg::Info(s) | MenuMsg::Output(s) | MenuMsg::Steps(s) => s.clone(),
            MenuMsg::Warn(s) => format!("⚠ {s}"),
            MenuMsg::Error(s) => format!("✖ {s}"),
        }
    }
}

pub type MenuReply = Vec<MenuMsg>;

pub trait MenuReplyExt {
    fn push_output(&mut self, s: impl Into<String>);
    fn push_info(&mut self, s: impl Into<String>);
    fn push_warn(&mut self, s: impl Into<String>);
    fn push_error(&mut self, s: impl Into<String>);
    fn push_steps(&mut self, s: impl Into<String>);
}

impl MenuReplyExt for MenuReply {
    fn push_output(&mut self, s: impl Into<String>) {
        self.push(MenuMsg::Output(s.into()));
    }

    fn push_info(&mut self, s: impl Into<String>) {
        self.push(MenuMsg::Info(s.into()));
    }

    fn push_warn(&mut self, s: impl Into<String>) {
        self.push(MenuMsg::Warn(s.into()));
    }

    fn push_error(&mut self, s: impl Into<String>) {
        self.push(MenuMsg::Error(s.into()));
    }

    fn push_steps(&mut self, s: impl Into<String>) {
        self.push(MenuMsg::Steps(s.into()));
    }
}

/// Write each message on its own line: errors to `err`, everything else to `out`.
pub fn render(reply: &[MenuMsg], out: &mut impl Write, err: &mut impl Write) -> io::Result<()> {
    for msg in reply {
        if msg.is_error() {
            writeln!(err, "{}", msg.rendered())?;
        } else {
            writeln!(out, "{}", msg.rendered())?;
        }
    }
    out.flush()?;
    err.flush()
}

/// [`render`] to the process's stdout/stderr.
pub fn print_reply(reply: MenuReply) -> io::Result<()> {
    render(&reply, &mut io::stdout().lock(), &mut io::stderr().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_go_to_err_stream() {
        let mut reply = MenuReply::new();
        reply.push_steps("  term   1: 1");
        reply.push_error("bad x");
        reply.push_warn("careful");
        reply.push_output("cos(0) ≈ 1");

        let (mut out, mut err) = (Vec::new(), Vec::new());
        render(&reply, &mut out, &mut err).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "  term   1: 1\n⚠ careful\ncos(0) ≈ 1\n"
        );
        assert_eq!(String::from_utf8(err).unwrap(), "✖ bad x\n");
    }

    #[test]
    fn empty_reply_writes_nothing() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        render(&[], &mut out, &mut err).unwrap();
        assert!(out.is_empty() && err.is_empty());
    }
}
