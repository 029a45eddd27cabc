//! Console output.
//!
//! Results go to stdout. Errors and warnings go to stderr, info lines to
//! stdout, each behind a severity glyph. Writers are injected so tests can
//! capture both streams.

use crate::model::Emoji;
use colored::Colorize;
use std::io::{self, Write};

pub const NO_RESULTS: &str = "No results found";
pub const NO_RESULT: &str = "No result found";

const ERROR_GLYPH: &str = "❌";
const WARNING_GLYPH: &str = "⚠️";
const INFO_GLYPH: &str = "ℹ️";

/// The shapes a handler can hand to [`Output::success`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Text(String),
    Texts(Vec<String>),
    Record(Emoji),
    Records(Vec<Emoji>),
    Nothing,
}

/// Lines printed for a successful result.
pub fn format_payload(payload: &Payload) -> Vec<String> {
    match payload {
        Payload::Texts(items) if items.is_empty() => vec![NO_RESULTS.to_string()],
        Payload::Records(items) if items.is_empty() => vec![NO_RESULTS.to_string()],
        Payload::Texts(items) => items.clone(),
        Payload::Records(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{}. {} {}", i + 1, item.emoji, item.display_name()))
            .collect(),
        Payload::Record(item) => vec![format!("{} {}", item.emoji, item.display_name())],
        Payload::Text(text) => vec![text.clone()],
        Payload::Nothing => vec![NO_RESULT.to_string()],
    }
}

pub struct Output<'w> {
    out: &'w mut dyn Write,
    err: &'w mut dyn Write,
    styled: bool,
}

impl<'w> Output<'w> {
    /// Unstyled output over the given writers.
    pub fn new(out: &'w mut dyn Write, err: &'w mut dyn Write) -> Self {
        Self {
            out,
            err,
            styled: false,
        }
    }

    /// Enables colour on severity labels.
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    pub fn success(&mut self, payload: &Payload) -> io::Result<()> {
        for line in format_payload(payload) {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }

    /// A line of plain text on stdout.
    pub fn plain(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    pub fn error(&mut self, message: &str) -> io::Result<()> {
        let label = self.paint("Error:", |s| s.red().bold().to_string());
        writeln!(self.err, "{} {} {}", ERROR_GLYPH, label, message)
    }

    pub fn warning(&mut self, message: &str) -> io::Result<()> {
        let label = self.paint("Warning:", |s| s.yellow().to_string());
        writeln!(self.err, "{}  {} {}", WARNING_GLYPH, label, message)
    }

    pub fn info(&mut self, message: &str) -> io::Result<()> {
        let message = self.paint(message, |s| s.dimmed().to_string());
        writeln!(self.out, "{}  {}", INFO_GLYPH, message)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> String) -> String {
        if self.styled {
            style(text)
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(f: impl FnOnce(&mut Output<'_>)) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        {
            let mut output = Output::new(&mut out, &mut err);
            f(&mut output);
        }
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn empty_lists_report_no_results() {
        assert_eq!(format_payload(&Payload::Records(vec![])), [NO_RESULTS]);
        assert_eq!(format_payload(&Payload::Texts(vec![])), [NO_RESULTS]);
    }

    #[test]
    fn records_are_numbered_from_one() {
        let lines = format_payload(&Payload::Records(vec![
            Emoji::named("🍕", "pizza"),
            Emoji::keyed("☕", "coffee"),
            Emoji {
                emoji: "❓".into(),
                name: None,
                key: None,
            },
        ]));
        assert_eq!(lines, ["1. 🍕 pizza", "2. ☕ coffee", "3. ❓ unknown"]);
    }

    #[test]
    fn strings_print_one_per_line() {
        let lines = format_payload(&Payload::Texts(vec!["a".into(), "b".into()]));
        assert_eq!(lines, ["a", "b"]);
    }

    #[test]
    fn single_record_prints_glyph_and_name() {
        let lines = format_payload(&Payload::Record(Emoji::keyed("🍕", "pizza")));
        assert_eq!(lines, ["🍕 pizza"]);
    }

    #[test]
    fn scalars_print_as_is_and_nothing_reports_no_result() {
        assert_eq!(format_payload(&Payload::Text("I ☕".into())), ["I ☕"]);
        assert_eq!(format_payload(&Payload::Nothing), [NO_RESULT]);
    }

    #[test]
    fn success_writes_to_stdout_only() {
        let (out, err) = capture(|o| {
            o.success(&Payload::Record(Emoji::named("🍕", "pizza")))
                .unwrap()
        });
        assert_eq!(out, "🍕 pizza\n");
        assert!(err.is_empty());
    }

    #[test]
    fn diagnostics_carry_glyph_prefixes() {
        let (out, err) = capture(|o| {
            o.error("boom").unwrap();
            o.warning("careful").unwrap();
            o.info("fyi").unwrap();
        });
        assert_eq!(err, "❌ Error: boom\n⚠️  Warning: careful\n");
        assert_eq!(out, "ℹ️  fyi\n");
    }
}
