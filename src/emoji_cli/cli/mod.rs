//! # CLI Layer
//!
//! Everything between the process arguments and the lookup library:
//!
//! ```text
//! argv ──▶ setup::Cli (clap: --color, --seed, -d)
//!            │ tokens
//!            ▼
//!          parse::parse_args ──▶ help? ──▶ usage, exit 0
//!            │                   version? ──▶ version, exit 0
//!            ▼
//!          commands::resolve_command ──▶ unknown ──▶ exit 1
//!            │
//!            ▼
//!          commands::validate_args ──▶ bad arity ──▶ exit 2
//!            │
//!            ▼
//!          handlers::run_* ──▶ render::Output
//! ```
//!
//! [`dispatch`] runs one invocation against injected writers and a lazily
//! opened lookup, which is what the unit tests drive. [`run`] wires it to
//! the real process.

pub mod commands;
pub mod exitcode;
pub mod handlers;
pub mod logging;
pub mod parse;
pub mod render;
pub mod setup;

use crate::config::Config;
use crate::error::{CliError, LookupResult, Result};
use crate::lookup::{EmojiLibrary, EmojiLookup};
use clap::Parser;
use commands::{resolve_command, validate_args, COMMANDS};
use parse::parse_args;
use render::Output;
use setup::{usage_text, version_text, Cli};
use std::io;
use tracing::debug;

const USAGE_HINT: &str = "Use --help for usage information";

/// Runs the process and returns its exit code.
pub fn run() -> i32 {
    let cli = Cli::parse();
    let (config, env_warnings) = Config::resolve(&cli, |key| std::env::var(key).ok());
    logging::setup_logging(config.verbosity);
    config.apply_color();
    debug!(?config, "starting");

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();
    let mut output = Output::new(&mut out, &mut err)
        .styled(colored::control::SHOULD_COLORIZE.should_colorize());
    for warning in &env_warnings {
        let _ = output.warning(warning);
    }

    let seed = config.seed;
    dispatch(&cli.tokens, &mut output, || EmojiLibrary::bundled(seed))
}

/// One invocation over `tokens`. `open_lookup` is only called once a command
/// has resolved and passed validation.
pub fn dispatch<S, L, F>(tokens: &[S], output: &mut Output<'_>, open_lookup: F) -> i32
where
    S: AsRef<str>,
    L: EmojiLookup,
    F: FnOnce() -> LookupResult<L>,
{
    let code = match execute(tokens, output, open_lookup) {
        Ok(()) => exitcode::OK,
        Err(e) => report(output, &e),
    };
    // Nothing left to report a failed flush to.
    let _ = output.flush();
    code
}

fn execute<S, L, F>(tokens: &[S], output: &mut Output<'_>, open_lookup: F) -> Result<()>
where
    S: AsRef<str>,
    L: EmojiLookup,
    F: FnOnce() -> LookupResult<L>,
{
    let parsed = parse_args(tokens);
    debug!(?parsed, "parsed arguments");

    if parsed.help {
        output.plain(usage_text(COMMANDS).trim_end())?;
        return Ok(());
    }
    if parsed.is_version() {
        output.plain(&version_text())?;
        return Ok(());
    }

    let command = resolve_command(&parsed.command)
        .ok_or_else(|| CliError::UnknownCommand(parsed.command.clone()))?;
    validate_args(command, &parsed.args)?;
    if parsed.args.len() > 1 {
        debug!(ignored = parsed.args.len() - 1, "extra arguments ignored");
    }

    let lookup = open_lookup()?;
    debug!(command = command.name, "dispatching");
    (command.handler)(&lookup, output, parsed.first_arg())
}

fn report(output: &mut Output<'_>, error: &CliError) -> i32 {
    debug!(%error, code = error.exit_code(), "command failed");
    // Best effort: stderr may already be gone.
    let _ = output.error(&error.to_string());
    if error.is_validation() {
        let _ = output.info(USAGE_HINT);
    }
    error.exit_code()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LookupError;
    use crate::lookup::Dataset;
    use std::cell::Cell;

    const SMALL: &str = r#"[
        {"emoji": "🍕", "names": ["pizza"]},
        {"emoji": "☕", "names": ["coffee"]},
        {"emoji": "👍", "names": ["+1", "thumbsup"]}
    ]"#;

    struct Run {
        code: i32,
        out: String,
        err: String,
        opened: bool,
    }

    /// Dispatches against `dataset`, or a dataset failure when `None`.
    fn run_with(tokens: &[&str], dataset: Option<&Dataset>) -> Run {
        let opened = Cell::new(false);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = {
            let mut output = Output::new(&mut out, &mut err);
            dispatch(tokens, &mut output, || {
                opened.set(true);
                dataset
                    .map(|d| EmojiLibrary::with_seed(d, Some(0)))
                    .ok_or_else(|| LookupError::Dataset("truncated".into()))
            })
        };
        Run {
            code,
            out: String::from_utf8(out).unwrap(),
            err: String::from_utf8(err).unwrap(),
            opened: opened.get(),
        }
    }

    fn run_small(tokens: &[&str]) -> Run {
        let dataset = Dataset::from_json(SMALL).unwrap();
        run_with(tokens, Some(&dataset))
    }

    #[test]
    fn no_tokens_prints_usage() {
        let run = run_small(&[]);
        assert_eq!(run.code, exitcode::OK);
        assert!(run.out.contains("Commands:"));
        assert!(!run.opened);
    }

    #[test]
    fn help_wins_over_whatever_follows() {
        for tokens in [&["--help", "--bogus"][..], &["-h", "search"][..]] {
            let run = run_small(tokens);
            assert_eq!(run.code, exitcode::OK);
            assert!(run.out.contains("Usage:"));
            assert!(run.err.is_empty());
        }
    }

    #[test]
    fn version_prints_name_and_version() {
        let run = run_small(&["-v"]);
        assert_eq!(run.code, exitcode::OK);
        assert_eq!(run.out, format!("{}\n", version_text()));
        assert!(!run.opened);
    }

    #[test]
    fn unknown_command_exits_one() {
        let run = run_small(&["--bogus"]);
        assert_eq!(run.code, exitcode::FAILURE);
        assert_eq!(
            run.err,
            "❌ Error: Unknown command: --bogus. Use --help for available commands.\n"
        );
        assert!(run.out.is_empty());
        assert!(!run.opened);
    }

    #[test]
    fn arity_failures_exit_two_with_a_hint() {
        let run = run_small(&["get"]);
        assert_eq!(run.code, exitcode::USAGE);
        assert_eq!(run.err, "❌ Error: Command \"get\" requires arguments\n");
        assert_eq!(run.out, format!("ℹ️  {}\n", USAGE_HINT));
        assert!(!run.opened);

        let run = run_small(&["--rnd", "extra"]);
        assert_eq!(run.code, exitcode::USAGE);
        assert!(run.err.contains("does not accept arguments"));
    }

    #[test]
    fn empty_argument_fails_in_the_handler() {
        let run = run_small(&["search", ""]);
        assert_eq!(run.code, exitcode::USAGE);
        assert_eq!(run.err, "❌ Error: Search query is required\n");
        assert!(run.out.contains(USAGE_HINT));
    }

    #[test]
    fn aliases_dispatch_like_the_canonical_name() {
        let canonical = run_small(&["find", "thumbsup"]);
        assert_eq!(canonical.out, "👍 thumbsup\n");
        for alias in ["--find", "-f"] {
            let run = run_small(&[alias, "thumbsup"]);
            assert_eq!(run.code, exitcode::OK);
            assert_eq!(run.out, canonical.out);
        }
    }

    #[test]
    fn extra_arguments_after_the_first_are_ignored() {
        let run = run_small(&["get", "pizza", "coffee"]);
        assert_eq!(run.code, exitcode::OK);
        assert_eq!(run.out, "🍕\n");
    }

    #[test]
    fn library_errors_keep_exit_zero() {
        let empty = Dataset::from_json("[]").unwrap();
        let run = run_with(&["random"], Some(&empty));
        assert_eq!(run.code, exitcode::OK);
        assert_eq!(
            run.err,
            "❌ Error: Failed to get random emoji: Emoji dataset is empty\n"
        );
        assert!(run.out.is_empty());
    }

    #[test]
    fn search_matches_names_containing_metacharacters() {
        let run = run_small(&["search", "+1"]);
        assert_eq!(run.code, exitcode::OK);
        assert_eq!(run.out, "1. 👍 +1\n");
        assert!(run.err.is_empty());
    }

    #[test]
    fn dataset_failure_is_unexpected() {
        let run = run_with(&["random"], None);
        assert_eq!(run.code, exitcode::FAILURE);
        assert_eq!(
            run.err,
            "❌ Error: Unexpected error: Emoji dataset error: truncated\n"
        );
        assert!(run.opened);
    }

    #[test]
    fn random_prints_a_single_record() {
        let run = run_small(&["random"]);
        assert_eq!(run.code, exitcode::OK);
        assert_eq!(run.out.lines().count(), 1);
    }
}
