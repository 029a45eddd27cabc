use super::commands::Command;
use clap::{ArgAction, Parser, ValueEnum};
use unicode_width::UnicodeWidthStr;

pub const APP_NAME: &str = "emoji-cli";
pub const APP_DESCRIPTION: &str = "Friendly emoji lookups and conversions for the command line";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
pub fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

/// Process-level flags.
///
/// clap only handles the options that come before the command token. The
/// command itself and its argument are collected verbatim into `tokens` and
/// resolved against the command table, since commands are spelled as flags
/// (`--search`, `-r`) and help/version are checked before anything else.
#[derive(Parser, Debug)]
#[command(
    name = APP_NAME,
    bin_name = APP_NAME,
    about = APP_DESCRIPTION,
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// When to colour output
    #[arg(long, value_enum, value_name = "WHEN")]
    pub color: Option<ColorChoice>,

    /// Seed for the random command
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'd', long = "debug", action = ArgAction::Count)]
    pub debug: u8,

    /// Command and its argument
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        num_args = 1..,
        value_name = "COMMAND"
    )]
    pub tokens: Vec<String>,
}

/// The `emoji-cli v<version>` line printed by `--version`.
pub fn version_text() -> String {
    format!("{} v{}", APP_NAME, get_version())
}

/// Full usage text: header, commands, options and examples.
///
/// A command's aliases are listed only when it has more than one.
pub fn usage_text(commands: &[Command]) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", version_text()));
    output.push_str(&format!("{} 💖\n", APP_DESCRIPTION));
    output.push('\n');
    output.push_str(&format!(
        "Usage: {} [OPTIONS] <command> [argument]\n",
        APP_NAME
    ));

    let command_rows: Vec<(String, &str)> = commands
        .iter()
        .map(|c| (command_label(c), c.description))
        .collect();
    output.push('\n');
    output.push_str("Commands:\n");
    push_aligned(&mut output, &command_rows);

    let option_rows = [
        ("-h, --help".to_string(), "Show this help"),
        ("-v, --version".to_string(), "Show the version"),
        (
            "--color <WHEN>".to_string(),
            "When to colour output: auto, always, never [env: EMOJI_CLI_COLOR]",
        ),
        (
            "--seed <N>".to_string(),
            "Seed for the random command [env: EMOJI_CLI_SEED]",
        ),
        ("-d, --debug".to_string(), "Increase log verbosity (repeatable)"),
    ];
    output.push('\n');
    output.push_str("Options:\n");
    push_aligned(&mut output, &option_rows);

    output.push('\n');
    output.push_str("Examples:\n");
    for example in [
        "--search \"heart\"",
        "--get \"heart\"",
        "--emojify \"I love you :heart:\"",
        "--random",
    ] {
        output.push_str(&format!("  {} {}\n", APP_NAME, example));
    }

    output
}

fn command_label(command: &Command) -> String {
    if command.aliases.len() > 1 {
        format!("{} ({})", command.name, command.aliases.join(", "))
    } else {
        command.name.to_string()
    }
}

/// Two-column rows padded to the widest label, by terminal display width.
fn push_aligned(output: &mut String, rows: &[(String, &str)]) {
    let width = rows.iter().map(|(label, _)| label.width()).max().unwrap_or(0);
    for (label, text) in rows {
        let padding = " ".repeat(width - label.width());
        output.push_str(&format!("  {}{}   {}\n", label, padding, text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::COMMANDS;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn command_tokens_are_not_parsed_as_flags() {
        let cli = Cli::try_parse_from(["emoji-cli", "--search", "--color"]).unwrap();
        assert_eq!(cli.tokens, ["--search", "--color"]);
        assert_eq!(cli.color, None);

        let cli = Cli::try_parse_from(["emoji-cli", "-r"]).unwrap();
        assert_eq!(cli.tokens, ["-r"]);

        let cli = Cli::try_parse_from(["emoji-cli", "-h"]).unwrap();
        assert_eq!(cli.tokens, ["-h"]);
    }

    #[test]
    fn no_tokens_is_accepted() {
        let cli = Cli::try_parse_from(["emoji-cli"]).unwrap();
        assert!(cli.tokens.is_empty());
    }

    #[test]
    fn usage_lists_every_command_with_description() {
        let usage = usage_text(COMMANDS);
        for command in COMMANDS {
            let line = usage
                .lines()
                .find(|l| l.ends_with(command.description))
                .unwrap();
            assert!(line.trim_start().starts_with(command.name));
        }
        assert!(usage.starts_with(&version_text()));
        assert!(usage.contains("emoji-cli --search \"heart\""));
    }

    #[test]
    fn aliases_are_listed_only_when_there_are_several() {
        let usage = usage_text(COMMANDS);
        assert!(usage.contains("  find (--find, -f)"));
        assert!(usage.contains("  random (--random, --rnd, -r)"));
        assert!(!usage.contains("(--search)"));
        assert!(!usage.contains("(--has)"));
    }

    #[test]
    fn descriptions_start_in_one_column() {
        let usage = usage_text(COMMANDS);
        let columns: Vec<usize> = COMMANDS
            .iter()
            .map(|c| {
                let line = usage
                    .lines()
                    .find(|l| l.ends_with(c.description))
                    .unwrap();
                line[..line.len() - c.description.len()].width()
            })
            .collect();
        assert!(columns.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn version_text_names_the_package_version() {
        assert!(version_text().starts_with("emoji-cli v"));
        assert!(version_text().contains(env!("CARGO_PKG_VERSION")));
    }
}
