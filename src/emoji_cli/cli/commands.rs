//! The command table and the checks run against it before a handler fires.

use super::handlers;
use super::render::Output;
use crate::error::{CliError, Result};
use crate::lookup::EmojiLookup;

/// Runs one command against the lookup library with the first argument token.
pub type Handler = fn(&dyn EmojiLookup, &mut Output<'_>, Option<&str>) -> Result<()>;

pub struct Command {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    /// Whether exactly one argument is expected; otherwise none is accepted.
    pub requires_args: bool,
    pub handler: Handler,
}

impl Command {
    pub fn matches(&self, token: &str) -> bool {
        self.name == token || self.aliases.contains(&token)
    }
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("requires_args", &self.requires_args)
            .finish()
    }
}

pub static COMMANDS: &[Command] = &[
    Command {
        name: "search",
        aliases: &["--search"],
        description: "Search for emojis by name or pattern",
        requires_args: true,
        handler: handlers::run_search,
    },
    Command {
        name: "emojify",
        aliases: &["--emojify"],
        description: "Convert text to emojis",
        requires_args: true,
        handler: handlers::run_emojify,
    },
    Command {
        name: "unemojify",
        aliases: &["--unemojify"],
        description: "Convert emojis back to text",
        requires_args: true,
        handler: handlers::run_unemojify,
    },
    Command {
        name: "get",
        aliases: &["--get"],
        description: "Get a specific emoji by name",
        requires_args: true,
        handler: handlers::run_get,
    },
    Command {
        name: "has",
        aliases: &["--has"],
        description: "Check if an emoji exists",
        requires_args: true,
        handler: handlers::run_has,
    },
    Command {
        name: "find",
        aliases: &["--find", "-f"],
        description: "Find emojis by name",
        requires_args: true,
        handler: handlers::run_find,
    },
    Command {
        name: "random",
        aliases: &["--random", "--rnd", "-r"],
        description: "Get a random emoji",
        requires_args: false,
        handler: handlers::run_random,
    },
];

/// First command in the table whose name or alias equals `token`.
pub fn resolve_command(token: &str) -> Option<&'static Command> {
    if token.is_empty() {
        return None;
    }
    COMMANDS.iter().find(|command| command.matches(token))
}

/// Checks the argument count against the command's arity.
///
/// Only presence is checked: tokens after the first are ignored by handlers.
pub fn validate_args(command: &Command, args: &[String]) -> Result<()> {
    match (command.requires_args, args.is_empty()) {
        (true, true) => Err(CliError::validation(format!(
            "Command \"{}\" requires arguments",
            command.name
        ))),
        (false, false) => Err(CliError::validation(format!(
            "Command \"{}\" does not accept arguments",
            command.name
        ))),
        _ => Ok(()),
    }
}
