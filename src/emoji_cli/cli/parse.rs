//! Splits the raw command tokens into a command and its arguments.

pub const HELP_TOKENS: [&str; 2] = ["--help", "-h"];
pub const VERSION_TOKENS: [&str; 2] = ["--version", "-v"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    pub command: String,
    pub args: Vec<String>,
    pub help: bool,
}

impl ParsedArgs {
    fn help() -> Self {
        Self {
            help: true,
            ..Self::default()
        }
    }

    pub fn is_version(&self) -> bool {
        VERSION_TOKENS.contains(&self.command.as_str())
    }

    /// The argument handed to the command's handler.
    pub fn first_arg(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

/// No tokens, or a help token first, yields a help request and ignores the rest.
pub fn parse_args<S: AsRef<str>>(tokens: &[S]) -> ParsedArgs {
    let Some((first, rest)) = tokens.split_first() else {
        return ParsedArgs::help();
    };
    if HELP_TOKENS.contains(&first.as_ref()) {
        return ParsedArgs::help();
    }
    ParsedArgs {
        command: first.as_ref().to_string(),
        args: rest.iter().map(|s| s.as_ref().to_string()).collect(),
        help: false,
    }
}
