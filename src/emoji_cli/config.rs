use crate::cli::setup::{Cli, ColorChoice};
use clap::ValueEnum;

pub const COLOR_ENV: &str = "EMOJI_CLI_COLOR";
pub const SEED_ENV: &str = "EMOJI_CLI_SEED";

/// Runtime settings for one invocation.
///
/// Flags win over the environment. Environment values are read leniently:
/// an unusable one is dropped with a warning instead of failing the run, so
/// help and usage keep working whatever the shell exports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub color: ColorChoice,
    /// Fixed seed for `random`; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Number of `-d` flags given.
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: ColorChoice::Auto,
            seed: None,
            verbosity: 0,
        }
    }
}

impl Config {
    /// Builds the config from parsed flags and an environment lookup.
    /// Returns the warnings for environment values that were ignored.
    pub fn resolve(cli: &Cli, env: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let mut warnings = Vec::new();

        let color = cli.color.or_else(|| {
            let raw = env(COLOR_ENV)?;
            let parsed = ColorChoice::from_str(raw.trim(), true).ok();
            if parsed.is_none() {
                warnings.push(format!(
                    "Ignoring {}={:?}: expected auto, always or never",
                    COLOR_ENV, raw
                ));
            }
            parsed
        });

        let seed = cli.seed.or_else(|| {
            let raw = env(SEED_ENV)?;
            let parsed = raw.trim().parse::<u64>().ok();
            if parsed.is_none() {
                warnings.push(format!(
                    "Ignoring {}={:?}: expected an unsigned integer",
                    SEED_ENV, raw
                ));
            }
            parsed
        });

        let config = Self {
            color: color.unwrap_or_default(),
            seed,
            verbosity: cli.debug,
        };
        (config, warnings)
    }

    /// Applies the colour choice to `colored`'s global switch.
    ///
    /// `Auto` leaves detection to `colored`, which honours `NO_COLOR`,
    /// `CLICOLOR` and `CLICOLOR_FORCE`.
    pub fn apply_color(&self) {
        match self.color {
            ColorChoice::Always => colored::control::set_override(true),
            ColorChoice::Never => colored::control::set_override(false),
            ColorChoice::Auto => colored::control::unset_override(),
        }
    }
}
