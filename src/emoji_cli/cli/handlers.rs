//! One handler per command.
//!
//! Each handler makes exactly one call into the lookup library. A missing
//! argument is a validation error; a failing library call is reported on
//! stderr and does not change the exit code.

use super::render::{Output, Payload};
use crate::error::{CliError, Result};
use crate::lookup::EmojiLookup;
use tracing::debug;

fn required<'a>(arg: Option<&'a str>, message: &str) -> Result<&'a str> {
    match arg {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(CliError::validation(message)),
    }
}

fn report_failure(output: &mut Output<'_>, message: String) -> Result<()> {
    debug!(%message, "lookup failed");
    output.error(&message)?;
    Ok(())
}

pub fn run_search(
    lookup: &dyn EmojiLookup,
    output: &mut Output<'_>,
    arg: Option<&str>,
) -> Result<()> {
    let query = required(arg, "Search query is required")?;
    match lookup.search(query) {
        Ok(results) => output.success(&Payload::Records(results))?,
        Err(e) => report_failure(output, format!("Failed to search for \"{}\": {}", query, e))?,
    }
    Ok(())
}

pub fn run_emojify(
    lookup: &dyn EmojiLookup,
    output: &mut Output<'_>,
    arg: Option<&str>,
) -> Result<()> {
    let text = required(arg, "Text to emojify is required")?;
    match lookup.emojify(text) {
        Ok(converted) => output.success(&Payload::Text(converted))?,
        Err(e) => report_failure(output, format!("Failed to emojify text: {}", e))?,
    }
    Ok(())
}

pub fn run_unemojify(
    lookup: &dyn EmojiLookup,
    output: &mut Output<'_>,
    arg: Option<&str>,
) -> Result<()> {
    let text = required(arg, "Text to unemojify is required")?;
    match lookup.unemojify(text) {
        Ok(converted) => output.success(&Payload::Text(converted))?,
        Err(e) => report_failure(output, format!("Failed to unemojify text: {}", e))?,
    }
    Ok(())
}

pub fn run_get(
    lookup: &dyn EmojiLookup,
    output: &mut Output<'_>,
    arg: Option<&str>,
) -> Result<()> {
    let name = required(arg, "Emoji name is required")?;
    match lookup.get(name) {
        Ok(Some(glyph)) => output.success(&Payload::Text(glyph))?,
        Ok(None) => output.warning(&format!("Emoji \"{}\" not found", name))?,
        Err(e) => report_failure(output, format!("Failed to get emoji \"{}\": {}", name, e))?,
    }
    Ok(())
}

pub fn run_has(
    lookup: &dyn EmojiLookup,
    output: &mut Output<'_>,
    arg: Option<&str>,
) -> Result<()> {
    let name = required(arg, "Emoji name is required")?;
    match lookup.has(name) {
        Ok(found) => {
            let verdict = if found {
                format!("✅ Emoji \"{}\" exists", name)
            } else {
                format!("❌ Emoji \"{}\" not found", name)
            };
            output.success(&Payload::Text(verdict))?
        }
        Err(e) => report_failure(output, format!("Failed to check emoji \"{}\": {}", name, e))?,
    }
    Ok(())
}

pub fn run_find(
    lookup: &dyn EmojiLookup,
    output: &mut Output<'_>,
    arg: Option<&str>,
) -> Result<()> {
    let name = required(arg, "Search term is required")?;
    match lookup.find(name) {
        Ok(Some(record)) => output.success(&Payload::Record(record))?,
        Ok(None) => output.warning(&format!("No emojis found for \"{}\"", name))?,
        Err(e) => report_failure(
            output,
            format!("Failed to find emojis for \"{}\": {}", name, e),
        )?,
    }
    Ok(())
}

/// Takes no argument; the table's arity check rejects one before this runs.
pub fn run_random(
    lookup: &dyn EmojiLookup,
    output: &mut Output<'_>,
    _arg: Option<&str>,
) -> Result<()> {
    match lookup.random() {
        Ok(record) => output.success(&Payload::Record(record))?,
        Err(e) => report_failure(output, format!("Failed to get random emoji: {}", e))?,
    }
    Ok(())
}
