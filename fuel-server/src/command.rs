//! Chat command parsing.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::Postcode;

/// Help text for the commands this bot answers.
pub const HELP: &[&str] =
    &["!fuel <postcode> - tells you if you should fill up and finds the best nearby servo"];

/// `fuel 4000`, `!fuel 4000`, `fuel4000`, any case, at the start of the message.
/// Trailing text is allowed as long as a fifth digit doesn't follow.
static FUEL_COMMAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^!?fuel ?([0-9]{4})(?:[^0-9]|$)")
        .unwrap_or_else(|e| panic!("invalid command regex: {e}"))
});

/// Extract the postcode from a fuel command, or `None` if `text` isn't one.
pub fn parse_command(text: &str) -> Option<Postcode> {
    let captures = FUEL_COMMAND.captures(text.trim())?;
    Postcode::parse(&captures[1]).ok()
}
