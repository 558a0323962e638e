//! Tag payload parser — `{type} name description`.
//!
//! Pure text-to-triple parsing, independent of host objects, so the
//! grammar can be tested without constructing doclets.

use regex::Regex;
use std::sync::LazyLock;

// Brace-delimited type, whitespace-delimited name, rest of line as
// description. Unanchored: the payload may carry leading text.
static RE_ARGUMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\S+)\}\s+(\S+)\s*(.*)").unwrap());

/// Raw capture triple from one tag payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArgument {
    pub type_text: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Parse one tag payload.
///
/// Returns `None` when the text lacks the `{type} name` shape. Capture
/// groups the engine did not fill stay `None` — absent is not the same
/// as present-but-blank.
pub fn parse_argument(text: &str) -> Option<ParsedArgument> {
    let caps = RE_ARGUMENT.captures(text)?;
    Some(ParsedArgument {
        type_text: caps.get(1).map(|m| m.as_str().to_string()),
        name: caps.get(2).map(|m| m.as_str().to_string()),
        description: caps.get(3).map(|m| m.as_str().to_string()),
    })
}
