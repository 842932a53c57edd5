/*!
 * Parameter grammar for element headers.
 *
 * Parses the text between the parentheses of `## Slide(title="Intro", lang="EN")`
 * into key/value pairs. A token is everything between two commas; tokens
 * without `=` carry no parameter and are skipped.
 */

use log::debug;
use std::collections::HashMap;

/// Single `key=value` token after trimming and unquoting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub key: String,
    pub value: String,
}

/// Split a parameter list into raw tokens.
///
// TODO: keep quoted commas inside one token (`title="a, b"` is cut at the comma today).
pub fn tokenize(input: &str) -> impl Iterator<Item = &str> {
    input.split(',')
}

/// Parse one token, returning `None` when it has no `=`.
pub fn parse_token(token: &str) -> Option<Param> {
    let (key, value) = token.split_once('=')?;
    Some(Param {
        key: key.trim().to_string(),
        value: strip_quotes(value.trim()).to_string(),
    })
}

/// Parse a whole parameter list. Later duplicates overwrite earlier ones.
pub fn parse_params(input: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    for token in tokenize(input) {
        match parse_token(token) {
            Some(param) => {
                params.insert(param.key, param.value);
            }
            None => {
                if !token.trim().is_empty() {
                    debug!("Ignoring parameter token without '=': {:?}", token.trim());
                }
            }
        }
    }
    params
}

/// Remove one leading and one trailing double quote, if present
pub fn strip_quotes(value: &str) -> &str {
    let value = value.strip_prefix('"').unwrap_or(value);
    value.strip_suffix('"').unwrap_or(value)
}
