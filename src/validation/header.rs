/*!
 * Checks for the `---` header block.
 */

use super::diagnostic::{Diagnostic, Location, ValidationReport};

/// Header keys authors are expected to use
pub const KNOWN_HEADER_KEYS: [&str; 6] = ["title", "author", "style", "date", "version", "description"];

/// Keys a complete header must define
pub const REQUIRED_HEADER_KEYS: [&str; 2] = ["title", "author"];

pub struct HeaderValidator;

impl HeaderValidator {
    /// Validate raw header entries; `None` means the deck has no header block
    pub fn validate(entries: Option<&[(String, String)]>, report: &mut ValidationReport) {
        let Some(entries) = entries else {
            report.push(Diagnostic::error(
                Location::Header,
                "Header is missing. Decks should start with a '---' block",
            ));
            return;
        };

        for required in REQUIRED_HEADER_KEYS {
            if !entries.iter().any(|(key, _)| key == required) {
                report.push(Diagnostic::error(
                    Location::Header,
                    format!("Required attribute \"{}\" is missing in header", required),
                ));
            }
        }

        for (key, _) in entries {
            if !KNOWN_HEADER_KEYS.contains(&key.to_lowercase().as_str()) {
                report.push(Diagnostic::warning(
                    Location::Header,
                    format!("Unknown header attribute: \"{}\"", key),
                ));
            }
        }
    }
}
