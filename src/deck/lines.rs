/*!
 * Line classification for deck sources.
 *
 * The parser and the slide renderer both work line by line. This module
 * decides what a single line *is*; the state machines that consume the
 * classified lines live in `deck::parser` and `latex::body`.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::deck::params;

/// Element header: `## Type` or `## Type(key="value", ...)`
static ELEMENT_HEADER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^##\s*(\w+)(?:\s*\((.*?)\))?\s*$").expect("Invalid element header regex")
});

/// `width=<n>` on a column marker, any key casing
static COLUMN_WIDTH_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)width\s*=\s*(\d+)").expect("Invalid column width regex")
});

/// `source='...'` or `source="..."` on an image marker
static IMAGE_SOURCE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"source\s*=\s*['"](.*?)['"]"#).expect("Invalid image source regex")
});

/// Bracket annotation followed by a dash, e.g. `[!bullet] - text`
pub static ANNOTATED_BULLET_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[![\w:,-]+\]\s*-").expect("Invalid annotated bullet regex")
});

const COLUMN_PREFIXES: [&str; 2] = ["### column", "### Column"];
const MARKER_PREFIX: &str = "###";

/// In-slide marker lines (`### Button`, `### Code`, `### Image(...)`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerKind {
    Button,
    Code,
    Image { source: Option<String> },
}

/// What a single line means
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Starts a new element
    ElementHeader {
        element_type: String,
        parameters: HashMap<String, String>,
    },
    /// Starts a layout column; `width` is `None` when no integer width was given
    ColumnHeader { width: Option<u64> },
    /// List item with its text already stripped of the bullet prefix
    Bullet(String),
    Marker(MarkerKind),
    Plain,
}

/// Match an element header line. Surrounding whitespace is ignored.
pub fn classify_structural(line: &str) -> Option<LineKind> {
    let caps = ELEMENT_HEADER_REGEX.captures(line.trim())?;
    let element_type = caps.get(1)?.as_str().to_string();
    let parameters = caps
        .get(2)
        .map(|m| params::parse_params(m.as_str()))
        .unwrap_or_default();

    Some(LineKind::ElementHeader {
        element_type,
        parameters,
    })
}

/// Whether the line opens a layout column, with or without a width
pub fn is_column_marker(line: &str) -> bool {
    let stripped = line.trim_start();
    COLUMN_PREFIXES.iter().any(|prefix| stripped.starts_with(prefix))
}

/// Width of a column marker line, if it declares one
pub fn column_width(line: &str) -> Option<u64> {
    if !is_column_marker(line) {
        return None;
    }
    COLUMN_WIDTH_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Image path from an image marker line
pub fn image_source(line: &str) -> Option<String> {
    IMAGE_SOURCE_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Classify a line of slide body content.
///
/// Precedence: column marker, button, code, image, bullet, plain.
pub fn classify_body(line: &str) -> LineKind {
    let stripped = line.trim_start();

    if is_column_marker(line) {
        return LineKind::ColumnHeader {
            width: column_width(line),
        };
    }

    if stripped.starts_with(MARKER_PREFIX) {
        if line.contains("Button") {
            return LineKind::Marker(MarkerKind::Button);
        }
        if line.contains("Code") {
            return LineKind::Marker(MarkerKind::Code);
        }
        if line.contains("Image") {
            return LineKind::Marker(MarkerKind::Image {
                source: image_source(line),
            });
        }
    }

    if ANNOTATED_BULLET_REGEX.is_match(line) {
        let text = ANNOTATED_BULLET_REGEX.replace_all(stripped, "");
        return LineKind::Bullet(text.trim().to_string());
    }

    if let Some(rest) = stripped.strip_prefix('-') {
        return LineKind::Bullet(rest.trim().to_string());
    }

    LineKind::Plain
}
