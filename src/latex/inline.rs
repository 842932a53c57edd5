/*!
 * Inline markdown formatting for single content lines.
 *
 * Steps run in a fixed order: annotations are removed, then `**bold**`,
 * then `*italic*`, then ampersands are escaped. The output of one step is
 * never re-matched by an earlier one.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Authoring annotations such as `[!note]` or `[!speaker:anna]`
static ANNOTATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[![\w:,-]+\]").expect("Invalid annotation regex")
});

static BOLD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*(.+?)\*\*").expect("Invalid bold regex")
});

static ITALIC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*(.+?)\*").expect("Invalid italic regex")
});

/// Escape `&` for LaTeX
pub fn escape_ampersand(text: &str) -> String {
    text.replace('&', r"\&")
}

/// Remove every `[!...]` annotation, keeping the surrounding text
pub fn strip_annotations(text: &str) -> String {
    ANNOTATION_REGEX.replace_all(text, "").into_owned()
}

/// Apply the full inline formatting pipeline to one line
pub fn format_inline(text: &str) -> String {
    let text = strip_annotations(text);
    let text = BOLD_REGEX.replace_all(&text, r"\textbf{${1}}");
    let text = ITALIC_REGEX.replace_all(&text, r"\textit{${1}}");
    escape_ampersand(&text)
}
