/*!
 * Document model for parsed slide decks.
 *
 * A `Document` is built once by the parser and then only read by the
 * renderer and the validators. All types serialize to JSON for the `ast`
 * command.
 */

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Default title when the header block has no `title` key
pub const DEFAULT_TITLE: &str = "Untitled";

/// Default author when the header block has no `author` key
pub const DEFAULT_AUTHOR: &str = "Unknown";

/// Deck header taken from the `---` block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub title: String,
    pub author: String,
    pub style: String,
}

impl Header {
    /// Build a header from raw `key=value` pairs, falling back to defaults.
    ///
    /// Keys other than `title`, `author` and `style` are ignored.
    pub fn from_entries(entries: &HashMap<String, String>) -> Self {
        let get = |key: &str, default: &str| {
            entries
                .get(key)
                .cloned()
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            title: get("title", DEFAULT_TITLE),
            author: get("author", DEFAULT_AUTHOR),
            style: get("style", ""),
        }
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::from_entries(&HashMap::new())
    }
}

/// Closed set of element types the renderer knows about.
///
/// Resolved case-insensitively from the type word of an element header.
/// Anything else lands in `Unknown` with the word as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Slide,
    Teleprompt,
    Code,
    Video,
    Screencast,
    Quiz,
    Button,
    Unknown(String),
}

impl ElementKind {
    pub fn from_type_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "slide" => Self::Slide,
            "teleprompt" => Self::Teleprompt,
            "code" => Self::Code,
            "video" => Self::Video,
            "screencast" => Self::Screencast,
            "quiz" => Self::Quiz,
            "button" => Self::Button,
            _ => Self::Unknown(name.to_string()),
        }
    }

    /// Capitalized name used in generated comments
    pub fn display_name(&self) -> &str {
        match self {
            Self::Slide => "Slide",
            Self::Teleprompt => "Teleprompt",
            Self::Code => "Code",
            Self::Video => "Video",
            Self::Screencast => "Screencast",
            Self::Quiz => "Quiz",
            Self::Button => "Button",
            Self::Unknown(name) => name,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One typed block inside a scene
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    /// Type word as written in the source
    #[serde(rename = "type")]
    pub element_type: String,

    /// Parameters from the header parentheses; the last duplicate key wins
    pub parameters: HashMap<String, String>,

    /// Body lines joined with newlines and trimmed as a whole
    pub content: String,
}

impl Element {
    pub fn new(element_type: impl Into<String>, parameters: HashMap<String, String>, content: impl Into<String>) -> Self {
        Self {
            element_type: element_type.into(),
            parameters,
            content: content.into(),
        }
    }

    pub fn kind(&self) -> ElementKind {
        ElementKind::from_type_name(&self.element_type)
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).map(String::as_str)
    }

    /// Parameter value or the given fallback
    pub fn param_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.param(key).unwrap_or(default)
    }
}

/// Ordered group of elements under a `# Scene:` marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scene {
    pub title: String,
    pub elements: Vec<Element>,
}

impl Scene {
    pub fn new(title: impl Into<String>, elements: Vec<Element>) -> Self {
        Self {
            title: title.into(),
            elements,
        }
    }
}

/// A fully parsed deck
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub header: Header,
    pub scenes: Vec<Scene>,
}

impl Document {
    pub fn new(header: Header, scenes: Vec<Scene>) -> Self {
        Self { header, scenes }
    }

    /// Iterate every element together with the scene it belongs to
    pub fn elements(&self) -> impl Iterator<Item = (&Scene, &Element)> {
        self.scenes
            .iter()
            .flat_map(|scene| scene.elements.iter().map(move |element| (scene, element)))
    }

    /// Iterate all slide elements in source order
    pub fn slides(&self) -> impl Iterator<Item = (&Scene, &Element)> {
        self.elements()
            .filter(|(_, element)| element.kind() == ElementKind::Slide)
    }

    pub fn element_count(&self) -> usize {
        self.scenes.iter().map(|scene| scene.elements.len()).sum()
    }
}
