/*!
 * Structural parser: deck source text to `Document`.
 *
 * Parsing never fails. Missing header keys fall back to defaults, text
 * before the first scene or before the first element of a scene is dropped,
 * and malformed parameter tokens are skipped.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::deck::lines::{self, LineKind};
use crate::deck::model::{Document, Element, Header, Scene};
use crate::deck::params;

/// First `--- ... ---` block
static HEADER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?ms)^---\s*(.*?)\s*---").expect("Invalid header regex")
});

/// `# Scene: <title>` marker line
static SCENE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^# Scene:[ \t]*(.*?)[ \t]*\r?$").expect("Invalid scene regex")
});

/// Parser state while scanning a scene body
#[derive(Debug)]
enum ElementState {
    Outside,
    InElement {
        element_type: String,
        parameters: HashMap<String, String>,
        lines: Vec<String>,
    },
}

impl ElementState {
    /// Close the open element, if any
    fn finish(self) -> Option<Element> {
        match self {
            Self::Outside => None,
            Self::InElement {
                element_type,
                parameters,
                lines,
            } => Some(Element::new(element_type, parameters, lines.join("\n").trim())),
        }
    }
}

/// Parser for the deck text format
pub struct DeckParser<'a> {
    input: &'a str,
}

impl<'a> DeckParser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Parse the whole input
    pub fn parse(&self) -> Document {
        let header = self.parse_header();
        let scenes = self.parse_scenes();
        debug!(
            "Parsed deck '{}' with {} scene(s)",
            header.title,
            scenes.len()
        );
        Document::new(header, scenes)
    }

    /// Raw `key=value` pairs of the header block, or `None` without a block
    pub fn header_entries(&self) -> Option<Vec<(String, String)>> {
        let caps = HEADER_REGEX.captures(self.input)?;
        let body = caps.get(1).map_or("", |m| m.as_str());

        let entries = body
            .lines()
            .filter_map(|line| {
                let (key, value) = line.split_once('=')?;
                Some((
                    key.trim().to_string(),
                    params::strip_quotes(value.trim()).to_string(),
                ))
            })
            .collect();
        Some(entries)
    }

    pub fn parse_header(&self) -> Header {
        let entries: HashMap<String, String> = self
            .header_entries()
            .unwrap_or_default()
            .into_iter()
            .collect();
        Header::from_entries(&entries)
    }

    /// Split the input on scene markers. Text before the first marker is dropped.
    pub fn parse_scenes(&self) -> Vec<Scene> {
        let markers: Vec<_> = SCENE_REGEX.captures_iter(self.input).collect();

        markers
            .iter()
            .enumerate()
            .map(|(idx, caps)| {
                let marker = caps.get(0).map_or(0..0, |m| m.range());
                let body_end = markers
                    .get(idx + 1)
                    .and_then(|next| next.get(0))
                    .map_or(self.input.len(), |m| m.start());
                let title = caps.get(1).map_or("", |m| m.as_str()).trim();
                let body = &self.input[marker.end..body_end];

                Scene::new(title, Self::parse_elements(body))
            })
            .collect()
    }

    /// Split one scene body into elements
    pub fn parse_elements(scene_text: &str) -> Vec<Element> {
        let mut elements = Vec::new();
        let mut state = ElementState::Outside;

        for line in scene_text.lines() {
            match lines::classify_structural(line) {
                Some(LineKind::ElementHeader {
                    element_type,
                    parameters,
                }) => {
                    if let Some(element) = state.finish() {
                        elements.push(element);
                    }
                    state = ElementState::InElement {
                        element_type,
                        parameters,
                        lines: Vec::new(),
                    };
                }
                _ => {
                    if let ElementState::InElement { lines, .. } = &mut state {
                        lines.push(line.to_string());
                    }
                }
            }
        }

        if let Some(element) = state.finish() {
            elements.push(element);
        }
        elements
    }
}

/// Parse deck source text into a `Document`
pub fn parse(input: &str) -> Document {
    DeckParser::new(input).parse()
}
