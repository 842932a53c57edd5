/*!
 * Checks for slide elements: titles, attributes, content and language tags.
 */

use crate::deck::model::{Document, Element, ElementKind, Scene};
use crate::language_utils;

use super::diagnostic::{Diagnostic, Location, ValidationReport};

/// Slide parameters the renderer or the authoring tools understand
pub const KNOWN_SLIDE_ATTRIBUTES: [&str; 5] = ["title", "lang", "style", "transition", "duration"];

pub struct SlideValidator;

impl SlideValidator {
    pub fn validate(document: &Document, report: &mut ValidationReport) {
        let any_lang = document
            .slides()
            .any(|(_, slide)| slide.param("lang").is_some());

        for scene in &document.scenes {
            for (idx, element) in scene.elements.iter().enumerate() {
                if element.kind() == ElementKind::Slide {
                    Self::validate_slide(scene, idx + 1, element, any_lang, report);
                }
            }
        }
    }

    fn validate_slide(
        scene: &Scene,
        position: usize,
        slide: &Element,
        any_lang: bool,
        report: &mut ValidationReport,
    ) {
        let location = || Location::Element {
            scene: scene.title.clone(),
            position,
            element_type: slide.element_type.clone(),
        };

        if slide.param("title").is_some_and(|t| t.trim().is_empty()) {
            report.push(Diagnostic::error(location(), "Slide has empty title attribute"));
        }

        let mut unknown: Vec<&str> = slide
            .parameters
            .keys()
            .map(String::as_str)
            .filter(|key| !KNOWN_SLIDE_ATTRIBUTES.contains(&key.to_lowercase().as_str()))
            .collect();
        unknown.sort_unstable();
        for key in unknown {
            report.push(Diagnostic::warning(
                location(),
                format!("Unknown slide attribute: \"{}\"", key),
            ));
        }

        if slide.content.trim().is_empty() {
            report.push(Diagnostic::warning(location(), "Slide has no content"));
        }

        match slide.param("lang") {
            Some(lang) if !language_utils::is_valid_slide_language(lang) => {
                report.push(Diagnostic::warning(
                    location(),
                    format!("Invalid language code: \"{}\"", lang),
                ));
            }
            Some(_) => {}
            None if any_lang => {
                report.push(Diagnostic::error(
                    location(),
                    "Missing \"lang\" attribute. When any slide has a \"lang\" attribute, all slides must include it",
                ));
            }
            None => {}
        }
    }
}
