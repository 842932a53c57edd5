/*!
 * Checks for scenes and for the parameters of non-slide elements.
 */

use crate::deck::model::{Document, ElementKind};

use super::diagnostic::{Diagnostic, Location, ValidationReport};

pub struct SceneValidator;

impl SceneValidator {
    pub fn validate(document: &Document, report: &mut ValidationReport) {
        if document.scenes.is_empty() {
            report.push(Diagnostic::warning(Location::Document, "Deck has no scenes"));
        }

        for (idx, scene) in document.scenes.iter().enumerate() {
            let location = Location::Scene {
                index: idx + 1,
                title: scene.title.clone(),
            };

            if scene.title.is_empty() {
                report.push(Diagnostic::error(
                    location.clone(),
                    "Scene requires a title after the colon",
                ));
            }
            if scene.elements.is_empty() {
                report.push(Diagnostic::warning(location, "Scene has no elements"));
            }

            for (position, element) in scene.elements.iter().enumerate() {
                let required = match element.kind() {
                    ElementKind::Code => Some("snippet"),
                    ElementKind::Quiz => Some("name"),
                    ElementKind::Video | ElementKind::Screencast => Some("source"),
                    ElementKind::Unknown(name) => {
                        report.push(Diagnostic::warning(
                            Self::element_location(&scene.title, position, &element.element_type),
                            format!("Unknown element type: \"{}\"", name),
                        ));
                        None
                    }
                    _ => None,
                };

                if let Some(key) = required {
                    if element.param(key).is_none() {
                        report.push(Diagnostic::warning(
                            Self::element_location(&scene.title, position, &element.element_type),
                            format!("{} element has no \"{}\" attribute", element.kind(), key),
                        ));
                    }
                }
            }
        }
    }

    fn element_location(scene: &str, position: usize, element_type: &str) -> Location {
        Location::Element {
            scene: scene.to_string(),
            position: position + 1,
            element_type: element_type.to_string(),
        }
    }
}
