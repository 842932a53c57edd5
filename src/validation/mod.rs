/*!
 * Validation module for deck authoring checks.
 *
 * These checks never influence rendering; they report problems an author
 * most likely wants to fix:
 * - Header completeness and unknown header keys
 * - Scene titles and empty scenes
 * - Slide titles, attributes, content and language tags
 * - Missing parameters on code, quiz and media elements
 *
 * # Architecture
 *
 * - `diagnostic`: Finding, location and report types
 * - `header`: Validates the `---` block
 * - `scenes`: Validates scenes and non-slide elements
 * - `slides`: Validates slide elements
 * - `service`: Orchestrates all validators
 */

pub mod diagnostic;
pub mod header;
pub mod scenes;
pub mod service;
pub mod slides;

// Re-export main types
pub use diagnostic::{Diagnostic, Location, Severity, ValidationReport};
pub use service::ValidationService;
