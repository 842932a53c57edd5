/*!
 * # vmdtex - slide deck markup to LaTeX Beamer
 *
 * A Rust library that turns lightweight slide-authoring text into LaTeX
 * Beamer source.
 *
 * ## Features
 *
 * - Parse decks made of a `---` header, `# Scene:` markers and typed
 *   `## Element(key="value")` blocks
 * - Render slides with bullet grouping, inline bold/italic, images, code
 *   placeholders and proportional multi-column layouts
 * - Render multilingual decks once per slide language
 * - Check decks for common authoring mistakes
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `deck`: Document model and structural parser:
 *   - `deck::lines`: Line classification
 *   - `deck::params`: Element parameter grammar
 *   - `deck::parser`: Text to document tree
 * - `latex`: LaTeX output:
 *   - `latex::inline`: Inline formatting
 *   - `latex::layout`: Column layout
 *   - `latex::body`: Slide body rendering
 *   - `latex::renderer`: Document rendering and element dispatch
 * - `validation`: Authoring checks
 * - `app_config`: Configuration management
 * - `app_controller`: Main application controller
 * - `file_utils`: File system operations
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod deck;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod latex;
pub mod validation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, RenderedDeck};
pub use deck::{DeckParser, Document, Element, ElementKind, Header, Scene};
pub use errors::{AppError, ConfigError, DeckError};
pub use latex::{LatexRenderer, RenderSettings};
pub use validation::{ValidationReport, ValidationService};
