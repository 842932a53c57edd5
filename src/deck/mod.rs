/*!
 * Deck source handling: document model, line classification and parsing.
 *
 * - `model`: the parsed tree (`Document`, `Scene`, `Element`, `Header`)
 * - `lines`: classification of single source lines
 * - `params`: the `key="value"` parameter grammar of element headers
 * - `parser`: the structural parser
 */

pub mod lines;
pub mod model;
pub mod params;
pub mod parser;

pub use model::{Document, Element, ElementKind, Header, Scene};
pub use parser::{DeckParser, parse};
