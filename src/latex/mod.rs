/*!
 * LaTeX Beamer output.
 *
 * - `inline`: markdown-style inline formatting of single lines
 * - `layout`: column detection and width computation
 * - `body`: slide body rendering with list grouping
 * - `renderer`: document-level rendering and element dispatch
 */

pub mod body;
pub mod inline;
pub mod layout;
pub mod renderer;

pub use renderer::{LatexRenderer, RenderSettings, render};
