/*!
 * LaTeX Beamer renderer.
 *
 * Walks a parsed `Document` and produces presentation source. Rendering is
 * a pure function of the document, the settings and the optional language
 * filter; the same inputs always give byte-identical output.
 */

use log::debug;

use crate::deck::model::{Document, Element, ElementKind, Header, Scene};
use crate::latex::body::{self, BodyRenderer};
use crate::latex::inline::escape_ampersand;
use crate::latex::layout::{self, SlideLayout};

/// Indentation of frame content
const FRAME_INDENT: &str = "  ";
/// Indentation of content inside a column
const COLUMN_INDENT: &str = "    ";

/// Fixed parts of the preamble
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    /// Options passed to `\documentclass[..]{beamer}`
    pub document_class_options: String,
    /// Theme package loaded with `\usepackage`
    pub theme: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            document_class_options: "aspectratio=169".to_string(),
            theme: "thwsbeamertheme".to_string(),
        }
    }
}

/// Renderer for one document
pub struct LatexRenderer<'d> {
    document: &'d Document,
    settings: RenderSettings,
    target_lang: Option<String>,
}

impl<'d> LatexRenderer<'d> {
    pub fn new(document: &'d Document) -> Self {
        Self {
            document,
            settings: RenderSettings::default(),
            target_lang: None,
        }
    }

    pub fn with_settings(mut self, settings: RenderSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Only render slides whose `lang` equals `lang`. An empty value disables the filter.
    pub fn with_language(mut self, lang: Option<&str>) -> Self {
        self.target_lang = lang.filter(|l| !l.is_empty()).map(str::to_string);
        self
    }

    /// Render the whole document
    pub fn render(&self) -> String {
        let mut out = Vec::new();
        self.render_header(&mut out, &self.document.header);
        for scene in &self.document.scenes {
            self.render_scene(&mut out, scene);
        }
        out.push(r"\end{document}".to_string());

        debug!(
            "Rendered {} line(s) for language filter {:?}",
            out.len(),
            self.target_lang
        );
        out.join("\n")
    }

    fn render_header(&self, out: &mut Vec<String>, header: &Header) {
        out.push("% Generated LaTeX presentation".to_string());
        out.push(format!(
            r"\documentclass[{}]{{beamer}}",
            self.settings.document_class_options
        ));
        out.push(format!(r"\usepackage{{{}}}", self.settings.theme));
        out.push(format!(r"\title{{{}}}", header.title));
        out.push(format!(r"\author{{{}}}", header.author));
        out.push(r"\begin{document}".to_string());
        out.push(r"\begin{frame}".to_string());
        out.push(r"\titlepage".to_string());
        out.push(r"\end{frame}".to_string());
        out.push(String::new());
    }

    fn render_scene(&self, out: &mut Vec<String>, scene: &Scene) {
        out.push(format!("% Scene: {}", scene.title));
        for element in &scene.elements {
            self.render_element(out, element);
        }
        out.push(String::new());
    }

    fn render_element(&self, out: &mut Vec<String>, element: &Element) {
        let kind = element.kind();
        match &kind {
            ElementKind::Slide => {
                if let Some(target) = &self.target_lang {
                    if element.param("lang") != Some(target.as_str()) {
                        return;
                    }
                }
                render_slide(out, element);
            }
            ElementKind::Teleprompt => {
                let title = escape_ampersand(element.param_or("title", "No title"));
                out.push(unsupported_comment(&kind));
                out.push(format!("% Title: {}", title));
            }
            ElementKind::Code => render_code(out, element),
            ElementKind::Video | ElementKind::Screencast => {
                let source = escape_ampersand(element.param_or("source", "No source given"));
                out.push(unsupported_comment(&kind));
                out.push(format!("% Source: {}", source));
            }
            ElementKind::Quiz => {
                let name = escape_ampersand(element.param_or("name", "No name"));
                out.push(unsupported_comment(&kind));
                out.push(format!("% Name: {}", name));
            }
            ElementKind::Button => {}
            ElementKind::Unknown(name) => {
                out.push(format!("% Unknown element type: {}", name));
            }
        }
    }
}

fn unsupported_comment(kind: &ElementKind) -> String {
    format!("% {} element is not rendered in LaTeX", kind.display_name())
}

/// Stand-alone frame for a `code` element
fn render_code(out: &mut Vec<String>, element: &Element) {
    let snippet = escape_ampersand(element.param_or("snippet", "Code"));
    out.push(r"\begin{frame}[fragile]".to_string());
    out.push(format!(r"{FRAME_INDENT}\frametitle{{Code: {}}}", snippet));
    out.extend(body::code_placeholder(FRAME_INDENT));
    out.push(r"\end{frame}".to_string());
}

fn render_slide(out: &mut Vec<String>, element: &Element) {
    let title = escape_ampersand(element.param_or("title", "Slide"));
    out.push(r"\begin{frame}[fragile]".to_string());
    out.push(format!(r"{FRAME_INDENT}\frametitle{{{}}}", title));
    out.push(format!("{FRAME_INDENT}% Slide content:"));

    match layout::plan(&element.content) {
        SlideLayout::Single(lines) => {
            BodyRenderer::new(out, FRAME_INDENT).render_lines(lines);
        }
        SlideLayout::Columns(columns) => {
            out.push(format!(r"{FRAME_INDENT}\begin{{columns}}[t]"));
            for column in columns {
                out.push(format!(
                    r"{FRAME_INDENT}\begin{{column}}{{{}}}",
                    column.latex_width()
                ));
                BodyRenderer::new(out, COLUMN_INDENT).render_lines(column.lines);
                out.push(format!(r"{FRAME_INDENT}\end{{column}}"));
            }
            out.push(format!(r"{FRAME_INDENT}\end{{columns}}"));
        }
    }

    out.push(r"\end{frame}".to_string());
}

/// Render a document with default settings
pub fn render(document: &Document, target_lang: Option<&str>) -> String {
    LatexRenderer::new(document).with_language(target_lang).render()
}
