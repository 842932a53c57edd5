/*!
 * Slide body rendering.
 *
 * Turns the lines of one slide (or of one column) into LaTeX. Consecutive
 * bullet lines are grouped into one `itemize` block; any other emitting
 * line closes an open block first.
 */

use crate::deck::lines::{self, LineKind, MarkerKind};
use crate::latex::inline;

/// Whether an `itemize` block is currently open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListState {
    #[default]
    OutsideList,
    InsideList,
}

/// Shaded placeholder box used for code snippets
pub fn code_placeholder(indent: &str) -> Vec<String> {
    vec![
        format!(r"{indent}\begin{{center}}"),
        format!(r"{indent}  \colorbox{{gray!20}}{{\begin{{minipage}}{{0.9\textwidth}}"),
        format!(r"{indent}    \vspace{{1em}}"),
        format!(r"{indent}    \centering"),
        format!(r"{indent}    \textbf{{Code-Snippet not implemented}}"),
        format!(r"{indent}    \vspace{{1em}}"),
        format!(r"{indent}  \end{{minipage}}}}"),
        format!(r"{indent}\end{{center}}"),
    ]
}

/// Centered image at 70% of the text width
pub fn image_block(indent: &str, source: &str) -> Vec<String> {
    vec![
        format!(r"{indent}\begin{{center}}"),
        format!(r"{indent}  \includegraphics[width=0.7\textwidth]{{{source}}}"),
        format!(r"{indent}\end{{center}}"),
    ]
}

/// Line renderer for one bucket of slide content
pub struct BodyRenderer<'o> {
    out: &'o mut Vec<String>,
    indent: &'o str,
    state: ListState,
}

impl<'o> BodyRenderer<'o> {
    /// Render into `out`, prefixing every emitted line with `indent`
    pub fn new(out: &'o mut Vec<String>, indent: &'o str) -> Self {
        Self {
            out,
            indent,
            state: ListState::OutsideList,
        }
    }

    pub fn state(&self) -> ListState {
        self.state
    }

    /// Render all lines and close a trailing list block
    pub fn render_lines<'l>(mut self, lines: impl IntoIterator<Item = &'l str>) {
        for line in lines {
            self.render_line(line);
        }
        self.close_list();
    }

    /// Feed one line through the state machine
    pub fn render_line(&mut self, line: &str) {
        match lines::classify_body(line) {
            LineKind::ColumnHeader { .. } | LineKind::Marker(MarkerKind::Button) => {}
            LineKind::Marker(MarkerKind::Code) => {
                self.close_list();
                let block = code_placeholder(self.indent);
                self.out.extend(block);
            }
            LineKind::Marker(MarkerKind::Image { source: Some(source) }) => {
                self.close_list();
                let block = image_block(self.indent, &source);
                self.out.extend(block);
            }
            LineKind::Marker(MarkerKind::Image { source: None }) => {}
            LineKind::Bullet(text) => {
                self.open_list();
                let item = inline::format_inline(&text);
                self.out.push(format!(r"{}  \item {}", self.indent, item));
            }
            LineKind::Plain | LineKind::ElementHeader { .. } => {
                self.close_list();
                let formatted = inline::format_inline(line);
                if formatted.trim().is_empty() {
                    self.out.push(format!(r"{}\vspace{{1em}}", self.indent));
                } else {
                    self.out.push(format!("{}{}", self.indent, formatted));
                }
            }
        }
    }

    fn open_list(&mut self) {
        if self.state == ListState::OutsideList {
            self.out.push(format!(r"{}\begin{{itemize}}", self.indent));
            self.state = ListState::InsideList;
        }
    }

    fn close_list(&mut self) {
        if self.state == ListState::InsideList {
            self.out.push(format!(r"{}\end{{itemize}}", self.indent));
            self.state = ListState::OutsideList;
        }
    }
}
