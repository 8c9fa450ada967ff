//! The DTP text builder.
//!
//! One [`Builder`] renders one chapter. The compiler hands it each parsed
//! command in document order and concatenates the fragments it returns; the
//! builder keeps the section counters, the blank line state and the log of
//! diagnostics for the duration of that one chapter and nothing longer.

use tracing::{debug, info};

use crate::book::{Book, Chapter};
use crate::config::Config;
use crate::language::{Inline, Line, Located, Node, RenderError, Span};
use crate::locale::{Catalog, TitleTable};
use crate::problem::{Diagnostics, Location};

mod blank;
mod blocks;
mod inline;
mod markers;
mod numbering;
mod references;
mod text;

pub use blank::BlankLine;
pub use numbering::Numbering;

pub struct Builder<'b> {
    book: &'b Book,
    chapter: &'b Chapter,
    config: &'b Config,
    catalog: Catalog,
    titles: TitleTable,
    numbering: Numbering,
    blank: BlankLine,
    diagnostics: Diagnostics,
    location: Location,
}

impl<'b> Builder<'b> {
    pub fn new(book: &'b Book, chapter: &'b Chapter, config: &'b Config) -> Builder<'b> {
        Builder {
            book,
            chapter,
            config,
            catalog: Catalog::new(config.language),
            titles: TitleTable::new(config.language),
            numbering: Numbering::new(),
            blank: BlankLine::new(),
            diagnostics: Diagnostics::new(),
            location: Location::new(chapter.filename(), 0),
        }
    }

    /// Set the source line that subsequent diagnostics are reported against.
    pub fn locate(&mut self, line: usize) {
        self.location
            .line = line;
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Errors then warnings, formatted for display.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics
            .messages()
    }

    pub fn numbering(&self) -> &Numbering {
        &self.numbering
    }

    /// Render a whole chapter's worth of commands. Stops at the first fatal
    /// error; recoverable problems end up in the diagnostics instead.
    pub fn render_document(&mut self, nodes: &[Located]) -> Result<String, RenderError> {
        info!(
            "Rendering chapter {} ({} node{})",
            self.chapter
                .id,
            nodes.len(),
            if nodes.len() == 1 { "" } else { "s" }
        );

        let mut output = String::new();
        for located in nodes {
            self.locate(located.line);
            let fragment = self.render(&located.node)?;
            output.push_str(&fragment);
        }

        if !self
            .diagnostics
            .is_empty()
        {
            debug!(
                "{} diagnostic(s) recorded",
                self.diagnostics
                    .recorded()
                    .len()
            );
        }

        Ok(output)
    }

    /// Render one block level command.
    pub fn render(&mut self, node: &Node) -> Result<String, RenderError> {
        debug!(line = self.location.line, ?node);

        let result = match node {
            Node::Headline {
                level,
                label,
                caption,
            } => {
                // before the caption, so a bad level records nothing
                self.check_level(*level)?;
                let caption = self.compose(caption);
                return self.headline(*level, label.as_deref(), &caption);
            }
            Node::Unnumbered { level, caption } => {
                let caption = self.compose(caption);
                self.unnumbered(*level, &caption)
            }
            Node::Circle { caption } => {
                let caption = self.compose(caption);
                self.circle(&caption)
            }
            Node::Paragraph { lines } => {
                let lines = self.compose_all(lines);
                self.paragraph(&lines)
            }
            Node::Lead { lines } => {
                let lines = self.compose_all(lines);
                self.lead(&lines)
            }
            Node::Noindent => self.noindent(),
            Node::Block {
                kind,
                lines,
                caption,
            } => {
                let lines = self.compose_all(lines);
                let caption = self.compose_caption(caption);
                self.block(*kind, &lines, caption.as_deref())
            }
            Node::NumberedListing { lines, caption } => {
                let lines = self.compose_all(lines);
                let caption = self.compose_caption(caption);
                self.numbered_listing(&lines, caption.as_deref())
            }
            Node::CodeList {
                id,
                caption,
                lines,
                numbered,
            } => {
                let caption = self.compose(caption);
                let lines = self.compose_all(lines);
                self.code_list(id, &caption, &lines, *numbered)
            }
            Node::UnorderedList { items } => {
                let items: Vec<Vec<String>> = items
                    .iter()
                    .map(|item| self.compose_all(item))
                    .collect();
                self.unordered_list(&items)
            }
            Node::OrderedList { items } => {
                let items: Vec<(usize, Vec<String>)> = items
                    .iter()
                    .map(|item| (item.number, self.compose_all(&item.lines)))
                    .collect();
                self.ordered_list(&items)
            }
            Node::DefinitionList { entries } => {
                let entries: Vec<(String, Vec<String>)> = entries
                    .iter()
                    .map(|entry| (self.compose(&entry.term), self.compose_all(&entry.body)))
                    .collect();
                self.definition_list(&entries)
            }
            Node::Table {
                id,
                caption,
                rows,
                header_rows,
            } => {
                let caption = self.compose_caption(caption);
                let rows: Vec<Vec<String>> = rows
                    .iter()
                    .map(|row| self.compose_all(row))
                    .collect();
                self.table(id.as_deref(), caption.as_deref(), &rows, *header_rows)
            }
            Node::Image { id, caption, lines } => {
                let caption = self.compose(caption);
                let lines = self.compose_all(lines);
                self.image(id, &caption, &lines)
            }
            Node::IndependentImage {
                id,
                caption,
                metric,
            } => {
                let caption = self.compose_caption(caption);
                self.independent_image(id, caption.as_deref(), metric)
            }
            Node::TexEquation { lines } => {
                let lines = self.compose_all(lines);
                self.tex_equation(&lines)
            }
            Node::Comment { lines, comment } => {
                let lines = self.compose_all(lines);
                self.comment(&lines, comment.as_deref())
            }
            Node::Footnote { id, text } => {
                let text = self.compose(text);
                self.footnote(id, &text)
            }
            Node::ColumnBegin { kind, caption } => {
                let caption = self.compose(caption);
                self.column_begin(*kind, &caption)
            }
            Node::ColumnEnd { kind } => self.column_end(*kind),
            // accepted so documents using them still compile, but they have
            // no counterpart in this output
            Node::Label { .. } | Node::Tsize { .. } | Node::Dtp { .. } => String::new(),
        };

        Ok(result)
    }

    /// Flatten a line into text, rendering any inline commands in it.
    fn compose(&mut self, line: &Line) -> String {
        let mut result = String::new();
        for span in &line.0 {
            match span {
                Span::Text(text) => result.push_str(text),
                Span::Inline(inline) => {
                    let fragment = self.inline(inline);
                    result.push_str(&fragment);
                }
            }
        }
        result
    }

    fn compose_all(&mut self, lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|line| self.compose(line))
            .collect()
    }

    fn compose_caption(&mut self, caption: &Option<Line>) -> Option<String> {
        caption
            .as_ref()
            .map(|line| self.compose(line))
    }

    /// Render one inline command on its own, as the compiler does when it
    /// builds the text of a paragraph.
    pub fn inline(&mut self, inline: &Inline) -> String {
        self.transcribe(inline)
    }
}
