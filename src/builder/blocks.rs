use crate::book::Artifact;
use crate::language::{BlockKind, ColumnKind, Layout};
use crate::locale::Tag;

use super::markers::{begin, bold, caption as caption_line, end, image, instruction};
use super::text::{adjust_columns, detab, split_paragraph};
use super::Builder;

impl<'b> Builder<'b> {
    fn title(&self, tag: Tag) -> &'static str {
        self.titles
            .title(tag)
    }

    /// Close a block: end marker, then the blank line bookkeeping every
    /// block finishes with.
    fn close(&mut self, tag: Tag, buf: &mut String) {
        buf.push_str(&end(self.title(tag)));
        self.blank
            .mark_content();
        buf.push_str(
            self.blank
                .request(),
        );
    }

    fn open(&mut self, tag: Tag, caption: Option<&str>, buf: &mut String) {
        buf.push_str(
            self.blank
                .request(),
        );
        buf.push_str(&begin(self.title(tag)));
        if let Some(caption) = caption {
            buf.push_str(&caption_line(caption));
        }
    }

    /// Content wrapped in markers, lines kept exactly as given.
    pub fn typed_block(&mut self, tag: Tag, lines: &[String], caption: Option<&str>) -> String {
        let mut buf = String::new();
        self.open(tag, caption, &mut buf);
        buf.push_str(&lines.join("\n"));
        buf.push('\n');
        self.close(tag, &mut buf);
        buf
    }

    /// Content wrapped in markers, regrouped into paragraphs first.
    pub fn typed_paragraph_block(
        &mut self,
        tag: Tag,
        lines: &[String],
        caption: Option<&str>,
    ) -> String {
        let mut buf = String::new();
        self.open(tag, caption, &mut buf);
        buf.push_str(&split_paragraph(lines).join("\n"));
        buf.push('\n');
        self.close(tag, &mut buf);
        buf
    }

    pub fn block(&mut self, kind: BlockKind, lines: &[String], caption: Option<&str>) -> String {
        match kind.layout() {
            Layout::Verbatim => self.typed_block(kind.tag(), lines, caption),
            Layout::Paragraphs => self.typed_paragraph_block(kind.tag(), lines, caption),
        }
    }

    /// Lines prefixed with their 1-based position, then the block is closed
    /// under the given title.
    pub fn numbered_line_block(&mut self, tag: Tag, lines: &[String]) -> String {
        let mut buf = String::new();
        for (i, line) in lines
            .iter()
            .enumerate()
        {
            buf.push_str(&format!("{:>2}: {}\n", i + 1, line));
        }
        self.close(tag, &mut buf);
        buf
    }

    pub fn numbered_listing(&mut self, lines: &[String], caption: Option<&str>) -> String {
        let mut buf = String::new();
        self.open(Tag::EmList, caption, &mut buf);
        buf.push_str(&self.numbered_line_block(Tag::EmList, lines));
        buf
    }

    pub fn column_begin(&mut self, kind: ColumnKind, caption: &str) -> String {
        let mut buf = String::new();
        self.open(kind.tag(), Some(caption), &mut buf);
        self.blank
            .mark_content();
        buf
    }

    pub fn column_end(&mut self, kind: ColumnKind) -> String {
        let mut buf = String::new();
        self.close(kind.tag(), &mut buf);
        buf
    }

    pub fn paragraph(&mut self, lines: &[String]) -> String {
        self.blank
            .mark_content();
        format!("{}\n", lines.concat())
    }

    pub fn lead(&mut self, lines: &[String]) -> String {
        let mut buf = String::new();
        buf.push_str(&begin(self.title(Tag::Lead)));
        buf.push_str(&split_paragraph(lines).join("\n"));
        buf.push('\n');
        self.close(Tag::Lead, &mut buf);
        buf
    }

    pub fn noindent(&mut self) -> String {
        self.blank
            .mark_content();
        format!("{}\n", instruction("次の1行インデントなし"))
    }

    pub fn unordered_list(&mut self, items: &[Vec<String>]) -> String {
        let mut buf = String::new();
        buf.push_str(
            self.blank
                .request(),
        );
        for item in items {
            self.blank
                .mark_content();
            buf.push_str(&format!("●\t{}\n", item.concat()));
        }
        buf.push_str(
            self.blank
                .request(),
        );
        buf
    }

    pub fn ordered_list(&mut self, items: &[(usize, Vec<String>)]) -> String {
        let mut buf = String::new();
        buf.push_str(
            self.blank
                .request(),
        );
        for (number, lines) in items {
            self.blank
                .mark_content();
            buf.push_str(&format!("{}\t{}\n", number, lines.concat()));
        }
        buf.push_str(
            self.blank
                .request(),
        );
        buf
    }

    pub fn definition_list(&mut self, entries: &[(String, Vec<String>)]) -> String {
        let mut buf = String::new();
        buf.push_str(
            self.blank
                .request(),
        );
        for (term, body) in entries {
            self.blank
                .mark_content();
            buf.push_str(&format!("{}\n", bold(term)));
            for paragraph in split_paragraph(body) {
                buf.push_str(&format!("\t{}\n", paragraph.replace('\n', "")));
            }
            self.blank
                .mark_content();
        }
        buf.push_str(
            self.blank
                .request(),
        );
        buf
    }

    /// Number of an artifact in the chapter being rendered, as it appears in
    /// that artifact's own caption. Captions always sit in their own chapter,
    /// so they read the same as a reference from within it.
    fn caption_label(&mut self, artifact: Artifact, id: &str) -> String {
        match self
            .chapter
            .index(artifact)
            .number(id)
        {
            Some(number) => format!(
                "{}{}",
                self.catalog
                    .label(artifact),
                self.catalog
                    .format_number_without_chapter(number)
            ),
            None => {
                self.diagnostics
                    .error(
                        &self.location,
                        format!(
                            "no such {}: {}",
                            artifact
                                .name()
                                .to_lowercase(),
                            id
                        ),
                    );
                super::references::unknown(artifact, id)
            }
        }
    }

    /// Opening marker and numbered caption shared by code lists, tables
    /// and images.
    fn artifact_header(&mut self, tag: Tag, artifact: Artifact, id: &str, caption: &str) -> String {
        let mut buf = String::new();
        buf.push_str(
            self.blank
                .request(),
        );
        buf.push_str(&begin(self.title(tag)));
        let label = self.caption_label(artifact, id);
        buf.push_str(&format!(
            "{}{}{}\n",
            label,
            self.catalog
                .caption_prefix(),
            caption
        ));
        self.blank
            .mark_content();
        buf.push_str(
            self.blank
                .request(),
        );
        buf
    }

    pub fn code_list(&mut self, id: &str, caption: &str, lines: &[String], numbered: bool) -> String {
        let mut buf = self.artifact_header(Tag::List, Artifact::List, id, caption);
        if numbered {
            buf.push_str(&self.numbered_line_block(Tag::List, lines));
        } else {
            for line in lines {
                buf.push_str(&detab(line));
                buf.push('\n');
            }
            self.close(Tag::List, &mut buf);
        }
        buf
    }

    pub fn table(
        &mut self,
        id: Option<&str>,
        caption: Option<&str>,
        rows: &[Vec<String>],
        header_rows: Option<usize>,
    ) -> String {
        let mut buf = String::new();
        if let Some(caption) = caption {
            let id = id.unwrap_or_default();
            buf.push_str(&self.artifact_header(Tag::Table, Artifact::Table, id, caption));
        }

        if rows.is_empty() {
            return buf;
        }

        for (i, row) in adjust_columns(rows)
            .iter()
            .enumerate()
        {
            let cells: Vec<String> = match header_rows {
                Some(count) if i < count => row
                    .iter()
                    .map(|cell| bold(cell))
                    .collect(),
                Some(_) => row.to_vec(),
                None => row
                    .iter()
                    .enumerate()
                    .map(|(j, cell)| if j == 0 { bold(cell) } else { cell.clone() })
                    .collect(),
            };
            buf.push_str(&cells.join("\t"));
            buf.push('\n');
            self.blank
                .mark_content();
        }

        self.close(Tag::Table, &mut buf);
        buf
    }

    pub fn image(&mut self, id: &str, caption: &str, lines: &[String]) -> String {
        let mut buf = self.artifact_header(Tag::Image, Artifact::Image, id, caption);

        let bound = self
            .chapter
            .images
            .entry(id)
            .and_then(|entry| {
                entry
                    .path
                    .as_deref()
            });
        match bound {
            Some(path) => {
                buf.push_str(&format!("◆→{}←◆\n", path));
            }
            None => {
                for line in lines {
                    buf.push_str(line);
                    buf.push('\n');
                }
            }
        }

        self.close(Tag::Image, &mut buf);
        buf
    }

    /// An image outside the numbered sequence, placed by instruction alone.
    pub fn independent_image(&mut self, id: &str, caption: Option<&str>, metric: &[String]) -> String {
        let mut buf = String::new();
        buf.push_str(
            self.blank
                .request(),
        );

        match self.image_path(id) {
            Some(path) => {
                let mut placement = path.to_string();
                for value in metric {
                    placement.push(' ');
                    placement.push_str(value);
                }
                buf.push_str(&image(&placement));
            }
            None => {
                self.diagnostics
                    .warn(&self.location, format!("no such image: {}", id));
                buf.push_str(&image(id));
            }
        }
        buf.push('\n');

        if let Some(caption) = caption.filter(|caption| !caption.is_empty()) {
            buf.push_str(&format!(
                "{}{}{}\n",
                self.catalog
                    .label(Artifact::Image)
                    .trim_end(),
                self.catalog
                    .caption_prefix(),
                caption
            ));
        }

        self.blank
            .mark_content();
        buf.push_str(
            self.blank
                .request(),
        );
        buf
    }

    pub fn tex_equation(&mut self, lines: &[String]) -> String {
        let mut buf = String::new();
        buf.push_str(&begin(self.title(Tag::TexEquation)));
        buf.push_str(&lines.join("\n"));
        buf.push('\n');
        self.close(Tag::TexEquation, &mut buf);
        buf
    }

    pub fn comment(&mut self, lines: &[String], comment: Option<&str>) -> String {
        let mut text = String::new();
        if let Some(comment) = comment {
            text.push_str(comment);
        }
        text.push_str(&lines.concat());
        self.blank
            .mark_content();
        format!("{}\n", instruction(&text))
    }

    pub fn footnote(&mut self, id: &str, text: &str) -> String {
        let mark = self.footnote_mark(id);
        self.blank
            .mark_content();
        format!("{}{}\n", mark, text)
    }
}
