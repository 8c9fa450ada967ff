//! Labels for numbered artifacts and for references to other chapters

use crate::book::{Artifact, Chapter};
use crate::config::{default_separators, parse_separators};

use super::Builder;

/// Placeholder left in the text where a reference could not be resolved.
pub(super) fn unknown(artifact: Artifact, id: &str) -> String {
    format!("[Unknown{}:{}]", artifact.name(), id)
}

fn unknown_chapter(id: &str) -> String {
    format!("[UnknownChapter:{}]", id)
}

impl<'b> Builder<'b> {
    /// Split a reference of the form `chapter|id` into the chapter it names
    /// and the local id; a bare id belongs to the current chapter. An unknown
    /// chapter is recorded and its placeholder returned as the error.
    fn split_reference<'r>(&mut self, reference: &'r str) -> Result<(&'b Chapter, &'r str), String> {
        let book = self.book;
        match pattern!(r"^(\w+)\|(.+)$").captures(reference) {
            Some(captures) => {
                let (Some(chapter), Some(id)) = (captures.get(1), captures.get(2)) else {
                    return Ok((self.chapter, reference));
                };
                match book.chapter(chapter.as_str()) {
                    Some(owner) => Ok((owner, id.as_str())),
                    None => {
                        self.diagnostics
                            .error(
                                &self.location,
                                format!("unknown chapter: {}", chapter.as_str()),
                            );
                        Err(unknown_chapter(chapter.as_str()))
                    }
                }
            }
            None => Ok((self.chapter, reference)),
        }
    }

    /// Display text for a reference to a list, table or image. References
    /// into the current chapter carry only the sequence number; references
    /// into another numbered chapter are qualified with its number.
    pub fn resolve_artifact_label(&mut self, artifact: Artifact, reference: &str) -> String {
        let (owner, id) = match self.split_reference(reference) {
            Ok(pair) => pair,
            Err(placeholder) => return placeholder,
        };

        let number = match owner
            .index(artifact)
            .number(id)
        {
            Some(number) => number,
            None => {
                self.diagnostics
                    .error(
                        &self.location,
                        format!(
                            "unknown {}: {}",
                            artifact
                                .name()
                                .to_lowercase(),
                            reference
                        ),
                    );
                return unknown(artifact, reference);
            }
        };

        let qualifier = if owner.id == self.chapter.id || self.config.secnolevel == 0 {
            None
        } else {
            owner.present_number()
        };

        let number = match qualifier {
            Some(chapter) => self
                .catalog
                .format_number(chapter, number),
            None => self
                .catalog
                .format_number_without_chapter(number),
        };

        format!(
            "{}{}",
            self.catalog
                .label(artifact),
            number
        )
    }

    pub(super) fn footnote_mark(&mut self, id: &str) -> String {
        match self
            .chapter
            .footnotes
            .number(id)
        {
            Some(number) => self
                .catalog
                .footnote_mark(number),
            None => {
                self.diagnostics
                    .error(&self.location, format!("unknown footnote: {}", id));
                unknown(Artifact::Footnote, id)
            }
        }
    }

    /// Path of a bound image in the current chapter, without a leading `./`.
    pub(super) fn image_path(&self, id: &str) -> Option<&'b str> {
        let chapter: &'b Chapter = self.chapter;
        chapter
            .images
            .entry(id)
            .and_then(|entry| {
                entry
                    .path
                    .as_deref()
            })
            .map(|path| {
                path.strip_prefix("./")
                    .unwrap_or(path)
            })
    }

    fn chapter_or_record(&mut self, id: &str) -> Option<&'b Chapter> {
        let book = self.book;
        let found = book.chapter(id);
        if found.is_none() {
            self.diagnostics
                .error(&self.location, format!("unknown chapter: {}", id));
        }
        found
    }

    /// How a chapter's number reads in running text.
    fn chapter_number_text(&self, chapter: &Chapter) -> String {
        match chapter.present_number() {
            Some(number) if chapter.has_numeric_number() => self
                .catalog
                .chapter(number),
            Some(number) => number.to_string(),
            None => String::new(),
        }
    }

    pub fn resolve_chapter_number(&mut self, id: &str) -> String {
        match self.chapter_or_record(id) {
            Some(chapter) => self.chapter_number_text(chapter),
            None => unknown_chapter(id),
        }
    }

    pub fn resolve_chapter_title(&mut self, id: &str) -> String {
        match self.chapter_or_record(id) {
            Some(chapter) => chapter
                .title
                .clone(),
            None => unknown_chapter(id),
        }
    }

    /// The three strings wrapped around a chapter reference, falling back to
    /// the defaults (and recording why) if the configured ones are malformed.
    fn separators(&mut self) -> [String; 3] {
        let config = self.config;
        match config
            .chapref
            .as_deref()
        {
            None => default_separators(),
            Some(setting) => match parse_separators(setting) {
                Some(separators) => separators,
                None => {
                    self.diagnostics
                        .error(
                            &self.location,
                            "--chapsplitter must have exactly 3 parameters with comma.",
                        );
                    default_separators()
                }
            },
        }
    }

    /// Chapter number and title wrapped in the configured separators.
    pub fn resolve_chapter_reference(&mut self, id: &str) -> String {
        let [before, between, after] = self.separators();
        match self.chapter_or_record(id) {
            Some(chapter) => format!(
                "{}{}{}{}{}",
                before,
                self.chapter_number_text(chapter),
                between,
                chapter.title,
                after
            ),
            None => unknown_chapter(id),
        }
    }
}
