//! Read-only view of the book being rendered: its chapters, their numbers
//! and the registries that number lists, tables, images and footnotes.

mod chapter;

pub use chapter::*;

use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Book {
    pub chapters: Vec<Chapter>,
}

impl Book {
    pub fn new(chapters: Vec<Chapter>) -> Book {
        Book { chapters }
    }

    pub fn chapter(&self, id: &str) -> Option<&Chapter> {
        self.chapters
            .iter()
            .find(|chapter| chapter.id == id)
    }
}
