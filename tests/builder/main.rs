mod blocks;
mod references;

use dtpmark::book::{Artifact, Book, Chapter};

/// A small book: a numbered chapter with a few of everything, a chapter with
/// four images, a later chapter, an appendix and an unnumbered preface.
pub fn sample_book() -> Book {
    let mut ch01 = Chapter::new("ch01", Some("1"), "はじめに");
    ch01.file = Some("ch01.re".to_string());
    ch01.index_mut(Artifact::List)
        .register("list1");
    ch01.index_mut(Artifact::List)
        .register("list2");
    ch01.index_mut(Artifact::Table)
        .register("tbl1");
    ch01.index_mut(Artifact::Image)
        .bind("icon", "./images/icon.png");
    ch01.index_mut(Artifact::Image)
        .register("plain");
    ch01.index_mut(Artifact::Footnote)
        .register("fn1");
    ch01.index_mut(Artifact::Footnote)
        .register("fn2");

    let mut ch03 = Chapter::new("ch03", Some("3"), "Pictures");
    for id in ["a", "b", "c", "fig1"] {
        ch03.index_mut(Artifact::Image)
            .register(id);
    }

    let ch05 = Chapter::new("ch05", Some("5"), "Later");
    let appendix = Chapter::new("appA", Some("A"), "付録");

    let mut preface = Chapter::new("pre", None, "まえがき");
    preface
        .index_mut(Artifact::Table)
        .register("t");

    Book::new(vec![ch01, ch03, ch05, appendix, preface])
}

pub fn chapter<'b>(book: &'b Book, id: &str) -> &'b Chapter {
    book.chapter(id)
        .unwrap_or_else(|| panic!("fixture has no chapter {}", id))
}
