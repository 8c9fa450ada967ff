use dtpmark::book::Artifact;
use dtpmark::builder::Builder;
use dtpmark::config::{Config, Language};
use dtpmark::language::Inline;

use super::{chapter, sample_book};

#[test]
fn same_chapter_unqualified_other_chapter_qualified() {
    let book = sample_book();
    let config = Config::default().with_language(Language::English);

    let mut builder = Builder::new(&book, chapter(&book, "ch03"), &config);
    assert_eq!(builder.resolve_artifact_label(Artifact::Image, "fig1"), "Figure 4");
    assert_eq!(
        builder.resolve_artifact_label(Artifact::Image, "ch03|fig1"),
        "Figure 4"
    );

    let mut builder = Builder::new(&book, chapter(&book, "ch05"), &config);
    assert_eq!(
        builder.resolve_artifact_label(Artifact::Image, "ch03|fig1"),
        "Figure 3.4"
    );
    assert!(builder
        .diagnostics()
        .is_empty());
}

#[test]
fn japanese_labels() {
    let book = sample_book();
    let config = Config::default();
    let mut builder = Builder::new(&book, chapter(&book, "ch01"), &config);

    assert_eq!(builder.inline(&Inline::List("list2".to_string())), "リスト2");
    assert_eq!(builder.inline(&Inline::Table("tbl1".to_string())), "表1");
    assert_eq!(builder.inline(&Inline::Image("plain".to_string())), "図2");

    let mut builder = Builder::new(&book, chapter(&book, "ch05"), &config);
    assert_eq!(builder.inline(&Inline::List("ch01|list1".to_string())), "リスト1.1");
    assert_eq!(builder.inline(&Inline::Image("ch03|a".to_string())), "図3.1");
}

#[test]
fn unnumbered_owner_never_qualifies() {
    let book = sample_book();
    let config = Config::default();
    let mut builder = Builder::new(&book, chapter(&book, "ch01"), &config);

    assert_eq!(builder.resolve_artifact_label(Artifact::Table, "pre|t"), "表1");
}

#[test]
fn unresolved_artifacts_recorded() {
    let book = sample_book();
    let config = Config::default();
    let mut builder = Builder::new(&book, chapter(&book, "ch01"), &config);
    builder.locate(20);

    assert_eq!(
        builder.resolve_artifact_label(Artifact::Image, "nope"),
        "[UnknownImage:nope]"
    );
    assert_eq!(
        builder.resolve_artifact_label(Artifact::List, "ch99|x"),
        "[UnknownChapter:ch99]"
    );
    assert_eq!(
        builder.messages(),
        vec![
            "ch01.re:20: error: unknown image: nope",
            "ch01.re:20: error: unknown chapter: ch99",
        ]
    );
}

#[test]
fn chapter_reference_default_separators() {
    let book = sample_book();
    let config = Config::default();
    let mut builder = Builder::new(&book, chapter(&book, "ch05"), &config);

    assert_eq!(builder.resolve_chapter_reference("ch01"), "第1章「はじめに」");
    assert_eq!(builder.resolve_chapter_reference("appA"), "A「付録」");
    assert_eq!(builder.resolve_chapter_reference("pre"), "「まえがき」");
    assert!(builder
        .diagnostics()
        .is_empty());
}

#[test]
fn chapter_reference_configured_separators() {
    let book = sample_book();
    let config = Config::default().with_chapref("<,>,!");
    let mut builder = Builder::new(&book, chapter(&book, "ch05"), &config);

    assert_eq!(
        builder.inline(&Inline::ChapterRef("ch01".to_string())),
        "<第1章>はじめに!"
    );
    assert!(builder
        .diagnostics()
        .is_empty());
}

#[test]
fn malformed_separators_fall_back() {
    let book = sample_book();
    let config = Config::default().with_chapref("a,b");
    let mut builder = Builder::new(&book, chapter(&book, "ch05"), &config);

    assert_eq!(builder.resolve_chapter_reference("ch01"), "第1章「はじめに」");
    assert_eq!(
        builder
            .diagnostics()
            .errors()
            .count(),
        1
    );
    assert_eq!(
        builder
            .diagnostics()
            .recorded()
            .len(),
        1
    );
}

#[test]
fn unknown_chapter_reference_is_recoverable() {
    let book = sample_book();
    let config = Config::default();
    let mut builder = Builder::new(&book, chapter(&book, "ch01"), &config);
    builder.locate(12);

    assert_eq!(
        builder.resolve_chapter_reference("ch99"),
        "[UnknownChapter:ch99]"
    );
    assert_eq!(
        builder.messages(),
        vec!["ch01.re:12: error: unknown chapter: ch99"]
    );

    // and rendering carries on
    assert_eq!(builder.paragraph(&["続き".to_string()]), "続き\n");
    assert_eq!(builder.resolve_chapter_reference("ch01"), "第1章「はじめに」");
}

#[test]
fn chapter_numbers_and_titles() {
    let book = sample_book();
    let config = Config::default();
    let mut builder = Builder::new(&book, chapter(&book, "ch05"), &config);

    assert_eq!(builder.inline(&Inline::Chapter("ch01".to_string())), "第1章");
    assert_eq!(builder.inline(&Inline::Chapter("appA".to_string())), "A");
    assert_eq!(builder.inline(&Inline::Chapter("pre".to_string())), "");
    assert_eq!(builder.inline(&Inline::Title("ch03".to_string())), "Pictures");
    assert_eq!(
        builder.inline(&Inline::Title("ch99".to_string())),
        "[UnknownChapter:ch99]"
    );
    assert_eq!(
        builder
            .diagnostics()
            .errors()
            .count(),
        1
    );
}
