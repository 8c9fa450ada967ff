use dtpmark::builder::Builder;
use dtpmark::config::{Config, Language};
use dtpmark::language::{lines, BlockKind, ColumnKind, Definition, Line, Node, OrderedItem};
use dtpmark::locale::Tag;

use super::{chapter, sample_book};

fn owned(texts: &[&str]) -> Vec<String> {
    texts
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[test]
fn memo_regroups_paragraphs() {
    let book = sample_book();
    let config = Config::default();
    let mut builder = Builder::new(&book, chapter(&book, "ch01"), &config);

    // give the blank line state some content to separate from
    assert_eq!(builder.paragraph(&owned(&["本文"])), "本文\n");

    let result = builder.typed_paragraph_block(Tag::Memo, &owned(&["line1", "", "line2"]), Some("Cap"));
    assert_eq!(
        result,
        "\n◆→開始:メモ←◆\n■Cap\nline1\nline2\n◆→終了:メモ←◆\n\n"
    );
}

#[test]
fn verbatim_blocks_keep_lines() {
    let book = sample_book();
    let config = Config::default();
    let mut builder = Builder::new(&book, chapter(&book, "ch01"), &config);

    let result = builder
        .render(&Node::Block {
            kind: BlockKind::EmList,
            lines: lines(["fn main() {", "", "}"]),
            caption: None,
        })
        .unwrap();
    assert_eq!(
        result,
        "◆→開始:インラインリスト←◆\nfn main() {\n\n}\n◆→終了:インラインリスト←◆\n\n"
    );
}

#[test]
fn consecutive_blocks_share_one_blank() {
    let book = sample_book();
    let config = Config::default();
    let mut builder = Builder::new(&book, chapter(&book, "ch01"), &config);

    let mut output = String::new();
    output.push_str(&builder.paragraph(&owned(&["a"])));
    for kind in [BlockKind::Note, BlockKind::Tip, BlockKind::Command, BlockKind::Quote] {
        output.push_str(
            &builder
                .render(&Node::Block {
                    kind,
                    lines: lines(["x"]),
                    caption: None,
                })
                .unwrap(),
        );
    }
    output.push_str(&builder.paragraph(&owned(&["b"])));

    assert!(!output.contains("\n\n\n"));
    assert_eq!(
        output,
        "a\n\n◆→開始:ノート←◆\nx\n◆→終了:ノート←◆\n\n◆→開始:TIP←◆\nx\n◆→終了:TIP←◆\n\n◆→開始:コマンド←◆\nx\n◆→終了:コマンド←◆\n\n◆→開始:引用←◆\nx\n◆→終了:引用←◆\n\nb\n"
    );
}

#[test]
fn box_and_instruction_share_title() {
    let book = sample_book();
    let config = Config::default();
    let mut builder = Builder::new(&book, chapter(&book, "ch01"), &config);

    let result = builder.block(BlockKind::Box, &owned(&["cmd [options]"]), Some("使い方"));
    assert_eq!(
        result,
        "◆→開始:書式←◆\n■使い方\ncmd [options]\n◆→終了:書式←◆\n\n"
    );
}

#[test]
fn english_titles() {
    let book = sample_book();
    let config = Config::default().with_language(Language::English);
    let mut builder = Builder::new(&book, chapter(&book, "ch01"), &config);

    let result = builder.block(BlockKind::Caution, &owned(&["hot"]), None);
    assert_eq!(result, "◆→開始:Caution←◆\nhot\n◆→終了:Caution←◆\n\n");
}

#[test]
fn numbered_listing() {
    let book = sample_book();
    let config = Config::default();
    let mut builder = Builder::new(&book, chapter(&book, "ch01"), &config);

    let result = builder
        .render(&Node::NumberedListing {
            lines: lines(["x", "y"]),
            caption: Some(Line::from("C")),
        })
        .unwrap();
    assert_eq!(
        result,
        "◆→開始:インラインリスト←◆\n■C\n 1: x\n 2: y\n◆→終了:インラインリスト←◆\n\n"
    );

    let many: Vec<String> = (1..=10)
        .map(|i| format!("l{}", i))
        .collect();
    let result = builder.numbered_line_block(Tag::EmList, &many);
    assert!(result.starts_with(" 1: l1\n"));
    assert!(result.contains("\n10: l10\n"));
}

#[test]
fn columns() {
    let book = sample_book();
    let config = Config::default();
    let mut builder = Builder::new(&book, chapter(&book, "ch01"), &config);

    let mut output = String::new();
    output.push_str(&builder.column_begin(ColumnKind::Column, "題"));
    output.push_str(&builder.paragraph(&owned(&["本文"])));
    output.push_str(&builder.column_end(ColumnKind::Column));
    output.push_str(&builder.column_begin(ColumnKind::World, "w"));
    output.push_str(&builder.column_end(ColumnKind::World));

    assert_eq!(
        output,
        "◆→開始:コラム←◆\n■題\n本文\n◆→終了:コラム←◆\n\n◆→開始:Worldコラム←◆\n■w\n◆→終了:Worldコラム←◆\n\n"
    );
}

#[test]
fn lists() {
    let book = sample_book();
    let config = Config::default();
    let mut builder = Builder::new(&book, chapter(&book, "ch01"), &config);

    let mut output = String::new();
    output.push_str(&builder.paragraph(&owned(&["p"])));
    output.push_str(
        &builder
            .render(&Node::UnorderedList {
                items: vec![lines(["a"]), lines(["b", "c"])],
            })
            .unwrap(),
    );
    output.push_str(&builder.paragraph(&owned(&["q"])));
    assert_eq!(output, "p\n\n●\ta\n●\tbc\n\nq\n");

    let result = builder
        .render(&Node::OrderedList {
            items: vec![
                OrderedItem {
                    number: 1,
                    lines: lines(["one"]),
                },
                OrderedItem {
                    number: 2,
                    lines: lines(["two"]),
                },
            ],
        })
        .unwrap();
    assert_eq!(result, "\n1\tone\n2\ttwo\n\n");
}

#[test]
fn definition_list() {
    let book = sample_book();
    let config = Config::default();
    let mut builder = Builder::new(&book, chapter(&book, "ch01"), &config);

    let result = builder
        .render(&Node::DefinitionList {
            entries: vec![Definition {
                term: Line::from("用語"),
                body: lines(["説明の", "続き", "", "次段落"]),
            }],
        })
        .unwrap();
    assert_eq!(result, "★用語☆\n\t説明の続き\n\t次段落\n\n");
}

#[test]
fn code_lists() {
    let book = sample_book();
    let config = Config::default();
    let mut builder = Builder::new(&book, chapter(&book, "ch01"), &config);

    let result = builder.code_list("list1", "サンプル", &owned(&["a\tb"]), false);
    assert_eq!(
        result,
        "◆→開始:リスト←◆\nリスト1　サンプル\n\na       b\n◆→終了:リスト←◆\n\n"
    );

    let result = builder.code_list("list2", "番号付き", &owned(&["x"]), true);
    assert_eq!(
        result,
        "◆→開始:リスト←◆\nリスト2　番号付き\n\n 1: x\n◆→終了:リスト←◆\n\n"
    );
    assert!(builder
        .diagnostics()
        .is_empty());

    let result = builder.code_list("nope", "cap", &owned(&["x"]), false);
    assert!(result.contains("[UnknownList:nope]　cap\n"));
    assert_eq!(
        builder
            .diagnostics()
            .errors()
            .count(),
        1
    );
}

#[test]
fn captions_unqualified_without_numbering() {
    let book = sample_book();
    let config = Config::default().with_secnolevel(0);
    let mut builder = Builder::new(&book, chapter(&book, "ch01"), &config);

    let result = builder.code_list("list1", "サンプル", &owned(&["a"]), false);
    assert!(result.contains("リスト1　サンプル\n"));

    let config = Config::default();
    let mut builder = Builder::new(&book, chapter(&book, "pre"), &config);
    let result = builder.table(Some("t"), Some("前書きの表"), &[owned(&["k", "v"])], None);
    assert!(result.contains("表1　前書きの表\n"));
}

#[test]
fn tables() {
    let book = sample_book();
    let config = Config::default();
    let mut builder = Builder::new(&book, chapter(&book, "ch01"), &config);

    let result = builder.table(
        Some("tbl1"),
        Some("表題"),
        &[owned(&["h1", "h2"]), owned(&["a", "b"])],
        Some(1),
    );
    assert_eq!(
        result,
        "◆→開始:表←◆\n表1　表題\n\n★h1☆\t★h2☆\na\tb\n◆→終了:表←◆\n\n"
    );

    // without a separator the first column holds the headings
    let result = builder
        .render(&Node::Table {
            id: None,
            caption: None,
            rows: vec![lines(["k", "v"]), lines(["k2", "v2"])],
            header_rows: None,
        })
        .unwrap();
    assert_eq!(result, "★k☆\tv\n★k2☆\tv2\n◆→終了:表←◆\n\n");

    let result = builder.table(Some("tbl1"), Some("空"), &[], None);
    assert_eq!(result, "◆→開始:表←◆\n表1　空\n\n");
}

#[test]
fn ragged_table_rows_padded() {
    let book = sample_book();
    let config = Config::default();
    let mut builder = Builder::new(&book, chapter(&book, "ch01"), &config);

    let result = builder.table(
        None,
        None,
        &[owned(&["k", "v", "x"]), owned(&["k2"]), owned(&["k3", "v3", ""])],
        None,
    );
    assert_eq!(
        result,
        "★k☆\tv\tx\n★k2☆\t\t\n★k3☆\tv3\t\n◆→終了:表←◆\n\n"
    );
}

#[test]
fn images() {
    let book = sample_book();
    let config = Config::default();
    let mut builder = Builder::new(&book, chapter(&book, "ch01"), &config);

    let result = builder.image("icon", "アイコン", &[]);
    assert_eq!(
        result,
        "◆→開始:図←◆\n図1　アイコン\n\n◆→./images/icon.png←◆\n◆→終了:図←◆\n\n"
    );

    let result = builder.image("plain", "図版", &owned(&["ascii art"]));
    assert_eq!(
        result,
        "◆→開始:図←◆\n図2　図版\n\nascii art\n◆→終了:図←◆\n\n"
    );
}

#[test]
fn independent_images() {
    let book = sample_book();
    let config = Config::default();
    let mut builder = Builder::new(&book, chapter(&book, "ch01"), &config);

    let result = builder.independent_image("icon", Some("キャプション"), &owned(&["scale=0.5"]));
    assert_eq!(
        result,
        "◆→画像 images/icon.png scale=0.5←◆\n図　キャプション\n\n"
    );

    let result = builder.independent_image("ghost", None, &[]);
    assert_eq!(result, "◆→画像 ghost←◆\n\n");
    assert_eq!(
        builder.messages(),
        vec!["ch01.re:0: warning: no such image: ghost"]
    );
}

#[test]
fn small_blocks() {
    let book = sample_book();
    let config = Config::default();
    let mut builder = Builder::new(&book, chapter(&book, "ch01"), &config);

    assert_eq!(
        builder.tex_equation(&owned(&["E=mc^2"])),
        "◆→開始:TeX式←◆\nE=mc^2\n◆→終了:TeX式←◆\n\n"
    );
    assert_eq!(
        builder.comment(&owned(&["確認"]), Some("要")),
        "◆→DTP連絡:要確認←◆\n"
    );
    assert_eq!(builder.footnote("fn1", "注記"), "【注1】注記\n");
    assert_eq!(builder.noindent(), "◆→DTP連絡:次の1行インデントなし←◆\n");
    assert_eq!(
        builder.lead(&owned(&["a", "", "b"])),
        "◆→開始:リード←◆\na\nb\n◆→終了:リード←◆\n\n"
    );

    for node in [
        Node::Label {
            id: "x".to_string(),
        },
        Node::Tsize {
            spec: "10,20".to_string(),
        },
        Node::Dtp {
            text: "x".to_string(),
        },
    ] {
        assert_eq!(
            builder
                .render(&node)
                .unwrap(),
            ""
        );
    }
}

#[test]
fn unknown_footnote_recorded() {
    let book = sample_book();
    let config = Config::default();
    let mut builder = Builder::new(&book, chapter(&book, "ch01"), &config);

    assert_eq!(builder.footnote("x", "注記"), "[UnknownFootnote:x]注記\n");
    assert_eq!(
        builder.messages(),
        vec!["ch01.re:0: error: unknown footnote: x"]
    );
}
