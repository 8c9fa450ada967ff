use std::collections::HashMap;

use crate::config::Language;

/// Keys of the block title table. Several commands can share one key (box
/// and insn, read and lead).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Tag {
    EmList,
    Command,
    Quote,
    Centering,
    FlushRight,
    Note,
    Memo,
    Important,
    Info,
    Planning,
    Shoot,
    Term,
    Notice,
    Caution,
    Point,
    Reference,
    Link,
    Best,
    Practice,
    Security,
    Expert,
    Tip,
    Instruction,
    Column,
    AlternateColumn,
    World,
    Hood,
    Edition,
    InsideOut,
    Ref,
    Sup,
    Lead,
    List,
    Image,
    TexEquation,
    Table,
    Bpo,
    Source,
}

static JAPANESE: &[(Tag, &str)] = &[
    (Tag::EmList, "インラインリスト"),
    (Tag::Command, "コマンド"),
    (Tag::Quote, "引用"),
    (Tag::Centering, "中央揃え"),
    (Tag::FlushRight, "右寄せ"),
    (Tag::Note, "ノート"),
    (Tag::Memo, "メモ"),
    (Tag::Important, "重要"),
    (Tag::Info, "情報"),
    (Tag::Planning, "プランニング"),
    (Tag::Shoot, "トラブルシュート"),
    (Tag::Term, "用語解説"),
    (Tag::Notice, "注意"),
    (Tag::Caution, "警告"),
    (Tag::Point, "ここがポイント"),
    (Tag::Reference, "参考"),
    (Tag::Link, "リンク"),
    (Tag::Best, "ベストプラクティス"),
    (Tag::Practice, "練習問題"),
    (Tag::Security, "セキュリティ"),
    (Tag::Expert, "エキスパートに訊け"),
    (Tag::Tip, "TIP"),
    (Tag::Instruction, "書式"),
    (Tag::Column, "コラム"),
    (Tag::AlternateColumn, "コラムパターン2"),
    (Tag::World, "Worldコラム"),
    (Tag::Hood, "Under The Hoodコラム"),
    (Tag::Edition, "Editionコラム"),
    (Tag::InsideOut, "InSideOutコラム"),
    (Tag::Ref, "参照"),
    (Tag::Sup, "補足"),
    (Tag::Lead, "リード"),
    (Tag::List, "リスト"),
    (Tag::Image, "図"),
    (Tag::TexEquation, "TeX式"),
    (Tag::Table, "表"),
    (Tag::Bpo, "bpo"),
    (Tag::Source, "ソースコードリスト"),
];

static ENGLISH: &[(Tag, &str)] = &[
    (Tag::EmList, "Inline List"),
    (Tag::Command, "Command"),
    (Tag::Quote, "Quote"),
    (Tag::Centering, "Centering"),
    (Tag::FlushRight, "Flush Right"),
    (Tag::Note, "Note"),
    (Tag::Memo, "Memo"),
    (Tag::Important, "Important"),
    (Tag::Info, "Information"),
    (Tag::Planning, "Planning"),
    (Tag::Shoot, "Troubleshooting"),
    (Tag::Term, "Glossary"),
    (Tag::Notice, "Notice"),
    (Tag::Caution, "Caution"),
    (Tag::Point, "Key Point"),
    (Tag::Reference, "Reference"),
    (Tag::Link, "Link"),
    (Tag::Best, "Best Practice"),
    (Tag::Practice, "Exercise"),
    (Tag::Security, "Security"),
    (Tag::Expert, "Ask the Expert"),
    (Tag::Tip, "TIP"),
    (Tag::Instruction, "Syntax"),
    (Tag::Column, "Column"),
    (Tag::AlternateColumn, "Column Pattern 2"),
    (Tag::World, "World Column"),
    (Tag::Hood, "Under The Hood Column"),
    (Tag::Edition, "Edition Column"),
    (Tag::InsideOut, "InSideOut Column"),
    (Tag::Ref, "See Also"),
    (Tag::Sup, "Supplement"),
    (Tag::Lead, "Lead"),
    (Tag::List, "List"),
    (Tag::Image, "Figure"),
    (Tag::TexEquation, "TeX Equation"),
    (Tag::Table, "Table"),
    (Tag::Bpo, "bpo"),
    (Tag::Source, "Source Code List"),
];

/// Display titles for block markers, fixed for the life of a render session.
#[derive(Debug, Clone)]
pub struct TitleTable {
    titles: HashMap<Tag, &'static str>,
}

impl TitleTable {
    pub fn new(language: Language) -> TitleTable {
        let source = match language {
            Language::Japanese => JAPANESE,
            Language::English => ENGLISH,
        };

        TitleTable {
            titles: source
                .iter()
                .copied()
                .collect(),
        }
    }

    pub fn title(&self, tag: Tag) -> &'static str {
        self.titles
            .get(&tag)
            .copied()
            .unwrap_or_default()
    }
}
