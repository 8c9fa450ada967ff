//! Closed sets of block and column kinds

use serde::Deserialize;

use crate::locale::Tag;

/// How the body of a typed block is laid out between its markers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Layout {
    /// Lines kept as given, one per line (listings, commands).
    Verbatim,
    /// Lines regrouped into paragraphs at blank lines (prose).
    Paragraphs,
}

/// Every captioned block that is nothing more than its content wrapped in
/// begin and end markers.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Quote,
    Centering,
    #[serde(rename = "flushright")]
    FlushRight,
    Note,
    Memo,
    Tip,
    Info,
    Planning,
    Best,
    Important,
    Security,
    Caution,
    Notice,
    Point,
    Shoot,
    Term,
    Link,
    Reference,
    Practice,
    Expert,
    #[serde(rename = "emlist")]
    EmList,
    #[serde(rename = "cmd")]
    Command,
    #[serde(rename = "insn")]
    Instruction,
    Box,
    Bpo,
    Source,
}

impl BlockKind {
    pub fn tag(self) -> Tag {
        match self {
            BlockKind::Quote => Tag::Quote,
            BlockKind::Centering => Tag::Centering,
            BlockKind::FlushRight => Tag::FlushRight,
            BlockKind::Note => Tag::Note,
            BlockKind::Memo => Tag::Memo,
            BlockKind::Tip => Tag::Tip,
            BlockKind::Info => Tag::Info,
            BlockKind::Planning => Tag::Planning,
            BlockKind::Best => Tag::Best,
            BlockKind::Important => Tag::Important,
            BlockKind::Security => Tag::Security,
            BlockKind::Caution => Tag::Caution,
            BlockKind::Notice => Tag::Notice,
            BlockKind::Point => Tag::Point,
            BlockKind::Shoot => Tag::Shoot,
            BlockKind::Term => Tag::Term,
            BlockKind::Link => Tag::Link,
            BlockKind::Reference => Tag::Reference,
            BlockKind::Practice => Tag::Practice,
            BlockKind::Expert => Tag::Expert,
            BlockKind::EmList => Tag::EmList,
            BlockKind::Command => Tag::Command,
            // box is an alias for insn and shares its title
            BlockKind::Instruction | BlockKind::Box => Tag::Instruction,
            BlockKind::Bpo => Tag::Bpo,
            BlockKind::Source => Tag::Source,
        }
    }

    pub fn layout(self) -> Layout {
        match self {
            BlockKind::EmList
            | BlockKind::Command
            | BlockKind::Instruction
            | BlockKind::Box
            | BlockKind::Bpo
            | BlockKind::Source => Layout::Verbatim,
            _ => Layout::Paragraphs,
        }
    }
}

/// Column style containers. They open and close as separate commands with
/// ordinary content rendered in between.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Column,
    #[serde(rename = "xcolumn")]
    Alternate,
    World,
    Hood,
    Edition,
    #[serde(rename = "insideout")]
    InsideOut,
    Ref,
    Sup,
}

impl ColumnKind {
    pub fn tag(self) -> Tag {
        match self {
            ColumnKind::Column => Tag::Column,
            ColumnKind::Alternate => Tag::AlternateColumn,
            ColumnKind::World => Tag::World,
            ColumnKind::Hood => Tag::Hood,
            ColumnKind::Edition => Tag::Edition,
            ColumnKind::InsideOut => Tag::InsideOut,
            ColumnKind::Ref => Tag::Ref,
            ColumnKind::Sup => Tag::Sup,
        }
    }
}
