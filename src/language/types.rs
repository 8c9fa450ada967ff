//! Types representing parsed block and inline commands

use serde::Deserialize;

use super::{BlockKind, ColumnKind};

/// A run of text as handed over by the compiler. Captions and block lines
/// may embed inline commands, so a line is a sequence of spans rather than a
/// plain string.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(from = "Written")]
pub struct Line(pub Vec<Span>);

#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Span {
    Text(String),
    Inline(Inline),
}

// Job files may spell a line as a bare string when it has no markup.
#[derive(Deserialize)]
#[serde(untagged)]
enum Written {
    Plain(String),
    Spans(Vec<Span>),
}

impl From<Written> for Line {
    fn from(written: Written) -> Self {
        match written {
            Written::Plain(text) => Line::from(text),
            Written::Spans(spans) => Line(spans),
        }
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Line(vec![Span::Text(text.to_string())])
    }
}

impl From<String> for Line {
    fn from(text: String) -> Self {
        Line(vec![Span::Text(text)])
    }
}

impl From<Inline> for Line {
    fn from(inline: Inline) -> Self {
        Line(vec![Span::Inline(inline)])
    }
}

/// Convenience for building a block body out of string literals.
pub fn lines<I, S>(texts: I) -> Vec<Line>
where
    I: IntoIterator<Item = S>,
    S: Into<Line>,
{
    texts
        .into_iter()
        .map(Into::into)
        .collect()
}

/// Inline commands. The argument is the raw text between the brackets of the
/// command; the upstream compiler has already split multi-argument commands.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Inline {
    Bold(String),
    Strong(String),
    Italic(String),
    Tt(String),
    Code(String),
    TtBold(String),
    TtItalic(String),
    TtBoldItalic(String),
    Underline(String),
    Superscript(String),
    Subscript(String),
    Raw(String),
    Hint(String),
    Maru(String),
    Index(String),
    HiddenIndex(String),
    Shade(String),
    Emphasis(String),
    Keytop(String),
    Balloon(String),
    Unicode(String),
    Math(String),
    #[serde(rename = "br")]
    Break,
    Keyword {
        word: String,
        alternate: Option<String>,
    },
    Ruby {
        base: String,
        reading: String,
    },
    Href {
        url: String,
        label: Option<String>,
    },
    Footnote(String),
    List(String),
    Table(String),
    Image(String),
    Icon(String),
    Chapter(String),
    Title(String),
    ChapterRef(String),
    LabelRef(String),
    Ref(String),
    PageRef(String),
    Dtp(String),
    Del(String),
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
pub struct OrderedItem {
    pub number: usize,
    pub lines: Vec<Line>,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
pub struct Definition {
    pub term: Line,
    pub body: Vec<Line>,
}

/// Block level commands, one per operation the compiler can invoke.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    Headline {
        level: u8,
        #[serde(default)]
        label: Option<String>,
        caption: Line,
    },
    Unnumbered {
        level: u8,
        caption: Line,
    },
    Circle {
        caption: Line,
    },
    Paragraph {
        lines: Vec<Line>,
    },
    Lead {
        lines: Vec<Line>,
    },
    Noindent,
    Block {
        kind: BlockKind,
        lines: Vec<Line>,
        #[serde(default)]
        caption: Option<Line>,
    },
    NumberedListing {
        lines: Vec<Line>,
        #[serde(default)]
        caption: Option<Line>,
    },
    CodeList {
        id: String,
        caption: Line,
        lines: Vec<Line>,
        #[serde(default)]
        numbered: bool,
    },
    UnorderedList {
        items: Vec<Vec<Line>>,
    },
    OrderedList {
        items: Vec<OrderedItem>,
    },
    DefinitionList {
        entries: Vec<Definition>,
    },
    /// Rows of cells. With `header_rows` the leading rows are headings (the
    /// source had a separator line after them); without it the first cell
    /// of every row is.
    Table {
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        caption: Option<Line>,
        rows: Vec<Vec<Line>>,
        #[serde(default)]
        header_rows: Option<usize>,
    },
    Image {
        id: String,
        caption: Line,
        #[serde(default)]
        lines: Vec<Line>,
    },
    IndependentImage {
        id: String,
        #[serde(default)]
        caption: Option<Line>,
        #[serde(default)]
        metric: Vec<String>,
    },
    TexEquation {
        lines: Vec<Line>,
    },
    Comment {
        lines: Vec<Line>,
        #[serde(default)]
        comment: Option<String>,
    },
    Footnote {
        id: String,
        text: Line,
    },
    ColumnBegin {
        kind: ColumnKind,
        caption: Line,
    },
    ColumnEnd {
        kind: ColumnKind,
    },
    Label {
        id: String,
    },
    Tsize {
        spec: String,
    },
    Dtp {
        text: String,
    },
}

/// A node together with the source line it came from, for diagnostics.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
pub struct Located {
    pub line: usize,
    pub node: Node,
}

impl Located {
    pub fn new(line: usize, node: Node) -> Located {
        Located { line, node }
    }
}
