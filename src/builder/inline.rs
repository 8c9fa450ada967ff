//! Transcription of inline commands into operator markup

use crate::book::Artifact;
use crate::language::Inline;

use super::markers::{bold, directive, image, instruction, italic, mono};
use super::Builder;

/// Name this output answers to in `@<raw>{|top|...}` target lists.
const TARGET: &str = "top";

fn circled(number: &str) -> String {
    format!("{}{}", number, directive(&format!("丸数字{}", number)))
}

/// Raw passthrough. An optional leading `|name,name|` restricts the text to
/// the listed outputs; a literal `\n` in the argument becomes a newline.
fn raw(text: &str) -> String {
    match pattern!(r"(?s)^\|(.*?)\|(.*)$").captures(text) {
        Some(captures) => {
            let targets = captures
                .get(1)
                .map_or("", |m| m.as_str());
            let body = captures
                .get(2)
                .map_or("", |m| m.as_str());
            let wanted = targets
                .split(',')
                .any(|target| {
                    target
                        .chars()
                        .filter(|c| !c.is_whitespace())
                        .collect::<String>()
                        == TARGET
                });
            if wanted {
                body.replace("\\n", "\n")
            } else {
                String::new()
            }
        }
        None => text.replace("\\n", "\n"),
    }
}

fn balloon(text: &str) -> String {
    let expanded = pattern!(r"@maru\[(\d+)\]").replace_all(text, |captures: &regex::Captures| {
        circled(&captures[1])
    });
    format!("\t←{}", expanded)
}

fn keyword(word: &str, alternate: Option<&str>) -> String {
    match alternate {
        Some(alternate) => format!("{}（{}）", bold(word), alternate.trim()),
        None => bold(word),
    }
}

fn ruby(base: &str, reading: &str) -> String {
    format!(
        "{}{}",
        base,
        instruction(&format!("「{}」に「{}」とルビ", base, reading))
    )
}

fn href(url: &str, label: Option<&str>) -> String {
    match label {
        Some(label) => format!("{}（{}）", label, mono(url)),
        None => mono(url),
    }
}

/// Text followed by a note to the operator about how to set it.
fn annotated(text: &str, note: &str) -> String {
    format!("{}{}", text, instruction(&format!("「{}」{}", text, note)))
}

impl<'b> Builder<'b> {
    pub(super) fn transcribe(&mut self, inline: &Inline) -> String {
        match inline {
            Inline::Bold(text) | Inline::Strong(text) => bold(text),
            Inline::Italic(text) => italic(text),
            Inline::Tt(text) | Inline::Code(text) => mono(text),
            Inline::TtBold(text) => format!("{}{}", bold(text), directive("等幅フォント太字")),
            Inline::TtItalic(text) => format!("{}{}", italic(text), directive("等幅フォントイタ")),
            Inline::TtBoldItalic(text) => {
                format!("{}{}", italic(text), directive("等幅フォント太字イタ"))
            }
            Inline::Underline(text) => format!("＠{}＠{}", text, directive("＠〜＠部分に下線")),
            Inline::Superscript(text) => annotated(text, "は上付き"),
            Inline::Subscript(text) => annotated(text, "は下付き"),
            Inline::Shade(text) => annotated(text, "に網カケ"),
            Inline::Emphasis(text) => annotated(text, "に傍点"),
            Inline::Raw(text) => raw(text),
            Inline::Hint(text) => format!(
                "{}{}{}",
                directive("ヒントスタイルここから"),
                text,
                directive("ヒントスタイルここまで")
            ),
            Inline::Maru(text) => circled(text),
            Inline::Index(text) => format!("{}{}", text, directive(&format!("索引項目:{}", text))),
            Inline::HiddenIndex(text) => directive(&format!("索引項目:{}", text)),
            Inline::Keytop(text) => format!("{}{}", text, directive(&format!("キートップ{}", text))),
            Inline::Balloon(text) => balloon(text),
            Inline::Unicode(code) => self.unicode(code),
            Inline::Math(text) => format!(
                "{}{}{}",
                directive("TeX式ここから"),
                text,
                directive("TeX式ここまで")
            ),
            Inline::Break => "\n".to_string(),
            Inline::Keyword { word, alternate } => keyword(word, alternate.as_deref()),
            Inline::Ruby { base, reading } => ruby(base, reading),
            Inline::Href { url, label } => href(url, label.as_deref()),
            Inline::Footnote(id) => self.footnote_mark(id),
            Inline::List(id) => self.resolve_artifact_label(Artifact::List, id),
            Inline::Table(id) => self.resolve_artifact_label(Artifact::Table, id),
            Inline::Image(id) => self.resolve_artifact_label(Artifact::Image, id),
            Inline::Icon(id) => self.icon(id),
            Inline::Chapter(id) => self.resolve_chapter_number(id),
            Inline::Title(id) => self.resolve_chapter_title(id),
            Inline::ChapterRef(id) => self.resolve_chapter_reference(id),
            Inline::LabelRef(id) | Inline::Ref(id) => format!("「{}」", directive(id)),
            Inline::PageRef(id) => format!("●ページ{}", directive(id)),
            Inline::Dtp(_) | Inline::Del(_) => String::new(),
        }
    }

    fn icon(&mut self, id: &str) -> String {
        match self.image_path(id) {
            Some(path) => image(path),
            None => {
                self.diagnostics
                    .warn(&self.location, format!("no such icon image: {}", id));
                image(id)
            }
        }
    }

    fn unicode(&mut self, code: &str) -> String {
        match u32::from_str_radix(code.trim(), 16)
            .ok()
            .and_then(char::from_u32)
        {
            Some(c) => c.to_string(),
            None => {
                self.diagnostics
                    .warn(&self.location, format!("invalid character code: {}", code));
                code.to_string()
            }
        }
    }
}
