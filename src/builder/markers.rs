//! The fixed glyph vocabulary read by the DTP operator

pub(super) fn begin(title: &str) -> String {
    format!("◆→開始:{}←◆\n", title)
}

pub(super) fn end(title: &str) -> String {
    format!("◆→終了:{}←◆\n", title)
}

pub(super) fn caption(text: &str) -> String {
    format!("■{}\n", text)
}

/// A free-form note to the operator, inline.
pub(super) fn instruction(text: &str) -> String {
    format!("◆→DTP連絡:{}←◆", text)
}

/// Anything else between the instruction glyphs, inline.
pub(super) fn directive(text: &str) -> String {
    format!("◆→{}←◆", text)
}

pub(super) fn bold(text: &str) -> String {
    format!("★{}☆", text)
}

pub(super) fn italic(text: &str) -> String {
    format!("▲{}☆", text)
}

pub(super) fn mono(text: &str) -> String {
    format!("△{}☆", text)
}

pub(super) fn image(path: &str) -> String {
    directive(&format!("画像 {}", path))
}
