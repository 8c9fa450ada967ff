//! Helpers shared by the block renderers

const TAB_WIDTH: usize = 8;

/// Regroup lines into paragraphs. A blank line ends a paragraph; the lines
/// within one are run together without a separator, as is usual for
/// Japanese text. Runs of blank lines do not make empty paragraphs.
pub(super) fn split_paragraph(lines: &[String]) -> Vec<String> {
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current: Option<String> = None;

    for line in lines {
        if line.is_empty() {
            if let Some(paragraph) = current.take() {
                paragraphs.push(paragraph);
            }
        } else {
            current
                .get_or_insert_with(String::new)
                .push_str(line);
        }
    }

    if let Some(paragraph) = current {
        paragraphs.push(paragraph);
    }

    paragraphs
}

/// Expand tabs to spaces at fixed stops.
pub(super) fn detab(line: &str) -> String {
    let mut result = String::with_capacity(line.len());
    let mut column = 0;

    for c in line.chars() {
        if c == '\t' {
            let width = TAB_WIDTH - column % TAB_WIDTH;
            result.push_str(&" ".repeat(width));
            column += width;
        } else {
            result.push(c);
            column += 1;
        }
    }

    result
}

/// Even out table rows: trailing blank cells are dropped, then every row is
/// padded with empty cells to the width of the widest.
pub(super) fn adjust_columns(rows: &[Vec<String>]) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = rows.to_vec();
    for row in &mut rows {
        while row
            .last()
            .is_some_and(|cell| cell.trim().is_empty())
        {
            row.pop();
        }
    }

    let width = rows
        .iter()
        .map(Vec::len)
        .max()
        .unwrap_or(0);
    for row in &mut rows {
        row.resize(width, String::new());
    }
    rows
}
