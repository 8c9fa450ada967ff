/// Debounces blank separator lines between blocks.
///
/// The flag starts raised so that a file never opens with a blank line. A
/// request for a blank line answers with a newline only if content has been
/// emitted since the last one was given out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlankLine {
    seen: bool,
}

impl Default for BlankLine {
    fn default() -> Self {
        BlankLine { seen: true }
    }
}

impl BlankLine {
    pub fn new() -> BlankLine {
        BlankLine::default()
    }

    pub fn request(&mut self) -> &'static str {
        let seen = self.seen;
        self.seen = true;
        if seen {
            ""
        } else {
            "\n"
        }
    }

    pub fn mark_content(&mut self) {
        self.seen = false;
    }
}
