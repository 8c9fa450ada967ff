use crate::language::RenderError;

use super::Builder;

/// Deepest heading level the builder understands.
pub const DEEPEST: u8 = 5;

/// Section counters for heading levels 2 through 5. Level 1 is the chapter
/// itself, whose number comes from the book rather than from counting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Numbering {
    counters: [u32; 4],
}

impl Numbering {
    pub fn new() -> Numbering {
        Numbering::default()
    }

    /// Account for a heading at `level`: bump its counter and zero every
    /// deeper one. Returns the counters from level 2 down to `level`, or
    /// `None` if there is no such level.
    pub fn advance(&mut self, level: u8) -> Option<&[u32]> {
        match level {
            1 => {
                self.counters = [0; 4];
                Some(&[])
            }
            2..=DEEPEST => {
                let i = usize::from(level - 2);
                self.counters[i] += 1;
                for counter in &mut self.counters[i + 1..] {
                    *counter = 0;
                }
                Some(&self.counters[..=i])
            }
            _ => None,
        }
    }

    /// Current value of the counter for `level`; always zero for the chapter
    /// level and for levels that don't exist.
    pub fn counter(&self, level: u8) -> u32 {
        match level {
            2..=DEEPEST => self.counters[usize::from(level - 2)],
            _ => 0,
        }
    }
}

impl<'b> Builder<'b> {
    /// Fail on a heading level outside 1..=5.
    pub(super) fn check_level(&self, level: u8) -> Result<(), RenderError> {
        if (1..=DEEPEST).contains(&level) {
            Ok(())
        } else {
            Err(RenderError::HeadingLevel(
                self.location
                    .clone(),
                level,
            ))
        }
    }

    /// Numbered heading. The only command that can fail outright: a level
    /// outside 1..=5 aborts the render.
    pub fn headline(
        &mut self,
        level: u8,
        _label: Option<&str>,
        caption: &str,
    ) -> Result<String, RenderError> {
        self.check_level(level)?;
        let counters = self
            .numbering
            .advance(level)
            .map(<[u32]>::to_vec)
            .unwrap_or_default();

        let mut prefix = self.heading_prefix(level, &counters);
        if level > self.config.secnolevel {
            prefix.clear();
        }

        let mut buf = String::new();
        buf.push_str(
            self.blank
                .request(),
        );
        buf.push_str(&format!("■H{}■{}{}\n", level, prefix, caption));
        self.blank
            .mark_content();
        Ok(buf)
    }

    fn heading_prefix(&self, level: u8, counters: &[u32]) -> String {
        let space = self
            .catalog
            .heading_space();

        let number = match self
            .chapter
            .present_number()
        {
            Some(number) => number,
            None => return String::new(),
        };

        if level == 1 {
            if self
                .chapter
                .has_numeric_number()
            {
                format!(
                    "{}{}",
                    self.catalog
                        .chapter(number),
                    space
                )
            } else {
                format!("{}{}", number, space)
            }
        } else {
            let mut prefix = number.to_string();
            for counter in counters {
                prefix.push('.');
                prefix.push_str(&counter.to_string());
            }
            prefix.push_str(space);
            prefix
        }
    }

    /// Heading that takes no part in section numbering.
    pub fn unnumbered(&mut self, level: u8, caption: &str) -> String {
        self.blank
            .mark_content();
        format!("■H{}■{}\n", level, caption)
    }

    pub fn circle(&mut self, caption: &str) -> String {
        self.blank
            .mark_content();
        format!("・\t{}\n", caption)
    }
}
