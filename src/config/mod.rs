//! Settings the backend consults while rendering

use serde::Deserialize;

/// Fallback wrapping for chapter references: nothing before the number,
/// the title in corner brackets.
pub const DEFAULT_SEPARATORS: [&str; 3] = ["", "「", "」"];

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "en")]
    English,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Deepest heading level that still carries a section number.
    pub secnolevel: u8,
    /// Comma separated text to put before the chapter number, between it and
    /// the title, and after the title.
    pub chapref: Option<String>,
    pub language: Language,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            secnolevel: 2,
            chapref: None,
            language: Language::default(),
        }
    }
}

impl Config {
    pub fn with_language(mut self, language: Language) -> Config {
        self.language = language;
        self
    }

    pub fn with_secnolevel(mut self, secnolevel: u8) -> Config {
        self.secnolevel = secnolevel;
        self
    }

    pub fn with_chapref(mut self, chapref: &str) -> Config {
        self.chapref = Some(chapref.to_string());
        self
    }
}

/// Split a chapter reference separator setting into its three parts.
/// Trailing empty parts do not count, so "a,b," has only two. Returns `None`
/// unless exactly three remain.
pub fn parse_separators(setting: &str) -> Option<[String; 3]> {
    let mut parts: Vec<&str> = setting
        .split(',')
        .collect();
    while parts.last() == Some(&"") {
        parts.pop();
    }

    match parts.as_slice() {
        [before, between, after] => Some([
            before.to_string(),
            between.to_string(),
            after.to_string(),
        ]),
        _ => None,
    }
}

pub fn default_separators() -> [String; 3] {
    DEFAULT_SEPARATORS.map(str::to_string)
}
