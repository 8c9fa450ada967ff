use serde::Serialize;
use tinytemplate::TinyTemplate;
use tracing::error;

use crate::book::Artifact;
use crate::config::Language;

struct Phrases {
    list: &'static str,
    table: &'static str,
    image: &'static str,
    caption_prefix: &'static str,
    heading_space: &'static str,
    chapter: &'static str,
    footnote: &'static str,
}

static JAPANESE: Phrases = Phrases {
    list: "リスト",
    table: "表",
    image: "図",
    caption_prefix: "　",
    heading_space: "　",
    chapter: "第{number}章",
    footnote: "【注{number}】",
};

static ENGLISH: Phrases = Phrases {
    list: "List ",
    table: "Table ",
    image: "Figure ",
    caption_prefix: " ",
    heading_space: " ",
    chapter: "Chapter {number}",
    footnote: "【Note {number}】",
};

static FORMAT_NUMBER: &str = "{chapter}.{number}";
static FORMAT_NUMBER_WITHOUT_CHAPTER: &str = "{number}";

#[derive(Serialize)]
struct Fields<'a> {
    chapter: &'a str,
    number: &'a str,
}

/// Label strings and number formats for one language.
pub struct Catalog {
    phrases: &'static Phrases,
    templates: TinyTemplate<'static>,
}

impl Catalog {
    pub fn new(language: Language) -> Catalog {
        let phrases = match language {
            Language::Japanese => &JAPANESE,
            Language::English => &ENGLISH,
        };

        let mut templates = TinyTemplate::new();
        templates.set_default_formatter(&tinytemplate::format_unescaped);

        // all of these are literals above; a failure here is a typo
        for (name, text) in [
            ("format_number", FORMAT_NUMBER),
            ("format_number_without_chapter", FORMAT_NUMBER_WITHOUT_CHAPTER),
            ("chapter", phrases.chapter),
            ("footnote", phrases.footnote),
        ] {
            templates
                .add_template(name, text)
                .unwrap_or_else(|e| panic!("template {}: {}", name, e));
        }

        Catalog { phrases, templates }
    }

    fn fill(&self, name: &str, chapter: &str, number: &str) -> String {
        self.templates
            .render(name, &Fields { chapter, number })
            .unwrap_or_else(|e| {
                error!("Unable to fill template {}: {}", name, e);
                String::new()
            })
    }

    /// Name of the artifact as it prefixes a caption or reference.
    pub fn label(&self, artifact: Artifact) -> &'static str {
        match artifact {
            Artifact::List => self.phrases.list,
            Artifact::Table => self.phrases.table,
            Artifact::Image => self.phrases.image,
            Artifact::Footnote => "",
        }
    }

    pub fn caption_prefix(&self) -> &'static str {
        self.phrases.caption_prefix
    }

    /// Space between a heading's number and its caption.
    pub fn heading_space(&self) -> &'static str {
        self.phrases.heading_space
    }

    pub fn format_number(&self, chapter: &str, number: usize) -> String {
        self.fill("format_number", chapter, &number.to_string())
    }

    pub fn format_number_without_chapter(&self, number: usize) -> String {
        self.fill("format_number_without_chapter", "", &number.to_string())
    }

    /// How a numeric chapter number reads in running text.
    pub fn chapter(&self, number: &str) -> String {
        self.fill("chapter", "", number)
    }

    pub fn footnote_mark(&self, number: usize) -> String {
        self.fill("footnote", "", &number.to_string())
    }
}
