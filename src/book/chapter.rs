use serde::Deserialize;

/// The numbered artifacts a chapter keeps a registry of.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Artifact {
    List,
    Table,
    Image,
    Footnote,
}

impl Artifact {
    pub fn name(self) -> &'static str {
        match self {
            Artifact::List => "List",
            Artifact::Table => "Table",
            Artifact::Image => "Image",
            Artifact::Footnote => "Footnote",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
pub struct Entry {
    pub id: String,
    /// Only images are ever bound to a file.
    #[serde(default)]
    pub path: Option<String>,
}

/// Registry of one kind of artifact within a chapter. Sequence numbers are
/// assigned in order of registration, starting from 1.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Index {
    entries: Vec<Entry>,
}

impl Index {
    pub fn new() -> Index {
        Index::default()
    }

    pub fn register(&mut self, id: impl Into<String>) -> usize {
        self.push(Entry {
            id: id.into(),
            path: None,
        })
    }

    pub fn bind(&mut self, id: impl Into<String>, path: impl Into<String>) -> usize {
        self.push(Entry {
            id: id.into(),
            path: Some(path.into()),
        })
    }

    fn push(&mut self, entry: Entry) -> usize {
        self.entries
            .push(entry);
        self.entries
            .len()
    }

    pub fn number(&self, id: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.id == id)
            .map(|i| i + 1)
    }

    pub fn entry(&self, id: &str) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Chapter {
    pub id: String,
    /// Digits for ordinary chapters, something like "A" for appendices,
    /// nothing at all for prefaces and the like.
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub title: String,
    /// Source file, used when reporting diagnostics.
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub lists: Index,
    #[serde(default)]
    pub tables: Index,
    #[serde(default)]
    pub images: Index,
    #[serde(default)]
    pub footnotes: Index,
}

impl Chapter {
    pub fn new(id: impl Into<String>, number: Option<&str>, title: impl Into<String>) -> Chapter {
        Chapter {
            id: id.into(),
            number: number.map(str::to_string),
            title: title.into(),
            ..Chapter::default()
        }
    }

    /// The chapter number if there is one worth printing.
    pub fn present_number(&self) -> Option<&str> {
        self.number
            .as_deref()
            .filter(|number| !number.is_empty())
    }

    pub fn has_numeric_number(&self) -> bool {
        match self.present_number() {
            Some(number) => number
                .chars()
                .all(|c| c.is_ascii_digit()),
            None => false,
        }
    }

    pub fn filename(&self) -> &str {
        self.file
            .as_deref()
            .unwrap_or(&self.id)
    }

    pub fn index(&self, artifact: Artifact) -> &Index {
        match artifact {
            Artifact::List => &self.lists,
            Artifact::Table => &self.tables,
            Artifact::Image => &self.images,
            Artifact::Footnote => &self.footnotes,
        }
    }

    pub fn index_mut(&mut self, artifact: Artifact) -> &mut Index {
        match artifact {
            Artifact::List => &mut self.lists,
            Artifact::Table => &mut self.tables,
            Artifact::Image => &mut self.images,
            Artifact::Footnote => &mut self.footnotes,
        }
    }
}
