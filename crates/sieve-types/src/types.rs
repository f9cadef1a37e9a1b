use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    ConfigChanged,
    Lookup(String),
    Navigate(NavAction),
    Reset,
    ShowCurrent,
    ExportCurrent,
    /// Send the current definition to Anki, with an optional example sentence
    CreateCard {
        sentence: Option<String>,
    },
    ImportKindle {
        path: String,
        highlights_only: bool,
    },
    Quit,
    ShowDefinition {
        counter: String,
        info: String,
        text: String,
    },
    ShowExport(String),
    Status(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    First,
    Previous,
    Next,
    Last,
}

/// How a source's content is interpreted when producing display or export text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    Raw,
    #[default]
    Plaintext,
    Markdown,
    MarkdownHtml,
    Html,
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RenderMode::Raw => write!(f, "raw"),
            RenderMode::Plaintext => write!(f, "plaintext"),
            RenderMode::Markdown => write!(f, "markdown"),
            RenderMode::MarkdownHtml => write!(f, "markdown_html"),
            RenderMode::Html => write!(f, "html"),
        }
    }
}

/// One definition returned by a dictionary source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub headword: String,
    pub definition: Option<String>,
    pub source: String,
    pub render_mode: RenderMode,
    pub original_html: Option<String>,
}

impl LookupResult {
    pub fn new(headword: impl Into<String>, definition: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            headword: headword.into(),
            definition: Some(definition.into()),
            source: source.into(),
            render_mode: RenderMode::default(),
            original_html: None,
        }
    }

    pub fn with_mode(mut self, render_mode: RenderMode) -> Self {
        self.render_mode = render_mode;
        self
    }

    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.original_html = Some(html.into());
        self
    }

    /// Results without definition text are never navigable
    pub fn has_definition(&self) -> bool {
        self.definition.is_some()
    }
}

/// A looked-up word together with the context it was read in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingNote {
    pub lookup_term: String,
    pub sentence: String,
    pub book_name: String,
    /// Local time, `YYYY-MM-DD HH:MM:SS`
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRecord {
    pub word: String,
    pub lemma: String,
    pub language: String,
    pub source: String,
    pub lemmatization: bool,
    pub success: bool,
}
