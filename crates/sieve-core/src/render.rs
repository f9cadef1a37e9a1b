use sieve_types::{LookupResult, RenderMode};

use crate::format::{markdown_nop, nl2br};

/// Text area a definition is shown in
pub trait DisplaySurface {
    fn set_text(&mut self, text: &str);

    fn to_plain_text(&self) -> String;

    /// Markdown source of what is shown. Rich-text surfaces convert back; plain ones return the text.
    fn to_markdown(&self) -> String {
        self.to_plain_text()
    }
}

/// Plain in-memory surface
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSurface {
    text: String,
}

impl TextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl DisplaySurface for TextSurface {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn to_plain_text(&self) -> String {
        self.text.clone()
    }
}

/// Text shown on screen. Any markdown styling is left to the surface.
pub fn render_for_display(result: &LookupResult) -> String {
    result.definition.clone().unwrap_or_default()
}

/// Text handed to the flashcard backend.
///
/// `mode` comes from the source's current configuration, `surface` holds what
/// is displayed (the user may have edited it).
pub fn render_for_export(
    result: &LookupResult,
    mode: RenderMode,
    surface: &dyn DisplaySurface,
) -> String {
    match mode {
        RenderMode::Raw | RenderMode::Plaintext => nl2br(&surface.to_plain_text()),
        RenderMode::Markdown => markdown_nop(&surface.to_plain_text()),
        RenderMode::MarkdownHtml => markdown_nop(&surface.to_markdown()),
        RenderMode::Html => result.original_html.clone().unwrap_or_default(),
    }
}
