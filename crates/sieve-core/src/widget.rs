use std::sync::{Arc, Mutex};

use sieve_types::{LookupResult, NavAction};

use crate::cursor::NavigationCursor;
use crate::render::{DisplaySurface, TextSurface, render_for_display, render_for_export};
use crate::source::{SourceGroup, StaticSourceGroup};

/// Word input the widget writes the matched headword back into
pub trait WordField: Send + Sync {
    fn set_text(&mut self, text: &str);
}

/// Shared word input, readable by whoever holds a clone
#[derive(Debug, Clone, Default)]
pub struct WordInput(Arc<Mutex<String>>);

impl WordInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.0.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl WordField for WordInput {
    fn set_text(&mut self, text: &str) {
        *self.0.lock().unwrap_or_else(|e| e.into_inner()) = text.to_string();
    }
}

/// What the widget currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// e.g. `2/5`
    pub counter: String,
    pub text: String,
    /// Headword and source of the shown definition
    pub info: String,
}

/// Browses the definitions found for one word, one at a time
pub struct MultiDefinitionWidget<S: DisplaySurface = TextSurface> {
    group: Box<dyn SourceGroup>,
    word_field: Option<Box<dyn WordField>>,
    cursor: NavigationCursor,
    surface: S,
    counter: String,
    info: String,
}

impl MultiDefinitionWidget<TextSurface> {
    pub fn new(word_field: Option<Box<dyn WordField>>) -> Self {
        Self::with_surface(TextSurface::new(), word_field)
    }
}

impl<S: DisplaySurface> MultiDefinitionWidget<S> {
    pub fn with_surface(surface: S, word_field: Option<Box<dyn WordField>>) -> Self {
        Self {
            group: Box::new(StaticSourceGroup::new()),
            word_field,
            cursor: NavigationCursor::new(),
            surface,
            counter: "0/0".to_string(),
            info: String::new(),
        }
    }

    pub fn set_source_group(&mut self, group: Box<dyn SourceGroup>) {
        self.group = group;
    }

    /// Definitions for `word` from the source group, minus those without text
    pub fn definitions(&self, word: &str) -> Vec<LookupResult> {
        self.group
            .define(word)
            .into_iter()
            .filter(LookupResult::has_definition)
            .collect()
    }

    /// Replace the shown definitions with those found for `word`.
    /// Returns the number of navigable results.
    pub fn lookup(&mut self, word: &str) -> usize {
        self.reset();

        let results = self.group.define(word);
        let found = results.len();
        if self.cursor.set_results(results).is_some() {
            self.refresh();
        }

        tracing::debug!(
            "Lookup '{}': {} results, {} with definitions",
            word,
            found,
            self.cursor.len()
        );
        self.cursor.len()
    }

    pub fn navigate(&mut self, action: NavAction) -> Option<usize> {
        let position = match action {
            NavAction::First => self.cursor.first(),
            NavAction::Previous => self.cursor.previous(),
            NavAction::Next => self.cursor.next(),
            NavAction::Last => self.cursor.last(),
        };

        if position.is_some() {
            self.refresh();
        }
        position
    }

    pub fn first(&mut self) -> Option<usize> {
        self.navigate(NavAction::First)
    }

    pub fn previous(&mut self) -> Option<usize> {
        self.navigate(NavAction::Previous)
    }

    pub fn next(&mut self) -> Option<usize> {
        self.navigate(NavAction::Next)
    }

    pub fn last(&mut self) -> Option<usize> {
        self.navigate(NavAction::Last)
    }

    pub fn reset(&mut self) {
        self.cursor.reset();
        self.surface.set_text("");
        self.info.clear();
        self.counter = self.cursor.counter();
    }

    /// Definition text for the flashcard backend, formatted by the source's
    /// configured display mode. Empty when nothing is selected or the source
    /// has since left the group.
    pub fn export_current(&self) -> String {
        let Some(current) = self.cursor.current() else {
            return String::new();
        };

        let Some(source) = self.group.source(&current.source) else {
            tracing::warn!("Source '{}' is no longer configured", current.source);
            return String::new();
        };

        render_for_export(current, source.display_mode, &self.surface)
    }

    pub fn current(&self) -> Option<&LookupResult> {
        self.cursor.current()
    }

    pub fn position(&self) -> Option<usize> {
        self.cursor.position()
    }

    pub fn len(&self) -> usize {
        self.cursor.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cursor.is_empty()
    }

    pub fn view(&self) -> ViewState {
        ViewState {
            counter: self.counter.clone(),
            text: self.surface.to_plain_text(),
            info: self.info.clone(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// For front-ends that let the user edit the shown definition
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn refresh(&mut self) {
        self.counter = self.cursor.counter();

        let Some(current) = self.cursor.current() else {
            return;
        };

        self.surface.set_text(&render_for_display(current));
        self.info = format!(
            "<strong>{}</strong> in <em>{}</em>",
            current.headword, current.source
        );
        if let Some(field) = self.word_field.as_mut() {
            field.set_text(&current.headword);
        }
    }
}
