use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use rusqlite::{Connection, OpenFlags};
use sieve_types::{LookupRecord, ReadingNote};

use crate::clippings::{Highlight, parse_clippings};
use crate::error::ImportError;
use crate::history::{Lemmatizer, LookupRecorder};

const SOURCE_NAME: &str = "kindle";

/// Imports word lookups from a mounted Kindle
pub struct KindleVocabImporter {
    root: PathBuf,
    language: String,
}

/// Result of one import run
#[derive(Debug, Default)]
pub struct ImportSummary {
    pub notes: Vec<ReadingNote>,
    /// Lookups in the target language
    pub found: usize,
    /// Lookups new to the history
    pub added: usize,
    pub highlights: HashSet<Highlight>,
}

impl ImportSummary {
    /// Notes, optionally restricted to words that were also highlighted
    pub fn notes(&self, highlights_only: bool) -> Vec<ReadingNote> {
        self.notes
            .iter()
            .filter(|n| !highlights_only || self.is_highlighted(n))
            .cloned()
            .collect()
    }

    fn is_highlighted(&self, note: &ReadingNote) -> bool {
        self.highlights
            .contains(&(note.lookup_term.to_lowercase(), note.book_name.clone()))
    }
}

impl KindleVocabImporter {
    pub fn new(root: impl Into<PathBuf>, language: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            language: language.into(),
        }
    }

    pub fn vocab_db_path(&self) -> PathBuf {
        self.root.join("system").join("vocabulary").join("vocab.db")
    }

    pub fn clippings_path(&self) -> PathBuf {
        self.root.join("documents").join("My Clippings.txt")
    }

    /// Highlighted words, empty if the clippings file is missing or malformed
    pub fn read_highlights(&self) -> HashSet<Highlight> {
        let path = self.clippings_path();
        let result = fs::read_to_string(&path)
            .map_err(ImportError::from)
            .and_then(|text| parse_clippings(&text));

        match result {
            Ok(highlights) => {
                tracing::info!("Found {} highlights in {}", highlights.len(), path.display());
                highlights
            }
            Err(e) => {
                tracing::warn!(
                    "Cannot read highlights from {}: {}. The file must exist and its length must be a multiple of 5.",
                    path.display(),
                    e
                );
                HashSet::new()
            }
        }
    }

    /// Record every lookup in the target language and turn it into a reading note
    pub fn import(
        &self,
        recorder: &mut dyn LookupRecorder,
        lemmatizer: &dyn Lemmatizer,
    ) -> Result<ImportSummary, ImportError> {
        let db_path = self.vocab_db_path();
        if !db_path.exists() {
            return Err(ImportError::MissingDatabase(db_path));
        }

        let highlights = self.read_highlights();

        tracing::info!("Opening vocabulary database at: {}", db_path.display());
        let conn = Connection::open_with_flags(&db_path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;

        let books = book_titles(&conn)?;
        let prefix = format!("{}:", self.language);
        let before = recorder.count_lookups(&self.language);

        let mut stmt = conn.prepare(
            "SELECT word_key, book_key, usage, timestamp FROM lookups ORDER BY timestamp",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, Option<String>>(0)?,
                row.get::<_, Option<String>>(1)?,
                row.get::<_, Option<String>>(2)?,
                row.get::<_, i64>(3)?,
            ))
        })?;

        let mut notes = Vec::new();
        for row in rows {
            let (word_key, book_key, usage, timestamp) = row?;
            let Some(word) = word_key.as_deref().and_then(|k| k.strip_prefix(&prefix)) else {
                continue;
            };

            recorder.record_lookup(
                LookupRecord {
                    word: word.to_string(),
                    lemma: lemmatizer.lemmatize(word, &self.language),
                    language: self.language.clone(),
                    source: SOURCE_NAME.to_string(),
                    lemmatization: false,
                    success: true,
                },
                timestamp as f64 / 1000.0,
            );

            let book_name = book_key
                .and_then(|key| books.get(&key).cloned())
                .unwrap_or_default();

            notes.push(ReadingNote {
                lookup_term: word.to_string(),
                sentence: usage.unwrap_or_default(),
                book_name,
                date: local_date(timestamp),
            });
        }

        let after = recorder.count_lookups(&self.language);
        recorder.commit();

        let summary = ImportSummary {
            found: notes.len(),
            added: after.saturating_sub(before),
            notes,
            highlights,
        };
        tracing::info!(
            "Found {} lookups in {}, added {} to lookup database",
            summary.found,
            self.language,
            summary.added
        );

        Ok(summary)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Book guid to title
fn book_titles(conn: &Connection) -> Result<HashMap<String, String>, ImportError> {
    let mut stmt = conn.prepare("SELECT guid, title FROM book_info")?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, Option<String>>(0)?,
            row.get::<_, Option<String>>(1)?,
        ))
    })?;

    let mut books = HashMap::new();
    for row in rows {
        // Sideloaded books can lack a guid or a title
        if let (Some(guid), title) = row? {
            books.insert(guid, title.unwrap_or_default());
        }
    }
    Ok(books)
}

/// Milliseconds since the epoch as local `YYYY-MM-DD HH:MM:SS`
fn local_date(timestamp_ms: i64) -> String {
    DateTime::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}
