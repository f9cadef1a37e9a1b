use std::fs;
use std::path::Path;

use rusqlite::{Connection, params};
use tempfile::TempDir;

use crate::history::{IdentityLemmatizer, Lemmatizer, LookupRecorder, MemoryHistory};
use crate::{ImportError, KindleVocabImporter};

struct UpperLemmatizer;

impl Lemmatizer for UpperLemmatizer {
    fn lemmatize(&self, word: &str, _language: &str) -> String {
        word.to_uppercase()
    }
}

fn create_vocab_db(root: &Path) {
    let dir = root.join("system").join("vocabulary");
    fs::create_dir_all(&dir).unwrap();
    let conn = Connection::open(dir.join("vocab.db")).unwrap();

    conn.execute_batch(
        "CREATE TABLE book_info (
            id TEXT PRIMARY KEY NOT NULL,
            asin TEXT,
            guid TEXT,
            lang TEXT,
            title TEXT,
            authors TEXT
        );
        CREATE TABLE lookups (
            id TEXT PRIMARY KEY NOT NULL,
            word_key TEXT,
            book_key TEXT,
            dict_key TEXT,
            pos TEXT,
            usage TEXT,
            timestamp INTEGER DEFAULT 0
        );",
    )
    .unwrap();

    conn.execute(
        "INSERT INTO book_info VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params!["b1", "ASIN1", "guid-1", "de", "Der Prozess", "Franz Kafka"],
    )
    .unwrap();

    let lookups = [
        ("l1", "de:verhaftet", "guid-1", "Jemand musste Josef K. verleumdet haben, denn er wurde verhaftet.", 1_700_000_000_000_i64),
        ("l2", "de:Gericht", "guid-1", "Das Gericht will nichts von dir.", 1_700_000_060_000),
        ("l3", "en:court", "guid-1", "The court wants nothing.", 1_700_000_120_000),
        ("l4", "de:Türhüter", "guid-missing", "Vor dem Gesetz steht ein Türhüter.", 1_700_000_180_000),
    ];
    for (id, word_key, book_key, usage, timestamp) in lookups {
        conn.execute(
            "INSERT INTO lookups VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![id, word_key, book_key, "dict", "0", usage, timestamp],
        )
        .unwrap();
    }
}

fn create_clippings(root: &Path) {
    let dir = root.join("documents");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("My Clippings.txt"),
        "\u{feff}Der Prozess (Franz Kafka)\n\
- Your Highlight on page 3 | Added on Monday, 1 January 2024 10:00:00\n\
\n\
Verhaftet.\n\
==========\n",
    )
    .unwrap();
}

fn kindle(with_clippings: bool) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    create_vocab_db(dir.path());
    if with_clippings {
        create_clippings(dir.path());
    }
    dir
}

#[test]
fn test_import_filters_language_and_records() {
    let dir = kindle(true);
    let importer = KindleVocabImporter::new(dir.path(), "de");
    let mut history = MemoryHistory::new();

    let summary = importer.import(&mut history, &UpperLemmatizer).unwrap();
    assert_eq!(summary.found, 3);
    assert_eq!(summary.added, 3);
    assert_eq!(history.pending(), 0);
    assert_eq!(history.count_lookups("de"), 3);
    assert_eq!(history.count_lookups("en"), 0);

    let terms: Vec<_> = summary.notes.iter().map(|n| n.lookup_term.as_str()).collect();
    assert_eq!(terms, ["verhaftet", "Gericht", "Türhüter"]);

    let first = &summary.notes[0];
    assert_eq!(first.book_name, "Der Prozess");
    assert!(first.sentence.ends_with("wurde verhaftet."));
    assert_eq!(first.date.len(), 19);
    assert_eq!(&first.date[4..5], "-");
    assert_eq!(&first.date[13..14], ":");

    // unknown book
    assert_eq!(summary.notes[2].book_name, "");

    let (record, timestamp) = history.records().next().unwrap();
    assert_eq!(record.word, "verhaftet");
    assert_eq!(record.lemma, "VERHAFTET");
    assert_eq!(record.source, "kindle");
    assert!(!record.lemmatization);
    assert!(record.success);
    assert_eq!(*timestamp, 1_700_000_000.0);
}

#[test]
fn test_reimport_adds_nothing() {
    let dir = kindle(false);
    let importer = KindleVocabImporter::new(dir.path(), "de");
    let mut history = MemoryHistory::new();

    importer.import(&mut history, &IdentityLemmatizer).unwrap();
    let again = importer.import(&mut history, &IdentityLemmatizer).unwrap();
    assert_eq!(again.found, 3);
    assert_eq!(again.added, 0);
    assert_eq!(history.count_lookups("de"), 3);
}

#[test]
fn test_highlights_only() {
    let dir = kindle(true);
    let importer = KindleVocabImporter::new(dir.path(), "de");
    let mut history = MemoryHistory::new();

    let summary = importer.import(&mut history, &IdentityLemmatizer).unwrap();
    assert_eq!(summary.highlights.len(), 1);
    assert_eq!(summary.notes(false).len(), 3);

    let highlighted = summary.notes(true);
    assert_eq!(highlighted.len(), 1);
    assert_eq!(highlighted[0].lookup_term, "verhaftet");
}

#[test]
fn test_missing_clippings_is_not_fatal() {
    let dir = kindle(false);
    let importer = KindleVocabImporter::new(dir.path(), "de");
    let mut history = MemoryHistory::new();

    let summary = importer.import(&mut history, &IdentityLemmatizer).unwrap();
    assert!(summary.highlights.is_empty());
    assert!(summary.notes(true).is_empty());
}

#[test]
fn test_missing_database() {
    let dir = tempfile::tempdir().unwrap();
    let importer = KindleVocabImporter::new(dir.path(), "de");
    let mut history = MemoryHistory::new();

    let err = importer.import(&mut history, &IdentityLemmatizer).unwrap_err();
    assert!(matches!(err, ImportError::MissingDatabase(_)));
}

#[test]
fn test_null_columns_are_skipped() {
    let dir = kindle(false);
    let db = dir.path().join("system").join("vocabulary").join("vocab.db");
    let conn = Connection::open(&db).unwrap();
    conn.execute_batch(
        "INSERT INTO book_info VALUES ('b2', 'A2', NULL, 'de', 'Sideloaded', 'Y');
         INSERT INTO book_info VALUES ('b3', 'A3', 'guid-3', 'de', NULL, 'Z');
         INSERT INTO lookups VALUES ('l5', NULL, 'guid-1', 'dict', '0', 'no word', 1700000240000);
         INSERT INTO lookups VALUES ('l6', 'de:Schloss', 'guid-3', 'dict', '0', NULL, 1700000300000);",
    )
    .unwrap();
    drop(conn);

    let importer = KindleVocabImporter::new(dir.path(), "de");
    let mut history = MemoryHistory::new();

    let summary = importer.import(&mut history, &IdentityLemmatizer).unwrap();
    assert_eq!(summary.found, 4);

    let last = summary.notes.last().unwrap();
    assert_eq!(last.lookup_term, "Schloss");
    assert_eq!(last.book_name, "");
    assert_eq!(last.sentence, "");
}
