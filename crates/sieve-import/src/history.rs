use sieve_types::LookupRecord;

/// Lookup-history store the importer writes into
pub trait LookupRecorder {
    /// Stage a lookup made at `timestamp` (seconds since the epoch); visible to
    /// `count_lookups` immediately, persisted on `commit`
    fn record_lookup(&mut self, record: LookupRecord, timestamp: f64);

    fn count_lookups(&self, language: &str) -> usize;

    fn commit(&mut self);
}

/// Reduces a word to its dictionary form
pub trait Lemmatizer {
    fn lemmatize(&self, word: &str, language: &str) -> String;
}

/// Keeps words as they are
pub struct IdentityLemmatizer;

impl Lemmatizer for IdentityLemmatizer {
    fn lemmatize(&self, word: &str, _language: &str) -> String {
        word.to_string()
    }
}

/// In-memory lookup history. A lookup of the same word in the same language
/// at the same time is only kept once, so re-importing adds nothing.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    committed: Vec<(LookupRecord, f64)>,
    pending: Vec<(LookupRecord, f64)>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> impl Iterator<Item = &(LookupRecord, f64)> {
        self.committed.iter()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    fn contains(&self, record: &LookupRecord, timestamp: f64) -> bool {
        self.committed
            .iter()
            .chain(self.pending.iter())
            .any(|(r, t)| *t == timestamp && r.word == record.word && r.language == record.language)
    }
}

impl LookupRecorder for MemoryHistory {
    fn record_lookup(&mut self, record: LookupRecord, timestamp: f64) {
        if self.contains(&record, timestamp) {
            tracing::trace!("Skipping duplicate lookup '{}' at {}", record.word, timestamp);
            return;
        }
        self.pending.push((record, timestamp));
    }

    fn count_lookups(&self, language: &str) -> usize {
        self.committed
            .iter()
            .chain(self.pending.iter())
            .filter(|(r, _)| r.language == language)
            .count()
    }

    fn commit(&mut self) {
        tracing::debug!("Committing {} lookups", self.pending.len());
        self.committed.append(&mut self.pending);
    }
}
