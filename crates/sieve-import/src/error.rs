use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Vocabulary database not found: {0}")]
    MissingDatabase(PathBuf),

    #[error("Clippings file has {0} lines, expected a multiple of 5")]
    MalformedClippings(usize),

    #[error("database request failed: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
