use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct DictEntry {
    pub headword: String,       // e.g., "run"
    #[serde(default)]
    pub definition: Option<String>, // e.g., "to move swiftly"
    #[serde(default)]
    pub html: Option<String>,   // pre-rendered entry, if the source has one
    #[serde(default)]
    pub forms: Vec<String>,     // e.g., ["ran", "runs", "running"]
}

/// On-disk dictionary file
#[derive(Debug, Deserialize)]
pub(crate) struct DictFile {
    pub name: String,
    #[serde(default)]
    pub entries: Vec<DictEntry>,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
