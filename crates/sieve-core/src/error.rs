#[derive(Debug, thiserror::Error)]
pub enum GroupError {
    #[error("Duplicate source name: {0}")]
    DuplicateSource(String),

    #[error("Empty source name")]
    EmptyName,
}
