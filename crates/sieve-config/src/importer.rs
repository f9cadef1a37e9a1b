use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ImporterConfig {
    /// Kindle mount point, e.g. `/media/user/Kindle`
    pub kindle_path: Option<String>,
    /// Keep only lookups that were also highlighted
    pub highlights_only: bool,
}
