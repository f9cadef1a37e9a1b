use std::env;

use serde::{Deserialize, Serialize};

use self::anki::AnkiConfig;
use self::dictionary::DictionaryConfig;
use self::importer::ImporterConfig;
use self::interface::{InterfaceConfig, TEXT_SCALE_MAX, TEXT_SCALE_MIN};
use self::misc::{IMG_QUALITY_MAX, IMG_QUALITY_MIN, MiscConfig};
pub use self::sources::SourceConfig;

pub mod anki;
pub mod dictionary;
pub mod importer;
pub mod interface;
pub mod misc;
pub mod sources;


pub const CONFIG_VERSION: u32 = 1;
pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Missing on configs written before versioning
    #[serde(default)]
    pub config_ver: Option<u32>,
    pub target_language: Option<String>,
    /// Queried in order on every lookup
    pub sources: Vec<SourceConfig>,
    pub dictionary: DictionaryConfig,
    pub anki: AnkiConfig,
    pub interface: InterfaceConfig,
    pub misc: MiscConfig,
    pub importer: ImporterConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_ver: Some(CONFIG_VERSION),
            target_language: None,
            sources: Vec::new(),
            dictionary: DictionaryConfig::default(),
            anki: AnkiConfig::default(),
            interface: InterfaceConfig::default(),
            misc: MiscConfig::default(),
            importer: ImporterConfig::default(),
        }
    }
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    pub fn apply_env(&mut self) {
        if let Ok(lang) = env::var("SIEVE_TARGET_LANGUAGE") {
            self.target_language = Some(lang);
        }

        self.anki.apply_env();
    }

    pub fn target_language(&self) -> &str {
        self.target_language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    pub fn source(&self, name: &str) -> Option<&SourceConfig> {
        self.sources.iter().find(|s| s.name == name)
    }

    /// Drop settings left behind by an unversioned install and stamp the current version.
    /// Returns true if the settings were wiped.
    pub fn migrate(&mut self) -> bool {
        let legacy = self.config_ver.is_none() && self.target_language.is_some();
        if legacy {
            tracing::warn!("Found unversioned settings, resetting to defaults");
            self.reset();
        }
        self.config_ver = Some(CONFIG_VERSION);
        legacy
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Clamp numeric settings into their accepted ranges
    pub fn validate(&mut self) {
        let scale = self.interface.text_scale.clamp(TEXT_SCALE_MIN, TEXT_SCALE_MAX);
        if scale != self.interface.text_scale {
            tracing::warn!(
                "text_scale {} out of range, using {}",
                self.interface.text_scale,
                scale
            );
            self.interface.text_scale = scale;
        }

        let quality = self.misc.img_quality.clamp(IMG_QUALITY_MIN, IMG_QUALITY_MAX);
        if quality != self.misc.img_quality {
            tracing::warn!(
                "img_quality {} out of range, using {}",
                self.misc.img_quality,
                quality
            );
            self.misc.img_quality = quality;
        }
    }
}
