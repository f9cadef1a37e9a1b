use serde::{Deserialize, Serialize};

pub const TEXT_SCALE_MIN: u32 = 50;
pub const TEXT_SCALE_MAX: u32 = 250;

fn default_allow_editing() -> bool {
    true
}

fn default_theme() -> String {
    "auto".to_string()
}

fn default_accent_color() -> String {
    "default".to_string()
}

fn default_text_scale() -> u32 {
    100
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FreqDisplayMode {
    #[default]
    #[serde(rename = "Stars (like Migaku)")]
    Stars,
    #[serde(rename = "Rank")]
    Rank,
}

/// Display settings kept in the profile for graphical front-ends.
/// Only `text_scale` is checked here, by `Config::validate`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct InterfaceConfig {
    /// Let the user edit definition fields directly
    #[serde(default = "default_allow_editing")]
    pub allow_editing: bool,
    /// Use the primary selection instead of the clipboard (Linux only)
    #[serde(default)]
    pub primary_selection: bool,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
    #[serde(default)]
    pub freq_display: FreqDisplayMode,
    /// Percent, 50..=250
    #[serde(default = "default_text_scale")]
    pub text_scale: u32,
}

impl Default for InterfaceConfig {
    fn default() -> Self {
        Self {
            allow_editing: default_allow_editing(),
            primary_selection: false,
            theme: default_theme(),
            accent_color: default_accent_color(),
            freq_display: FreqDisplayMode::default(),
            text_scale: default_text_scale(),
        }
    }
}
