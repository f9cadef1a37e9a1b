use serde::{Deserialize, Serialize};

pub const IMG_QUALITY_MIN: i32 = -1;
pub const IMG_QUALITY_MAX: i32 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    #[default]
    Jpg,
    Gif,
    Bmp,
    /// Needs an encoder plugin on some systems
    Webp,
}

fn default_img_quality() -> i32 {
    -1
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MiscConfig {
    /// Capitalize the first letter of pasted sentences. Lookups are unaffected.
    #[serde(default)]
    pub capitalize_first_letter: bool,
    /// Screenshot settings, stored for front-ends that attach images
    #[serde(default)]
    pub img_format: ImageFormat,
    /// 0..=100, -1 means encoder default
    #[serde(default = "default_img_quality")]
    pub img_quality: i32,
}

impl Default for MiscConfig {
    fn default() -> Self {
        Self {
            capitalize_first_letter: false,
            img_format: ImageFormat::default(),
            img_quality: default_img_quality(),
        }
    }
}

impl MiscConfig {
    pub fn format_sentence(&self, sentence: &str) -> String {
        if !self.capitalize_first_letter {
            return sentence.to_string();
        }

        let mut chars = sentence.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}
