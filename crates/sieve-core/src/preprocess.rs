use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    /// Default lookup-word cleanup
    fn process(&self, text: &str) -> String {
        let mut text = text.trim().to_string();

        if text.is_empty() {
            return text;
        }

        // Unicode normalization (NFKC)
        text = text.nfkc().collect();

        // Selections often span a line break
        text = text.replace(['\n', '\r'], "").trim().to_string();

        text
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
