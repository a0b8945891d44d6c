//! Post model

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A locale the site is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Tr,
    En,
}

impl Lang {
    /// Two-letter locale code, also the value persisted by the browser
    pub fn code(&self) -> &'static str {
        match self {
            Lang::Tr => "tr",
            Lang::En => "en",
        }
    }
}

/// A text value carried in both locales
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized {
    pub tr: String,
    pub en: String,
}

impl Localized {
    pub fn new(tr: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            tr: tr.into(),
            en: en.into(),
        }
    }

    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::Tr => &self.tr,
            Lang::En => &self.en,
        }
    }
}

/// A blog post, immutable once loaded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// URL-safe identifier, also the name of the post's output directory.
    /// Uniqueness is assumed, not enforced; a duplicate slug overwrites the
    /// earlier post's output.
    pub slug: String,

    /// Publication date
    pub date: DateTime<Local>,

    /// Post title per locale
    pub title: Localized,

    /// Short summary per locale
    pub excerpt: Localized,

    /// Rendered HTML body per locale
    pub body_html: Localized,

    /// Cover image path
    pub cover: Option<String>,

    /// Post tags
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lang_codes() {
        assert_eq!(Lang::Tr.code(), "tr");
        assert_eq!(Lang::En.code(), "en");
    }

    #[test]
    fn test_localized_get() {
        let text = Localized::new("Merhaba", "Hello");
        assert_eq!(text.get(Lang::Tr), "Merhaba");
        assert_eq!(text.get(Lang::En), "Hello");
    }
}
