//! Front-matter parsing and locale fallback resolution

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::{Deserialize, Deserializer, Serialize};

use super::Localized;

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Front-matter data from a post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub slug: Option<String>,
    pub date: Option<String>,
    pub title: Option<String>,
    pub title_tr: Option<String>,
    pub title_en: Option<String>,
    pub excerpt: Option<String>,
    pub excerpt_tr: Option<String>,
    pub excerpt_en: Option<String>,
    pub body_tr: Option<String>,
    pub body_en: Option<String>,
    pub cover: Option<String>,
    #[serde(deserialize_with = "string_or_vec", default)]
    pub tags: Vec<String>,
}

impl FrontMatter {
    /// Parse front-matter from the start of a markdown document.
    /// Returns (front_matter, body).
    ///
    /// Malformed or absent front-matter is never an error: the result falls
    /// back to defaults and the document is returned untouched.
    pub fn parse(content: &str) -> (Self, &str) {
        let trimmed = content.trim_start();

        if !trimmed.starts_with("---") {
            return (FrontMatter::default(), trimmed);
        }

        let rest = &trimmed[3..];
        let rest = rest.trim_start_matches(['\n', '\r']);

        let Some(end_pos) = rest.find("\n---") else {
            // No closing ---, treat as no front-matter
            return (FrontMatter::default(), trimmed);
        };

        let yaml_content = &rest[..end_pos];
        let body = rest[end_pos + 4..].trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return (FrontMatter::default(), body);
        }

        match serde_yaml::from_str::<FrontMatter>(yaml_content) {
            Ok(fm) => (fm, body),
            Err(e) => {
                tracing::warn!("Failed to parse front-matter, treating as content: {}", e);
                (FrontMatter::default(), trimmed)
            }
        }
    }

    /// Parse the date field into a DateTime
    pub fn parse_date(&self) -> Option<DateTime<Local>> {
        self.date.as_ref().and_then(|s| parse_date_string(s))
    }

    /// Resolve the title for both locales.
    /// Turkish falls through to the shared title and finally the slug;
    /// English additionally falls back to the resolved Turkish value.
    pub fn resolve_title(&self, slug: &str) -> Localized {
        let tr = first_of(&[self.title_tr.as_deref(), self.title.as_deref()], slug);
        let en = first_of(&[self.title_en.as_deref(), self.title.as_deref()], tr);
        Localized::new(tr, en)
    }

    /// Resolve the excerpt for both locales, empty when nothing is set
    pub fn resolve_excerpt(&self) -> Localized {
        let tr = first_of(&[self.excerpt_tr.as_deref(), self.excerpt.as_deref()], "");
        let en = first_of(&[self.excerpt_en.as_deref(), self.excerpt.as_deref()], tr);
        Localized::new(tr, en)
    }

    /// Resolve the markdown sources for both locales.
    /// The document body below the front-matter is the shared fallback.
    pub fn resolve_body<'a>(&'a self, body: &'a str) -> (&'a str, &'a str) {
        let tr = first_of(&[self.body_tr.as_deref()], body);
        let en = first_of(&[self.body_en.as_deref(), self.body_tr.as_deref()], body);
        (tr, en)
    }
}

/// Resolve an ordered list of candidate sources, first non-empty match wins
fn first_of<'a>(candidates: &[Option<&'a str>], default: &'a str) -> &'a str {
    candidates
        .iter()
        .copied()
        .flatten()
        .find(|s| !s.trim().is_empty())
        .unwrap_or(default)
}

/// Parse a date string in the formats posts commonly use
fn parse_date_string(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();

    let formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%Y-%m-%dT%H:%M:%S",
    ];

    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            if let Some(local) = Local.from_local_datetime(&dt).single() {
                return Some(local);
            }
        }
        if let Ok(d) = chrono::NaiveDate::parse_from_str(s, fmt) {
            let dt = d.and_hms_opt(0, 0, 0)?;
            if let Some(local) = Local.from_local_datetime(&dt).single() {
                return Some(local);
            }
        }
    }

    // RFC 3339 / ISO 8601 with timezone
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    None
}
