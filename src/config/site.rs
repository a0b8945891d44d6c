//! Site configuration (site.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A named slot on a static page where generated card markup is injected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    /// Full post listing on the blog page
    Blog,
    /// Truncated newest-first listing on the landing page
    Latest,
}

impl Slot {
    /// Marker comment the generated cards replace
    pub fn marker(&self) -> &'static str {
        match self {
            Slot::Blog => "<!-- BLOG_POSTS -->",
            Slot::Latest => "<!-- LATEST_POSTS -->",
        }
    }
}

/// A static page published by the generator
///
/// Pages with a slot receive generated content; pages without one are
/// copied through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// Page file, relative to the site root
    pub file: String,
    /// Dynamic slot this page carries
    #[serde(default)]
    pub slot: Option<Slot>,
}

impl PageConfig {
    /// A pass-through page with no dynamic content
    pub fn passthrough(file: &str) -> Self {
        Self {
            file: file.to_string(),
            slot: None,
        }
    }

    /// A page carrying a dynamic slot
    pub fn with_slot(file: &str, slot: Slot) -> Self {
        Self {
            file: file.to_string(),
            slot: Some(slot),
        }
    }
}

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub url: String,

    // Directory
    pub content_dir: String,
    pub output_dir: String,
    pub template: String,

    // Pages
    pub pages: Vec<PageConfig>,
    /// Number of posts shown in the latest slot
    pub latest_count: usize,

    // Assets
    /// Top-level files copied into the output root
    pub copy_files: Vec<String>,
    /// Directories copied recursively into the output root
    pub copy_dirs: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "ikigen".to_string(),
            url: "http://example.com".to_string(),

            content_dir: "content/blog".to_string(),
            output_dir: "dist".to_string(),
            template: "templates/post.html".to_string(),

            pages: vec![
                PageConfig::with_slot("index.html", Slot::Latest),
                PageConfig::passthrough("projeler.html"),
                PageConfig::with_slot("blog.html", Slot::Blog),
                PageConfig::passthrough("hakkimizda.html"),
                PageConfig::passthrough("cv.html"),
                PageConfig::passthrough("iletisim.html"),
            ],
            latest_count: 2,

            copy_files: vec!["styles.css".to_string(), "script.js".to_string()],
            copy_dirs: vec!["assets".to_string(), "admin".to_string()],
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.latest_count, 2);
        assert_eq!(config.pages.len(), 6);
        assert_eq!(config.pages[0].slot, Some(Slot::Latest));
        assert_eq!(config.pages[2].slot, Some(Slot::Blog));
        assert_eq!(config.pages[1].slot, None);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
latest_count: 3
pages:
  - file: home.html
    slot: latest
  - file: posts.html
    slot: blog
  - file: about.html
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.latest_count, 3);
        assert_eq!(config.pages.len(), 3);
        assert_eq!(config.pages[0].slot, Some(Slot::Latest));
        assert_eq!(config.pages[1].slot, Some(Slot::Blog));
        assert_eq!(config.pages[2].slot, None);
        // Unspecified fields keep their defaults
        assert_eq!(config.output_dir, "dist");
    }

    #[test]
    fn test_slot_markers() {
        assert_eq!(Slot::Blog.marker(), "<!-- BLOG_POSTS -->");
        assert_eq!(Slot::Latest.marker(), "<!-- LATEST_POSTS -->");
    }
}
