//! Generator module - assembles the output tree
//!
//! Every build starts from an empty output directory: static pages are
//! written (with card markup injected into their slots), each post gets a
//! directory with an index.html, assets are copied verbatim, and a JSON
//! manifest of the posts is written for the admin panel.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::Slot;
use crate::content::Post;
use crate::helpers::format_date_iso;
use crate::templates::{cards_markup, TemplateRenderer};
use crate::Site;

/// Static site generator
pub struct Generator {
    site: Site,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator, reading the post template once
    pub fn new(site: &Site) -> Result<Self> {
        let template = fs::read_to_string(&site.template_path)
            .with_context(|| format!("failed to read template {:?}", site.template_path))?;

        Ok(Self {
            site: site.clone(),
            renderer: TemplateRenderer::new(template),
        })
    }

    /// Generate the entire site
    pub fn generate(&self, posts: &[Post]) -> Result<()> {
        // Output is rebuilt from scratch on every run
        if self.site.output_dir.exists() {
            fs::remove_dir_all(&self.site.output_dir)?;
        }
        fs::create_dir_all(&self.site.output_dir)?;

        self.generate_static_pages(posts)?;
        self.generate_post_pages(posts)?;
        self.copy_assets()?;
        self.write_manifest(posts)?;

        Ok(())
    }

    /// Write the configured static pages, filling dynamic slots
    fn generate_static_pages(&self, posts: &[Post]) -> Result<()> {
        for page in &self.site.config.pages {
            let src = self.site.base_dir.join(&page.file);
            let source = fs::read_to_string(&src)
                .with_context(|| format!("failed to read page {:?}", src))?;

            let output = match page.slot {
                Some(slot) => source.replace(slot.marker(), &self.slot_markup(slot, posts)),
                None => source,
            };

            fs::write(self.site.output_dir.join(&page.file), output)?;
            tracing::debug!("Generated page: {}", page.file);
        }
        Ok(())
    }

    /// Card markup for a slot
    fn slot_markup(&self, slot: Slot, posts: &[Post]) -> String {
        match slot {
            Slot::Blog => cards_markup(posts, true),
            Slot::Latest => {
                let count = self.site.config.latest_count.min(posts.len());
                cards_markup(&posts[..count], false)
            }
        }
    }

    /// Render one directory-with-index per post slug.
    /// Duplicate slugs silently overwrite the earlier output (last wins).
    fn generate_post_pages(&self, posts: &[Post]) -> Result<()> {
        for post in posts {
            let out_dir = self.site.output_dir.join("blog").join(&post.slug);
            fs::create_dir_all(&out_dir)?;
            fs::write(out_dir.join("index.html"), self.renderer.render(post))?;
            tracing::debug!("Generated post: blog/{}/", post.slug);
        }
        Ok(())
    }

    /// Copy configured files and directory trees into the output root
    fn copy_assets(&self) -> Result<()> {
        for file in &self.site.config.copy_files {
            let src = self.site.base_dir.join(file);
            fs::copy(&src, self.site.output_dir.join(file))
                .with_context(|| format!("failed to copy {:?}", src))?;
        }

        for dir in &self.site.config.copy_dirs {
            let src = self.site.base_dir.join(dir);
            copy_dir_recursive(&src, &self.site.output_dir.join(dir))?;
        }

        Ok(())
    }

    /// Write a posts.json manifest consumable by the admin panel
    fn write_manifest(&self, posts: &[Post]) -> Result<()> {
        let manifest: Vec<_> = posts
            .iter()
            .map(|p| {
                serde_json::json!({
                    "slug": p.slug,
                    "date": format_date_iso(&p.date),
                    "title": { "tr": p.title.tr, "en": p.title.en },
                    "excerpt": { "tr": p.excerpt.tr, "en": p.excerpt.en },
                    "tags": p.tags,
                })
            })
            .collect();

        let json = serde_json::to_string_pretty(&manifest)?;
        fs::write(self.site.output_dir.join("posts.json"), json)?;
        Ok(())
    }
}

/// Recursively copy a directory tree, preserving structure
fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest)?;
    for entry in
        fs::read_dir(src).with_context(|| format!("failed to read directory {:?}", src))?
    {
        let entry = entry?;
        let src_path = entry.path();
        let dest_path = dest.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&src_path, &dest_path)?;
        } else {
            fs::copy(&src_path, &dest_path)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PageConfig, SiteConfig};
    use crate::content::{Localized, Post};
    use chrono::{Local, TimeZone};
    use tempfile::TempDir;

    fn test_site(dir: &TempDir) -> Site {
        let config = SiteConfig {
            pages: vec![
                PageConfig::with_slot("index.html", Slot::Latest),
                PageConfig::with_slot("blog.html", Slot::Blog),
                PageConfig::passthrough("about.html"),
            ],
            copy_files: vec!["styles.css".to_string()],
            copy_dirs: vec!["assets".to_string()],
            ..SiteConfig::default()
        };
        let base_dir = dir.path().to_path_buf();

        // Scaffold the inputs the generator reads
        fs::create_dir_all(base_dir.join("templates")).unwrap();
        fs::write(
            base_dir.join("templates/post.html"),
            "<h1>{{title_tr}}</h1>{{content_tr}}",
        )
        .unwrap();
        fs::write(
            base_dir.join("index.html"),
            "<main><!-- LATEST_POSTS --></main>",
        )
        .unwrap();
        fs::write(
            base_dir.join("blog.html"),
            "<main><!-- BLOG_POSTS --></main>",
        )
        .unwrap();
        fs::write(base_dir.join("about.html"), "<p>static page</p>").unwrap();
        fs::write(base_dir.join("styles.css"), "body {}").unwrap();
        fs::create_dir_all(base_dir.join("assets/img")).unwrap();
        fs::write(base_dir.join("assets/img/logo.svg"), "<svg/>").unwrap();

        Site {
            content_dir: base_dir.join(&config.content_dir),
            template_path: base_dir.join(&config.template),
            output_dir: base_dir.join(&config.output_dir),
            config,
            base_dir,
        }
    }

    fn post(slug: &str, day: u32) -> Post {
        Post {
            slug: slug.to_string(),
            date: Local.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap(),
            title: Localized::new(format!("Başlık {}", slug), format!("Title {}", slug)),
            excerpt: Localized::new("özet", "summary"),
            body_html: Localized::new("<p>tr</p>", "<p>en</p>"),
            cover: None,
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_generate_full_site() {
        let dir = TempDir::new().unwrap();
        let site = test_site(&dir);
        let posts = vec![post("newest", 20), post("oldest", 1)];

        let generator = Generator::new(&site).unwrap();
        generator.generate(&posts).unwrap();

        let out = &site.output_dir;
        assert!(out.join("blog/newest/index.html").exists());
        assert!(out.join("blog/oldest/index.html").exists());
        assert!(out.join("styles.css").exists());
        assert!(out.join("assets/img/logo.svg").exists());
        assert!(out.join("posts.json").exists());

        let page = fs::read_to_string(out.join("blog/newest/index.html")).unwrap();
        assert!(page.contains("<h1>Başlık newest</h1>"));
        assert!(page.contains("<p>tr</p>"));
    }

    #[test]
    fn test_blog_slot_lists_all_posts() {
        let dir = TempDir::new().unwrap();
        let site = test_site(&dir);
        let posts = vec![post("a", 3), post("b", 2), post("c", 1)];

        Generator::new(&site).unwrap().generate(&posts).unwrap();

        let blog = fs::read_to_string(site.output_dir.join("blog.html")).unwrap();
        assert_eq!(blog.matches("<article").count(), 3);
        assert!(!blog.contains("<!-- BLOG_POSTS -->"));
    }

    #[test]
    fn test_latest_slot_truncates() {
        let dir = TempDir::new().unwrap();
        let site = test_site(&dir);
        let posts = vec![post("a", 4), post("b", 3), post("c", 2), post("d", 1)];

        Generator::new(&site).unwrap().generate(&posts).unwrap();

        let index = fs::read_to_string(site.output_dir.join("index.html")).unwrap();
        assert_eq!(index.matches("<article").count(), 2);
        assert!(index.contains("blog/a/"));
        assert!(index.contains("blog/b/"));
        assert!(!index.contains("blog/c/"));
    }

    #[test]
    fn test_zero_posts_renders_fallback_card() {
        let dir = TempDir::new().unwrap();
        let site = test_site(&dir);

        Generator::new(&site).unwrap().generate(&[]).unwrap();

        let blog = fs::read_to_string(site.output_dir.join("blog.html")).unwrap();
        assert_eq!(blog.matches("<article").count(), 1);
        assert!(blog.contains("Henüz içerik yok"));
        assert!(blog.contains("No posts yet"));
    }

    #[test]
    fn test_passthrough_page_unchanged() {
        let dir = TempDir::new().unwrap();
        let site = test_site(&dir);

        Generator::new(&site).unwrap().generate(&[]).unwrap();

        let about = fs::read_to_string(site.output_dir.join("about.html")).unwrap();
        assert_eq!(about, "<p>static page</p>");
    }

    #[test]
    fn test_duplicate_slug_last_write_wins() {
        let dir = TempDir::new().unwrap();
        let site = test_site(&dir);

        let mut first = post("same", 2);
        first.title = Localized::new("Birinci", "First");
        let mut second = post("same", 1);
        second.title = Localized::new("İkinci", "Second");

        Generator::new(&site)
            .unwrap()
            .generate(&[first, second])
            .unwrap();

        let page = fs::read_to_string(site.output_dir.join("blog/same/index.html")).unwrap();
        assert!(page.contains("İkinci"));
        assert!(!page.contains("Birinci"));
    }

    #[test]
    fn test_stale_output_is_removed() {
        let dir = TempDir::new().unwrap();
        let site = test_site(&dir);

        fs::create_dir_all(site.output_dir.join("blog/stale")).unwrap();
        fs::write(site.output_dir.join("blog/stale/index.html"), "old").unwrap();

        Generator::new(&site).unwrap().generate(&[]).unwrap();

        assert!(!site.output_dir.join("blog/stale").exists());
    }

    #[test]
    fn test_manifest_contents() {
        let dir = TempDir::new().unwrap();
        let site = test_site(&dir);
        let mut p = post("tagged", 5);
        p.tags = vec!["rust".to_string()];

        Generator::new(&site).unwrap().generate(&[p]).unwrap();

        let json = fs::read_to_string(site.output_dir.join("posts.json")).unwrap();
        let manifest: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(manifest[0]["slug"], "tagged");
        assert_eq!(manifest[0]["tags"][0], "rust");
        assert_eq!(manifest[0]["title"]["tr"], "Başlık tagged");
    }

    #[test]
    fn test_missing_page_aborts_build() {
        let dir = TempDir::new().unwrap();
        let mut site = test_site(&dir);
        site.config
            .pages
            .push(PageConfig::passthrough("missing.html"));

        let result = Generator::new(&site).unwrap().generate(&[]);
        assert!(result.is_err());
    }
}
