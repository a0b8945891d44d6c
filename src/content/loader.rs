//! Content loader - loads posts from the content directory

use anyhow::Result;
use chrono::Local;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{FrontMatter, Localized, MarkdownRenderer, Post};
use crate::Site;

/// Loads posts from the content directory
pub struct ContentLoader<'a> {
    site: &'a Site,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self {
            site,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Load all posts, newest first
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let content_dir = &self.site.content_dir;
        if !content_dir.exists() {
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(content_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_markdown_file(path) {
                match self.load_post(path) {
                    Ok(post) => posts.push(post),
                    Err(e) => {
                        tracing::warn!("Failed to load post {:?}: {}", path, e);
                    }
                }
            }
        }

        Ok(sort_posts(posts))
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path) -> Result<Post> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content);

        // Explicit slug field wins, else the file stem
        let slug = fm
            .slug
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| {
                path.file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("untitled")
                    .to_string()
            });

        let date = fm.parse_date().unwrap_or_else(Local::now);

        let title = fm.resolve_title(&slug);
        let excerpt = fm.resolve_excerpt();
        let (body_tr, body_en) = fm.resolve_body(body);

        let body_html = Localized::new(self.renderer.render(body_tr), self.renderer.render(body_en));

        let cover = fm.cover.clone().filter(|c| !c.trim().is_empty());

        Ok(Post {
            slug,
            date,
            title,
            excerpt,
            body_html,
            cover,
            tags: fm.tags.clone(),
        })
    }
}

/// Order posts by date descending, stable on ties
pub fn sort_posts(mut posts: Vec<Post>) -> Vec<Post> {
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    posts
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}
