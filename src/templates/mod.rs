//! Template and card rendering
//!
//! Post pages are rendered by plain placeholder substitution: every
//! occurrence of a recognized `{{name}}` token is replaced with the post's
//! data, anything unrecognized is left untouched. There is no template
//! language, no conditionals, no includes.
//!
//! Text fields are HTML-escaped; `{{tags}}`, `{{cover}}` and the two
//! `{{content_*}}` tokens expand to markup and are inserted raw.

use crate::content::{Lang, Post};
use crate::helpers::{format_date, format_date_iso, html_escape};

/// Renders posts through the page template
pub struct TemplateRenderer {
    template: String,
}

impl TemplateRenderer {
    /// Create a renderer around a template string
    pub fn new(template: String) -> Self {
        Self { template }
    }

    /// Render the full page for a post
    pub fn render(&self, post: &Post) -> String {
        self.template
            .replace("{{title_tr}}", &html_escape(&post.title.tr))
            .replace("{{title_en}}", &html_escape(&post.title.en))
            .replace("{{excerpt_tr}}", &html_escape(&post.excerpt.tr))
            .replace("{{excerpt_en}}", &html_escape(&post.excerpt.en))
            .replace("{{date_tr}}", &html_escape(&format_date(&post.date, Lang::Tr)))
            .replace("{{date_en}}", &html_escape(&format_date(&post.date, Lang::En)))
            .replace("{{date_iso}}", &format_date_iso(&post.date))
            .replace("{{tags}}", &tags_markup(&post.tags))
            .replace("{{cover}}", &cover_markup(post))
            .replace("{{content_tr}}", &post.body_html.tr)
            .replace("{{content_en}}", &post.body_html.en)
    }
}

/// Tag list markup, empty when the post has no tags
fn tags_markup(tags: &[String]) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let spans: String = tags
        .iter()
        .map(|tag| format!(r#"<span class="card-tag">{}</span>"#, html_escape(tag)))
        .collect();
    format!(r#"<div class="post-tags">{}</div>"#, spans)
}

/// Cover image markup for the post page, empty when the post has no cover
fn cover_markup(post: &Post) -> String {
    match &post.cover {
        Some(cover) => format!(
            r#"<div class="post-cover"><img src="{}" alt="{}" loading="lazy" /></div>"#,
            cover,
            html_escape(&post.title.tr)
        ),
        None => String::new(),
    }
}

/// One listing card linking to the post page.
/// Covers only appear on the full blog listing.
pub fn post_card(post: &Post, with_cover: bool) -> String {
    let cover = match (&post.cover, with_cover) {
        (Some(cover), true) => format!(
            r#"<div class="card-cover"><img src="{}" alt="{}" loading="lazy" /></div>"#,
            cover,
            html_escape(&post.title.tr)
        ),
        _ => String::new(),
    };

    format!(
        r#"<article class="card">
  {cover}
  <span class="card-badge"><span class="tr">Blog</span><span class="en">Blog</span></span>
  <h3 class="card-title"><span class="tr">{title_tr}</span><span class="en">{title_en}</span></h3>
  <p class="card-text"><span class="tr">{excerpt_tr}</span><span class="en">{excerpt_en}</span></p>
  <a class="card-link" href="blog/{slug}/"><span class="tr">Devamını Oku</span><span class="en">Read More</span></a>
</article>
"#,
        cover = cover,
        title_tr = html_escape(post.title.get(Lang::Tr)),
        title_en = html_escape(post.title.get(Lang::En)),
        excerpt_tr = html_escape(post.excerpt.get(Lang::Tr)),
        excerpt_en = html_escape(post.excerpt.get(Lang::En)),
        slug = post.slug,
    )
}

/// Card shown when there are no posts yet
pub fn fallback_card() -> String {
    r#"<article class="card">
  <h3 class="card-title"><span class="tr">Henüz içerik yok</span><span class="en">No posts yet</span></h3>
  <p class="card-text"><span class="tr">İlk yazını admin panelinden ekleyebilirsin.</span><span class="en">Add your first post from the admin panel.</span></p>
</article>
"#
    .to_string()
}

/// Card markup for a slot: one card per post, or the fallback card
pub fn cards_markup(posts: &[Post], with_cover: bool) -> String {
    if posts.is_empty() {
        fallback_card()
    } else {
        posts.iter().map(|p| post_card(p, with_cover)).collect()
    }
}
