//! Create a new post

use anyhow::Result;
use std::fs;

use crate::Site;

/// Create a new post markdown file with front-matter
pub fn create_post(site: &Site, title: &str) -> Result<()> {
    let now = chrono::Local::now();
    let slug = slug::slugify(title);

    fs::create_dir_all(&site.content_dir)?;
    let file_path = site.content_dir.join(format!("{}.md", slug));

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let content = format!(
        r#"---
slug: {slug}
date: {date}
title_tr: {title}
title_en: {title}
excerpt_tr: ""
excerpt_en: ""
tags: []
---

Yazı içeriği buraya.
"#,
        slug = slug,
        date = now.format("%Y-%m-%d %H:%M:%S"),
        title = title,
    );

    fs::write(&file_path, content)?;
    println!("Created: {:?}", file_path);

    Ok(())
}
