//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Default site configuration
const SITE_CONFIG: &str = r#"# ikigen configuration

title: Kişisel Blog
url: http://example.com

content_dir: content/blog
output_dir: dist
template: templates/post.html

pages:
  - file: index.html
    slot: latest
  - file: projeler.html
  - file: blog.html
    slot: blog
  - file: hakkimizda.html
  - file: cv.html
  - file: iletisim.html
latest_count: 2

copy_files:
  - styles.css
  - script.js
copy_dirs:
  - assets
  - admin
"#;

/// Post page template consumed by the placeholder renderer
const POST_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="tr" data-lang="tr">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{title_tr}}</title>
  <link rel="stylesheet" href="../../styles.css" />
</head>
<body>
  <header class="site-header">
    <nav class="site-nav">
      <a class="brand" href="../../index.html">Blog</a>
      <button id="menu-toggle" class="menu-toggle" aria-expanded="false" aria-controls="mobile-menu">
        <span></span><span></span><span></span>
      </button>
      <ul id="mobile-menu" class="nav-links">
        <li><a href="../../index.html"><span class="tr">Ana Sayfa</span><span class="en">Home</span></a></li>
        <li><a href="../../blog.html"><span class="tr">Blog</span><span class="en">Blog</span></a></li>
        <li><a href="../../iletisim.html"><span class="tr">İletişim</span><span class="en">Contact</span></a></li>
      </ul>
      <button class="lang-toggle" aria-pressed="false">TR / EN</button>
    </nav>
  </header>
  <main class="post">
    {{cover}}
    <h1 class="post-title"><span class="tr">{{title_tr}}</span><span class="en">{{title_en}}</span></h1>
    <p class="post-meta">
      <time datetime="{{date_iso}}"><span class="tr">{{date_tr}}</span><span class="en">{{date_en}}</span></time>
    </p>
    {{tags}}
    <p class="post-excerpt"><span class="tr">{{excerpt_tr}}</span><span class="en">{{excerpt_en}}</span></p>
    <div class="post-content tr">{{content_tr}}</div>
    <div class="post-content en">{{content_en}}</div>
  </main>
  <footer class="site-footer">
    <p>&copy; <span id="year"></span></p>
  </footer>
  <script src="../../script.js"></script>
</body>
</html>
"#;

/// Browser UI controller: language toggle and mobile menu.
/// Copied verbatim into the output tree on every build.
const SCRIPT_JS: &str = r#"const yearEl = document.getElementById("year");
if (yearEl) {
  yearEl.textContent = new Date().getFullYear();
}

const root = document.documentElement;
const langToggles = document.querySelectorAll(".lang-toggle");

function applyLang(lang) {
  root.setAttribute("data-lang", lang);
  root.setAttribute("lang", lang);
  const label = lang === "tr" ? "Switch language to English" : "Switch language to Turkish";
  langToggles.forEach((toggle) => {
    toggle.setAttribute("aria-label", label);
    toggle.setAttribute("aria-pressed", lang === "en" ? "true" : "false");
  });
}

const storedLang = localStorage.getItem("preferredLang");
if (storedLang === "tr" || storedLang === "en") {
  applyLang(storedLang);
} else {
  applyLang(root.getAttribute("data-lang") || "tr");
}

langToggles.forEach((toggle) => {
  toggle.addEventListener("click", () => {
    const current = root.getAttribute("data-lang") || "tr";
    const next = current === "tr" ? "en" : "tr";
    applyLang(next);
    localStorage.setItem("preferredLang", next);
  });
});

const menuToggle = document.getElementById("menu-toggle");
const mobileMenu = document.getElementById("mobile-menu");

if (menuToggle && mobileMenu) {
  let isOpen = false;

  const setMenuState = (open) => {
    isOpen = open;
    menuToggle.classList.toggle("is-open", open);
    mobileMenu.classList.toggle("is-open", open);
    menuToggle.setAttribute("aria-expanded", open ? "true" : "false");
    document.body.classList.toggle("menu-open", open);
  };

  menuToggle.addEventListener("click", (event) => {
    event.preventDefault();
    setMenuState(!isOpen);
  });

  document.addEventListener("click", (event) => {
    if (!isOpen) {
      return;
    }
    if (mobileMenu.contains(event.target) || menuToggle.contains(event.target)) {
      return;
    }
    setMenuState(false);
  });

  document.addEventListener("keydown", (event) => {
    if (event.key === "Escape" && isOpen) {
      setMenuState(false);
    }
  });

  mobileMenu.querySelectorAll("a").forEach((link) => {
    link.addEventListener("click", () => setMenuState(false));
  });

  window.addEventListener("resize", () => {
    if (window.innerWidth > 980 && isOpen) {
      setMenuState(false);
    }
  });
}
"#;

const STYLES_CSS: &str = r#":root {
  --bg: #0f1115;
  --fg: #e8e8e8;
  --accent: #4fc3f7;
}

body {
  margin: 0;
  font-family: system-ui, sans-serif;
  background: var(--bg);
  color: var(--fg);
}

/* Only the active locale is visible */
html[data-lang="tr"] .en,
html[data-lang="en"] .tr {
  display: none;
}

.site-nav {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 2rem;
}

.nav-links {
  display: flex;
  gap: 1.5rem;
  list-style: none;
}

.menu-toggle {
  display: none;
}

.card {
  border: 1px solid #2a2d34;
  border-radius: 8px;
  padding: 1.25rem;
  margin-bottom: 1rem;
}

.card-cover img,
.post-cover img {
  max-width: 100%;
  border-radius: 8px;
}

.card-tag {
  display: inline-block;
  margin-right: 0.5rem;
  padding: 0.1rem 0.5rem;
  border-radius: 999px;
  background: #1d2027;
  font-size: 0.8rem;
}

@media (max-width: 980px) {
  .menu-toggle {
    display: block;
  }

  .nav-links {
    display: none;
    flex-direction: column;
  }

  .nav-links.is-open {
    display: flex;
  }

  body.menu-open {
    overflow: hidden;
  }
}
"#;

/// Sample post demonstrating the front-matter fields
const SAMPLE_POST: &str = r#"---
slug: merhaba-dunya
date: 2024-01-15
title_tr: Merhaba Dünya
title_en: Hello World
excerpt_tr: İlk yazı.
excerpt_en: The first post.
tags:
  - genel
body_tr: |
  # Merhaba

  Bu ilk yazı.
body_en: |
  # Hello

  This is the first post.
---
"#;

/// Placeholder admin panel; it reads the generated posts.json manifest
const ADMIN_INDEX: &str = r#"<!DOCTYPE html>
<html lang="tr">
<head>
  <meta charset="UTF-8" />
  <title>Admin</title>
</head>
<body>
  <h1>Yazılar</h1>
  <ul id="post-list"></ul>
  <script>
    fetch("../posts.json")
      .then((res) => res.json())
      .then((posts) => {
        const list = document.getElementById("post-list");
        posts.forEach((post) => {
          const item = document.createElement("li");
          item.textContent = post.title.tr + " (" + post.date + ")";
          list.appendChild(item);
        });
      });
  </script>
</body>
</html>
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("content/blog"))?;
    fs::create_dir_all(target_dir.join("templates"))?;
    fs::create_dir_all(target_dir.join("assets"))?;
    fs::create_dir_all(target_dir.join("admin"))?;

    fs::write(target_dir.join("site.yml"), SITE_CONFIG)?;
    fs::write(target_dir.join("templates/post.html"), POST_TEMPLATE)?;
    fs::write(target_dir.join("script.js"), SCRIPT_JS)?;
    fs::write(target_dir.join("styles.css"), STYLES_CSS)?;
    fs::write(target_dir.join("content/blog/merhaba-dunya.md"), SAMPLE_POST)?;
    fs::write(target_dir.join("admin/index.html"), ADMIN_INDEX)?;

    // Static pages; index and blog carry the dynamic slots
    write_page(
        target_dir,
        "index.html",
        "Ana Sayfa",
        "Home",
        "<!-- LATEST_POSTS -->",
    )?;
    write_page(
        target_dir,
        "blog.html",
        "Blog",
        "Blog",
        "<!-- BLOG_POSTS -->",
    )?;
    write_page(
        target_dir,
        "projeler.html",
        "Projeler",
        "Projects",
        "<p><span class=\"tr\">Projeler yakında.</span><span class=\"en\">Projects coming soon.</span></p>",
    )?;
    write_page(
        target_dir,
        "hakkimizda.html",
        "Hakkımızda",
        "About",
        "<p><span class=\"tr\">Hakkımızda.</span><span class=\"en\">About us.</span></p>",
    )?;
    write_page(
        target_dir,
        "cv.html",
        "CV",
        "CV",
        "<p><span class=\"tr\">Özgeçmiş.</span><span class=\"en\">Resume.</span></p>",
    )?;
    write_page(
        target_dir,
        "iletisim.html",
        "İletişim",
        "Contact",
        "<p><span class=\"tr\">İletişim.</span><span class=\"en\">Contact.</span></p>",
    )?;

    Ok(())
}

/// Write one static page with the shared shell around the given body
fn write_page(
    target_dir: &Path,
    file: &str,
    title_tr: &str,
    title_en: &str,
    body: &str,
) -> Result<()> {
    let html = format!(
        r#"<!DOCTYPE html>
<html lang="tr" data-lang="tr">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{title_tr}</title>
  <link rel="stylesheet" href="styles.css" />
</head>
<body>
  <header class="site-header">
    <nav class="site-nav">
      <a class="brand" href="index.html">Blog</a>
      <button id="menu-toggle" class="menu-toggle" aria-expanded="false" aria-controls="mobile-menu">
        <span></span><span></span><span></span>
      </button>
      <ul id="mobile-menu" class="nav-links">
        <li><a href="index.html"><span class="tr">Ana Sayfa</span><span class="en">Home</span></a></li>
        <li><a href="projeler.html"><span class="tr">Projeler</span><span class="en">Projects</span></a></li>
        <li><a href="blog.html"><span class="tr">Blog</span><span class="en">Blog</span></a></li>
        <li><a href="hakkimizda.html"><span class="tr">Hakkımızda</span><span class="en">About</span></a></li>
        <li><a href="cv.html"><span class="tr">CV</span><span class="en">CV</span></a></li>
        <li><a href="iletisim.html"><span class="tr">İletişim</span><span class="en">Contact</span></a></li>
      </ul>
      <button class="lang-toggle" aria-pressed="false">TR / EN</button>
    </nav>
  </header>
  <main>
    <h1><span class="tr">{title_tr}</span><span class="en">{title_en}</span></h1>
    {body}
  </main>
  <footer class="site-footer">
    <p>&copy; <span id="year"></span></p>
  </footer>
  <script src="script.js"></script>
</body>
</html>
"#,
        title_tr = title_tr,
        title_en = title_en,
        body = body,
    );

    fs::write(target_dir.join(file), html)?;
    Ok(())
}
