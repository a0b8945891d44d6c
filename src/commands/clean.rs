//! Clean the output directory

use anyhow::Result;
use std::fs;

use crate::Site;

/// Delete the output directory
pub fn run(site: &Site) -> Result<()> {
    if site.output_dir.exists() {
        fs::remove_dir_all(&site.output_dir)?;
        tracing::info!("Deleted: {:?}", site.output_dir);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    #[test]
    fn test_clean_removes_output() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig::default();
        let base_dir = dir.path().to_path_buf();
        let site = Site {
            content_dir: base_dir.join(&config.content_dir),
            template_path: base_dir.join(&config.template),
            output_dir: base_dir.join(&config.output_dir),
            config,
            base_dir,
        };

        fs::create_dir_all(site.output_dir.join("blog")).unwrap();
        run(&site).unwrap();
        assert!(!site.output_dir.exists());

        // Cleaning an already-clean site is a no-op
        run(&site).unwrap();
    }
}
