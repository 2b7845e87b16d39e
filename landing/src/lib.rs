//! # binay-landing
//!
//! Static landing page for the Binay Tech mobile app, rendered with Leptos
//! server-side rendering.
//!
//! The page is a fixed content set ([`content::CONTENT`]) composed into
//! sections ([`sections`]) built from a few UI primitives
//! ([`components`]). Rendering has no inputs, no I/O and no failure modes:
//! [`render_page`] returns the same document on every call.
//!
//! ## Quick Start
//!
//! ```rust
//! let html = binay_landing::render_page();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("The Complete Platform for Your Mobile Needs"));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - data model and the fixed content set
//! - [`components`] - UI primitives (button, card, image, icons, rating)
//! - [`sections`] - one component per page region
//! - [`document`] - the `<html>` shell placing sections in order
//! - [`styles`] - inline CSS and the CSP
//! - [`config`] / [`error`] - delivery concerns of the `binay-landing` binary
//!
//! ## Leptos 0.8 SSR
//!
//! Views are turned into markup with `RenderHtml::to_html()`. No reactive
//! runtime or hydration is involved.

pub mod components;
pub mod config;
pub mod content;
pub mod document;
pub mod error;
pub mod sections;
pub mod styles;

use content::{CONTENT, ImageRef};
use document::LandingDocument;
use error::{LandingError, Result};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use std::path::Path;

/// Render the complete landing page.
///
/// Returns a full HTML document, including `<!DOCTYPE html>`. The output is
/// byte-identical across calls.
///
/// ```rust
/// assert_eq!(binay_landing::render_page(), binay_landing::render_page());
/// ```
pub fn render_page() -> String {
    let doc = view! { <LandingDocument content=CONTENT /> };

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}

/// Every link that opens a new browsing context, in page order: header
/// CTA, hero badge, download badge.
pub fn outbound_links() -> Vec<&'static str> {
    [CONTENT.header.cta, CONTENT.hero.primary_cta, CONTENT.store]
        .into_iter()
        .filter(|link| link.new_tab)
        .map(|link| link.url)
        .collect()
}

/// Section identifiers reachable through in-page navigation.
pub fn anchor_targets() -> [&'static str; 3] {
    CONTENT.header.nav.map(|anchor| anchor.target)
}

/// Every image the page references, in page order.
pub fn image_refs() -> Vec<ImageRef> {
    let brand = CONTENT.brand;
    vec![
        brand.logo(brand.name, 40),
        CONTENT.hero.logo,
        CONTENT.store_badge,
        CONTENT.showcase,
        CONTENT.store_badge,
        brand.logo(brand.name, 32),
    ]
}

/// The content model as pretty-printed JSON.
pub fn content_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&CONTENT)?)
}

/// Render the page and write it to `path`, creating the parent directory
/// when needed.
pub fn write_page(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| LandingError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, render_page()).map_err(|source| LandingError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use content::STORE_URL;
    use tempfile::TempDir;

    #[test]
    fn renders_full_document() {
        let html = render_page();
        assert!(html.starts_with("<!DOCTYPE html>\n<html"));
        assert!(html.contains("<title>Binay Tech</title>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn outbound_links_all_hit_the_store() {
        let links = outbound_links();
        assert_eq!(links.len(), 3);
        assert!(links.iter().all(|url| *url == STORE_URL));
    }

    #[test]
    fn anchor_targets_are_section_ids() {
        assert_eq!(anchor_targets(), ["features", "benefits", "download"]);
    }

    #[test]
    fn every_image_has_alt_and_size() {
        for image in image_refs() {
            assert!(!image.alt.is_empty(), "{image:?}");
            assert!(image.width > 0 && image.height > 0, "{image:?}");
        }
    }

    #[test]
    fn content_json_is_valid() {
        let json = content_json().expect("serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["brand"]["name"], "Binay Tech");
    }

    #[test]
    fn write_page_creates_directory() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("nested/site/index.html");
        write_page(&path).expect("write page");

        let written = std::fs::read_to_string(path).expect("read page");
        assert_eq!(written, render_page());
    }
}
