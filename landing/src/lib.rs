//! # zeve-landing
//!
//! The Zeve Veylsn landing page as Leptos components.
//!
//! One page, rendered top-down from fixed content: navbar, hero, two image
//! panels, manifesto, about, testimonials and footer. Entrance animations are
//! plain data ([`motion::Motion`]) rendered into element attributes and
//! applied by a small playback layer.
//!
//! ## Builds
//!
//! - `ssr` (default) - pre-render the page to an HTML string with
//!   [`render_page`], or write it to disk with [`export::export_site`] /
//!   the `zeve-export` binary.
//! - `csr` - the `zeve-landing` wasm binary, mounted in the browser by
//!   [`shell::run`] and built with trunk (`index.html`).
//!
//! ## Quick Start
//!
//! ```rust
//! # #[cfg(feature = "ssr")]
//! # {
//! let html = zeve_landing::render_page();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Zeve Veylsn | Elegance Reimagined"));
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - every literal the page shows
//! - [`motion`] - entrance motion descriptors
//! - [`layout`] - pane order for image sections
//! - [`sections`] - one component per page section
//! - [`pages`] - the `Home` composition root
//! - [`title`] - one-shot document title guard
//! - [`styles`] - CSS, static playback script, CSP

pub mod content;
pub mod layout;
pub mod motion;
pub mod pages;
pub mod sections;
pub mod styles;
pub mod title;

#[cfg(feature = "ssr")]
pub mod document;
#[cfg(feature = "ssr")]
pub mod export;

#[cfg(feature = "csr")]
pub mod playback;
#[cfg(feature = "csr")]
pub mod shell;

#[cfg(feature = "ssr")]
pub use ssr::render_page;

#[cfg(feature = "ssr")]
mod ssr {
    use crate::document::LandingDocument;
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    /// Render the complete landing page as an HTML document.
    ///
    /// # Example
    ///
    /// ```rust
    /// let html = zeve_landing::render_page();
    /// assert!(html.contains("<title>Zeve Veylsn | Elegance Reimagined</title>"));
    /// ```
    pub fn render_page() -> String {
        let html = view! { <LandingDocument /> }.to_html();
        tracing::debug!(bytes = html.len(), "landing page rendered");

        // Leptos doesn't include DOCTYPE, so we add it
        format!("<!DOCTYPE html>\n{}", html)
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn renders_full_document() {
        let html = render_page();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("--gold"));
        assert!(html.contains("data-section=\"hero\""));
    }

    #[test]
    fn title_appears_once() {
        let html = render_page();
        assert_eq!(html.matches("<title>").count(), 1);
        assert!(html.contains(content::PAGE_TITLE));
    }

    #[test]
    fn playback_script_follows_page_content() {
        let html = render_page();
        let footer = html.find("data-section=\"footer\"").unwrap();
        let script = html.find("requestAnimationFrame").unwrap();
        assert!(footer < script);
    }

    #[test]
    fn inline_script_is_not_escaped() {
        let html = render_page();
        let start = html.find("<script>").unwrap() + "<script>".len();
        let end = html[start..].find("</script>").unwrap() + start;
        let body = &html[start..end];

        assert!(body.contains("=>"));
        assert!(!body.contains("&gt;"));
        assert!(!body.contains("&amp;"));
    }
}
