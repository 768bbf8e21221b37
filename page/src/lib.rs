//! # coming-soon-page
//!
//! Leptos SSR renderer for a static "Coming Soon" placeholder page.
//!
//! The page is a centered heading, two lines of copy and a single outbound
//! link. It has no inputs and no state; rendering it is a pure function that
//! returns the same HTML on every call.
//!
//! ## Quick Start
//!
//! ```rust
//! use coming_soon_page::{render_page, PageOptions};
//!
//! let html = render_page(&PageOptions::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Coming Soon"));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - Literal text and link attributes
//! - [`components`] - Leptos UI components
//! - [`styles`] - Utility classes and the CSS compiled from them
//!
//! Rendering goes through Leptos 0.8's `RenderHtml` trait; no reactive
//! runtime or hydration is involved.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod content;
pub mod styles;

use components::{PageDocument, PlaceholderPage};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use serde::{Deserialize, Serialize};

/// Options for the document shell around the placeholder.
///
/// The placeholder itself is fixed; these only touch `<html>` and `<head>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageOptions {
    /// Contents of `<title>`
    pub title: String,
    /// Value of `<html lang>`
    pub lang: String,
    /// Embed the compiled stylesheet in a `<style>` element
    pub inline_styles: bool,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: content::HEADING.to_string(),
            lang: "en".to_string(),
            inline_styles: true,
        }
    }
}

/// Render the placeholder view as an HTML fragment.
///
/// Suitable for mounting inside a page the caller already owns.
///
/// ```rust
/// let fragment = coming_soon_page::render_placeholder();
/// assert!(fragment.starts_with("<div"));
/// ```
pub fn render_placeholder() -> String {
    view! { <PlaceholderPage /> }.to_html()
}

/// Render a complete HTML document, including `<!DOCTYPE html>`.
pub fn render_page(options: &PageOptions) -> String {
    let doc = view! { <PageDocument options=options.clone() /> };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}
