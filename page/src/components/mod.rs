//! Leptos UI components for the placeholder page.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! └── PlaceholderPage
//!     ├── h1         (heading)
//!     ├── p          (two lines, <br> between)
//!     └── div.flex
//!         └── a      (outbound link, new tab)
//! ```
//!
//! Both components are normally reached through [`crate::render_page`] and
//! [`crate::render_placeholder`], but they can be mounted directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use coming_soon_page::components::PlaceholderPage;
//!
//! view! { <main><PlaceholderPage /></main> }
//! ```

mod document;
mod placeholder;

pub use document::PageDocument;
pub use placeholder::PlaceholderPage;
