//! # coming-soon-site
//!
//! Static-site build step for the Coming Soon placeholder page: resolves a
//! small TOML config, renders the page through `coming-soon-page` and writes
//! it where a static host can pick it up.
//!
//! ```rust,no_run
//! use std::path::Path;
//! use coming_soon_site::{build::write_page, config::SiteConfig};
//!
//! let config = SiteConfig::load(Path::new("."));
//! let summary = write_page(&config.page, &config.build.out_dir, &config.build.file_name)?;
//! println!("{} bytes", summary.bytes);
//! # Ok::<(), coming_soon_site::error::SiteError>(())
//! ```

pub mod build;
pub mod config;
pub mod error;

pub use build::{BuildSummary, write_page};
pub use config::SiteConfig;
pub use error::SiteError;
