//! Configuration file support for the site build.
//!
//! Loads optional `coming-soon.toml` from the working directory.
//!
//! ```toml
//! [page]
//! title = "Coming Soon"
//! lang = "en"
//! inline_styles = true
//!
//! [build]
//! out_dir = "dist"
//! file_name = "index.html"
//! ```

use std::path::{Path, PathBuf};

use coming_soon_page::PageOptions;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, SiteError};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "coming-soon.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Document shell options, passed straight to the renderer
    pub page: PageOptions,
    pub build: BuildConfig,
}

/// Where `build` writes the page.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BuildConfig {
    pub out_dir: PathBuf,
    pub file_name: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("dist"),
            file_name: "index.html".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load `coming-soon.toml` from the given root directory.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let path = root.join(DEFAULT_CONFIG_FILE);
        if !path.exists() {
            debug!("No {} in {}, using defaults", DEFAULT_CONFIG_FILE, root.display());
            return Self::default();
        }

        match Self::load_from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Load config from a specific path. Missing or malformed files are errors.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| SiteError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| SiteError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Explicit path when given, otherwise the lenient lookup in `root`.
    pub fn resolve(explicit: Option<&Path>, root: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => Ok(Self::load(root)),
        }
    }
}
