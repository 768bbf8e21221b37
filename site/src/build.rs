//! Writes the rendered page to disk.

use std::path::{Path, PathBuf};

use coming_soon_page::{PageOptions, render_page};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Result, SiteError};

/// What a build produced, printed with `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildSummary {
    pub path: PathBuf,
    pub bytes: usize,
}

/// Reject names that are empty, relative hops, or carry a directory part.
pub fn validate_file_name(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\');
    if invalid {
        return Err(SiteError::InvalidFileName(name.to_string()));
    }
    Ok(())
}

/// Render the full document and write it to `out_dir/file_name`.
pub fn write_page(options: &PageOptions, out_dir: &Path, file_name: &str) -> Result<BuildSummary> {
    validate_file_name(file_name)?;

    std::fs::create_dir_all(out_dir).map_err(|source| SiteError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let html = render_page(options);
    let path = out_dir.join(file_name);
    debug!("Rendering {} bytes to {}", html.len(), path.display());

    std::fs::write(&path, &html).map_err(|source| SiteError::Write {
        path: path.clone(),
        source,
    })?;

    info!("Page written to {} ({} bytes)", path.display(), html.len());
    Ok(BuildSummary {
        path,
        bytes: html.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_rendered_document() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("dist");
        let options = PageOptions::default();

        let summary = write_page(&options, &out, "index.html").unwrap();

        assert_eq!(summary.path, out.join("index.html"));
        let written = std::fs::read_to_string(&summary.path).unwrap();
        assert_eq!(written, render_page(&options));
        assert_eq!(summary.bytes, written.len());
    }

    #[test]
    fn creates_nested_output_dirs() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("a").join("b");

        write_page(&PageOptions::default(), &out, "soon.html").unwrap();
        assert!(out.join("soon.html").is_file());
    }

    #[test]
    fn rejects_bad_file_names() {
        for name in ["", ".", "..", "../index.html", "sub/index.html", "sub\\index.html"] {
            assert!(
                matches!(validate_file_name(name), Err(SiteError::InvalidFileName(_))),
                "accepted {name:?}"
            );
        }
        assert!(validate_file_name("index.html").is_ok());
    }

    #[test]
    fn invalid_name_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("dist");

        let err = write_page(&PageOptions::default(), &out, "").unwrap_err();
        assert!(matches!(err, SiteError::InvalidFileName(_)));
        assert!(!out.exists());
    }

    #[test]
    fn output_dir_blocked_by_file() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("dist");
        std::fs::write(&blocker, "not a dir").unwrap();

        let err = write_page(&PageOptions::default(), &blocker, "index.html").unwrap_err();
        assert!(matches!(err, SiteError::CreateDir { .. }));
    }
}
