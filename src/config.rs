use std::path::{Path, PathBuf};

use crate::error::Error;

/// Project configuration loaded from `.docsite.toml`.
/// Everything has a default: a bare directory with a `docs.json` generates
/// into `site/` with no source links and no authored pages.
pub struct Config {
    /// Optional directory of authored markdown pages copied into the output
    /// tree as-is (guide, changelog, legal pages).
    pub content_dir: Option<PathBuf>,
    /// Path to the metadata JSON document.
    pub docs_file: PathBuf,
    /// Output directory for generated pages.
    pub out_dir: PathBuf,
    /// Base URL prepended to provenance paths when building source links.
    pub source_link_base: Option<String>,
    /// Site title shown on category dashboards.
    pub title: Option<String>,
}

/// Raw TOML structure for `.docsite.toml`.
#[derive(serde::Deserialize)]
struct DocsiteTomlConfig {
    content: Option<String>,
    docs: Option<String>,
    out: Option<String>,
    source_link_base: Option<String>,
    title: Option<String>,
}

impl Config {
    /// Load config from `.docsite.toml` in the given root directory.
    /// Returns the defaults if the file doesn't exist.
    /// Returns an error if the file exists but is malformed — never silently
    /// falls back to defaults when the user wrote a config file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if reading fails (other than not-found),
    /// or `Error::TomlDe` if the TOML is malformed.
    pub fn load(root: &Path) -> Result<Self, Error> {
        let path = root.join(".docsite.toml");
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::defaults()),
            Err(e) => return Err(Error::Io(e)),
        };

        let raw: DocsiteTomlConfig = toml::from_str(&content)?;
        Ok(Self {
            content_dir: raw.content.map(PathBuf::from),
            docs_file: raw.docs.map_or_else(|| PathBuf::from("docs.json"), PathBuf::from),
            out_dir: raw.out.map_or_else(|| PathBuf::from("site"), PathBuf::from),
            source_link_base: raw.source_link_base,
            title: raw.title,
        })
    }

    /// Default config: `docs.json` in, `site/` out, nothing else.
    fn defaults() -> Self {
        Self {
            content_dir: None,
            docs_file: PathBuf::from("docs.json"),
            out_dir: PathBuf::from("site"),
            source_link_base: None,
            title: None,
        }
    }
}
