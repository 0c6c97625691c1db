//! Build-time page generation: walk the tree once, bucketed by entity kind,
//! and emit one artifact per category plus one per entity.
//!
//! Generation is all-or-nothing with respect to malformed input: a root with
//! no children collection fails before any directory is created. Re-running
//! on the same document overwrites every artifact with identical bytes.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::Config;
use crate::error::Error;
use crate::lookup::{self, Category};
use crate::model::DocNode;
use crate::render;

/// One artifact the generator will (or did) emit: a path relative to the
/// output directory plus its full rendered content. Identity is determined by
/// `(category, entityName)` alone.
pub struct ExpectedPage {
    /// Rendered markdown content.
    pub content: String,
    /// Path relative to the output directory.
    pub path: PathBuf,
}

/// Counts reported after a generation run.
pub struct GenerateSummary {
    /// Authored markdown files copied from the content directory.
    pub authored: usize,
    /// Generated artifacts written.
    pub pages: usize,
}

/// The complete artifact set for a document: per non-empty category, one
/// dashboard at `docs/<category>/index.md` and one detail page at
/// `docs/<category>/<name>/index.md` per entity, in display order.
///
/// This is the pure half of generation, shared with the freshness audit.
///
/// # Errors
///
/// Returns `Error::MissingChildren` when the root has no children collection.
pub fn expected_pages(root: &DocNode, config: &Config) -> Result<Vec<ExpectedPage>, Error> {
    if root.children.is_none() {
        return Err(Error::MissingChildren { path: config.docs_file.clone() });
    }

    let mut pages = Vec::new();
    for category in Category::ALL {
        let members = lookup::category_members(root, category);
        if members.is_empty() {
            continue;
        }

        let category_dir = Path::new("docs").join(category.slug());
        pages.push(ExpectedPage {
            content: render::category_page(root, category, config),
            path: category_dir.join("index.md"),
        });

        for member in members {
            pages.push(ExpectedPage {
                content: render::entity_page(member, config),
                path: category_dir.join(&member.name).join("index.md"),
            });
        }
    }

    return Ok(pages);
}

/// Generate the full site into `out_dir`: every expected artifact, then the
/// authored content pages. Pre-existing files are silently overwritten; no
/// diffing against a previous run.
///
/// # Errors
///
/// Returns `Error::MissingChildren` before touching the filesystem when the
/// root has no children collection, or `Error::Io` from directory creation
/// and file writes.
pub fn generate(root: &DocNode, config: &Config, out_dir: &Path) -> Result<GenerateSummary, Error> {
    let pages = expected_pages(root, config)?;

    for page in &pages {
        let target = out_dir.join(&page.path);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&target, &page.content)?;
    }

    let authored = copy_authored_content(config, out_dir)?;
    return Ok(GenerateSummary { authored, pages: pages.len() });
}

/// Copy authored markdown pages (guide, changelog, legal) from the content
/// directory into the output tree, preserving relative paths. A missing
/// content directory copies nothing — authored pages are optional.
///
/// # Errors
///
/// Returns `Error::Io` from directory creation or file copies.
fn copy_authored_content(config: &Config, out_dir: &Path) -> Result<usize, Error> {
    let Some(content_dir) = &config.content_dir else {
        return Ok(0);
    };
    if !content_dir.is_dir() {
        return Ok(0);
    }

    let mut copied = 0_usize;
    for entry in WalkDir::new(content_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| {
            return e.file_type().is_file()
                && e.path().extension().is_some_and(|ext| return ext == "md");
        })
    {
        let relative = entry.path().strip_prefix(content_dir).unwrap_or(entry.path());
        let target = out_dir.join(relative);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::copy(entry.path(), &target)?;
        copied = copied.saturating_add(1);
    }

    return Ok(copied);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(dir: &Path) -> Config {
        return Config {
            content_dir: None,
            docs_file: dir.join("docs.json"),
            out_dir: dir.join("site"),
            source_link_base: None,
            title: None,
        };
    }

    fn sample_root() -> DocNode {
        return serde_json::from_value(serde_json::json!({
            "id": 0, "name": "musickit", "kind": 1,
            "children": [
                { "id": 1, "name": "Player", "kind": 128, "children": [
                    { "id": 2, "name": "play", "kind": 2048 },
                ]},
                { "id": 3, "name": "createPlayer", "kind": 64 },
            ],
        }))
        .unwrap();
    }

    #[test]
    fn emits_one_dashboard_and_one_page_per_entity() {
        let root = sample_root();
        let dir = tempfile::tempdir().unwrap();
        let pages = expected_pages(&root, &config_for(dir.path())).unwrap();
        let paths: Vec<String> = pages
            .iter()
            .map(|p| return p.path.to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(
            paths,
            [
                "docs/classes/index.md",
                "docs/classes/Player/index.md",
                "docs/functions/index.md",
                "docs/functions/createPlayer/index.md",
            ]
        );
    }

    #[test]
    fn generation_is_idempotent() {
        let root = sample_root();
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());
        let out = dir.path().join("site");

        let first = generate(&root, &config, &out).unwrap();
        assert_eq!(first.pages, 4);
        let player_page = out.join("docs/classes/Player/index.md");
        let before = std::fs::read_to_string(&player_page).unwrap();

        let second = generate(&root, &config, &out).unwrap();
        assert_eq!(second.pages, 4);
        let after = std::fs::read_to_string(&player_page).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn missing_children_aborts_before_any_write() {
        let root: DocNode = serde_json::from_value(serde_json::json!({
            "id": 0, "name": "empty", "kind": 1,
        }))
        .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());
        let out = dir.path().join("site");

        let result = generate(&root, &config, &out);
        assert!(matches!(result, Err(Error::MissingChildren { .. })));
        assert!(!out.exists(), "output directory must not be created on abort");
    }

    #[test]
    fn empty_children_generates_nothing_but_succeeds() {
        let root: DocNode = serde_json::from_value(serde_json::json!({
            "id": 0, "name": "empty", "kind": 1, "children": [],
        }))
        .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let summary = generate(&root, &config_for(dir.path()), &dir.path().join("site")).unwrap();
        assert_eq!(summary.pages, 0);
    }

    #[test]
    fn copies_authored_content_preserving_paths() {
        let root = sample_root();
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        std::fs::create_dir_all(content.join("docs/guide")).unwrap();
        std::fs::write(content.join("docs/guide/getting-started.md"), "# Getting Started\n").unwrap();
        std::fs::write(content.join("privacy.md"), "# Privacy\n").unwrap();

        let mut config = config_for(dir.path());
        config.content_dir = Some(content);
        let out = dir.path().join("site");

        let summary = generate(&root, &config, &out).unwrap();
        assert_eq!(summary.authored, 2);
        assert!(out.join("docs/guide/getting-started.md").is_file());
        assert!(out.join("privacy.md").is_file());
    }
}
