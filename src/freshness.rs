//! Freshness auditing of a previously generated output directory against the
//! current metadata document.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::Config;
use crate::error::Error;
use crate::generator;
use crate::lookup::Category;
use crate::model::DocNode;

/// State of one artifact relative to the current document.
pub enum PageState {
    /// On disk with exactly the expected content.
    Fresh,
    /// Expected but not on disk — the site was never built or the entity is new.
    Missing,
    /// On disk under a category directory but no longer expected — left over
    /// from a renamed or removed entity.
    Orphaned,
    /// On disk with different content — the document changed since the build.
    Stale,
}

/// One audited artifact: its path relative to the output directory and state.
pub struct PageReport {
    /// Artifact path relative to the output directory.
    pub path: PathBuf,
    /// Audit outcome for this artifact.
    pub state: PageState,
}

/// Audit every expected artifact and sweep the category directories for
/// orphans. Authored content pages are not audited — the document does not
/// determine them.
///
/// # Errors
///
/// Returns `Error::MissingChildren` when the root has no children collection,
/// or `Error::Io` for read failures other than not-found.
pub fn audit(root: &DocNode, config: &Config, out_dir: &Path) -> Result<Vec<PageReport>, Error> {
    let expected = generator::expected_pages(root, config)?;
    let mut reports = Vec::new();
    let mut claimed: HashSet<PathBuf> = HashSet::new();

    for page in &expected {
        claimed.insert(page.path.clone());
        let state = compare_page_against_disk(page, out_dir)?;
        reports.push(PageReport { path: page.path.clone(), state });
    }

    for path in orphaned_artifacts(out_dir, &claimed) {
        reports.push(PageReport { path, state: PageState::Orphaned });
    }

    return Ok(reports);
}

/// Compare one expected artifact against what is on disk.
///
/// # Errors
///
/// Returns `Error::Io` for read failures other than not-found.
fn compare_page_against_disk(
    page: &generator::ExpectedPage,
    out_dir: &Path,
) -> Result<PageState, Error> {
    let on_disk = match std::fs::read_to_string(out_dir.join(&page.path)) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(PageState::Missing),
        Err(e) => return Err(Error::Io(e)),
        Ok(content) => content,
    };
    if on_disk == page.content {
        return Ok(PageState::Fresh);
    }
    return Ok(PageState::Stale);
}

/// Markdown files under the category directories that no expected artifact
/// claims. Sorted for stable reporting.
fn orphaned_artifacts(out_dir: &Path, claimed: &HashSet<PathBuf>) -> Vec<PathBuf> {
    let mut orphans = Vec::new();

    for category in Category::ALL {
        let dir = out_dir.join("docs").join(category.slug());
        if !dir.is_dir() {
            continue;
        }
        for entry in WalkDir::new(&dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| {
                return e.file_type().is_file()
                    && e.path().extension().is_some_and(|ext| return ext == "md");
            })
        {
            let Ok(relative) = entry.path().strip_prefix(out_dir) else {
                continue;
            };
            if !claimed.contains(relative) {
                orphans.push(relative.to_path_buf());
            }
        }
    }

    orphans.sort();
    return orphans;
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
                { "id": 1, "name": "Player", "kind": 128 },
                { "id": 2, "name": "createPlayer", "kind": 64 },
            ],
        }))
        .unwrap();
    }

    fn count(reports: &[PageReport], want: fn(&PageState) -> bool) -> usize {
        return reports.iter().filter(|r| return want(&r.state)).count();
    }

    #[test]
    fn freshly_generated_site_is_all_fresh() {
        let root = sample_root();
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());
        let out = dir.path().join("site");
        generator::generate(&root, &config, &out).unwrap();

        let reports = audit(&root, &config, &out).unwrap();
        assert_eq!(reports.len(), 4);
        assert_eq!(count(&reports, |s| return matches!(s, PageState::Fresh)), 4);
    }

    #[test]
    fn never_built_site_is_all_missing() {
        let root = sample_root();
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());

        let reports = audit(&root, &config, &dir.path().join("site")).unwrap();
        assert_eq!(count(&reports, |s| return matches!(s, PageState::Missing)), 4);
    }

    #[test]
    fn edited_artifact_is_stale() {
        let root = sample_root();
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());
        let out = dir.path().join("site");
        generator::generate(&root, &config, &out).unwrap();

        std::fs::write(out.join("docs/classes/Player/index.md"), "tampered\n").unwrap();

        let reports = audit(&root, &config, &out).unwrap();
        assert_eq!(count(&reports, |s| return matches!(s, PageState::Stale)), 1);
        assert_eq!(count(&reports, |s| return matches!(s, PageState::Fresh)), 3);
    }

    #[test]
    fn leftover_artifact_is_orphaned() {
        let root = sample_root();
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());
        let out = dir.path().join("site");
        generator::generate(&root, &config, &out).unwrap();

        // Simulate a removed entity whose page survived an earlier build.
        let stray = out.join("docs/classes/Mixer");
        std::fs::create_dir_all(&stray).unwrap();
        std::fs::write(stray.join("index.md"), "# Class: Mixer\n").unwrap();

        let reports = audit(&root, &config, &out).unwrap();
        let orphan = reports
            .iter()
            .find(|r| return matches!(r.state, PageState::Orphaned))
            .unwrap();
        assert_eq!(orphan.path, PathBuf::from("docs/classes/Mixer/index.md"));
    }

    #[test]
    fn authored_pages_are_not_audited() {
        let root = sample_root();
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());
        let out = dir.path().join("site");
        generator::generate(&root, &config, &out).unwrap();

        std::fs::create_dir_all(out.join("docs/guide")).unwrap();
        std::fs::write(out.join("docs/guide/getting-started.md"), "# Guide\n").unwrap();

        let reports = audit(&root, &config, &out).unwrap();
        assert_eq!(count(&reports, |s| return matches!(s, PageState::Orphaned)), 0);
    }
}
