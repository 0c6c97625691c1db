//! Core CLI commands for docsite: build, check, status, resolve, search,
//! sidebar, info.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::Config;
use crate::error;
use crate::freshness::{self, PageState};
use crate::generator;
use crate::lookup;
use crate::model::{self, DocNode};
use crate::render;

/// Load the metadata document and generate every page into the output
/// directory (config `out`, overridable with `--out`).
///
/// # Errors
///
/// Returns errors from config loading, document loading, or generation.
pub fn build(out: Option<&Path>) -> Result<(), error::Error> {
    let root = PathBuf::from(".");
    let config = Config::load(&root)?;
    let document = model::load(&config.docs_file)?;
    let out_dir = out.unwrap_or(&config.out_dir);

    let summary = generator::generate(&document, &config, out_dir)?;
    eprintln!(
        "Generated {} pages ({} authored) into {}",
        summary.pages,
        summary.authored,
        out_dir.display()
    );
    return Ok(());
}

/// Audit the generated site against the current document and report anything
/// out of date.
///
/// # Errors
///
/// Returns errors from config loading, document loading, or the audit walk.
pub fn check(out: Option<&Path>) -> Result<ExitCode, error::Error> {
    let root = PathBuf::from(".");
    let config = Config::load(&root)?;
    let document = model::load(&config.docs_file)?;
    let out_dir = out.unwrap_or(&config.out_dir);

    let reports = freshness::audit(&document, &config, out_dir)?;
    let mut missing_count = 0_u32;
    let mut outdated_count = 0_u32;

    for report in &reports {
        match report.state {
            PageState::Fresh => {},
            PageState::Missing => {
                missing_count = missing_count.saturating_add(1);
                println!("MISSING   {}", report.path.display());
            },
            PageState::Orphaned => {
                outdated_count = outdated_count.saturating_add(1);
                println!("ORPHANED  {}", report.path.display());
            },
            PageState::Stale => {
                outdated_count = outdated_count.saturating_add(1);
                println!("STALE     {}", report.path.display());
            },
        }
    }

    // Exit code priority: missing (2) > stale/orphaned (1) > fresh (0).
    if missing_count > 0 {
        println!();
        println!("{missing_count} missing, {outdated_count} out of date");
        print_rebuild_hint();
        return Ok(ExitCode::from(2));
    } else if outdated_count > 0 {
        println!();
        println!("{outdated_count} out of date");
        print_rebuild_hint();
        return Ok(ExitCode::from(1));
    } else {
        let total = reports.len();
        println!("All {total} pages fresh");
        return Ok(ExitCode::SUCCESS);
    }
}

/// Output a comprehensive reference document for docsite.
///
/// # Errors
///
/// Returns errors from config loading.
pub fn info(json: bool) -> Result<(), error::Error> {
    return crate::info::run(json);
}

/// Turn a user-supplied slug string into path segments. Leading slashes and a
/// leading `docs` segment are routing chrome, not tree structure.
fn parse_slug(slug: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = slug.split('/').filter(|s| return !s.is_empty()).collect();
    if segments.first() == Some(&"docs") {
        segments.remove(0);
    }
    return segments;
}

/// One-line rebuild hint shown after a failed check.
fn print_rebuild_hint() {
    eprintln!();
    eprintln!("hint: run `docsite build` to regenerate the site");
    return;
}

/// Print a short report for a resolved node.
fn print_node_report(node: &DocNode, config: &Config) {
    println!("{}: {}", node.kind.label(), node.name);
    if let Some(summary) = node.summary_text() {
        println!("{}", summary.trim());
    }
    if let Some(link) = render::source_link(node, config.source_link_base.as_deref()) {
        println!("{link}");
    }
    let children = node.children();
    if !children.is_empty() {
        println!("{} members:", children.len());
        for child in children {
            println!("  {}  ({})", child.name, child.kind.label());
        }
    }
    return;
}

/// Resolve a slug to a documented entity and print a report for it.
///
/// # Errors
///
/// Returns `Error::NodeNotFound` when the slug doesn't resolve, plus errors
/// from config or document loading.
pub fn resolve(slug: &str) -> Result<(), error::Error> {
    let root = PathBuf::from(".");
    let config = Config::load(&root)?;
    let document = model::load(&config.docs_file)?;

    let segments = parse_slug(slug);
    let Some(node) = lookup::find_node(&document, &segments) else {
        return Err(error::Error::NodeNotFound { slug: segments.join("/") });
    };

    print_node_report(node, &config);
    return Ok(());
}

/// Print the flat search index, optionally filtered by a case-insensitive
/// substring of the title.
///
/// # Errors
///
/// Returns errors from config or document loading.
pub fn search(query: Option<&str>, json: bool) -> Result<(), error::Error> {
    let root = PathBuf::from(".");
    let config = Config::load(&root)?;
    let document = model::load(&config.docs_file)?;

    let needle = query.map(str::to_lowercase);
    let items: Vec<lookup::SearchItem> = lookup::search_items(&document)
        .into_iter()
        .filter(|item| {
            return match &needle {
                None => true,
                Some(n) => item.title.to_lowercase().contains(n.as_str()),
            };
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&items).unwrap_or_default());
        return Ok(());
    }

    for item in &items {
        println!("{}  {}  ({})", item.title, item.path, item.kind_string);
    }
    return Ok(());
}

/// Print the sidebar navigation tree.
///
/// # Errors
///
/// Returns errors from config or document loading.
pub fn sidebar(json: bool) -> Result<(), error::Error> {
    let root = PathBuf::from(".");
    let config = Config::load(&root)?;
    let document = model::load(&config.docs_file)?;

    let groups = lookup::sidebar_data(&document);
    if json {
        println!("{}", serde_json::to_string_pretty(&groups).unwrap_or_default());
        return Ok(());
    }

    for group in &groups {
        println!("{}", group.title);
        for entry in &group.children {
            println!("  {}  {}", entry.title, entry.path);
        }
    }
    return Ok(());
}

/// Show the freshness of every generated page. Always exits 0.
///
/// # Errors
///
/// Returns errors from config loading, document loading, or the audit walk.
pub fn status(out: Option<&Path>) -> Result<(), error::Error> {
    let root = PathBuf::from(".");
    let config = Config::load(&root)?;
    let document = model::load(&config.docs_file)?;
    let out_dir = out.unwrap_or(&config.out_dir);

    for report in freshness::audit(&document, &config, out_dir)? {
        let label = match report.state {
            PageState::Fresh => "FRESH   ",
            PageState::Missing => "MISSING ",
            PageState::Orphaned => "ORPHANED",
            PageState::Stale => "STALE   ",
        };
        println!("{label}  {}", report.path.display());
    }

    return Ok(());
}
