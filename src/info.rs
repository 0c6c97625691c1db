use std::path::PathBuf;

use serde::Serialize;

use crate::config::Config;
use crate::error::Error;
use crate::lookup::{self, Category};
use crate::model;

/// Output the comprehensive docsite reference document.
///
/// # Errors
///
/// Returns errors from config loading. A missing or malformed document is
/// reported in the output, not an error here.
pub fn run(json: bool) -> Result<(), Error> {
    let root = PathBuf::from(".");
    let config = Config::load(&root)?;
    let state = gather_state(&config);

    if json {
        println!("{}", serde_json::to_string_pretty(&state).unwrap_or_default());
    } else {
        print_markdown(&state);
    }
    return Ok(());
}

// ── State gathering ───────────────────────────────────────────────────

/// Snapshot of the working directory as docsite sees it.
#[derive(Serialize)]
struct CurrentState {
    /// Entity counts per category, display order. `None` when the document
    /// is missing or malformed.
    categories: Option<Vec<(String, usize)>>,
    /// Whether `.docsite.toml` exists.
    config_found: bool,
    /// Configured document path.
    docs_file: String,
    /// Whether the metadata document loaded cleanly.
    document_loaded: bool,
    /// Configured output directory and whether it exists.
    out_dir: String,
    /// Number of entries the search index would carry.
    search_items: Option<usize>,
}

fn gather_state(config: &Config) -> CurrentState {
    let config_found = PathBuf::from(".docsite.toml").exists();
    let document = model::load(&config.docs_file).ok();

    let categories = document.as_ref().map(|root| {
        return Category::ALL
            .into_iter()
            .map(|c| return (c.title().to_string(), lookup::category_members(root, c).len()))
            .collect();
    });
    let search_items = document.as_ref().map(|root| return lookup::search_items(root).len());

    CurrentState {
        categories,
        config_found,
        docs_file: config.docs_file.display().to_string(),
        document_loaded: document.is_some(),
        out_dir: config.out_dir.display().to_string(),
        search_items,
    }
}

// ── Markdown output ───────────────────────────────────────────────────

fn print_markdown(state: &CurrentState) {
    let version = env!("CARGO_PKG_VERSION");
    print_markdown_header(version);
    print_markdown_state(state);
    println!();
    print_markdown_exit_codes();
}

fn print_markdown_exit_codes() {
    print!(
        "\
## Exit Codes (check)

    0   every generated page matches the current document
    1   stale or orphaned pages on disk
    2   expected pages missing from disk
"
    );
}

fn print_markdown_header(version: &str) {
    print!(
        "\
# docsite {version}

Static API documentation site generator — turn TypeDoc-style metadata JSON
into a browsable markdown site.

## Routes

    /docs/<category>            category dashboard
    /docs/<category>/<name>     entity detail page
    categories: classes, interfaces, enums, functions, types

## Workflow

    docsite build               Generate all pages into the output directory
    docsite check               Verify the site matches the document (exit 0/1/2)
    docsite status              Per-page freshness, always exit 0
    docsite resolve <slug>      Resolve a slug to a documented entity
    docsite search [query]      Print the flat search index
    docsite sidebar             Print the navigation tree

"
    );
}

fn print_markdown_state(state: &CurrentState) {
    println!("## Current State\n");
    let config_note = if state.config_found { "found" } else { "not found, using defaults" };
    println!("- `.docsite.toml`: {config_note}");
    println!("- document: `{}`", state.docs_file);
    println!("- output: `{}`", state.out_dir);

    let Some(categories) = &state.categories else {
        println!("- document not loaded (missing or malformed)");
        return;
    };
    for (title, count) in categories {
        println!("- {title}: {count}");
    }
    if let Some(items) = state.search_items {
        println!("- search index entries: {items}");
    }
}
