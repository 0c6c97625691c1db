use crate::error::Error;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Render an error as valid markdown with bold headings and print to stderr.
pub fn print_error(e: &Error) {
    let md = render_error(e);
    for line in md.lines() {
        if line.starts_with('#') {
            eprintln!("{BOLD}{line}{RESET}");
        } else {
            eprintln!("{line}");
        }
    }
}

/// Render an error as a structured markdown diagnostic.
///
/// Each variant produces a block with what happened and how to fix it.
/// Designed to be readable by both humans and LLM agents.
pub fn render_error(e: &Error) -> String {
    match e {
        Error::DocumentInvalid { path, source } => render_document_invalid(path, source),
        Error::DocumentNotFound { path } => render_document_not_found(path),
        Error::Io(e) => format!("\
# Error: I/O

{e}
"),
        Error::MissingChildren { path } => render_missing_children(path),
        Error::NodeNotFound { slug } => render_node_not_found(slug),
        Error::TomlDe(e) => format!("\
# Error: Invalid Config

`.docsite.toml` is not valid TOML:

{e}
"),
    }
}

fn render_document_invalid(path: &std::path::Path, source: &serde_json::Error) -> String {
    format!(
        "\
# Error: Invalid Metadata Document

`{}` is not a valid documentation tree: {source}

## Fix

Regenerate the document with your extraction tool and check that the file is
the full reflection output, not a fragment.
",
        path.display()
    )
}

fn render_document_not_found(path: &std::path::Path) -> String {
    format!(
        "\
# Error: Metadata Document Not Found

`{}` does not exist.

## Fix

Run your documentation extraction tool to produce it, or point `docs` in
`.docsite.toml` at the right file:

    docs = \"docs.json\"
",
        path.display()
    )
}

fn render_missing_children(path: &std::path::Path) -> String {
    format!(
        "\
# Error: Empty Document Root

The root of `{}` has no children collection, so there is nothing to
generate. Nothing was written.

## Fix

Re-run the extraction tool against a project that exports at least one
declaration.
",
        path.display()
    )
}

fn render_node_not_found(slug: &str) -> String {
    format!(
        "\
# Error: Entity Not Found

No documented entity at `{slug}`.

## Fix

List what exists and pick a valid slug:

    docsite search
"
    )
}
