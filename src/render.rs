//! Markdown rendering of entity detail pages and category dashboards.
//!
//! Output is deterministic: the same node and config always produce the same
//! bytes, which is what makes generation idempotent and the freshness audit a
//! plain byte comparison.

use std::fmt::Write as _;

use crate::config::Config;
use crate::lookup::{self, Category};
use crate::model::{DocNode, Kind};

/// Render a category dashboard: one listing line per entity in the bucket.
pub fn category_page(root: &DocNode, category: Category, config: &Config) -> String {
    let mut out = format!("# {}\n", category.title());

    if let Some(title) = &config.title {
        let _ = write!(out, "\n{} exported by {title}.\n", category.title());
    }

    let members = lookup::category_members(root, category);
    if members.is_empty() {
        out.push_str("\nNothing documented in this category.\n");
        return out;
    }

    out.push('\n');
    for member in members {
        let _ = write!(
            out,
            "- [{}](/docs/{}/{})",
            member.name,
            category.slug(),
            member.name
        );
        if let Some(line) = first_summary_line(member) {
            let _ = write!(out, " — {line}");
        }
        out.push('\n');
    }
    return out;
}

/// Render an entity detail page. The sections depend on the entity's kind:
/// constructors/properties/methods for classes, properties/methods for
/// interfaces, members for enums, call signatures for functions, and the
/// aliased type for type aliases.
pub fn entity_page(node: &DocNode, config: &Config) -> String {
    let mut out = format!("# {}: {}\n", node.kind.label(), node.name);

    let badges = flag_badges(node);
    if !badges.is_empty() {
        let _ = write!(out, "\n{badges}\n");
    }

    if let Some(summary) = node.summary_text() {
        let _ = write!(out, "\n{}\n", summary.trim());
    }

    if let Some(link) = source_link(node, config.source_link_base.as_deref()) {
        let _ = write!(out, "\n{link}\n");
    }

    match node.kind {
        Kind::Class => {
            member_section(&mut out, node, "Constructors", Kind::Constructor);
            member_section(&mut out, node, "Properties", Kind::Property);
            member_section(&mut out, node, "Methods", Kind::Method);
        },
        Kind::Enum => enum_member_section(&mut out, node),
        Kind::Function => signature_section(&mut out, node),
        Kind::Interface => {
            member_section(&mut out, node, "Properties", Kind::Property);
            member_section(&mut out, node, "Methods", Kind::Method);
        },
        Kind::TypeAlias => {
            let _ = write!(out, "\nType: `{}`\n", type_display(node.type_info.as_ref()));
        },
        // Other kinds only ever render as members of the pages above.
        _ => {},
    }

    return out;
}

/// Outbound link to the entity's first provenance record:
/// `<base><fileName>#L<line>`. `None` without a configured base or sources.
pub fn source_link(node: &DocNode, base: Option<&str>) -> Option<String> {
    let base = base?;
    let source = node.sources.first()?;
    return Some(format!(
        "Defined in [{name}:{line}]({base}{name}#L{line})",
        name = source.file_name,
        line = source.line,
    ));
}

/// Enum members with their literal values.
fn enum_member_section(out: &mut String, node: &DocNode) {
    let members: Vec<&DocNode> = node
        .children()
        .iter()
        .filter(|child| return child.kind == Kind::EnumMember)
        .collect();
    if members.is_empty() {
        return;
    }

    out.push_str("\n## Members\n\n");
    for member in members {
        let _ = write!(out, "- `{}`", member.name);
        if let Some(value) = member.literal_value() {
            let _ = write!(out, " = `{value}`");
        }
        if let Some(line) = first_summary_line(member) {
            let _ = write!(out, " — {line}");
        }
        out.push('\n');
    }
}

/// First line of a node's summary prose, for one-line listings.
fn first_summary_line(node: &DocNode) -> Option<String> {
    let summary = node.summary_text()?;
    let line = summary.lines().next()?.trim();
    if line.is_empty() {
        return None;
    }
    return Some(line.to_string());
}

/// Inline code badges for the modifier flags set on a node.
fn flag_badges(node: &DocNode) -> String {
    let mut badges: Vec<&str> = Vec::new();
    if node.flags.is_static {
        badges.push("`static`");
    }
    if node.flags.is_private {
        badges.push("`private`");
    }
    if node.flags.is_protected {
        badges.push("`protected`");
    }
    if node.flags.is_optional {
        badges.push("`optional`");
    }
    return badges.join(" ");
}

/// A section of same-kind members (properties, methods, constructors) with
/// one `###` heading per member so `#member` fragments land somewhere.
fn member_section(out: &mut String, node: &DocNode, heading: &str, kind: Kind) {
    let members: Vec<&DocNode> = node
        .children()
        .iter()
        .filter(|child| return child.kind == kind)
        .collect();
    if members.is_empty() {
        return;
    }

    let _ = write!(out, "\n## {heading}\n");
    for member in members {
        let _ = write!(out, "\n### {}\n", member.name);

        let badges = flag_badges(member);
        if !badges.is_empty() {
            let _ = write!(out, "\n{badges}\n");
        }

        if member.signatures.is_empty() {
            if matches!(member.kind, Kind::Property) {
                let _ = write!(out, "\nType: `{}`\n", type_display(member.type_info.as_ref()));
            }
        } else {
            out.push('\n');
            for sig in &member.signatures {
                let _ = writeln!(out, "```\n{}\n```", signature_line(sig));
            }
        }

        // Member prose lives on the member for properties, on the first
        // signature for callables.
        let summary = member
            .summary_text()
            .or_else(|| return member.signatures.first().and_then(DocNode::summary_text));
        if let Some(summary) = summary {
            let _ = write!(out, "\n{}\n", summary.trim());
        }
    }
}

/// Format one call signature as `name(param: Type, ...): Return`.
fn signature_line(sig: &DocNode) -> String {
    let params: Vec<String> = sig
        .parameters
        .iter()
        .map(|p| {
            let marker = if p.flags.is_optional { "?" } else { "" };
            return format!("{}{marker}: {}", p.name, type_display(p.type_info.as_ref()));
        })
        .collect();
    return format!(
        "{}({}): {}",
        sig.name,
        params.join(", "),
        type_display(sig.type_info.as_ref())
    );
}

/// Call signatures of a function page, each with its parameter list.
fn signature_section(out: &mut String, node: &DocNode) {
    for sig in &node.signatures {
        let _ = write!(out, "\n## {}\n", signature_line(sig));

        if let Some(summary) = sig.summary_text() {
            let _ = write!(out, "\n{}\n", summary.trim());
        }

        if sig.parameters.is_empty() {
            continue;
        }
        out.push_str("\n### Parameters\n\n");
        for param in &sig.parameters {
            let marker = if param.flags.is_optional { " (optional)" } else { "" };
            let _ = write!(
                out,
                "- `{}`: `{}`{marker}",
                param.name,
                type_display(param.type_info.as_ref())
            );
            if let Some(line) = first_summary_line(param) {
                let _ = write!(out, " — {line}");
            }
            out.push('\n');
        }
    }
}

/// Best-effort display of an opaque type descriptor. Reads `name`, falls back
/// to the descriptor's own `type` tag, then to `unknown`. Never validates.
fn type_display(type_info: Option<&serde_json::Value>) -> String {
    let Some(value) = type_info else {
        return "unknown".to_string();
    };
    if let Some(name) = value.get("name").and_then(serde_json::Value::as_str) {
        return name.to_string();
    }
    if let Some(tag) = value.get("type").and_then(serde_json::Value::as_str) {
        return tag.to_string();
    }
    return "unknown".to_string();
}
