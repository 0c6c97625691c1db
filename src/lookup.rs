//! Slug resolution and the two derived views of the tree: the flat search
//! index and the grouped sidebar navigation.
//!
//! Everything here is a bounded read-only traversal of the loaded document —
//! no I/O, no state.

use serde::Serialize;

use crate::model::{DocNode, Kind};

/// One of the five top-level kind buckets used for routing.
///
/// `ALL` carries the fixed display order (Classes, Interfaces, Enums,
/// Functions, Types) used by the sidebar and the generator; the variant
/// declaration order is not meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// `/docs/classes` — top-level Class nodes.
    Classes,
    /// `/docs/enums` — top-level Enum nodes.
    Enums,
    /// `/docs/functions` — top-level Function nodes.
    Functions,
    /// `/docs/interfaces` — top-level Interface nodes.
    Interfaces,
    /// `/docs/types` — top-level TypeAlias nodes.
    Types,
}

impl Category {
    /// All categories in fixed display order.
    pub const ALL: [Category; 5] = [
        Category::Classes,
        Category::Interfaces,
        Category::Enums,
        Category::Functions,
        Category::Types,
    ];

    /// The node kind this bucket selects among the root's direct children.
    pub const fn entity_kind(self) -> Kind {
        return match self {
            Category::Classes => Kind::Class,
            Category::Enums => Kind::Enum,
            Category::Functions => Kind::Function,
            Category::Interfaces => Kind::Interface,
            Category::Types => Kind::TypeAlias,
        };
    }

    /// Parse a routing slug segment into a category.
    pub fn from_slug(slug: &str) -> Option<Category> {
        return Category::ALL.into_iter().find(|c| return c.slug() == slug);
    }

    /// The routing slug segment.
    pub const fn slug(self) -> &'static str {
        return match self {
            Category::Classes => "classes",
            Category::Enums => "enums",
            Category::Functions => "functions",
            Category::Interfaces => "interfaces",
            Category::Types => "types",
        };
    }

    /// The group heading shown in the sidebar and on dashboards.
    pub const fn title(self) -> &'static str {
        return match self {
            Category::Classes => "Classes",
            Category::Enums => "Enums",
            Category::Functions => "Functions",
            Category::Interfaces => "Interfaces",
            Category::Types => "Types",
        };
    }
}

/// One entry in the flat search index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItem {
    /// Raw kind of the indexed node.
    pub kind: Kind,
    /// Human kind label (`Class`, `Method`, `Property`, ...).
    pub kind_string: &'static str,
    /// Routing path, with a `#member` fragment for class members.
    pub path: String,
    /// Display title; class members are titled `Class.member`.
    pub title: String,
}

/// One entry in the sidebar navigation tree. Top-level items are group
/// headers; their children are leaf links.
#[derive(Debug, Clone, Serialize)]
pub struct SidebarItem {
    /// Nested entries; empty for leaves.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SidebarItem>,
    /// Kind of the linked node; `None` for hand-authored entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<Kind>,
    /// Routing path.
    pub path: String,
    /// Display title.
    pub title: String,
}

/// The root's direct children belonging to one category, in document order.
pub fn category_members<'a>(root: &'a DocNode, category: Category) -> Vec<&'a DocNode> {
    return root
        .children()
        .iter()
        .filter(|child| return child.kind == category.entity_kind())
        .collect();
}

/// Resolve a slug (ordered path segments) to a node in the tree.
///
/// An empty slug resolves to the root. A leading category segment is an
/// alias: `["classes"]` alone also resolves to the root (the dashboard
/// filters by category itself), and `["classes", "X", ..]` resolves exactly
/// like `["X", ..]`. Every other segment is matched against the current
/// node's direct children by exact name equality, first match wins —
/// signatures and parameters are never searched, and duplicate sibling names
/// (not validated here) silently resolve to the first.
///
/// Returns `None` when any segment fails to match or a node mid-walk has no
/// children collection. Never an error.
pub fn find_node<'a>(root: &'a DocNode, slug: &[&str]) -> Option<&'a DocNode> {
    let Some((first, rest)) = slug.split_first() else {
        return Some(root);
    };

    let segments = if Category::from_slug(first).is_some() {
        if rest.is_empty() {
            return Some(root);
        }
        rest
    } else {
        slug
    };

    let mut current = root;
    for segment in segments {
        current = current.children().iter().find(|child| return child.name == *segment)?;
    }
    return Some(current);
}

/// Build the flat search index.
///
/// Scans only the root's direct children, in order. A Class contributes one
/// entry for itself plus one per Method/Property child, interleaved
/// immediately after it; Interface, Function, and TypeAlias contribute one
/// entry each; every other top-level kind — enums included — is skipped.
/// Nothing below the grandchild level is indexed.
pub fn search_items(root: &DocNode) -> Vec<SearchItem> {
    let mut items = Vec::new();

    for child in root.children() {
        match child.kind {
            Kind::Class => {
                items.push(entity_item(child, Category::Classes));
                for member in child.children() {
                    if matches!(member.kind, Kind::Method | Kind::Property) {
                        items.push(SearchItem {
                            kind: member.kind,
                            kind_string: member.kind.label(),
                            path: format!("/docs/classes/{}#{}", child.name, member.name),
                            title: format!("{}.{}", child.name, member.name),
                        });
                    }
                }
            },
            Kind::Function => items.push(entity_item(child, Category::Functions)),
            Kind::Interface => items.push(entity_item(child, Category::Interfaces)),
            Kind::TypeAlias => items.push(entity_item(child, Category::Types)),
            _ => {},
        }
    }

    return items;
}

/// Build the grouped sidebar navigation tree.
///
/// The hand-authored General group always comes first; then one group per
/// non-empty category in fixed display order, members in document order.
/// Empty categories are omitted entirely — no empty group headers.
pub fn sidebar_data(root: &DocNode) -> Vec<SidebarItem> {
    let mut groups = vec![SidebarItem {
        children: vec![
            static_entry("Getting Started", "/docs/guide/getting-started"),
            static_entry("Changelog", "/docs/changelog"),
        ],
        kind: None,
        path: "/docs".to_string(),
        title: "General".to_string(),
    }];

    for category in Category::ALL {
        let members = category_members(root, category);
        if members.is_empty() {
            continue;
        }
        groups.push(SidebarItem {
            children: members
                .iter()
                .map(|member| {
                    return SidebarItem {
                        children: Vec::new(),
                        kind: Some(member.kind),
                        path: format!("/docs/{}/{}", category.slug(), member.name),
                        title: member.name.clone(),
                    };
                })
                .collect(),
            kind: None,
            path: format!("/docs/{}", category.slug()),
            title: category.title().to_string(),
        });
    }

    return groups;
}

/// Search entry for a top-level entity.
fn entity_item(node: &DocNode, category: Category) -> SearchItem {
    return SearchItem {
        kind: node.kind,
        kind_string: node.kind.label(),
        path: format!("/docs/{}/{}", category.slug(), node.name),
        title: node.name.clone(),
    };
}

/// Leaf link for a hand-authored page.
fn static_entry(title: &str, path: &str) -> SidebarItem {
    return SidebarItem {
        children: Vec::new(),
        kind: None,
        path: path.to_string(),
        title: title.to_string(),
    };
}
