//! Sidebar tree and active item resolution.
//!
//! The sidebar is an ordered forest owned by the site configuration.
//! Lookups borrow into it and never mutate it; sibling order decides
//! which entry wins when several share a link.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::path::normalize_sidebar_path;

/// Sidebar navigation entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarItem {
    /// Link target path (e.g., "/docs/getting-started").
    pub link: String,
    /// Display title.
    pub title: String,
    /// Nested entries, in display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<SidebarItem>>,
}

impl SidebarItem {
    /// Create a leaf entry.
    #[must_use]
    pub fn new(link: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            title: title.into(),
            children: None,
        }
    }

    /// Attach child entries.
    #[must_use]
    pub fn with_children(mut self, children: Vec<SidebarItem>) -> Self {
        self.children = Some(children);
        self
    }
}

/// Find the sidebar entry owning `path`.
///
/// The path is normalized with [`normalize_sidebar_path`], then the tree is
/// searched depth-first in pre-order. An entry whose link equals the path
/// is returned without looking at its children; otherwise a match among
/// its descendants wins over later siblings.
///
/// Returns `None` when nothing matches, which is normal for pages outside
/// the sidebar (e.g., blog posts).
#[must_use]
pub fn resolve_sidebar_item<'a>(
    sidebar: &'a [SidebarItem],
    path: &str,
) -> Option<&'a SidebarItem> {
    find_item(sidebar, normalize_sidebar_path(path))
}

fn find_item<'a>(items: &'a [SidebarItem], path: &str) -> Option<&'a SidebarItem> {
    items.iter().find_map(|item| {
        if item.link == path {
            return Some(item);
        }
        item.children
            .as_deref()
            .and_then(|children| find_item(children, path))
    })
}

/// Iterate over every entry of the tree in pre-order.
pub(crate) fn walk(sidebar: &[SidebarItem]) -> impl Iterator<Item = &SidebarItem> {
    let mut stack: Vec<&SidebarItem> = sidebar.iter().rev().collect();
    std::iter::from_fn(move || {
        let item = stack.pop()?;
        if let Some(children) = &item.children {
            stack.extend(children.iter().rev());
        }
        Some(item)
    })
}

/// Collect configuration warnings for the sidebar.
///
/// Reports duplicate links (only the first in traversal order can ever be
/// resolved) and links that never equal a normalized path.
pub(crate) fn lint_sidebar(sidebar: &[SidebarItem]) -> Vec<String> {
    let mut warnings = Vec::new();
    let mut seen = HashSet::new();

    for item in walk(sidebar) {
        if !seen.insert(item.link.as_str()) {
            warnings.push(format!(
                "sidebar link {} appears more than once; only the first entry is reachable",
                item.link
            ));
        }
        if normalize_sidebar_path(&item.link) != item.link {
            warnings.push(format!(
                "sidebar link {} is never matched; use {}",
                item.link,
                normalize_sidebar_path(&item.link)
            ));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sidebar() -> Vec<SidebarItem> {
        vec![
            SidebarItem::new("/docs", "Introduction"),
            SidebarItem::new("/docs/guide", "Guide").with_children(vec![
                SidebarItem::new("/docs/guide/install", "Install"),
                SidebarItem::new("/docs/guide/config", "Config").with_children(vec![
                    SidebarItem::new("/docs/guide/config/env", "Environment"),
                ]),
            ]),
            SidebarItem::new("/docs/api", "API"),
        ]
    }

    #[test]
    fn test_resolve_top_level_item() {
        let sidebar = sample_sidebar();

        let item = resolve_sidebar_item(&sidebar, "/docs/api").unwrap();

        assert_eq!(item.title, "API");
    }

    #[test]
    fn test_resolve_nested_item() {
        let sidebar = sample_sidebar();

        let item = resolve_sidebar_item(&sidebar, "/docs/guide/config/env").unwrap();

        assert_eq!(item.title, "Environment");
    }

    #[test]
    fn test_resolve_branch_with_own_link() {
        let sidebar = sample_sidebar();

        let item = resolve_sidebar_item(&sidebar, "/docs/guide").unwrap();

        assert_eq!(item.title, "Guide");
    }

    #[test]
    fn test_resolve_returns_descendant_not_branch() {
        let sidebar =
            vec![SidebarItem::new("/x", "X").with_children(vec![SidebarItem::new("/x/y", "Y")])];

        let item = resolve_sidebar_item(&sidebar, "/x/y").unwrap();

        assert_eq!(item, &SidebarItem::new("/x/y", "Y"));
    }

    #[test]
    fn test_resolve_not_found_returns_none() {
        let sidebar = sample_sidebar();

        assert!(resolve_sidebar_item(&sidebar, "/blog/hello").is_none());
    }

    #[test]
    fn test_resolve_empty_sidebar_returns_none() {
        assert!(resolve_sidebar_item(&[], "/docs").is_none());
    }

    #[test]
    fn test_resolve_ignores_trailing_slash_and_html() {
        let sidebar = sample_sidebar();

        let plain = resolve_sidebar_item(&sidebar, "/docs/guide");
        let slash = resolve_sidebar_item(&sidebar, "/docs/guide/");
        let html = resolve_sidebar_item(&sidebar, "/docs/guide.html");

        assert_eq!(plain, slash);
        assert_eq!(plain, html);
        assert!(plain.is_some());
    }

    #[test]
    fn test_resolve_first_match_in_traversal_order_wins() {
        let sidebar = vec![
            SidebarItem::new("/a", "A").with_children(vec![SidebarItem::new("/dup", "Nested")]),
            SidebarItem::new("/dup", "Sibling"),
        ];

        let item = resolve_sidebar_item(&sidebar, "/dup").unwrap();

        assert_eq!(item.title, "Nested");
    }

    #[test]
    fn test_resolve_exact_match_short_circuits_children() {
        let sidebar = vec![
            SidebarItem::new("/a", "Parent").with_children(vec![SidebarItem::new("/a", "Child")]),
        ];

        let item = resolve_sidebar_item(&sidebar, "/a").unwrap();

        assert_eq!(item.title, "Parent");
    }

    #[test]
    fn test_resolve_is_repeatable() {
        let sidebar = sample_sidebar();

        let first = resolve_sidebar_item(&sidebar, "/docs/guide/install");
        let second = resolve_sidebar_item(&sidebar, "/docs/guide/install");

        assert_eq!(first, second);
        assert_eq!(sidebar, sample_sidebar());
    }

    #[test]
    fn test_resolve_root_link() {
        let sidebar = vec![SidebarItem::new("/", "Home")];

        assert_eq!(resolve_sidebar_item(&sidebar, "/").unwrap().title, "Home");
    }

    #[test]
    fn test_walk_is_pre_order() {
        let sidebar = sample_sidebar();

        let links: Vec<&str> = walk(&sidebar).map(|item| item.link.as_str()).collect();

        assert_eq!(
            links,
            vec![
                "/docs",
                "/docs/guide",
                "/docs/guide/install",
                "/docs/guide/config",
                "/docs/guide/config/env",
                "/docs/api",
            ]
        );
    }

    #[test]
    fn test_lint_clean_sidebar() {
        assert!(lint_sidebar(&sample_sidebar()).is_empty());
    }

    #[test]
    fn test_lint_duplicate_links() {
        let sidebar = vec![
            SidebarItem::new("/a", "A").with_children(vec![SidebarItem::new("/b", "B")]),
            SidebarItem::new("/b", "B again"),
        ];

        let warnings = lint_sidebar(&sidebar);

        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("/b"));
    }

    #[test]
    fn test_lint_unmatchable_links() {
        let sidebar = vec![
            SidebarItem::new("/guide/", "Guide"),
            SidebarItem::new("/api.html", "API"),
        ];

        let warnings = lint_sidebar(&sidebar);

        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("use /guide"));
        assert!(warnings[1].contains("use /api"));
    }

    #[test]
    fn test_deserialize_nested_items() {
        let json =
            r#"[{"link": "/x", "title": "X", "children": [{"link": "/x/y", "title": "Y"}]}]"#;

        let sidebar: Vec<SidebarItem> = serde_json::from_str(json).unwrap();

        assert_eq!(
            sidebar,
            vec![SidebarItem::new("/x", "X").with_children(vec![SidebarItem::new("/x/y", "Y")])]
        );
    }
}
