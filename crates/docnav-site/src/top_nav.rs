//! Top navigation entries and active entry resolution.

use serde::{Deserialize, Serialize};

use crate::path::strip_html_suffix;

/// Top navigation entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopNavItem {
    /// Link target path; also the prefix this entry owns.
    pub link: String,
    /// Display title.
    pub title: String,
}

impl TopNavItem {
    #[must_use]
    pub fn new(link: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            title: title.into(),
        }
    }
}

/// Find the active top navigation entry for `path`.
///
/// Every entry whose link is a textual prefix of the path (after removing
/// a trailing `.html`) matches, and the last match in list order wins.
/// This is not a longest-prefix match: entries are expected to be ordered
/// from least to most specific.
#[must_use]
pub fn resolve_active_top_nav<'a>(
    items: &'a [TopNavItem],
    path: &str,
) -> Option<&'a TopNavItem> {
    let path = strip_html_suffix(path);
    items
        .iter()
        .rfind(|item| path.starts_with(item.link.as_str()))
}

/// Link in the rendered top navigation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopNavLink {
    /// Display title.
    pub title: String,
    /// Link target path.
    pub link: String,
    /// Whether this entry is the active one.
    pub active: bool,
}

/// Condensed top navigation shown on narrow viewports.
///
/// The trigger shows the active entry's title and opens a popover listing
/// every entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompactNav {
    /// Title shown on the menu trigger.
    pub trigger_title: String,
    /// Popover entries.
    pub items: Vec<TopNavLink>,
}

/// Build navigation links, flagging the entry sharing the active link.
pub(crate) fn nav_links(items: &[TopNavItem], active: Option<&TopNavItem>) -> Vec<TopNavLink> {
    items
        .iter()
        .map(|item| TopNavLink {
            title: item.title.clone(),
            link: item.link.clone(),
            active: active.is_some_and(|a| a.link == item.link),
        })
        .collect()
}

/// Collect configuration warnings for the top navigation.
///
/// An entry is unreachable when a later entry's link is a prefix of its
/// own: every path it matches is also matched by the later entry.
pub(crate) fn lint_top_nav(items: &[TopNavItem]) -> Vec<String> {
    let mut warnings = Vec::new();
    for (i, item) in items.iter().enumerate() {
        if let Some(later) = items[i + 1..]
            .iter()
            .find(|later| item.link.starts_with(later.link.as_str()))
        {
            warnings.push(format!(
                "top nav entry {} is never active because {} comes after it",
                item.link, later.link
            ));
        }
    }
    warnings
}
