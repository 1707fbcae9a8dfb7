//! Mobile curtain: the collapsed bar shown under the top navigation on
//! narrow viewports.
//!
//! It shows the current page title as the trigger of the sidebar popover,
//! an "On this page" outline trigger and, optionally, a scroll-to-top button.
//! Blog pages have neither sidebar nor outline and show the bare title.

use serde::Serialize;

use crate::page::Page;
use crate::sidebar::{SidebarItem, resolve_sidebar_item};

/// Curtain contents for one page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurtainView {
    /// Title shown on the left of the curtain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Whether the title opens the sidebar popover.
    pub sidebar_menu: bool,
    /// Whether the "On this page" outline trigger is shown.
    pub outline: bool,
    /// Whether the scroll-to-top button is shown.
    pub scroll_to_top: bool,
}

/// Build the curtain for the page at `path`.
///
/// The title is the first non-empty of the resolved sidebar entry's title,
/// the frontmatter title and the page's first H1. The sidebar is consulted
/// only when it has entries and the page is not a blog page.
#[must_use]
pub fn curtain_view(
    sidebar: &[SidebarItem],
    path: &str,
    page: &Page,
    enable_scroll_to_top: bool,
) -> CurtainView {
    let is_blog = page.frontmatter.layout.is_blog();

    let sidebar_title = if sidebar.is_empty() || is_blog {
        None
    } else {
        resolve_sidebar_item(sidebar, path).map(|item| item.title.as_str())
    };

    let title = [
        sidebar_title,
        page.frontmatter.title.as_deref(),
        page.content_title.as_deref(),
    ]
    .into_iter()
    .flatten()
    .find(|title| !title.is_empty())
    .map(str::to_owned);

    CurtainView {
        title,
        sidebar_menu: !is_blog,
        outline: !is_blog,
        scroll_to_top: enable_scroll_to_top,
    }
}
