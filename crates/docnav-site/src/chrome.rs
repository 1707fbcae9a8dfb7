//! Navigation chrome for a site.
//!
//! [`SiteChrome`] owns the navigation part of the site configuration and
//! answers per-path queries. Every query is a pure function of the
//! configuration and its arguments; the configuration is replaced as a
//! whole when it reloads.
//!
//! # Example
//!
//! ```
//! use docnav_site::{NavConfig, Page, SidebarItem, SiteChrome, TopNavItem};
//!
//! let config = NavConfig {
//!     top_nav: vec![TopNavItem::new("/docs", "Docs")],
//!     sidebar: vec![SidebarItem::new("/docs/intro", "Introduction")],
//!     socials: Vec::new(),
//! };
//! let chrome = SiteChrome::new(config);
//!
//! let top_nav = chrome.top_nav("/docs/intro");
//! assert_eq!(top_nav.compact.unwrap().trigger_title, "Docs");
//!
//! let curtain = chrome.curtain("/docs/intro/", &Page::default(), false);
//! assert_eq!(curtain.title.as_deref(), Some("Introduction"));
//! ```

use serde::{Deserialize, Serialize};

use crate::curtain::{CurtainView, curtain_view};
use crate::page::Page;
use crate::sidebar::{SidebarItem, lint_sidebar, resolve_sidebar_item};
use crate::social::{SocialButton, SocialItem, lint_socials};
use crate::top_nav::{
    CompactNav, TopNavItem, TopNavLink, lint_top_nav, nav_links, resolve_active_top_nav,
};

/// Link target of the logo.
const LOGO_LINK: &str = "/";

/// Navigation part of the site configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Top navigation entries, least to most specific.
    pub top_nav: Vec<TopNavItem>,
    /// Sidebar tree.
    pub sidebar: Vec<SidebarItem>,
    /// Social links.
    pub socials: Vec<SocialItem>,
}

/// Top navigation bar contents for one path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopNavView {
    /// Link target of the logo.
    pub logo_link: &'static str,
    /// Full navigation; `None` when no top navigation is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<TopNavLink>>,
    /// Condensed navigation; `None` when no entry is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compact: Option<CompactNav>,
    /// Social buttons, in configuration order.
    pub socials: Vec<SocialButton>,
}

/// Navigation chrome bound to a site configuration.
#[derive(Clone, Debug, Default)]
pub struct SiteChrome {
    config: NavConfig,
}

impl SiteChrome {
    #[must_use]
    pub fn new(config: NavConfig) -> Self {
        tracing::debug!(
            top_nav = config.top_nav.len(),
            sidebar = config.sidebar.len(),
            socials = config.socials.len(),
            "Built navigation chrome"
        );
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Active top navigation entry for `path`.
    #[must_use]
    pub fn active_top_nav(&self, path: &str) -> Option<&TopNavItem> {
        resolve_active_top_nav(&self.config.top_nav, path)
    }

    /// Sidebar entry owning `path`.
    #[must_use]
    pub fn active_sidebar_item(&self, path: &str) -> Option<&SidebarItem> {
        resolve_sidebar_item(&self.config.sidebar, path)
    }

    /// Build the top navigation bar for `path`.
    #[must_use]
    pub fn top_nav(&self, path: &str) -> TopNavView {
        let top_nav = &self.config.top_nav;
        let active = self.active_top_nav(path);

        let items = (!top_nav.is_empty()).then(|| nav_links(top_nav, active));
        let compact = active.map(|active| CompactNav {
            trigger_title: active.title.clone(),
            items: nav_links(top_nav, Some(active)),
        });

        TopNavView {
            logo_link: LOGO_LINK,
            items,
            compact,
            socials: self.config.socials.iter().map(SocialButton::from).collect(),
        }
    }

    /// Build the mobile curtain for `path`.
    #[must_use]
    pub fn curtain(&self, path: &str, page: &Page, enable_scroll_to_top: bool) -> CurtainView {
        curtain_view(&self.config.sidebar, path, page, enable_scroll_to_top)
    }

    /// Collect non-fatal configuration warnings.
    #[must_use]
    pub fn lint(&self) -> Vec<String> {
        let mut warnings = lint_top_nav(&self.config.top_nav);
        warnings.extend(lint_sidebar(&self.config.sidebar));
        warnings.extend(lint_socials(&self.config.socials));
        warnings
    }
}
