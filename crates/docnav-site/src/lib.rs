//! Navigation chrome for documentation sites.
//!
//! This crate provides:
//! - Active item resolution for the sidebar tree and the top navigation
//! - [`SiteChrome`]: view models for the top bar, the mobile curtain and
//!   social buttons, built from a [`NavConfig`]
//! - [`Page`]: frontmatter and content title of a page
//! - The set of [`ContentComponent`]s pages may embed
//!
//! Absence of a match (no active top navigation entry, no sidebar entry,
//! no title) is a normal outcome and is returned as `None`.
//!
//! # Quick Start
//!
//! ```
//! use docnav_site::{SidebarItem, TopNavItem, resolve_active_top_nav, resolve_sidebar_item};
//!
//! let sidebar = vec![
//!     SidebarItem::new("/x", "X").with_children(vec![SidebarItem::new("/x/y", "Y")]),
//! ];
//! assert_eq!(resolve_sidebar_item(&sidebar, "/x/y/").unwrap().title, "Y");
//!
//! let top_nav = vec![TopNavItem::new("/a", "A"), TopNavItem::new("/a/b", "B")];
//! assert_eq!(resolve_active_top_nav(&top_nav, "/a/b/c").unwrap().title, "B");
//! ```

mod chrome;
mod components;
mod curtain;
mod frontmatter;
mod headings;
mod page;
mod path;
mod popover;
mod sidebar;
mod social;
mod top_nav;

pub use chrome::{NavConfig, SiteChrome, TopNavView};
pub use components::{ComponentUsage, ContentComponent, UnknownComponent, scan_components};
pub use curtain::{CurtainView, curtain_view};
pub use frontmatter::{Frontmatter, FrontmatterError, Layout, split_frontmatter};
pub use headings::{HeadingStyle, heading_css};
pub use page::{Page, PageError, candidate_sources};
pub use path::{normalize_sidebar_path, strip_html_suffix};
pub use popover::{CompactNavState, CurtainState, Popover};
pub use sidebar::{SidebarItem, resolve_sidebar_item};
pub use social::{DEFAULT_ICON_SIZE, SocialButton, SocialIcon, SocialItem};
pub use top_nav::{CompactNav, TopNavItem, TopNavLink, resolve_active_top_nav};
