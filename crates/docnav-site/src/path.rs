//! Route path normalization.
//!
//! Paths arrive from the routing layer as-is. Query strings and case are
//! handled upstream; only the `.html` suffix and a trailing slash are
//! removed here.

/// Suffix produced by static exports of a page.
const HTML_SUFFIX: &str = ".html";

/// Remove one trailing `.html` from a path.
///
/// # Examples
///
/// ```
/// use docnav_site::strip_html_suffix;
///
/// assert_eq!(strip_html_suffix("/guide.html"), "/guide");
/// assert_eq!(strip_html_suffix("/guide"), "/guide");
/// assert_eq!(strip_html_suffix("/a.html.html"), "/a.html");
/// ```
#[must_use]
pub fn strip_html_suffix(path: &str) -> &str {
    path.strip_suffix(HTML_SUFFIX).unwrap_or(path)
}

/// Normalize a path for sidebar lookups.
///
/// Removes one trailing `.html`, then one trailing `/` unless the slash
/// is the whole path.
///
/// # Examples
///
/// ```
/// use docnav_site::normalize_sidebar_path;
///
/// assert_eq!(normalize_sidebar_path("/guide/"), "/guide");
/// assert_eq!(normalize_sidebar_path("/guide.html"), "/guide");
/// assert_eq!(normalize_sidebar_path("/"), "/");
/// ```
#[must_use]
pub fn normalize_sidebar_path(path: &str) -> &str {
    let path = strip_html_suffix(path);
    match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() => rest,
        _ => path,
    }
}
