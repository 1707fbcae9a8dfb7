//! Page frontmatter.
//!
//! Frontmatter is a YAML block at the very top of a page, opened and
//! closed by a line containing only `---`:
//!
//! ```text
//! ---
//! title: Release notes
//! layout: blog
//! ---
//! # Release notes
//! ```
//!
//! Only `title` and `layout` drive the navigation chrome. Other keys are
//! kept in [`Frontmatter::extra`] for the front end.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Page layout kind.
///
/// Unrecognized values fall back to [`Layout::Docs`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Blog,
    Landing,
    Minimal,
    #[default]
    #[serde(other)]
    Docs,
}

impl Layout {
    /// Blog pages have no sidebar entry and no outline.
    #[must_use]
    pub fn is_blog(self) -> bool {
        self == Self::Blog
    }
}

/// Parsed page frontmatter.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Frontmatter {
    /// Page title override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Layout kind.
    #[serde(default)]
    pub layout: Layout,
    /// Keys the chrome does not interpret.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Frontmatter {
    /// Parse frontmatter from YAML content.
    ///
    /// Empty content yields the default frontmatter.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed.
    pub fn from_yaml(content: &str) -> Result<Self, FrontmatterError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(trimmed)
            .map_err(|e| FrontmatterError::Parse(format!("Invalid YAML: {e}")))
    }
}

/// Error type for frontmatter parsing.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    /// YAML parsing error.
    #[error("{0}")]
    Parse(String),
}

/// Split a page into its frontmatter block and body.
///
/// Returns `(None, content)` when the page has no frontmatter or the block
/// is never closed.
#[must_use]
pub fn split_frontmatter(content: &str) -> (Option<&str>, &str) {
    let Some(rest) = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
    else {
        return (None, content);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }

    (None, content)
}
