//! Page data consumed by the navigation chrome.
//!
//! A [`Page`] carries what the chrome reads from content: the frontmatter,
//! the first H1 of the body, and the components the body references.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

use crate::components::{ComponentUsage, scan_components};
use crate::frontmatter::{Frontmatter, FrontmatterError, split_frontmatter};
use crate::path::normalize_sidebar_path;

/// Source file extensions, in lookup order.
const EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Error returned when a page cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// I/O error reading the source file.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Malformed frontmatter.
    #[error("Invalid frontmatter: {0}")]
    Frontmatter(#[from] FrontmatterError),
}

/// Content page as seen by the navigation chrome.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    /// Parsed frontmatter (default when the page has none).
    pub frontmatter: Frontmatter,
    /// Text of the first H1 heading in the body.
    pub content_title: Option<String>,
    /// Components referenced by the body.
    pub components: ComponentUsage,
}

impl Page {
    /// Parse a page from its source text.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Frontmatter`] if the frontmatter is malformed.
    pub fn parse(content: &str) -> Result<Self, PageError> {
        let (yaml, body) = split_frontmatter(content);
        let frontmatter = match yaml {
            Some(yaml) => Frontmatter::from_yaml(yaml)?,
            None => Frontmatter::default(),
        };

        Ok(Self {
            frontmatter,
            content_title: extract_content_title(body),
            components: scan_components(body),
        })
    }

    /// Load the page serving `route` from `source_dir`.
    ///
    /// Tries each of [`candidate_sources`] in order. Returns `Ok(None)` when
    /// no source file exists.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Io`] if a source file exists but cannot be read,
    /// or [`PageError::Frontmatter`] if its frontmatter is malformed.
    pub fn load(source_dir: &Path, route: &str) -> Result<Option<Self>, PageError> {
        for candidate in candidate_sources(route) {
            let path = source_dir.join(&candidate);
            match std::fs::read_to_string(&path) {
                Ok(content) => {
                    tracing::debug!(path = %path.display(), route, "Loaded page");
                    return Self::parse(&content).map(Some);
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(source) => return Err(PageError::Io { path, source }),
            }
        }
        Ok(None)
    }
}

/// Source files that may serve `route`, relative to the source directory.
///
/// The route is normalized like a sidebar path. The root maps to `index.md`
/// and `index.mdx`; any other route maps to `<route>.md`, `<route>.mdx`,
/// `<route>/index.md` and `<route>/index.mdx`. Routes with `.` or `..`
/// segments map to nothing.
#[must_use]
pub fn candidate_sources(route: &str) -> Vec<PathBuf> {
    let route = normalize_sidebar_path(route).trim_matches('/');

    if route.split('/').any(|segment| segment == ".." || segment == ".") {
        return Vec::new();
    }

    if route.is_empty() {
        return EXTENSIONS
            .iter()
            .map(|ext| PathBuf::from(format!("index.{ext}")))
            .collect();
    }

    let files = EXTENSIONS
        .iter()
        .map(|ext| PathBuf::from(format!("{route}.{ext}")));
    let indexes = EXTENSIONS
        .iter()
        .map(|ext| Path::new(route).join(format!("index.{ext}")));
    files.chain(indexes).collect()
}

/// Extract the text of the first H1 heading.
///
/// Returns `None` when there is no H1 or its text is blank.
fn extract_content_title(body: &str) -> Option<String> {
    let mut title: Option<String> = None;

    for event in Parser::new(body) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => title = Some(String::new()),
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => break,
            Event::Text(text) | Event::Code(text) => {
                if let Some(title) = title.as_mut() {
                    title.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(title) = title.as_mut() {
                    title.push(' ');
                }
            }
            _ => {}
        }
    }

    title
        .map(|title| title.trim().to_owned())
        .filter(|title| !title.is_empty())
}
