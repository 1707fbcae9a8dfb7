//! Components available to page content.
//!
//! Pages embed components as capitalized tags (`<Callout>`, `<Steps>`).
//! `HomePage` is a namespace whose parts are used as `<HomePage.Root>`.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Opening or self-closing tag with a capitalized name, optionally namespaced.
static COMPONENT_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([A-Z][A-Za-z0-9]*)(?:\.[A-Z][A-Za-z0-9]*)?[\s/>]").unwrap());

/// Content component exposed to pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ContentComponent {
    Authors,
    BlogPosts,
    Button,
    Callout,
    HomePage,
    Raw,
    Steps,
    Step,
}

impl ContentComponent {
    /// Every component, in export order.
    pub const ALL: [Self; 8] = [
        Self::Authors,
        Self::BlogPosts,
        Self::Button,
        Self::Callout,
        Self::HomePage,
        Self::Raw,
        Self::Steps,
        Self::Step,
    ];

    /// Tag name used in content.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Authors => "Authors",
            Self::BlogPosts => "BlogPosts",
            Self::Button => "Button",
            Self::Callout => "Callout",
            Self::HomePage => "HomePage",
            Self::Raw => "Raw",
            Self::Steps => "Steps",
            Self::Step => "Step",
        }
    }

    /// Whether the component is a namespace of parts rather than a tag.
    #[must_use]
    pub fn is_namespace(self) -> bool {
        self == Self::HomePage
    }
}

impl fmt::Display for ContentComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned for a tag that is not a content component.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unknown component: {0}")]
pub struct UnknownComponent(pub String);

impl FromStr for ContentComponent {
    type Err = UnknownComponent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|component| component.name() == s)
            .ok_or_else(|| UnknownComponent(s.to_owned()))
    }
}

/// Components referenced by a page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ComponentUsage {
    /// Known components, sorted and deduplicated.
    pub used: BTreeSet<ContentComponent>,
    /// Capitalized tags that are not content components.
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub unknown: BTreeSet<String>,
}

/// Scan page content for component tags.
///
/// Fenced and inline code are not excluded; a tag shown in a code sample
/// counts as used.
#[must_use]
pub fn scan_components(content: &str) -> ComponentUsage {
    let mut usage = ComponentUsage::default();
    for caps in COMPONENT_TAG_RE.captures_iter(content) {
        let name = &caps[1];
        match name.parse::<ContentComponent>() {
            Ok(component) => {
                usage.used.insert(component);
            }
            Err(UnknownComponent(name)) => {
                usage.unknown.insert(name);
            }
        }
    }
    usage
}
