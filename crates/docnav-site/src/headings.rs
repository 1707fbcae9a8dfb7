//! Spacing rules for content headings.
//!
//! Levels 2 to 4 share one rule set. Sizes and spacing come from CSS custom
//! properties so themes can override them without touching the rules:
//!
//! - font size: `--docnav-font-size-h{level}`
//! - `margin-top` when the heading is not the first child
//! - `margin-bottom` when the heading is not the last child
//! - no top padding when the heading directly follows the previous level

use std::fmt::Write;

/// Prefix of every custom property the rules read.
const VAR_PREFIX: &str = "--docnav";

/// Spacing scale steps used by heading rules.
const SPACE_BEFORE: u8 = 18;
const SPACE_AFTER: u8 = 16;

/// Style rules of one heading level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeadingStyle {
    level: u8,
}

impl HeadingStyle {
    /// Lowest styled level.
    pub const MIN_LEVEL: u8 = 2;
    /// Highest styled level.
    pub const MAX_LEVEL: u8 = 4;

    /// Rules for a heading level, `None` outside 2..=4.
    #[must_use]
    pub fn for_level(level: u8) -> Option<Self> {
        (Self::MIN_LEVEL..=Self::MAX_LEVEL)
            .contains(&level)
            .then_some(Self { level })
    }

    #[must_use]
    pub fn level(self) -> u8 {
        self.level
    }

    /// Custom property holding the font size.
    #[must_use]
    pub fn font_size_var(self) -> String {
        format!("{VAR_PREFIX}-font-size-h{}", self.level)
    }

    /// Level whose heading removes this one's top padding when directly
    /// preceding it. `None` for the lowest level.
    #[must_use]
    pub fn follows(self) -> Option<u8> {
        (self.level > Self::MIN_LEVEL).then(|| self.level - 1)
    }

    /// Render the rules as CSS.
    ///
    /// `scope` is prepended to every selector (e.g., `.content`); pass an
    /// empty string for bare `h{level}` selectors.
    #[must_use]
    pub fn css(self, scope: &str) -> String {
        let prefix = if scope.is_empty() {
            String::new()
        } else {
            format!("{scope} ")
        };
        let selector = format!("{prefix}h{}", self.level);

        let mut css = String::new();
        let _ = writeln!(
            css,
            "{selector} {{ font-size: var({}); }}",
            self.font_size_var()
        );
        let _ = writeln!(
            css,
            "{selector}:not(:first-child) {{ margin-top: var({}); }}",
            space_var(SPACE_BEFORE)
        );
        let _ = writeln!(
            css,
            "{selector}:not(:last-child) {{ margin-bottom: var({}); }}",
            space_var(SPACE_AFTER)
        );
        if let Some(previous) = self.follows() {
            let _ = writeln!(
                css,
                "{prefix}h{previous} + h{} {{ padding-top: var({}); }}",
                self.level,
                space_var(0)
            );
        }
        css
    }
}

fn space_var(step: u8) -> String {
    format!("{VAR_PREFIX}-space-{step}")
}

/// CSS for every styled heading level under `scope` (empty for none).
#[must_use]
pub fn heading_css(scope: &str) -> String {
    (HeadingStyle::MIN_LEVEL..=HeadingStyle::MAX_LEVEL)
        .filter_map(HeadingStyle::for_level)
        .map(|style| style.css(scope))
        .collect()
}
