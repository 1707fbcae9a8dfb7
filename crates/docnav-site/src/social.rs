//! Social links shown next to the top navigation.

use serde::{Deserialize, Serialize};

/// Icon size used for tags without a dedicated size.
pub const DEFAULT_ICON_SIZE: &str = "18px";

/// Social platform tag.
///
/// Tags outside the known set parse to [`SocialIcon::Unknown`] so that a
/// typo in the configuration degrades the button instead of failing the load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Discord,
    GitHub,
    X,
    #[serde(other)]
    Unknown,
}

impl SocialIcon {
    /// Icon asset name, `None` for unknown tags.
    #[must_use]
    pub fn icon_name(self) -> Option<&'static str> {
        match self {
            Self::Discord => Some("discord"),
            Self::GitHub => Some("github"),
            Self::X => Some("x"),
            Self::Unknown => None,
        }
    }

    /// Rendered icon size.
    #[must_use]
    pub fn size(self) -> &'static str {
        match self {
            Self::Discord => "21px",
            Self::X => "16px",
            Self::GitHub | Self::Unknown => DEFAULT_ICON_SIZE,
        }
    }

    /// Accessible label used when the configuration gives none.
    #[must_use]
    pub fn default_label(self) -> &'static str {
        match self {
            Self::Discord => "Discord",
            Self::GitHub => "GitHub",
            Self::X => "X (Twitter)",
            Self::Unknown => "Link",
        }
    }
}

/// Configured social link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialItem {
    /// Platform tag.
    pub icon: SocialIcon,
    /// External URL.
    pub link: String,
    /// Accessible label override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Social button ready for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialButton {
    /// Icon asset name; `None` renders the button without an icon.
    pub icon: Option<&'static str>,
    pub label: String,
    pub link: String,
    pub size: &'static str,
    pub target: &'static str,
    pub rel: &'static str,
}

impl From<&SocialItem> for SocialButton {
    fn from(item: &SocialItem) -> Self {
        Self {
            icon: item.icon.icon_name(),
            label: item
                .label
                .clone()
                .unwrap_or_else(|| item.icon.default_label().to_owned()),
            link: item.link.clone(),
            size: item.icon.size(),
            target: "_blank",
            rel: "noopener noreferrer",
        }
    }
}

pub(crate) fn lint_socials(socials: &[SocialItem]) -> Vec<String> {
    socials
        .iter()
        .filter(|social| social.icon == SocialIcon::Unknown)
        .map(|social| {
            format!(
                "social link {} has an unknown icon; it renders without one",
                social.link
            )
        })
        .collect()
}
