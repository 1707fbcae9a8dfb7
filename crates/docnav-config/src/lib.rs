//! Configuration management for docnav.
//!
//! Parses `docnav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [site]
//! title = "Example Docs"
//!
//! [content]
//! source_dir = "pages"
//!
//! [[top_nav]]
//! title = "Guide"
//! link = "/docs"
//!
//! [[sidebar]]
//! title = "Getting Started"
//! link = "/docs"
//!
//! [[sidebar.children]]
//! title = "Installation"
//! link = "/docs/installation"
//!
//! [[socials]]
//! icon = "github"
//! link = "https://github.com/example/docs"
//! ```
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.title`
//! - `content.source_dir`
//! - `socials[].link`

mod expand;

use std::path::{Path, PathBuf};

use docnav_site::{NavConfig, SidebarItem, SocialItem, TopNavItem};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override content source directory.
    pub source_dir: Option<PathBuf>,
    /// Override site title.
    pub title: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docnav.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site configuration.
    pub site: SiteConfig,
    /// Content configuration (paths are relative strings from TOML).
    content: ContentConfigRaw,
    /// Top navigation entries, least to most specific.
    pub top_nav: Vec<TopNavItem>,
    /// Sidebar tree.
    pub sidebar: Vec<SidebarItem>,
    /// Social links.
    pub socials: Vec<SocialItem>,

    /// Resolved content configuration (set after loading).
    #[serde(skip)]
    pub content_resolved: ContentConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Docs".to_owned(),
        }
    }
}

/// Raw content configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ContentConfigRaw {
    source_dir: Option<String>,
}

/// Resolved content configuration with absolute paths.
#[derive(Debug, Default)]
pub struct ContentConfig {
    /// Directory holding page sources.
    pub source_dir: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`socials[0].link`").
        field: String,
        /// Error message (e.g., "${`DISCORD_INVITE`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Require a navigation link to be a site-absolute path.
fn require_site_path(link: &str, field: &str) -> Result<(), ConfigError> {
    require_non_empty(link, field)?;
    if !link.starts_with('/') {
        return Err(ConfigError::Validation(format!("{field} must start with /")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docnav.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Navigation part of the configuration.
    #[must_use]
    pub fn nav_config(&self) -> NavConfig {
        NavConfig {
            top_nav: self.top_nav.clone(),
            sidebar: self.sidebar.clone(),
            socials: self.socials.clone(),
        }
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.content_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(title) = &settings.title {
            self.site.title.clone_from(title);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        Self::discover_config_from(&cwd)
    }

    /// Search for config file in `start` and its parents.
    fn discover_config_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            content: ContentConfigRaw::default(),
            top_nav: Vec::new(),
            sidebar: Vec::new(),
            socials: Vec::new(),
            content_resolved: ContentConfig {
                source_dir: base.join("docs"),
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        self.validate_top_nav()?;
        validate_sidebar(&self.sidebar, "sidebar")?;
        self.validate_socials()?;
        Ok(())
    }

    fn validate_top_nav(&self) -> Result<(), ConfigError> {
        for (i, item) in self.top_nav.iter().enumerate() {
            require_site_path(&item.link, &format!("top_nav[{i}].link"))?;
            require_non_empty(&item.title, &format!("top_nav[{i}].title"))?;
        }
        Ok(())
    }

    fn validate_socials(&self) -> Result<(), ConfigError> {
        for (i, social) in self.socials.iter().enumerate() {
            let field = format!("socials[{i}].link");
            require_non_empty(&social.link, &field)?;
            require_http_url(&social.link, &field)?;
        }
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.title = expand::expand_env(&self.site.title, "site.title")?;

        if let Some(ref source_dir) = self.content.source_dir {
            self.content.source_dir =
                Some(expand::expand_env(source_dir, "content.source_dir")?);
        }

        for (i, social) in self.socials.iter_mut().enumerate() {
            social.link = expand::expand_env(&social.link, &format!("socials[{i}].link"))?;
        }

        Ok(())
    }

    fn resolve_paths(&mut self, config_dir: &Path) {
        self.content_resolved = ContentConfig {
            source_dir: config_dir.join(self.content.source_dir.as_deref().unwrap_or("docs")),
        };
    }
}

/// Validate sidebar entries recursively; `prefix` is the field path of `items`.
fn validate_sidebar(items: &[SidebarItem], prefix: &str) -> Result<(), ConfigError> {
    for (i, item) in items.iter().enumerate() {
        let field = format!("{prefix}[{i}]");
        require_site_path(&item.link, &format!("{field}.link"))?;
        require_non_empty(&item.title, &format!("{field}.title"))?;
        if let Some(children) = &item.children {
            validate_sidebar(children, &format!("{field}.children"))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use docnav_site::SocialIcon;
    use pretty_assertions::assert_eq;

    use super::*;

    const FULL_CONFIG: &str = r#"
[site]
title = "Example Docs"

[content]
source_dir = "pages"

[[top_nav]]
title = "Guide"
link = "/docs"

[[top_nav]]
title = "API"
link = "/docs/api"

[[sidebar]]
title = "Getting Started"
link = "/docs"

[[sidebar.children]]
title = "Installation"
link = "/docs/installation"

[[sidebar]]
title = "API"
link = "/docs/api"

[[socials]]
icon = "github"
link = "https://github.com/example/docs"

[[socials]]
icon = "mastodon"
link = "https://example.social/@docs"
"#;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));

        assert_eq!(config.site.title, "Docs");
        assert_eq!(
            config.content_resolved.source_dir,
            PathBuf::from("/test/docs")
        );
        assert!(config.top_nav.is_empty());
        assert!(config.sidebar.is_empty());
        assert!(config.socials.is_empty());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.site.title, "Docs");
        assert!(config.top_nav.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(FULL_CONFIG).unwrap();

        assert_eq!(config.site.title, "Example Docs");
        assert_eq!(
            config.top_nav,
            vec![
                TopNavItem::new("/docs", "Guide"),
                TopNavItem::new("/docs/api", "API"),
            ]
        );
        assert_eq!(
            config.sidebar,
            vec![
                SidebarItem::new("/docs", "Getting Started").with_children(vec![
                    SidebarItem::new("/docs/installation", "Installation"),
                ]),
                SidebarItem::new("/docs/api", "API"),
            ]
        );
        assert_eq!(config.socials[0].icon, SocialIcon::GitHub);
        assert_eq!(config.socials[1].icon, SocialIcon::Unknown);
    }

    #[test]
    fn test_nav_config() {
        let config: Config = toml::from_str(FULL_CONFIG).unwrap();

        let nav = config.nav_config();

        assert_eq!(nav.top_nav.len(), 2);
        assert_eq!(nav.sidebar.len(), 2);
        assert_eq!(nav.socials.len(), 2);
    }

    #[test]
    fn test_resolve_paths() {
        let mut config: Config = toml::from_str(FULL_CONFIG).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.content_resolved.source_dir,
            PathBuf::from("/project/pages")
        );
    }

    #[test]
    fn test_resolve_paths_default_source_dir() {
        let mut config: Config = toml::from_str("").unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.content_resolved.source_dir,
            PathBuf::from("/project/docs")
        );
    }

    #[test]
    fn test_validate_full_config() {
        let config: Config = toml::from_str(FULL_CONFIG).unwrap();

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_relative_top_nav_link() {
        let toml = r#"
[[top_nav]]
title = "Guide"
link = "docs"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        let err = config.validate().unwrap_err();

        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        assert_eq!(
            err.to_string(),
            "Configuration error: top_nav[0].link must start with /"
        );
    }

    #[test]
    fn test_validate_nested_sidebar_field_path() {
        let toml = r#"
[[sidebar]]
title = "Guide"
link = "/guide"

[[sidebar.children]]
title = ""
link = "/guide/setup"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        let err = config.validate().unwrap_err();

        assert_eq!(
            err.to_string(),
            "Configuration error: sidebar[0].children[0].title cannot be empty"
        );
    }

    #[test]
    fn test_validate_social_link_scheme() {
        let toml = r#"
[[socials]]
icon = "discord"
link = "discord.gg/example"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains("socials[0].link"));
    }

    #[test]
    fn test_validate_empty_title() {
        let toml = r#"
[site]
title = ""
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_missing_required_link() {
        let toml = r#"
[[sidebar]]
title = "No link"
"#;
        let result: Result<Config, _> = toml::from_str(toml);

        assert!(result.is_err());
    }

    #[test]
    fn test_expand_env_vars_defaults() {
        let toml = r#"
[site]
title = "${DOCNAV_TEST_SURELY_UNSET_TITLE:-Fallback Docs}"

[content]
source_dir = "${DOCNAV_TEST_SURELY_UNSET_DIR:-content}"

[[socials]]
icon = "x"
link = "${DOCNAV_TEST_SURELY_UNSET_X:-https://x.com/example}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();

        config.expand_env_vars().unwrap();

        assert_eq!(config.site.title, "Fallback Docs");
        assert_eq!(config.content.source_dir, Some("content".to_owned()));
        assert_eq!(config.socials[0].link, "https://x.com/example");
    }

    #[test]
    fn test_expand_env_vars_unset_names_field() {
        let toml = r#"
[[socials]]
icon = "x"
link = "https://x.com/${DOCNAV_TEST_SURELY_UNSET_HANDLE}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();

        let err = config.expand_env_vars().unwrap_err();

        assert_eq!(
            err.to_string(),
            "Environment variable error in socials[0].link: ${DOCNAV_TEST_SURELY_UNSET_HANDLE} not set"
        );
    }

    #[test]
    fn test_apply_cli_settings_source_dir() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            source_dir: Some(PathBuf::from("/custom/pages")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(
            config.content_resolved.source_dir,
            PathBuf::from("/custom/pages")
        );
        assert_eq!(config.site.title, "Docs"); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_title() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            title: Some("Preview".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.site.title, "Preview");
        assert_eq!(
            config.content_resolved.source_dir,
            PathBuf::from("/test/docs")
        ); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_none_changes_nothing() {
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.site.title, "Docs");
        assert_eq!(
            config.content_resolved.source_dir,
            PathBuf::from("/test/docs")
        );
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docnav.toml");
        fs::write(&path, FULL_CONFIG).unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.site.title, "Example Docs");
        assert_eq!(config.config_path, Some(path));
        assert_eq!(
            config.content_resolved.source_dir,
            dir.path().join("pages")
        );
    }

    #[test]
    fn test_load_with_cli_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docnav.toml");
        fs::write(&path, FULL_CONFIG).unwrap();
        let settings = CliSettings {
            title: Some("Override".to_owned()),
            ..Default::default()
        };

        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(config.site.title, "Override");
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(p) if p == path));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docnav.toml");
        fs::write(&path, "[site\ntitle = 1").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docnav.toml");
        fs::write(&path, "[[top_nav]]\ntitle = \"A\"\nlink = \"a\"\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_discover_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("docnav.toml"), "").unwrap();

        let found = Config::discover_config_from(&nested);

        assert_eq!(found, Some(dir.path().join("docnav.toml")));
    }

    #[test]
    fn test_discover_config_nearest_wins() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("site");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("docnav.toml"), "").unwrap();
        fs::write(nested.join("docnav.toml"), "").unwrap();

        let found = Config::discover_config_from(&nested);

        assert_eq!(found, Some(nested.join("docnav.toml")));
    }
}
