//! `docnav resolve` command implementation.

use std::path::PathBuf;

use clap::Args;
use docnav_config::{CliSettings, Config};
use docnav_site::{ComponentUsage, CurtainView, Page, SiteChrome, TopNavView};
use serde::Serialize;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the resolve command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// Route path to resolve (e.g., /docs/getting-started).
    path: String,

    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Show the scroll-to-top button in the curtain.
    #[arg(long)]
    scroll_to_top: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Navigation chrome resolved for one route.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResolveReport {
    path: String,
    site_title: String,
    top_nav: TopNavView,
    curtain: CurtainView,
    components: ComponentUsage,
}

impl ResolveReport {
    fn build(
        chrome: &SiteChrome,
        site_title: &str,
        path: &str,
        page: Page,
        scroll_to_top: bool,
    ) -> Self {
        Self {
            path: path.to_owned(),
            site_title: site_title.to_owned(),
            top_nav: chrome.top_nav(path),
            curtain: chrome.curtain(path, &page, scroll_to_top),
            components: page.components,
        }
    }
}

impl ResolveArgs {
    /// Execute the resolve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails to load or the page source
    /// cannot be read.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let chrome = SiteChrome::new(config.nav_config());

        let source_dir = &config.content_resolved.source_dir;
        let page = Page::load(source_dir, &self.path)?;
        if page.is_none() {
            tracing::info!(
                route = %self.path,
                source_dir = %source_dir.display(),
                "No page source for route"
            );
        }

        let report = ResolveReport::build(
            &chrome,
            &config.site.title,
            &self.path,
            page.unwrap_or_default(),
            self.scroll_to_top,
        );
        output.data(&serde_json::to_string_pretty(&report)?);

        Ok(())
    }
}
