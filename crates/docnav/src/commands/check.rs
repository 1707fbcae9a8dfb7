//! `docnav check` command implementation.

use std::path::PathBuf;

use clap::Args;
use docnav_config::Config;
use docnav_site::SiteChrome;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Treat warnings as errors.
    #[arg(long)]
    strict: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, or has warnings
    /// and `--strict` is set.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref(), None)?;
        match &config.config_path {
            Some(path) => output.info(&format!("Config: {}", path.display())),
            None => output.info("Config: none found, using defaults"),
        }

        let chrome = SiteChrome::new(config.nav_config());
        let warnings = chrome.lint();
        for warning in &warnings {
            output.warning(&format!("Warning: {warning}"));
        }

        if self.strict && !warnings.is_empty() {
            return Err(CliError::Validation(format!(
                "{} warning(s) in strict mode",
                warnings.len()
            )));
        }

        output.success(&summary(&config));
        Ok(())
    }
}

fn summary(config: &Config) -> String {
    format!(
        "{}: {} top nav entries, {} sidebar entries, {} social links",
        config.site.title,
        config.top_nav.len(),
        config.sidebar.len(),
        config.socials.len()
    )
}
