//! `docnav styles` command implementation.

use clap::Args;
use docnav_site::heading_css;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the styles command.
#[derive(Args)]
pub(crate) struct StylesArgs {
    /// Scope selectors under this parent (e.g., ".content").
    #[arg(long, default_value = "")]
    scope: String,
}

impl StylesArgs {
    /// Print heading CSS.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        Output::new().data(heading_css(&self.scope).trim_end());
        Ok(())
    }
}
