//! `pp fallback` command implementation.

use clap::Args;
use pp_acquire::fallback_structure;
use pp_schema::{ColorScheme, Layout};

use super::{parse_color_scheme, parse_layout};
use crate::error::CliError;
use crate::output::write_stdout;

/// Arguments for the fallback command.
#[derive(Args)]
pub(crate) struct FallbackArgs {
    /// Color scheme: primary, secondary or accent.
    #[arg(long, value_parser = parse_color_scheme, default_value = "primary")]
    color_scheme: ColorScheme,

    /// Layout: default, centered or wide.
    #[arg(long, value_parser = parse_layout, default_value = "default")]
    layout: Layout,
}

impl FallbackArgs {
    /// Execute the fallback command.
    ///
    /// # Errors
    ///
    /// Returns an error if the structure cannot be written to stdout.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let structure = fallback_structure(self.color_scheme, self.layout);
        write_stdout(&structure.to_json_pretty()?)?;
        Ok(())
    }
}
