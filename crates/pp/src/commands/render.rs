//! `pp render` command implementation.

use std::path::PathBuf;

use clap::Args;
use pp_schema::WebsiteStructure;

use crate::error::CliError;
use crate::output::{Output, write_stdout};

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Website structure JSON file.
    structure: PathBuf,

    /// Output HTML file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a valid website
    /// structure, or the output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let json = std::fs::read_to_string(&self.structure)?;
        let structure = WebsiteStructure::from_json(&json)?;
        let markup = pp_renderer::render(&structure);

        match &self.output {
            Some(path) => {
                std::fs::write(path, &markup)?;
                Output::new().success(&format!(
                    "Rendered {} sections to {}",
                    structure.sections.len(),
                    path.display()
                ));
            }
            None => write_stdout(&markup)?,
        }

        Ok(())
    }
}
