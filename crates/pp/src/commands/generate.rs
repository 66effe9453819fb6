//! `pp generate` command implementation.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use pp_config::{CliSettings, Config};
use pp_schema::{ColorScheme, Layout};
use pp_session::{
    AdvancedOptions, ContentDepth, Enhancements, GenerationSettings, Scheduler, Session, Template,
};
use tracing::debug;

use super::{
    ModelArgs, acquirer, export_stamp, parse_color_scheme, parse_depth, parse_layout,
    parse_template, report_cycle,
};
use crate::error::CliError;
use crate::output::{Output, write_stdout};

/// Arguments for the generate command.
#[derive(Args)]
#[allow(clippy::struct_excessive_bools)]
pub(crate) struct GenerateArgs {
    /// Website description. Falls back to the template text when omitted.
    prompt: Option<String>,

    /// Canned description to start from (e.g. restaurant, portfolio).
    #[arg(short, long, value_parser = parse_template)]
    template: Option<Template>,

    /// Color scheme: primary, secondary or accent (overrides config).
    #[arg(long, value_parser = parse_color_scheme)]
    color_scheme: Option<ColorScheme>,

    /// Layout: default, centered or wide (overrides config).
    #[arg(long, value_parser = parse_layout)]
    layout: Option<Layout>,

    /// Sampling temperature between 0 and 2 (overrides config).
    #[arg(long)]
    temperature: Option<f32>,

    #[command(flatten)]
    model: ModelArgs,

    /// Do not ask for animations.
    #[arg(long)]
    no_animations: bool,

    /// Do not ask for icons.
    #[arg(long)]
    no_icons: bool,

    /// Do not ask for a responsive design.
    #[arg(long)]
    no_responsive: bool,

    /// Do not ask for gradients.
    #[arg(long)]
    no_gradients: bool,

    /// Do not ask for interactive elements.
    #[arg(long)]
    no_interactive: bool,

    /// Do not ask for accessibility features.
    #[arg(long)]
    no_accessibility: bool,

    /// Do not ask for placeholder images.
    #[arg(long)]
    no_placeholder_images: bool,

    /// Maximum number of sections to ask for (3 to 10).
    #[arg(long, value_parser = clap::value_parser!(u8).range(3..=10))]
    max_sections: Option<u8>,

    /// Content depth: minimal, standard, detailed or comprehensive.
    #[arg(long, value_parser = parse_depth)]
    detail: Option<ContentDepth>,

    /// Export directory (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Print the HTML document to stdout instead of exporting files.
    #[arg(long)]
    stdout: bool,
}

impl GenerateArgs {
    /// Execute the generate command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, there is nothing to generate
    /// from, or the result cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            api_key: self.model.api_key.clone(),
            model: self.model.model.clone(),
            temperature: self.temperature,
            color_scheme: self.color_scheme.map(|s| s.as_str().to_owned()),
            layout: self.layout.map(|l| l.as_str().to_owned()),
            export_dir: self.output_dir.clone(),
            ..CliSettings::default()
        };
        let config = Config::load(self.model.config.as_deref(), Some(&cli_settings))?;

        let settings = self.settings(&config);
        debug!(config_path = ?config.config_path, "Configuration loaded");
        if !settings.has_prompt() {
            return Err(CliError::Validation(
                "nothing to generate: pass a PROMPT or --template".to_owned(),
            ));
        }

        output.info(&format!(
            "Generating with {} ({} scheme, {} layout)",
            config.model.name,
            settings.color_scheme.as_str(),
            settings.layout.as_str()
        ));

        // A one-shot run never regenerates automatically
        let scheduler = Scheduler::new(false, config.scheduler.debounce());
        let mut session = Session::new(acquirer(&config, &output), scheduler);

        let Some(report) = session.generate_now(&settings, Instant::now()) else {
            return Err(CliError::Validation("nothing to generate".to_owned()));
        };
        report_cycle(&output, &report);

        let Some(artifact) = session.context().artifact() else {
            return Err(CliError::Validation("no website was generated".to_owned()));
        };

        if self.stdout {
            write_stdout(&artifact.markup)?;
        } else {
            let files = artifact.export(&config.export_resolved.dir, export_stamp())?;
            output.highlight(&artifact.structure.title);
            output.info(&format!("HTML:      {}", files.html.display()));
            output.info(&format!("Structure: {}", files.json.display()));
        }

        Ok(())
    }

    /// Settings for this run. Design and temperature come from the merged
    /// config so that `pp.toml` defaults apply.
    fn settings(&self, config: &Config) -> GenerationSettings {
        let mut advanced = AdvancedOptions::default();
        if let Some(max_sections) = self.max_sections {
            advanced.set_max_sections(max_sections);
        }
        if let Some(depth) = self.detail {
            advanced.content_depth = depth;
        }
        advanced.placeholder_images = !self.no_placeholder_images;

        GenerationSettings {
            prompt: self.prompt.clone().unwrap_or_default(),
            template: self.template.unwrap_or_default(),
            color_scheme: config.design.color_scheme(),
            layout: config.design.layout(),
            temperature: config.sampling.temperature,
            enhancements: Enhancements {
                animations: !self.no_animations,
                icons: !self.no_icons,
                responsive: !self.no_responsive,
                gradients: !self.no_gradients,
                interactive: !self.no_interactive,
                accessibility: !self.no_accessibility,
            },
            advanced,
        }
    }
}
