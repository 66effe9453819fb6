//! CLI command implementations.

pub(crate) mod fallback;
pub(crate) mod generate;
pub(crate) mod render;
pub(crate) mod session;

pub(crate) use fallback::FallbackArgs;
pub(crate) use generate::GenerateArgs;
pub(crate) use render::RenderArgs;
pub(crate) use session::SessionArgs;

use std::path::PathBuf;

use clap::Args;
use pp_acquire::{Acquirer, GeminiClient, ModelClient, OfflineClient, SamplingParams};
use pp_config::Config;
use pp_schema::{ColorScheme, Layout};
use pp_session::{ContentDepth, CycleReport, Template};

use crate::output::Output;

/// Model connection arguments shared by generating commands.
#[derive(Args)]
pub(crate) struct ModelArgs {
    /// Path to configuration file (default: auto-discover pp.toml).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Gemini API key (overrides config).
    #[arg(long, env = "PP_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model name (overrides config).
    #[arg(long)]
    pub model: Option<String>,
}

/// Client for the configured model, or an offline client when no API key
/// is available.
pub(crate) fn model_client(config: &Config, output: &Output) -> Box<dyn ModelClient> {
    if config.model.has_api_key() {
        Box::new(GeminiClient::new(
            &config.model.base_url,
            &config.model.name,
            &config.model.api_key,
            config.model.timeout(),
        ))
    } else {
        output.warning("No API key configured, generating fallback websites only");
        output.hint("Set GEMINI_API_KEY or model.api_key in pp.toml to use the model");
        Box::new(OfflineClient::default())
    }
}

pub(crate) fn acquirer(config: &Config, output: &Output) -> Acquirer<Box<dyn ModelClient>> {
    Acquirer::new(model_client(config, output)).with_sampling(SamplingParams {
        temperature: config.sampling.temperature,
        top_p: config.sampling.top_p,
        max_output_tokens: config.sampling.max_output_tokens,
    })
}

/// File name stamp for exports: seconds since the unix epoch.
pub(crate) fn export_stamp() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp()).unwrap_or_default()
}

pub(crate) fn report_cycle(output: &Output, report: &CycleReport) {
    if let Some(notice) = &report.notice {
        output.warning(notice);
    }
    output.success(&format!(
        "Generation #{} complete ({})",
        report.generation,
        report.trigger.as_str()
    ));
}

pub(crate) fn parse_color_scheme(s: &str) -> Result<ColorScheme, String> {
    ColorScheme::parse(s).ok_or_else(|| {
        format!(
            "unknown color scheme '{s}' (expected one of: {})",
            names(ColorScheme::ALL.map(ColorScheme::as_str))
        )
    })
}

pub(crate) fn parse_layout(s: &str) -> Result<Layout, String> {
    Layout::parse(s).ok_or_else(|| {
        format!(
            "unknown layout '{s}' (expected one of: {})",
            names(Layout::ALL.map(Layout::as_str))
        )
    })
}

pub(crate) fn parse_template(s: &str) -> Result<Template, String> {
    Template::parse(s).ok_or_else(|| {
        format!(
            "unknown template '{s}' (expected one of: {})",
            names(Template::ALL.map(Template::slug))
        )
    })
}

pub(crate) fn parse_depth(s: &str) -> Result<ContentDepth, String> {
    ContentDepth::parse(s).ok_or_else(|| {
        format!(
            "unknown content depth '{s}' (expected one of: {})",
            names(ContentDepth::ALL.map(ContentDepth::as_str))
        )
    })
}

fn names<const N: usize>(names: [&str; N]) -> String {
    names.join(", ")
}
