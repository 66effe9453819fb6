//! `pp session` command implementation.
//!
//! Every stdin line is one interaction event. Plain text replaces the
//! prompt, lines starting with `:` are commands. After each event the
//! scheduler is evaluated with the current time, so typing a new prompt
//! regenerates automatically once the debounce interval has passed.

use std::io::BufRead;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use pp_acquire::ModelClient;
use pp_config::{CliSettings, Config};
use pp_schema::{ColorScheme, Layout};
use pp_session::{GenerationSettings, Scheduler, Session, SessionState, Template};
use tracing::debug;

use super::{
    ModelArgs, acquirer, export_stamp, parse_color_scheme, parse_layout, parse_template,
    report_cycle,
};
use crate::error::CliError;
use crate::output::Output;

const HELP: &str = "\
Type a description to set the prompt. Commands:
  :go                  generate now
  :scheme NAME         primary, secondary or accent
  :layout NAME         default, centered or wide
  :template NAME       e.g. restaurant, portfolio, custom
  :temperature X       sampling temperature between 0 and 2
  :auto on|off         toggle automatic regeneration
  :export              write the latest website to the export directory
  :reset               reset the generation counter
  :status              show the session state
  :help                show this help
  :quit                leave the session
An empty line re-checks pending changes.";

/// Arguments for the session command.
#[derive(Args)]
pub(crate) struct SessionArgs {
    #[command(flatten)]
    model: ModelArgs,

    /// Initial color scheme (overrides config).
    #[arg(long, value_parser = parse_color_scheme)]
    color_scheme: Option<ColorScheme>,

    /// Initial layout (overrides config).
    #[arg(long, value_parser = parse_layout)]
    layout: Option<Layout>,

    /// Initial sampling temperature (overrides config).
    #[arg(long)]
    temperature: Option<f32>,

    /// Only generate on `:go`.
    #[arg(long)]
    manual: bool,

    /// Seconds between automatic generations (overrides config).
    #[arg(long)]
    debounce: Option<f64>,

    /// Export directory (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
enum Input {
    /// Empty line: evaluate without changing anything.
    Tick,
    Prompt(String),
    Go,
    Scheme(ColorScheme),
    Layout(Layout),
    Template(Template),
    Temperature(f32),
    Auto(bool),
    Export,
    Reset,
    Status,
    Help,
    Quit,
}

impl Input {
    fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Self::Tick);
        }
        let Some(command) = line.strip_prefix(':') else {
            return Ok(Self::Prompt(line.to_owned()));
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };

        match (name, arg) {
            ("go", "") => Ok(Self::Go),
            ("export", "") => Ok(Self::Export),
            ("reset", "") => Ok(Self::Reset),
            ("status", "") => Ok(Self::Status),
            ("help", "") => Ok(Self::Help),
            ("quit" | "q", "") => Ok(Self::Quit),
            ("scheme", arg) => parse_color_scheme(arg).map(Self::Scheme),
            ("layout", arg) => parse_layout(arg).map(Self::Layout),
            ("template", arg) => parse_template(arg).map(Self::Template),
            ("temperature", arg) => parse_temperature(arg).map(Self::Temperature),
            ("auto", "on") => Ok(Self::Auto(true)),
            ("auto", "off") => Ok(Self::Auto(false)),
            ("auto", _) => Err("usage: :auto on|off".to_owned()),
            ("go" | "export" | "reset" | "status" | "help" | "quit" | "q", _) => {
                Err(format!(":{name} takes no argument"))
            }
            (name, _) => Err(format!("unknown command ':{name}' (try :help)")),
        }
    }
}

fn parse_temperature(arg: &str) -> Result<f32, String> {
    match arg.parse::<f32>() {
        Ok(t) if (0.0..=2.0).contains(&t) => Ok(t),
        _ => Err(format!("temperature must be a number between 0 and 2, got '{arg}'")),
    }
}

impl SessionArgs {
    /// Execute the session command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or stdin cannot be read.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            api_key: self.model.api_key,
            model: self.model.model,
            temperature: self.temperature,
            color_scheme: self.color_scheme.map(|s| s.as_str().to_owned()),
            layout: self.layout.map(|l| l.as_str().to_owned()),
            automatic: self.manual.then_some(false),
            debounce_secs: self.debounce,
            export_dir: self.output_dir,
        };
        let config = Config::load(self.model.config.as_deref(), Some(&cli_settings))?;

        let scheduler = Scheduler::new(config.scheduler.automatic, config.scheduler.debounce());
        let mut session = Session::new(acquirer(&config, &output), scheduler);
        let mut settings = GenerationSettings {
            color_scheme: config.design.color_scheme(),
            layout: config.design.layout(),
            temperature: config.sampling.temperature,
            ..GenerationSettings::default()
        };

        output.highlight("PromptPixel session");
        output.hint(HELP);

        for line in std::io::stdin().lock().lines() {
            let input = match Input::parse(&line?) {
                Ok(input) => input,
                Err(message) => {
                    output.warning(&message);
                    continue;
                }
            };
            debug!(?input, "Session input");

            match input {
                Input::Quit => break,
                Input::Go => {
                    match session.generate_now(&settings, Instant::now()) {
                        Some(report) => report_cycle(&output, &report),
                        None => output.warning("Nothing to generate: type a description first"),
                    }
                    continue;
                }
                Input::Tick => {}
                Input::Prompt(prompt) => settings.prompt = prompt,
                Input::Scheme(scheme) => settings.color_scheme = scheme,
                Input::Layout(layout) => settings.layout = layout,
                Input::Template(template) => settings.template = template,
                Input::Temperature(temperature) => settings.temperature = temperature,
                Input::Auto(on) => session.scheduler_mut().set_automatic(on),
                Input::Export => export(&session, &config, &output),
                Input::Reset => {
                    session.context_mut().reset_stats();
                    output.info("Generation counter reset");
                }
                Input::Status => status(&session, &settings, &output),
                Input::Help => output.hint(HELP),
            }

            if let Some(report) = session.on_event(&settings, Instant::now()) {
                report_cycle(&output, &report);
            }
        }

        Ok(())
    }
}

fn export<C: ModelClient>(session: &Session<C>, config: &Config, output: &Output) {
    let Some(artifact) = session.context().artifact() else {
        output.warning("Nothing to export yet");
        return;
    };
    match artifact.export(&config.export_resolved.dir, export_stamp()) {
        Ok(files) => {
            output.success(&format!("Exported {}", files.html.display()));
            output.info(&format!("Structure: {}", files.json.display()));
        }
        Err(err) => output.error(&format!("Export failed: {err}")),
    }
}

fn status<C: ModelClient>(session: &Session<C>, settings: &GenerationSettings, output: &Output) {
    let context = session.context();
    let state = match context.state(&settings.fingerprint()) {
        SessionState::Idle => "up to date",
        SessionState::PendingChange => "changes pending",
    };
    let prompt = settings.effective_prompt();

    output.info(&format!("Generations: {}", context.generation_count()));
    output.info(&format!("State:       {state}"));
    output.info(&format!(
        "Automatic:   {}",
        if session.scheduler().automatic() { "on" } else { "off" }
    ));
    output.info(&format!(
        "Design:      {} scheme, {} layout, {} template",
        settings.color_scheme.as_str(),
        settings.layout.as_str(),
        settings.template.display_name()
    ));
    output.info(&format!("Temperature: {}", settings.temperature));
    output.info(&format!(
        "Prompt:      {}",
        if prompt.trim().is_empty() { "(none)" } else { prompt }
    ));
    if let Some(artifact) = context.artifact() {
        output.info(&format!(
            "Latest:      \"{}\" ({} sections{})",
            artifact.structure.title,
            artifact.structure.sections.len(),
            if artifact.fallback { ", fallback" } else { "" }
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_text_sets_prompt() {
        assert_eq!(
            Input::parse("  A bakery in Lisbon \n"),
            Ok(Input::Prompt("A bakery in Lisbon".to_owned()))
        );
        assert_eq!(Input::parse("   "), Ok(Input::Tick));
    }

    #[test]
    fn test_commands() {
        assert_eq!(Input::parse(":go"), Ok(Input::Go));
        assert_eq!(Input::parse(":q"), Ok(Input::Quit));
        assert_eq!(Input::parse(":scheme accent"), Ok(Input::Scheme(ColorScheme::Accent)));
        assert_eq!(Input::parse(":layout  Wide"), Ok(Input::Layout(Layout::Wide)));
        assert_eq!(
            Input::parse(":template Tech Startup"),
            Ok(Input::Template(Template::TechStartup))
        );
        assert_eq!(Input::parse(":temperature 1.5"), Ok(Input::Temperature(1.5)));
        assert_eq!(Input::parse(":auto off"), Ok(Input::Auto(false)));
    }

    #[test]
    fn test_invalid_commands() {
        assert!(Input::parse(":temperature 3").is_err());
        assert!(Input::parse(":temperature warm").is_err());
        assert!(Input::parse(":auto maybe").is_err());
        assert!(Input::parse(":scheme").is_err());
        assert_eq!(
            Input::parse(":go now"),
            Err(":go takes no argument".to_owned())
        );
        assert_eq!(
            Input::parse(":publish"),
            Err("unknown command ':publish' (try :help)".to_owned())
        );
    }
}
