//! PromptPixel CLI - natural language website generator.
//!
//! Provides commands for:
//! - `generate`: Run one generation cycle and export the result
//! - `render`: Render an existing structure file to HTML
//! - `fallback`: Print the fallback structure
//! - `session`: Line-driven interactive session with debounced regeneration

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{FallbackArgs, GenerateArgs, RenderArgs, SessionArgs};
use output::Output;

/// Log level used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_LEVEL: &str = "warn";

/// PromptPixel - describe a website, get a website.
#[derive(Parser)]
#[command(name = "pp", version, about)]
struct Cli {
    /// Enable verbose output (show generation logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a website from a description.
    Generate(GenerateArgs),
    /// Render a website structure JSON file to HTML.
    Render(RenderArgs),
    /// Print the fallback website structure.
    Fallback(FallbackArgs),
    /// Start an interactive session reading events from stdin.
    Session(SessionArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Generate(args) => args.execute(),
        Commands::Render(args) => args.execute(),
        Commands::Fallback(args) => args.execute(),
        Commands::Session(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

/// `--verbose` enables INFO level, otherwise use `RUST_LOG` or default to WARN.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("info");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tracing_subscriber::filter::LevelFilter;

    // Single test so no other test observes the RUST_LOG changes
    #[test]
    fn test_log_filter_levels() {
        unsafe { std::env::remove_var("RUST_LOG") };
        assert_eq!(log_filter(false).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(log_filter(true).max_level_hint(), Some(LevelFilter::INFO));

        unsafe { std::env::set_var("RUST_LOG", "debug") };
        assert_eq!(log_filter(false).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter(true).max_level_hint(), Some(LevelFilter::INFO));

        unsafe { std::env::remove_var("RUST_LOG") };
    }
}
