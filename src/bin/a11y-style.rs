//! Prints the accessibility style payload or chart theme for a set of flags.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use dashboard_a11y::{
    AccessibilityConfig, AccessibilityFlags, AccessibilityProfile, ChartTheme, Error, Result,
    generate_style,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "a11y-style",
    version,
    about = "Generate the dashboard accessibility styles",
    long_about = "Generate the style payload the dashboard injects for a set of accessibility flags.\n\n\
                  Flags given on the command line are added to those of the profile, if any."
)]
struct Cli {
    /// Dark, high-contrast page palette.
    #[arg(long = "high-contrast")]
    high_contrast: bool,

    /// Enlarged typography.
    #[arg(long = "large-text")]
    large_text: bool,

    /// Color-blind-safe chart palettes.
    #[arg(long = "color-blind")]
    color_blind: bool,

    /// Change counter embedded in the payload.
    #[arg(long = "revision", value_name = "N", default_value_t = 0)]
    revision: u64,

    /// Accessibility profile (JSON) to start from.
    #[arg(long = "profile", value_name = "PATH")]
    profile: Option<PathBuf>,

    /// What to print.
    #[arg(long = "format", value_enum, default_value = "css")]
    format: OutputFormat,

    /// Log debug output to stderr.
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// Style rules only.
    Css,
    /// `<script>` and `<style>` elements, ready to inject.
    Html,
    /// The payload as JSON.
    Json,
    /// The chart theme as JSON.
    Chart,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<String> {
    let flags = resolve_flags(cli)?;
    debug!(?flags, revision = cli.revision, "generating");

    let payload = || generate_style(&AccessibilityConfig::new(flags, cli.revision));
    Ok(match cli.format {
        OutputFormat::Css => payload().rules,
        OutputFormat::Html => payload().to_html(),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(&payload())?),
        OutputFormat::Chart => {
            let theme = ChartTheme::for_flags(&flags);
            format!("{}\n", serde_json::to_string_pretty(&theme)?)
        }
    })
}

fn resolve_flags(cli: &Cli) -> Result<AccessibilityFlags> {
    let profile = match &cli.profile {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            AccessibilityProfile::from_json(&json).map_err(Error::Profile)?
        }
        None => AccessibilityProfile::new(),
    };

    Ok(AccessibilityFlags::new(
        profile.high_contrast || cli.high_contrast,
        profile.large_text || cli.large_text,
        profile.color_blind || cli.color_blind,
    ))
}
