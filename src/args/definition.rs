//! Command-line argument definition and dispatch.

use std::path::PathBuf;

use clap::Parser;
use sentiscope::config::Settings;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// sentiscope - Prepare social-media analysis results for display
#[derive(Parser, Debug)]
#[command(name = "sentiscope")]
#[command(version)]
#[command(about = "Prepare social-media analysis results for word clouds, ranked lists and sentiment charts", long_about = None)]
pub struct Args {
    /// Analysis JSON file to prepare ("-" or omitted reads stdin)
    pub input: Option<PathBuf>,

    /// Output format (json, text); defaults to the settings file value
    #[arg(short, long)]
    pub format: Option<String>,

    /// Settings file (default: ~/.config/sentiscope/settings.conf)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the scrape/analyze calls for this search keyword and exit
    #[arg(long, value_name = "KEYWORD")]
    pub show_request: Option<String>,

    /// Platform for --show-request (twitter, reddit, news)
    #[arg(long, default_value = "twitter")]
    pub platform: String,

    /// Timeframe for --show-request (24h, 7d, 30d)
    #[arg(long, default_value = "7d")]
    pub timeframe: String,
}

/// What: Execute the action selected by the command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - `Ok(())` after printing the result; `Err` on unreadable input, bad flags or
///   a malformed payload.
///
/// # Errors
/// - Settings file given with `--config` cannot be read.
/// - Any error from the selected handler.
///
/// Details:
/// - `--show-request` takes precedence and does not read any input.
pub fn run(args: &Args) -> Result<()> {
    let settings = Settings::load(args.config.as_deref())?;
    tracing::debug!(
        api_url = %settings.api_url,
        api_version = %settings.api_version,
        format = settings.output_format.as_config_key(),
        "settings resolved"
    );

    if let Some(keyword) = &args.show_request {
        return super::request::handle_show_request(
            &settings,
            keyword,
            &args.platform,
            &args.timeframe,
        );
    }

    super::prepare::handle_prepare(&settings, args.input.as_deref(), args.format.as_deref())
}
