//! Command-line preparation of an analysis payload.

use std::io::Read;
use std::path::Path;

use sentiscope::config::{OutputFormat, Settings};
use sentiscope::sources::parse_analysis;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Read an analysis payload, prepare it and print the result.
///
/// Inputs:
/// - `settings`: Resolved settings (output defaults).
/// - `input`: Payload file; `None` or `-` reads stdin.
/// - `format`: Output format override from the command line.
///
/// Output:
/// - `Ok(())` after writing to stdout.
///
/// # Errors
/// - Unknown `format`, unreadable input, malformed payload, or serialization failure.
pub fn handle_prepare(settings: &Settings, input: Option<&Path>, format: Option<&str>) -> Result<()> {
    let format = match format {
        Some(f) => OutputFormat::from_config_key(f)
            .ok_or_else(|| format!("unknown output format '{f}' (expected json or text)"))?,
        None => settings.output_format,
    };

    let text = read_input(input)?;
    let result = parse_analysis(&text)?;
    let prepared = sentiscope::prepare(&result);
    tracing::info!(
        keywords = prepared.keywords.len(),
        hashtags = prepared.hashtags.len(),
        format = format.as_config_key(),
        "prepared analysis"
    );

    let rendered = match format {
        OutputFormat::Json if settings.pretty_json => serde_json::to_string_pretty(&prepared)?,
        OutputFormat::Json => serde_json::to_string(&prepared)?,
        OutputFormat::Text => sentiscope::report::render_text(&prepared),
    };
    println!("{}", rendered.trim_end());
    Ok(())
}

/// Read the payload from a file, or stdin for `None` / `-`.
fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()).into()),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
