//! Command-line display of the backend calls for a search.

use sentiscope::config::Settings;
use sentiscope::sources::{analyze_call, scrape_call};
use sentiscope::state::{Platform, SearchRequest, Timeframe};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Print the scrape and analyze calls a search would make.
///
/// Inputs:
/// - `settings`: Backend address.
/// - `keyword`, `platform`, `timeframe`: Raw search values from the command line.
///
/// Output:
/// - `Ok(())` after printing both calls.
///
/// # Errors
/// - Blank keyword, unknown platform or timeframe.
///
/// Details:
/// - The analyze body shows a `posts` placeholder; its real content is the scrape response.
pub fn handle_show_request(
    settings: &Settings,
    keyword: &str,
    platform: &str,
    timeframe: &str,
) -> Result<()> {
    let platform = Platform::from_config_key(platform)
        .ok_or_else(|| format!("unknown platform '{platform}' (expected twitter, reddit or news)"))?;
    let timeframe = Timeframe::from_config_key(timeframe)
        .ok_or_else(|| format!("unknown timeframe '{timeframe}' (expected 24h, 7d or 30d)"))?;
    let request = SearchRequest::new(keyword, platform, timeframe).ok_or("search keyword is empty")?;
    tracing::info!(
        keyword = %request.keyword,
        platform = request.platform.as_config_key(),
        timeframe = request.timeframe.as_config_key(),
        "showing backend calls"
    );

    let scrape = scrape_call(&settings.api_url, &settings.api_version, &request)?;
    let analyze = analyze_call(
        &settings.api_url,
        &settings.api_version,
        serde_json::Value::String("<scrape response>".to_string()),
    )?;
    println!("{}", summary_line(&request));
    println!();
    println!("POST {}", scrape.url);
    println!("{}", serde_json::to_string_pretty(&scrape.body)?);
    println!();
    println!("POST {}", analyze.url);
    println!("{}", serde_json::to_string_pretty(&analyze.body)?);
    Ok(())
}

/// One-line description of a search, e.g. `Search "ai" on TWITTER, Last 7 days`.
fn summary_line(request: &SearchRequest) -> String {
    format!(
        "Search \"{}\" on {}, {}",
        request.keyword,
        request.platform.as_config_key(),
        request.timeframe.label()
    )
}
