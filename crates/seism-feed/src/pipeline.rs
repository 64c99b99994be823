use tracing::info;

use crate::decode::decode;
use crate::endpoint::build_url;
use crate::error::FeedError;
use crate::event::DecodeReport;
use crate::fetch::Fetcher;
use crate::http::HttpClient;

/// Run one feed query: build the URL, fetch the body, decode it.
///
/// Each stage fails with its own [`FeedError`] variant, so the shell can tell
/// an empty result apart from an unreachable or malformed feed. An invalid
/// URL skips the fetch entirely.
pub async fn query<C: HttpClient>(
    fetcher: &Fetcher<C>,
    raw_url: &str,
) -> Result<DecodeReport, FeedError> {
    let url = build_url(raw_url).ok_or_else(|| FeedError::InvalidUrl(raw_url.to_string()))?;
    let body = fetcher.fetch_text(&url).await?;
    let report = decode(&body)?;
    info!(
        quakes = report.quakes.len(),
        skipped = report.skipped.len(),
        "feed query complete"
    );
    Ok(report)
}
