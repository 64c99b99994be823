use tracing::debug;
use url::Url;

/// Parse `raw` into a URL suitable for a feed query.
///
/// Returns `None` for empty input, syntactically invalid input, or a URL
/// without a host, and logs the rejection. Never panics and never yields a
/// partially-built URL; a `None` means "skip the fetch".
pub fn build_url(raw: &str) -> Option<Url> {
    if raw.is_empty() {
        return None;
    }
    match Url::parse(raw) {
        Ok(url) if url.has_host() => Some(url),
        Ok(url) => {
            debug!(%url, "query URL has no host");
            None
        }
        Err(err) => {
            debug!(raw, %err, "query URL rejected");
            None
        }
    }
}
