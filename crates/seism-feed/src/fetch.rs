use std::time::Duration;

use futures_util::StreamExt;
use url::Url;

use crate::error::FetchError;
use crate::http::HttpClient;

/// Connect and read timeouts for one feed query.
///
/// Both are configurable; the defaults are fixed at 15 s connect / 10 s read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub connect: Duration,
    pub read: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_millis(15_000),
            read: Duration::from_millis(10_000),
        }
    }
}

/// Fetches a feed body over an [`HttpClient`].
pub struct Fetcher<C: HttpClient> {
    client: C,
}

impl<C: HttpClient> Fetcher<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// GET the URL and return the whole response body as UTF-8 text.
    ///
    /// The full byte stream is accumulated before decoding, so tokens spanning
    /// chunk boundaries survive intact. The underlying stream is dropped on
    /// every exit path, including a mid-read transport failure; no partial
    /// body is ever returned as success.
    pub async fn fetch_text(&self, url: &Url) -> Result<String, FetchError> {
        let mut stream = self.client.stream(url).await.map_err(FetchError::transport)?;
        let mut body = Vec::new();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(FetchError::transport)?;
            body.extend_from_slice(&chunk);
        }
        String::from_utf8(body).map_err(|err| FetchError::Body(err.utf8_error()))
    }
}
