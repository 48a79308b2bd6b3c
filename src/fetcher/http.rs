//! HTTP fetcher backed by reqwest

use encoding_rs::{Encoding, UTF_8};
use reqwest::Client as ReqwestClient;
use reqwest::header::CONTENT_TYPE;
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

use super::{FetchError, FetchResult, FetchedPage, PageFetcher};
use crate::config::Settings;
use crate::error::Result;

/// Fetches pages over HTTP with a fixed timeout and User-Agent
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    /// The underlying reqwest client
    client: ReqwestClient,

    /// Timeout applied to each request, kept for error reporting
    timeout: Duration,
}

impl HttpFetcher {
    /// Create a fetcher from run settings
    pub fn new(settings: &Settings) -> Result<Self> {
        Self::with_timeout(settings.timeout(), &settings.user_agent)
    }

    /// Create a fetcher with an explicit timeout and User-Agent
    pub fn with_timeout(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, timeout })
    }
}

impl PageFetcher for HttpFetcher {
    #[instrument(skip(self), level = "debug")]
    async fn fetch(&self, url: &str) -> FetchResult {
        let start = Instant::now();

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(e, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            debug!("{} returned {}", url, status);
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let charset = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(charset_label)
            .map(str::to_string);
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::from_reqwest(e, self.timeout))?;
        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        debug!("Fetched {} bytes from {} in {}ms", body.len(), url, elapsed_ms);
        Ok(FetchedPage {
            html: decode_body(&body, charset.as_deref()),
            elapsed_ms,
            status: status.as_u16(),
            content_length: body.len(),
        })
    }
}

/// The `charset` parameter of a Content-Type header value
fn charset_label(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        name.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"'))
    })
}

/// Decode a response body, defaulting to UTF-8
///
/// A byte order mark takes precedence over the declared charset. Invalid
/// sequences become U+FFFD.
fn decode_body(body: &[u8], charset: Option<&str>) -> String {
    let encoding = charset
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8);
    let (text, _, _) = encoding.decode(body);
    text.into_owned()
}
