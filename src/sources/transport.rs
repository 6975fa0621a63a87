//! HTTP transport seam used by the fetch client and refresh orchestrator.

use std::future::Future;

use rand::RngExt;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::debug;

use crate::config::Settings;
use crate::sources::error::TransportError;

/// Header carrying the per-request correlation id, in both directions.
pub const CORRELATION_HEADER: &str = "X-Correlation-ID";

/// Status line and body of one completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// Numeric HTTP status.
    pub status: u16,
    /// Response body decoded as UTF-8 text.
    pub body: String,
    /// Correlation id echoed by the server, if any.
    pub correlation_id: Option<String>,
}

impl HttpResponse {
    /// What: Check for a 2xx status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Performs GET requests against backend paths.
///
/// Implementations resolve `path` (which may carry a query string) against
/// their own base URL. Any HTTP status is a successful exchange; only
/// connectivity problems are errors.
pub trait NewsTransport {
    /// What: Issue one GET request.
    ///
    /// Inputs:
    /// - `path`: Absolute path plus optional query, e.g. `/api/refresh/status`
    ///
    /// Output:
    /// - `Ok(HttpResponse)` for any completed exchange; `Err` on connectivity failure.
    fn get(&self, path: &str) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

/// `reqwest`-backed transport with connection pooling.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    /// Shared pooled client.
    client: reqwest::Client,
    /// Base URL without trailing slash.
    base_url: String,
}

impl HttpTransport {
    /// What: Build a transport from settings.
    ///
    /// Inputs:
    /// - `settings`: Supplies base URL and timeouts
    ///
    /// Output:
    /// - `Ok(HttpTransport)`; `Err` if the TLS backend or client cannot be initialized.
    ///
    /// # Errors
    /// - Returns `Err` when `reqwest::Client::builder().build()` fails.
    pub fn new(settings: &Settings) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .user_agent(format!("newsboard/{}", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;
        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
        })
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl NewsTransport for HttpTransport {
    async fn get(&self, path: &str) -> Result<HttpResponse, TransportError> {
        let url = format!("{}{path}", self.base_url);
        let correlation_id = new_correlation_id();
        let resp = self
            .client
            .get(&url)
            .header(CORRELATION_HEADER, correlation_id.as_str())
            .send()
            .await?;
        let status = resp.status().as_u16();
        let echoed = resp
            .headers()
            .get(CORRELATION_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = resp.text().await?;
        debug!(
            url = %url,
            status,
            bytes = body.len(),
            correlation_id = %echoed.as_deref().unwrap_or(&correlation_id),
            "GET completed"
        );
        Ok(HttpResponse {
            status,
            body,
            correlation_id: echoed,
        })
    }
}

/// What: Generate a random 16-hex-digit correlation id.
fn new_correlation_id() -> String {
    let n: u64 = rand::rng().random_range(0..=u64::MAX);
    format!("{n:016x}")
}
