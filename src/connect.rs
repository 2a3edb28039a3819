//! Connection establishment for a remote catalogue endpoint.

use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client as HttpClient;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use tracing::debug;

use crate::error::{Error, Result};

/// The national Earth-observation metadata catalogue this crate was
/// written against. Any CSW 2.0.2 endpoint works.
pub const DEFAULT_ENDPOINT: &str = "https://data.csw.met.no";

/// Environment variable overriding [`DEFAULT_ENDPOINT`] for
/// [`Connector::from_env`].
pub const ENDPOINT_ENV: &str = "CSWSEARCH_ENDPOINT";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Builder for a catalogue [`Connection`].
#[derive(Debug, Clone)]
pub struct Connector {
    endpoint: String,
    timeout: Duration,
    verify: bool,
}

impl Default for Connector {
    fn default() -> Self {
        Self::new()
    }
}

impl Connector {
    /// Connector for [`DEFAULT_ENDPOINT`].
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            verify: true,
        }
    }

    /// Connector for a specific endpoint URL.
    pub fn to(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::new()
        }
    }

    /// Connector honouring the `CSWSEARCH_ENDPOINT` environment variable,
    /// falling back to [`DEFAULT_ENDPOINT`].
    pub fn from_env() -> Self {
        match std::env::var(ENDPOINT_ENV) {
            Ok(endpoint) if !endpoint.trim().is_empty() => Self::to(endpoint),
            _ => Self::new(),
        }
    }

    /// Connect/read timeout applied to every request (default 60 s).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether to verify TLS certificates (default true).
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Opens the connection handle.
    ///
    /// Fails when the endpoint is not an absolute `http`/`https` URL or
    /// when the HTTP client cannot be built; a fetch cannot start without
    /// a successfully opened handle. Nothing is sent to the endpoint yet.
    pub fn connect(&self) -> Result<Connection> {
        let endpoint = Url::parse(&self.endpoint).map_err(|e| Error::Endpoint {
            endpoint: self.endpoint.clone(),
            reason: e.to_string(),
        })?;
        if endpoint.scheme() != "http" && endpoint.scheme() != "https" {
            return Err(Error::Endpoint {
                endpoint: self.endpoint.clone(),
                reason: format!("unsupported scheme {:?}", endpoint.scheme()),
            });
        }

        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("cswsearch/{}", env!("CARGO_PKG_VERSION")))
                .unwrap_or(HeaderValue::from_static("cswsearch")),
        );

        let mut builder = HttpClient::builder()
            .default_headers(default_headers)
            .timeout(self.timeout);

        if !self.verify {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let http = builder.build().map_err(|source| Error::Connect {
            endpoint: self.endpoint.clone(),
            source,
        })?;

        debug!(endpoint = %endpoint, "catalogue connection handle ready");

        Ok(Connection { endpoint, http })
    }
}

/// An open connection handle: the transport a [`Catalogue`]
/// implementation drives its wire exchange over.
///
/// The handle is cheap to clone and must not be shared across concurrent
/// queries; give each query sequence its own.
///
/// [`Catalogue`]: crate::Catalogue
#[derive(Debug, Clone)]
pub struct Connection {
    endpoint: Url,
    http: HttpClient,
}

impl Connection {
    /// Endpoint this handle points at.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Posts one request body to the endpoint and returns the response
    /// body.
    ///
    /// Transport failures propagate as [`Error::Transport`]; non-success
    /// statuses become [`Error::Catalogue`] carrying the status and the
    /// body text.
    pub fn post(&self, body: String) -> Result<String> {
        let resp = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/xml")
            .body(body)
            .send()?;

        let status = resp.status();
        let text = resp.text().unwrap_or_default();
        if !status.is_success() {
            return Err(Error::catalogue(format!(
                "HTTP {} from {}: {}",
                status, self.endpoint, text
            )));
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_connector_opens_a_handle() {
        let connection = Connector::new().connect().unwrap();
        assert_eq!(
            connection.endpoint().trim_end_matches('/'),
            DEFAULT_ENDPOINT
        );
    }

    #[test]
    fn unparseable_endpoint_is_rejected() {
        let err = Connector::to("not a url").connect().unwrap_err();
        assert!(matches!(err, Error::Endpoint { .. }), "got {err:?}");
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let err = Connector::to("ftp://example.org/csw").connect().unwrap_err();
        match err {
            Error::Endpoint { reason, .. } => assert!(reason.contains("ftp"), "got {reason}"),
            other => panic!("expected Endpoint error, got {other:?}"),
        }
    }

    #[test]
    fn timeout_and_verify_are_builder_options() {
        let connection = Connector::to("http://localhost:8000/csw")
            .with_timeout(Duration::from_secs(5))
            .with_verify(false)
            .connect()
            .unwrap();
        assert_eq!(connection.endpoint(), "http://localhost:8000/csw");
    }
}
