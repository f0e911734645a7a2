//! The HTTP transport seam.
//!
//! The request executor builds a fully signed [`Request`] and hands it
//! to a [`Transport`]. Production uses a blocking reqwest client with a
//! fixed timeout; tests substitute a mock to exercise the status
//! classification logic without a network.

use std::time::Duration;

use oc_core::{Error, Result};
use url::Url;

/// Fixed per-request timeout. There is no retry and no cancellation
/// primitive beyond this bound.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// An ordered header association with explicit override semantics:
/// setting an existing name (case-insensitive) replaces its value in
/// place, so caller-supplied values win over earlier defaults.
#[derive(Debug, Clone, Default)]
pub struct Headers(Vec<(String, String)>);

impl Headers {
    /// Create an empty header set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a header, replacing any existing value for the same name
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self
            .0
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(&name))
        {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Look up a header value by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over headers in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// A fully constructed, signed outbound request
#[derive(Debug, Clone)]
pub struct Request {
    /// HTTP method
    pub method: reqwest::Method,
    /// Absolute request URL
    pub url: Url,
    /// Final header set, Authorization included
    pub headers: Headers,
    /// Request body (empty for GET/DELETE)
    pub body: Vec<u8>,
}

/// The service's answer, unclassified
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: Vec<u8>,
}

impl Response {
    /// Response body as lossy UTF-8, for error reporting
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// One blocking HTTP exchange. Implementations hold no per-call state.
#[cfg_attr(test, mockall::automock)]
pub trait Transport: Send + Sync {
    /// Perform the exchange. A transport failure (DNS, connection
    /// refused, timeout) is an error; any HTTP status is a success.
    fn send(&self, request: Request) -> Result<Response>;
}

/// Production transport backed by a blocking reqwest client
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Build a transport with the fixed request timeout
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: Request) -> Result<Response> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .body(request.body);

        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }

        let response = builder
            .send()
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|e| Error::Transport(e.to_string()))?
            .to_vec();

        Ok(Response { status, body })
    }
}
