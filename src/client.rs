//! HTTP client
//!
//! [`HTTPClient`] is the seam between the vault operations and the network:
//! one call, one HTTP exchange. [`Client`] implements it on top of [`hyper`];
//! tests and alternative stacks provide their own implementation.

use std::time::Duration;

use async_trait::async_trait;
use hyper::body::Bytes;
use hyper::client::HttpConnector;
use hyper::{header, Body, Method, Request, Response, StatusCode};
use log::{debug, trace};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::{Error, ServeResult, TransportError};

/// Base URL used when `BW_SERVE_URL` is not set; `bw serve` listens on port 8087 by default.
pub const DEFAULT_URL: &str = "http://localhost:8087";

/// Environment variable read by [`Client::default`].
pub const URL_ENV: &str = "BW_SERVE_URL";

/// A transport able to perform a single HTTP exchange against the vault server.
#[async_trait]
pub trait HTTPClient: Send + Sync {
    /// Base URL of the vault server, without a trailing slash.
    fn url(&self) -> &str;

    /// Send `request` and return the response with its body fully read.
    async fn send_request(&self, request: Request<Body>)
        -> Result<Response<Bytes>, TransportError>;
}

/// [`HTTPClient`] backed by a pooled [`hyper::Client`].
///
/// The vault server holds all lock state; this type only stores the base URL,
/// the optional timeout and the connection pool, so it is cheap to clone and
/// safe to share between tasks.
#[derive(Debug, Clone)]
pub struct Client {
    url: String,
    timeout: Option<Duration>,
    inner: hyper::Client<HttpConnector, Body>,
}

impl Client {
    /// Create a client for the vault server listening at `url`, e.g. `http://localhost:8087`.
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into().trim_end_matches('/').to_string();

        Self {
            url,
            timeout: None,
            inner: hyper::Client::new(),
        }
    }

    /// Abandon any exchange that takes longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for Client {
    /// Reads the base URL from `BW_SERVE_URL`, falling back to [`DEFAULT_URL`].
    fn default() -> Self {
        let url = std::env::var(URL_ENV).unwrap_or_else(|_| DEFAULT_URL.to_string());
        Self::new(url)
    }
}

#[async_trait]
impl HTTPClient for Client {
    fn url(&self) -> &str {
        &self.url
    }

    async fn send_request(
        &self,
        request: Request<Body>,
    ) -> Result<Response<Bytes>, TransportError> {
        let exchange = async move {
            let response = self.inner.request(request).await?;
            let (parts, body) = response.into_parts();
            let body = hyper::body::to_bytes(body).await?;
            Ok::<_, hyper::Error>(Response::from_parts(parts, body))
        };

        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, exchange)
                .await
                .map_err(|_| TransportError::TimedOut(limit))?
                .map_err(TransportError::Hyper),
            None => exchange.await.map_err(TransportError::Hyper),
        }
    }
}

/// The `{"data": ...}` envelope `bw serve` wraps its payloads in
#[derive(Debug, Deserialize)]
pub(crate) struct Data<T> {
    pub(crate) data: T,
}

/// Request body placeholder for calls without one.
pub(crate) const NO_BODY: Option<&()> = None;

/// Perform one request and classify the response status.
///
/// The body, when given, is encoded before any I/O happens. Returns the raw
/// response body on `200 OK`.
pub(crate) async fn execute<C, B>(
    client: &C,
    method: Method,
    path: &str,
    body: Option<&B>,
) -> ServeResult<Bytes>
where
    C: HTTPClient + ?Sized,
    B: Serialize + ?Sized,
{
    let url = format!("{}{}", client.url(), path);
    let mut builder = Request::builder().method(method.clone()).uri(url.as_str());

    let body = match body {
        Some(body) => {
            let encoded = serde_json::to_vec(body).map_err(Error::Serialization)?;
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(encoded)
        }
        None => Body::empty(),
    };
    let request = builder.body(body)?;

    debug!("{} {}", method, path);
    let response = client.send_request(request).await?;
    let status = response.status();
    trace!("{} {} -> {}", method, path, status);

    match status {
        StatusCode::OK => Ok(response.into_body()),
        StatusCode::NOT_FOUND => Err(Error::NotFound),
        StatusCode::BAD_REQUEST => Err(Error::BadRequest),
        other => Err(Error::UnexpectedStatus(other.as_u16())),
    }
}

/// Like [`execute`], decoding the `200 OK` body as JSON into `T`.
pub(crate) async fn execute_json<C, B, T>(
    client: &C,
    method: Method,
    path: &str,
    body: Option<&B>,
) -> ServeResult<T>
where
    C: HTTPClient + ?Sized,
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let body = execute(client, method, path, body).await?;
    serde_json::from_slice(&body).map_err(Error::Decoding)
}
