//! HTTP exchange behind the gateway.
//!
//! Client-side (csr): real requests via `gloo-net`, raced against a
//! `gloo-timers` timeout. Native builds get a transport that always reports
//! itself unavailable, so gateway logic is exercised in tests through a mock.

use std::fmt;
use std::future::Future;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
        })
    }
}

/// A fully resolved request.
#[derive(Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// Bearer credential for the `Authorization` header.
    pub bearer: Option<String>,
    /// JSON body, sent with `Content-Type: application/json`.
    pub body: Option<String>,
    pub timeout_ms: u32,
}

impl fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("bearer", &self.bearer.as_ref().map(|_| "<redacted>"))
            .field("has_body", &self.body.is_some())
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// No usable response arrived.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {after_ms} ms")]
    Timeout { after_ms: u32 },
    #[error("HTTP is not available outside the browser")]
    Unavailable,
}

/// Sends one request and returns whatever status the server answered with.
pub trait Transport {
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, TransportError>>;
}

/// `fetch`-backed transport used by the running app.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    #[allow(clippy::unused_async)]
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            send_with_timeout(request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(TransportError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
async fn send_with_timeout(request: HttpRequest) -> Result<HttpResponse, TransportError> {
    use futures::future::{Either, select};
    use gloo_net::http::Request;
    use gloo_timers::future::TimeoutFuture;

    let mut builder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
    }
    .header("Accept", "application/json");
    if let Some(token) = &request.bearer {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }
    let built = match request.body {
        Some(body) => builder.header("Content-Type", "application/json").body(body),
        None => builder.build(),
    }
    .map_err(|e| TransportError::Network(e.to_string()))?;

    let exchange = Box::pin(async move {
        let resp = built.send().await?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Ok::<_, gloo_net::Error>(HttpResponse { status, body })
    });
    let timeout = Box::pin(TimeoutFuture::new(request.timeout_ms));

    match select(exchange, timeout).await {
        Either::Left((result, _)) => result.map_err(|e| TransportError::Network(e.to_string())),
        Either::Right(((), _)) => Err(TransportError::Timeout { after_ms: request.timeout_ms }),
    }
}
