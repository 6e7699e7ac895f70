//! Transport seam: the asynchronous HTTP capability the client delegates
//! actual I/O to.

use async_trait::async_trait;
use restline_core::Method;
use url::Url;

use crate::error::{RestError, RestResult};
use crate::request::RequestDescriptor;

/// Raw outcome of one transport round-trip, before normalization.
#[derive(Debug, Clone)]
pub struct RawReply {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
    /// Final URL of the exchange, after any transport-level redirects.
    pub url: String,
}

/// Asynchronous HTTP transport capability.
///
/// The client layer is expressed purely in terms of this trait; the
/// default implementation delegates to `reqwest`. Implementations keep
/// their own timeout and redirect behavior; the client layer never
/// overrides them.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform exactly one HTTP exchange for the given request.
    async fn send(&self, request: RequestDescriptor) -> RestResult<RawReply>;

    /// Raw download of a fully qualified URL with a bare GET.
    async fn download(&self, url: &str) -> RestResult<RawReply> {
        let url = Url::parse(url).map_err(|e| {
            RestError::RequestConstruction(format!("invalid URL '{}': {}", url, e))
        })?;

        self.send(RequestDescriptor {
            url,
            method: Method::Get,
            headers: Vec::new(),
            body: Vec::new(),
        })
        .await
    }
}

/// Transport backed by [`reqwest::Client`].
///
/// Connection pooling, TLS, proxies, timeouts and redirect handling are
/// whatever the wrapped client was built with.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport over a default `reqwest::Client`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already configured `reqwest::Client`.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn http_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: RequestDescriptor) -> RestResult<RawReply> {
        let RequestDescriptor { url, method, headers, body } = request;

        let mut builder = self.client.request(http_method(method), url);
        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.body(body).send().await?;

        let status = response.status().as_u16();
        let url = response.url().to_string();
        let mut headers = Vec::with_capacity(response.headers().len());
        for (name, value) in response.headers() {
            headers.push((
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            ));
        }
        let body = response.bytes().await?.to_vec();

        Ok(RawReply { status, headers, body, url })
    }
}
