//! The client orchestrator: owns the declarative parameter stores,
//! dispatches built requests through the transport, and hands back the
//! unified outcome.

use restline_core::{Method, ParamMap};

use crate::error::RestResult;
use crate::request::RequestBuilder;
use crate::response::RestOutcome;
use crate::transport::{ReqwestTransport, Transport};

/// Client configuration.
///
/// The base URL is an explicit per-client value, so multiple clients in
/// the same process can target different hosts.
#[derive(Debug, Clone)]
pub struct RestConfig {
    pub base_url: String,
}

impl RestConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

/// Declarative REST client.
///
/// Populate the header, query-parameter and body-parameter stores (and
/// optionally raw body bytes), then call [`execute`](Self::execute).
/// Configuration methods take `&mut self` while `execute` borrows `&self`,
/// so a store cannot be mutated while a call that uses it is in flight:
/// configure fully, then call.
///
/// Every call assembles its own [`RequestDescriptor`](crate::request::RequestDescriptor),
/// so two `execute` futures from the same client may run concurrently;
/// their completion order is unspecified.
pub struct RestClient<T: Transport = ReqwestTransport> {
    config: RestConfig,
    transport: T,
    headers: ParamMap,
    query_params: ParamMap,
    body_params: ParamMap,
    raw_body: Option<Vec<u8>>,
}

impl RestClient<ReqwestTransport> {
    /// Create a client with the default reqwest-backed transport.
    pub fn new(config: RestConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T: Transport> RestClient<T> {
    /// Create a client over a custom transport.
    pub fn with_transport(config: RestConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            headers: ParamMap::new(),
            query_params: ParamMap::new(),
            body_params: ParamMap::new(),
            raw_body: None,
        }
    }

    /// Declare a request header. Last write per key wins.
    pub fn add_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.headers.add(key, value);
    }

    /// Declare a URL query parameter. Last write per key wins.
    pub fn add_query_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query_params.add(key, value);
    }

    /// Declare a body parameter, consumed by JSON and form content types.
    pub fn add_body_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.body_params.add(key, value);
    }

    /// Set raw body bytes, used when no content type directs otherwise.
    pub fn set_raw_body(&mut self, body: Vec<u8>) {
        self.raw_body = Some(body);
    }

    /// The declared request headers.
    pub fn headers(&self) -> &ParamMap {
        &self.headers
    }

    /// The declared URL query parameters.
    pub fn query_params(&self) -> &ParamMap {
        &self.query_params
    }

    /// The declared body parameters.
    pub fn body_params(&self) -> &ParamMap {
        &self.body_params
    }

    /// Execute a request against `path`, relative to the configured base
    /// URL, and resolve with the normalized outcome.
    ///
    /// The request is assembled from the declared stores; a construction
    /// failure completes the call with `Err` before any network dispatch.
    /// Otherwise exactly one exchange is performed and the returned future
    /// resolves exactly once. Any HTTP status is `Ok`; `Err` means the
    /// request never produced a usable response (including a transport
    /// failure while the body was being read). No retries, no timeout
    /// override, no redirect handling beyond the transport's defaults.
    pub async fn execute(&self, path: &str, method: Method) -> RestResult<RestOutcome> {
        let target = RequestBuilder::join(&self.config.base_url, path)?;
        let request = RequestBuilder::build(
            &target,
            method,
            &self.headers,
            &self.query_params,
            &self.body_params,
            self.raw_body.as_deref(),
        )?;

        tracing::debug!(url = %request.url, method = %method, "dispatching request");
        let reply = self.transport.send(request).await?;
        tracing::debug!(status = reply.status, "reply received");

        Ok(RestOutcome::from_reply(reply))
    }

    /// Download raw bytes from a fully qualified URL.
    ///
    /// A coarse side channel for auxiliary fetches (binary assets at
    /// already-known URLs): `Some` only for a 2xx reply, `None` on any
    /// failure, with no distinguishing detail.
    pub async fn fetch_bytes(&self, url: &str) -> Option<Vec<u8>> {
        match self.transport.download(url).await {
            Ok(reply) => {
                let outcome = RestOutcome::from_reply(reply);
                if outcome.response.is_success() {
                    Some(outcome.data)
                } else {
                    tracing::debug!(status = outcome.response.status, "download refused");
                    None
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "download failed");
                None
            }
        }
    }
}
