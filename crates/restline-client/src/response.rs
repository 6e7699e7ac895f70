//! Normalization of transport replies into the uniform outcome shape.

use serde::de::DeserializeOwned;

use restline_core::{ParamMap, Response};

use crate::error::RestResult;
use crate::transport::RawReply;

/// Unified outcome of a completed exchange: raw body bytes plus the
/// normalized response metadata.
///
/// Any HTTP status, 2xx or not, is a normal outcome at this layer;
/// interpreting the status and decoding the body is the caller's job.
#[derive(Debug, Clone)]
pub struct RestOutcome {
    /// Body bytes as received; empty when the server sent no body.
    pub data: Vec<u8>,
    /// Normalized response metadata.
    pub response: Response,
}

impl RestOutcome {
    /// Wrap a raw transport reply.
    pub(crate) fn from_reply(reply: RawReply) -> Self {
        let RawReply { status, headers: raw_headers, body, url } = reply;

        let mut headers = ParamMap::new();
        for (name, value) in raw_headers {
            headers.add(name, value);
        }

        Self { data: body, response: Response { status, headers, url } }
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> RestResult<T> {
        Ok(serde_json::from_slice(&self.data)?)
    }

    /// The body as UTF-8 text, lossily converted.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }
}
