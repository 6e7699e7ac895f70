//! Request construction: URL joining, query-parameter application,
//! content-type-driven body derivation, and final assembly.

use restline_core::{Method, ParamMap};
use url::Url;

use crate::error::{RestError, RestResult};

/// A fully assembled request, ready for the transport.
///
/// Built fresh for every call and owned by that call; the client's
/// mutable stores are never shared with an in-flight request.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub url: Url,
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// Derives the final URL and body from the declared parameter stores.
pub struct RequestBuilder;

impl RequestBuilder {
    /// Join a base URL with an endpoint path.
    ///
    /// An absolute path (`/users`) replaces the base path; a relative path
    /// (`users`) appends to it, inserting the missing slash when needed.
    ///
    /// Examples:
    /// - `join("https://api.example.com/v2", "users")` -> `https://api.example.com/v2/users`
    /// - `join("https://api.example.com/v2", "/users")` -> `https://api.example.com/users`
    pub fn join(base_url: &str, path: &str) -> RestResult<String> {
        let mut base = Url::parse(base_url).map_err(|e| {
            RestError::RequestConstruction(format!("invalid base URL '{}': {}", base_url, e))
        })?;

        if path.is_empty() {
            return Ok(base.to_string());
        }

        let joined = if path.starts_with('/') {
            base.join(path)
        } else {
            let base_path = base.path();
            if !base_path.ends_with('/') {
                base.set_path(&format!("{}/", base_path));
            }
            base.join(path)
        }
        .map_err(|e| {
            RestError::RequestConstruction(format!(
                "cannot join '{}' with '{}': {}",
                base_url, path, e
            ))
        })?;

        Ok(joined.to_string())
    }

    /// Assemble a request descriptor from the declared components.
    ///
    /// Fails with [`RestError::RequestConstruction`] only when the
    /// (possibly query-modified) URL does not parse as a request target,
    /// and with [`RestError::Serialization`] when a JSON body cannot be
    /// serialized.
    pub fn build(
        url: &str,
        method: Method,
        headers: &ParamMap,
        query_params: &ParamMap,
        body_params: &ParamMap,
        raw_body: Option<&[u8]>,
    ) -> RestResult<RequestDescriptor> {
        let target = Self::apply_query(url, query_params);
        let body = Self::derive_body(headers, body_params, raw_body)?;

        let url = Url::parse(&target).map_err(|e| {
            RestError::RequestConstruction(format!("invalid URL '{}': {}", target, e))
        })?;

        // Headers go out verbatim: no deduplication, no name normalization.
        let headers = headers.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();

        Ok(RequestDescriptor { url, method, headers, body })
    }

    /// Append one query item per stored key to `url`.
    ///
    /// An empty store returns the input unchanged, byte for byte. An input
    /// that does not parse as a URL is also returned unchanged; assembly
    /// reports the error instead.
    fn apply_query(url: &str, query_params: &ParamMap) -> String {
        if query_params.is_empty() {
            return url.to_string();
        }

        let mut parsed = match Url::parse(url) {
            Ok(parsed) => parsed,
            Err(_) => return url.to_string(),
        };

        {
            let mut pairs = parsed.query_pairs_mut();
            for (key, value) in query_params.iter() {
                pairs.append_pair(key, value);
            }
        }

        parsed.to_string()
    }

    /// Derive the body bytes from the declared stores.
    ///
    /// The `Content-Type` header (exact key, case-sensitive) selects the
    /// encoding: a JSON content type serializes the body-parameter store as
    /// pretty-printed JSON with keys in lexicographic order, a form content
    /// type percent-encodes `key=value` pairs joined with `&`, and anything
    /// else passes the raw bytes through unchanged.
    fn derive_body(
        headers: &ParamMap,
        body_params: &ParamMap,
        raw_body: Option<&[u8]>,
    ) -> RestResult<Vec<u8>> {
        let content_type = match headers.get("Content-Type") {
            Some(content_type) => content_type,
            None => return Ok(raw_body.map(<[u8]>::to_vec).unwrap_or_default()),
        };

        if content_type.contains("application/json") {
            Ok(serde_json::to_vec_pretty(body_params)?)
        } else if content_type.contains("application/x-www-form-urlencoded") {
            let encoded = body_params
                .iter()
                .map(|(key, value)| {
                    format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
                })
                .collect::<Vec<_>>()
                .join("&");
            Ok(encoded.into_bytes())
        } else {
            Ok(raw_body.map(<[u8]>::to_vec).unwrap_or_default())
        }
    }
}
