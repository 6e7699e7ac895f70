use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// String-to-string parameter store used for request headers, URL query
/// parameters, and body parameters.
///
/// Keys are unique and `add` overwrites silently (last write wins). There
/// is no removal operation: a store only grows for the lifetime of the
/// owning client. Entries are kept in lexicographic key order, so derived
/// JSON and form bodies are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamMap {
    values: BTreeMap<String, String>,
}

impl ParamMap {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key-value pair, overwriting any existing value for the key.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Look up the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// The full key-value mapping, in key order.
    pub fn all(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over key-value pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Wire name of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized HTTP response metadata.
///
/// Status-code interpretation is entirely the caller's responsibility;
/// the predicates below are plain range tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    /// Status code copied verbatim from the transport. 0 only when no
    /// recognizable HTTP response was received.
    pub status: u16,
    /// Response headers, names and values flattened to strings.
    pub headers: ParamMap,
    /// Final URL of the exchange, after any transport-level redirects.
    pub url: String,
}

impl Response {
    /// True for 2xx status codes.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// True for 4xx status codes.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// True for 5xx status codes.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }
}
