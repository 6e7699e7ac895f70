//! Declarative asynchronous HTTP REST client layer.
//!
//! Compose a request from key-value stores (headers, query parameters,
//! body parameters) plus optional raw bytes, execute it on the async
//! runtime, and receive a uniform outcome: raw body bytes plus the
//! normalized response, or a typed error.
//!
//! ```no_run
//! use restline_client::{Method, RestClient, RestConfig};
//!
//! # async fn example() -> restline_client::RestResult<()> {
//! let mut client = RestClient::new(RestConfig::new("https://api.example.com/v1"));
//! client.add_query_param("page", "1");
//!
//! let outcome = client.execute("users", Method::Get).await?;
//! println!("status: {}", outcome.response.status);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod request;
pub mod response;
pub mod transport;

#[cfg(test)]
mod integration_tests;

pub use client::{RestClient, RestConfig};
pub use error::{RestError, RestResult};
pub use request::{RequestBuilder, RequestDescriptor};
pub use response::RestOutcome;
pub use transport::{RawReply, ReqwestTransport, Transport};

// Re-export the data model
pub use restline_core::{Method, ParamMap, Response};
