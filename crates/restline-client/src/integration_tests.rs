//! End-to-end tests against a local mock server.

use httpmock::prelude::*;

use crate::client::{RestClient, RestConfig};
use crate::error::RestError;
use restline_core::Method;

#[tokio::test(flavor = "multi_thread")]
async fn get_with_query_parameters() {
    let server = MockServer::start();
    let m = server.mock(|when, then| {
        when.method(GET).path("/api/users").query_param("page", "1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "page": 1,
                "data": [{"id": 1, "first_name": "George"}]
            }));
    });

    let mut client = RestClient::new(RestConfig::new(server.base_url()));
    client.add_query_param("page", "1");

    let outcome = client.execute("/api/users", Method::Get).await.unwrap();

    m.assert();
    assert_eq!(outcome.response.status, 200);
    assert!(outcome.response.is_success());
    // Header names come back flattened to lowercase strings
    assert_eq!(outcome.response.headers.get("content-type"), Some("application/json"));

    let body: serde_json::Value = outcome.json().unwrap();
    assert_eq!(body["page"], 1);
    assert_eq!(body["data"][0]["first_name"], "George");
}

#[tokio::test(flavor = "multi_thread")]
async fn post_json_body_from_body_params() {
    let server = MockServer::start();
    let m = server.mock(|when, then| {
        when.method(POST)
            .path("/api/users")
            .header("content-type", "application/json")
            .json_body(serde_json::json!({"name": "John", "job": "Developer"}));
        then.status(201).json_body(serde_json::json!({"id": "7"}));
    });

    let mut client = RestClient::new(RestConfig::new(server.base_url()));
    client.add_header("Content-Type", "application/json");
    client.add_body_param("name", "John");
    client.add_body_param("job", "Developer");

    let outcome = client.execute("/api/users", Method::Post).await.unwrap();

    m.assert();
    assert_eq!(outcome.response.status, 201);
}

#[tokio::test(flavor = "multi_thread")]
async fn post_form_body_from_body_params() {
    let server = MockServer::start();
    let m = server.mock(|when, then| {
        when.method(POST)
            .path("/login")
            .header("content-type", "application/x-www-form-urlencoded")
            // Store iteration is key-ordered, so the encoding is stable
            .body("password=secret%20word&user=jane");
        then.status(204);
    });

    let mut client = RestClient::new(RestConfig::new(server.base_url()));
    client.add_header("Content-Type", "application/x-www-form-urlencoded");
    client.add_body_param("user", "jane");
    client.add_body_param("password", "secret word");

    let outcome = client.execute("/login", Method::Post).await.unwrap();

    m.assert();
    assert_eq!(outcome.response.status, 204);
    assert!(outcome.data.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn lowercase_content_type_key_is_not_recognized() {
    let server = MockServer::start();
    // The store lookup is case-sensitive: a lowercase key does not select
    // a body encoding, so the body stays empty; the header itself still
    // goes out verbatim.
    let m = server.mock(|when, then| {
        when.method(POST).path("/api/users").header("content-type", "application/json").body("");
        then.status(200);
    });

    let mut client = RestClient::new(RestConfig::new(server.base_url()));
    client.add_header("content-type", "application/json");
    client.add_body_param("name", "John");

    let outcome = client.execute("/api/users", Method::Post).await.unwrap();

    m.assert();
    assert_eq!(outcome.response.status, 200);
}

#[tokio::test(flavor = "multi_thread")]
async fn raw_body_passes_through_for_other_content_types() {
    let server = MockServer::start();
    let m = server.mock(|when, then| {
        when.method(PUT)
            .path("/blobs/1")
            .header("content-type", "application/octet-stream")
            .body("binary payload");
        then.status(200);
    });

    let mut client = RestClient::new(RestConfig::new(server.base_url()));
    client.add_header("Content-Type", "application/octet-stream");
    client.set_raw_body(b"binary payload".to_vec());

    let outcome = client.execute("/blobs/1", Method::Put).await.unwrap();

    m.assert();
    assert_eq!(outcome.response.status, 200);
}

#[tokio::test(flavor = "multi_thread")]
async fn custom_headers_are_attached_verbatim() {
    let server = MockServer::start();
    let m = server.mock(|when, then| {
        when.method(GET).path("/api/me").header("X-Custom-Token", "abc123");
        then.status(200);
    });

    let mut client = RestClient::new(RestConfig::new(server.base_url()));
    client.add_header("X-Custom-Token", "abc123");

    client.execute("/api/me", Method::Get).await.unwrap();
    m.assert();
}

#[tokio::test(flavor = "multi_thread")]
async fn not_found_is_a_normal_outcome() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/users/100");
        then.status(404);
    });

    let client = RestClient::new(RestConfig::new(server.base_url()));
    let outcome = client.execute("/api/users/100", Method::Get).await.unwrap();

    assert_eq!(outcome.response.status, 404);
    assert!(outcome.response.is_client_error());
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_host_is_a_transport_error() {
    // Nothing listens on the discard port
    let client = RestClient::new(RestConfig::new("http://127.0.0.1:9"));

    let err = client.execute("/anything", Method::Get).await.unwrap_err();
    assert!(matches!(err, RestError::Transport(_)));
}

#[tokio::test(flavor = "multi_thread")]
async fn invalid_base_url_fails_before_dispatch() {
    let client = RestClient::new(RestConfig::new("not-a-url"));

    let err = client.execute("/users", Method::Get).await.unwrap_err();
    assert!(matches!(err, RestError::RequestConstruction(_)));
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_bytes_returns_the_payload() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/assets/avatar.jpg");
        then.status(200).body("jpeg bytes");
    });

    let client = RestClient::new(RestConfig::new(server.base_url()));
    let bytes = client.fetch_bytes(&server.url("/assets/avatar.jpg")).await;

    assert_eq!(bytes, Some(b"jpeg bytes".to_vec()));
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_bytes_swallows_server_errors() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/assets/missing.jpg");
        then.status(500);
    });

    let client = RestClient::new(RestConfig::new(server.base_url()));
    assert_eq!(client.fetch_bytes(&server.url("/assets/missing.jpg")).await, None);

    // Unreachable host: also None, never an error
    assert_eq!(client.fetch_bytes("http://127.0.0.1:9/x.jpg").await, None);
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_calls_share_one_client() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/a");
        then.status(200).body("a");
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/b");
        then.status(200).body("b");
    });

    let client = RestClient::new(RestConfig::new(server.base_url()));
    let (a, b) = tokio::join!(
        client.execute("/api/a", Method::Get),
        client.execute("/api/b", Method::Get),
    );

    assert_eq!(a.unwrap().text(), "a");
    assert_eq!(b.unwrap().text(), "b");
}
