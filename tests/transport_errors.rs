//! Transport failures must reach the caller unchanged and without retries.

mod support;

use std::sync::Arc;

use ferroquote_core::{
    ErrorKind, HttpError, QuoteClient, QuoteConfig, QuoteError, ReqwestHttpClient, TransportError,
};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use support::FakeQuoteService;

// =============================================================================
// Recorded transport
// =============================================================================

#[tokio::test]
async fn when_the_transport_fails_the_error_propagates_after_one_attempt() {
    // Given
    let service = Arc::new(FakeQuoteService::failing(HttpError::new(
        "connection failed: refused",
    )));
    let client = QuoteClient::with_http_client(service.clone(), QuoteConfig::default());

    // When
    let error = client
        .query()
        .with_symbols(["C"])
        .expect("valid arguments")
        .execute()
        .await
        .expect_err("transport failure");

    // Then
    assert_eq!(error.kind(), ErrorKind::Transport);
    match error {
        QuoteError::Transport(TransportError::Http(inner)) => {
            assert_eq!(inner.message(), "connection failed: refused");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(service.recorded_requests().len(), 1);
}

#[tokio::test]
async fn when_the_service_rejects_the_request_the_status_is_reported() {
    // Given
    let service = Arc::new(FakeQuoteService::with_status(401));
    let client = QuoteClient::with_http_client(service.clone(), QuoteConfig::default());

    // When
    let error = client
        .query()
        .with_symbols(["C"])
        .expect("valid arguments")
        .execute()
        .await
        .expect_err("non-success status");

    // Then
    assert!(matches!(
        error,
        QuoteError::Transport(TransportError::Status { status: 401, .. })
    ));
    assert_eq!(service.recorded_requests().len(), 1);
}

// =============================================================================
// reqwest transport against a local server
// =============================================================================

fn reqwest_client(server: &MockServer, config: QuoteConfig) -> QuoteClient {
    let config = config.with_base_url(format!("{}/v7/finance/quote", server.uri()));
    QuoteClient::with_http_client(
        Arc::new(ReqwestHttpClient::new(&config.user_agent)),
        config,
    )
}

#[tokio::test]
async fn reqwest_transport_maps_a_live_style_payload() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v7/finance/quote"))
        .and(query_param("symbols", "C,invalidsymbol"))
        .and(query_param("fields", "bid"))
        .and(query_param("crumb", "crumb-1"))
        .and(header("cookie", "B=session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "quoteResponse": {
                "result": [{"symbol": "C", "bid": 61.21, "currency": "USD"}],
                "error": null
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = reqwest_client(
        &server,
        QuoteConfig::default()
            .with_cookie("B=session")
            .with_crumb("crumb-1"),
    );

    // When
    let securities = client
        .query()
        .with_symbols(["C", "invalidsymbol"])
        .and_then(|query| query.with_fields(["Bid"]))
        .expect("valid arguments")
        .execute()
        .await
        .expect("query should succeed");

    // Then
    assert_eq!(securities.len(), 1);
    let c = securities.get("C").expect("C present");
    assert_eq!(c.bid(), Ok(61.21));
    assert_eq!(c.currency(), Ok("USD"));
}

#[tokio::test]
async fn reqwest_transport_sends_no_field_filter_when_none_registered() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v7/finance/quote"))
        .and(query_param("symbols", "C"))
        .and(query_param_is_missing("fields"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"quoteResponse":{"result":[{"symbol":"C"}],"error":null}}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = reqwest_client(&server, QuoteConfig::default());

    // When
    let securities = client
        .query()
        .with_symbols(["C"])
        .expect("valid arguments")
        .execute()
        .await
        .expect("query should succeed");

    // Then
    assert!(securities.contains_symbol("C"));
}

#[tokio::test]
async fn reqwest_transport_reports_server_errors_without_retrying() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v7/finance/quote"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let client = reqwest_client(&server, QuoteConfig::default());

    // When
    let error = client
        .query()
        .with_symbols(["C"])
        .expect("valid arguments")
        .execute()
        .await
        .expect_err("server error");

    // Then
    match error {
        QuoteError::Transport(TransportError::Status { status, body }) => {
            assert_eq!(status, 503);
            assert_eq!(body, "unavailable");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn reqwest_transport_reports_malformed_payloads() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v7/finance/quote"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>Too Many Requests</html>"))
        .mount(&server)
        .await;

    let client = reqwest_client(&server, QuoteConfig::default());

    // When
    let error = client
        .query()
        .with_symbols(["C"])
        .expect("valid arguments")
        .execute()
        .await
        .expect_err("not json");

    // Then
    assert!(matches!(
        error,
        QuoteError::Transport(TransportError::Decode(_))
    ));
}

#[tokio::test]
async fn reqwest_transport_reports_connection_failures_as_http_errors() {
    // Given
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let address = listener.local_addr().expect("local address");
    drop(listener);

    let config =
        QuoteConfig::default().with_base_url(format!("http://{address}/v7/finance/quote"));
    let client = QuoteClient::with_http_client(Arc::new(ReqwestHttpClient::default()), config);

    // When
    let error = client
        .query()
        .with_symbols(["C"])
        .expect("valid arguments")
        .execute()
        .await
        .expect_err("server is gone");

    // Then
    assert!(matches!(
        error,
        QuoteError::Transport(TransportError::Http(_))
    ));
}
