//! Integration tests for the catalogue connection transport.
//!
//! A wiremock server stands in for the catalogue endpoint; the blocking
//! connection runs on the blocking pool so it can be driven from async
//! tests.

use cswsearch::{Connector, Error};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn post_round_trips_a_request_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("Content-Type", "application/xml"))
        .and(body_string("<csw:GetRecords/>"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<csw:GetRecordsResponse/>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let endpoint = mock_server.uri();
    let body = tokio::task::spawn_blocking(move || {
        let connection = Connector::to(endpoint).connect()?;
        connection.post("<csw:GetRecords/>".to_string())
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(body, "<csw:GetRecordsResponse/>");
}

#[tokio::test]
async fn non_success_statuses_surface_as_catalogue_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("catalogue exploded"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let endpoint = mock_server.uri();
    let err = tokio::task::spawn_blocking(move || {
        let connection = Connector::to(endpoint).connect()?;
        connection.post("<csw:GetRecords/>".to_string())
    })
    .await
    .unwrap()
    .unwrap_err();

    match err {
        Error::Catalogue(message) => {
            assert!(message.contains("500"), "got {message}");
            assert!(message.contains("catalogue exploded"), "got {message}");
        }
        other => panic!("expected Catalogue error, got {other:?}"),
    }
}
