use serde_json::json;
use sposecli::error::ApiError;
use sposecli::management::SearchApiClient;
use sposecli::types::SearchCategory;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Helper function to build a client pointed at a mock server
fn client_for(server: &MockServer) -> SearchApiClient {
    SearchApiClient::with_endpoints(
        "test-client-id",
        "test-client-secret",
        &format!("{}/api/token", server.uri()),
        &server.uri(),
    )
}

// Helper function to mount a token endpoint returning a long-lived token
async fn mount_token_endpoint(server: &MockServer, expires_in: u64, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "T",
            "token_type": "Bearer",
            "expires_in": expires_in,
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn search_tracks_round_trip() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 3600, 1).await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Mr. Brightside"))
        .and(query_param("type", "track"))
        .and(query_param("limit", "5"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"tracks": {"items": [{"id": "1"}]}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    let items = client
        .search_tracks("Mr. Brightside", None, None, None)
        .await
        .unwrap();

    assert_eq!(items, vec![json!({"id": "1"})]);
}

#[tokio::test]
async fn every_category_sends_its_type_and_unwraps_its_plural_key() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 3600, 1).await;

    for category in SearchCategory::ALL {
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("type", category.type_param()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                (category.plural_key()): {"items": [{"id": category.type_param()}]}
            })))
            .expect(1)
            .mount(&server)
            .await;
    }

    let mut client = client_for(&server);
    let results = [
        client.search_artists("q", None, None, None).await.unwrap(),
        client.search_albums("q", None, None, None).await.unwrap(),
        client.search_playlists("q", None, None, None).await.unwrap(),
        client.search_tracks("q", None, None, None).await.unwrap(),
        client.search_shows("q", None, None, None).await.unwrap(),
        client.search_episodes("q", None, None, None).await.unwrap(),
        client.search_audiobooks("q", None, None, None).await.unwrap(),
    ];

    for (category, items) in SearchCategory::ALL.iter().zip(results) {
        assert_eq!(items, vec![json!({"id": category.type_param()})]);
    }
}

#[tokio::test]
async fn token_obtained_once_within_validity_window() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 3600, 1).await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"tracks": {"items": []}})),
        )
        .expect(2)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    assert!(client.current_token().is_none());

    client.search_tracks("one", None, None, None).await.unwrap();
    assert!(client.current_token().is_some());

    // Second call well inside the validity window reuses the token; the
    // expect(1) on the token mock verifies no second request was made.
    client.search_tracks("two", None, None, None).await.unwrap();
}

#[tokio::test]
async fn token_refreshed_when_expiring_within_padding() {
    let server = MockServer::start().await;
    // expires_in of 3 seconds is inside the 5-second safety padding, so the
    // token is stale as soon as it is obtained.
    mount_token_endpoint(&server, 3, 2).await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"tracks": {"items": []}})),
        )
        .expect(2)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    client.search_tracks("one", None, None, None).await.unwrap();
    client.search_tracks("two", None, None, None).await.unwrap();
}

#[tokio::test]
async fn explicit_limit_market_and_offset_are_forwarded() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 3600, 1).await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("limit", "10"))
        .and(query_param("market", "DE"))
        .and(query_param("offset", "20"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"albums": {"items": []}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    let items = client
        .search_albums("q", Some(10), Some("DE"), Some(20))
        .await
        .unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn market_and_offset_are_omitted_when_unset() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 3600, 1).await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("limit", "5"))
        .and(query_param_is_missing("market"))
        .and(query_param_is_missing("offset"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"shows": {"items": []}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    let items = client.search_shows("q", None, None, None).await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn invalid_credentials_surface_as_invalid_client() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(400).set_body_string("invalid_client"))
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    let err = client
        .search_tracks("q", None, None, None)
        .await
        .unwrap_err();

    match err {
        ApiError::InvalidClient { body } => assert_eq!(body, "invalid_client"),
        other => panic!("expected InvalidClient, got {other:?}"),
    }
}

#[tokio::test]
async fn search_error_statuses_map_to_typed_errors() {
    fn maps_to_expected_kind(status: u16, err: &ApiError) -> bool {
        match status {
            401 => matches!(err, ApiError::TokenExpired { .. }),
            403 => matches!(err, ApiError::BadOAuth { .. }),
            429 => matches!(err, ApiError::RateLimitExceeded { .. }),
            _ => false,
        }
    }

    for status in [401u16, 403, 429] {
        let server = MockServer::start().await;
        mount_token_endpoint(&server, 3600, 1).await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(status).set_body_string("denied"))
            .mount(&server)
            .await;

        let mut client = client_for(&server);
        let err = client
            .search_artists("q", None, None, None)
            .await
            .unwrap_err();
        assert!(
            maps_to_expected_kind(status, &err),
            "status {status} mapped to {err:?}"
        );
    }
}

#[tokio::test]
async fn unlisted_status_fails_closed() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 3600, 1).await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500).set_body_string("server exploded"))
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    let err = client
        .search_tracks("q", None, None, None)
        .await
        .unwrap_err();

    match err {
        ApiError::UnexpectedStatus { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "server exploded");
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_plural_key_is_a_malformed_response() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 3600, 1).await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": {}})))
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    let err = client
        .search_episodes("q", None, None, None)
        .await
        .unwrap_err();

    match err {
        ApiError::MalformedResponse(context) => assert!(context.contains("episodes")),
        other => panic!("expected MalformedResponse, got {other:?}"),
    }
}
