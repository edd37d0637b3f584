//! Mock server tests for the REST provider.
//!
//! These tests use wiremock to simulate the hosted backend and verify
//! the provider's behavior without network access or real credentials.

use futures_util::StreamExt;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use aula_core::auth::AuthEvent;
use aula_core::{CollectionId, Error, FieldFilter, IdentityProvider, SortKey};
use aula_core::traits::DocumentStore;
use aula_rest::{Config, RestProvider};

/// Helper to create a provider pointed at a mock server.
fn mock_provider(server: &MockServer) -> RestProvider {
    let config = Config::new("test-key", "demo")
        .unwrap()
        .with_endpoint(&server.uri())
        .unwrap();
    RestProvider::new(config)
}

// ============================================================================
// Authentication Tests
// ============================================================================

#[tokio::test]
async fn test_sign_in_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .and(query_param("key", "test-key"))
        .and(body_json(json!({
            "email": "alice@example.com",
            "password": "secret123",
            "returnSecureToken": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "localId": "u-alice",
            "email": "alice@example.com",
            "displayName": "Alice",
            "idToken": "test-id-token"
        })))
        .mount(&server)
        .await;

    let provider = mock_provider(&server);
    let user = provider
        .sign_in("alice@example.com", "secret123")
        .await
        .unwrap();

    assert_eq!(user.uid, "u-alice");
    assert_eq!(user.display_name.as_deref(), Some("Alice"));
    assert_eq!(provider.current_user().unwrap().uid, "u-alice");
}

#[tokio::test]
async fn test_sign_in_coded_fault() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": "wrong-password",
                "message": "The password is invalid"
            }
        })))
        .mount(&server)
        .await;

    let provider = mock_provider(&server);
    let err = provider
        .sign_in("alice@example.com", "nope")
        .await
        .unwrap_err();

    match err {
        Error::Api(api) => {
            assert_eq!(api.status, 400);
            assert_eq!(api.code.as_deref(), Some("wrong-password"));
        }
        other => panic!("expected api error, got: {:?}", other),
    }
    assert!(provider.current_user().is_none());
}

#[tokio::test]
async fn test_password_reset_posts_oob_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:sendOobCode"))
        .and(body_json(json!({
            "requestType": "PASSWORD_RESET",
            "email": "alice@example.com"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "email": "alice@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = mock_provider(&server);
    provider
        .send_password_reset("alice@example.com")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_subscription_sees_sign_in_and_sign_out() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "localId": "u-alice",
            "idToken": "tok"
        })))
        .mount(&server)
        .await;

    let provider = mock_provider(&server);
    let mut sub = provider.subscribe();

    // Snapshot first: nobody signed in yet.
    assert!(matches!(sub.next().await, Some(AuthEvent::Changed(None))));

    provider.sign_in("alice@example.com", "pw").await.unwrap();
    match sub.next().await {
        Some(AuthEvent::Changed(Some(user))) => assert_eq!(user.uid, "u-alice"),
        other => panic!("unexpected event: {:?}", other),
    }

    provider.sign_out().await.unwrap();
    assert!(matches!(sub.next().await, Some(AuthEvent::Changed(None))));
    assert!(provider.current_user().is_none());
}

// ============================================================================
// Document Query Tests
// ============================================================================

#[tokio::test]
async fn test_query_decodes_documents_in_server_order() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/projects/demo/collections/classes:query"))
        .and(body_json(json!({
            "where": { "field": "category", "equals": "Math" },
            "orderBy": { "field": "title", "direction": "ascending" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "documents": [
                { "id": "c1", "fields": { "title": "Algebra", "category": "Math" } },
                { "id": "c2", "fields": { "title": "Calculus", "category": "Math" } }
            ]
        })))
        .mount(&server)
        .await;

    let provider = mock_provider(&server);
    let collection = CollectionId::new("classes").unwrap();
    let filter = FieldFilter::equals("category", "Math");
    let order = SortKey::ascending("title");

    let records = provider
        .query(&collection, Some(&filter), &order)
        .await
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "c1");
    assert_eq!(records[0].text_field("title"), Some("Algebra"));
    assert_eq!(records[1].text_field("title"), Some("Calculus"));
}

#[tokio::test]
async fn test_query_fault_surfaces_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/projects/demo/collections/seminars:query"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": { "message": "Missing or insufficient permissions" }
        })))
        .mount(&server)
        .await;

    let provider = mock_provider(&server);
    let collection = CollectionId::new("seminars").unwrap();
    let order = SortKey::ascending("date");

    let err = provider.query(&collection, None, &order).await.unwrap_err();
    match err {
        Error::Api(api) => {
            assert_eq!(api.status, 403);
            assert!(api.code.is_none());
            assert_eq!(
                api.message.as_deref(),
                Some("Missing or insufficient permissions")
            );
        }
        other => panic!("expected api error, got: {:?}", other),
    }
}
