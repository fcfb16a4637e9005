//! Integration tests for the Zoho Inventory client.
//!
//! These tests run every resource method against a local mock server and
//! verify the request shape (method, path, auth, query and body) and the
//! classification of responses into success, API errors, transport errors
//! and malformed responses.

use serde_json::json;
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zoho_inventory::{
    AccessToken, BaseUrl, ErrorKind, InventoryClient, InventoryConfig, InventoryError,
};

/// Creates a client pointed at the mock server's `/api/v1`.
fn create_test_client(server: &MockServer) -> InventoryClient {
    let config = InventoryConfig::builder()
        .access_token(AccessToken::new("test-token").unwrap())
        .base_url(BaseUrl::new(format!("{}/api/v1", server.uri())).unwrap())
        .build()
        .unwrap();
    InventoryClient::new(&config)
}

fn ok_body(extra: serde_json::Value) -> serde_json::Value {
    let mut body = json!({"code": 0, "message": "success"});
    if let (Some(map), Some(extra)) = (body.as_object_mut(), extra.as_object()) {
        map.extend(extra.clone());
    }
    body
}

/// Builds the form body the client sends for a `JSONString` payload.
fn json_string_body(payload: &serde_json::Value) -> String {
    format!(
        "authtoken=test-token&JSONString={}",
        urlencoding::encode(&serde_json::to_string(payload).unwrap())
    )
}

// ============================================================================
// Request Shape Tests
// ============================================================================

#[tokio::test]
async fn test_get_item_sends_get_with_token_in_query_and_no_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/items/4815000000044208"))
        .and(query_param("authtoken", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(json!({
            "item": {"item_id": "4815000000044208", "name": "Bolt M6"}
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let response = client.get_item(Some("4815000000044208")).await.unwrap();

    assert_eq!(response.code(), 0);
    assert_eq!(response.as_value()["item"]["name"], "Bolt M6");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_get_item_without_id_lists_all_items() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/items/"))
        .and(query_param("authtoken", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(json!({"items": []}))))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let response = client.get_item(None).await.unwrap();

    assert_eq!(response.get("items"), Some(&json!([])));
}

#[tokio::test]
async fn test_search_item_sends_search_text_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/items/"))
        .and(query_param("authtoken", "test-token"))
        .and(query_param("search_text", "hex bolt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(json!({"items": []}))))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    client.search_item("hex bolt").await.unwrap();
}

#[tokio::test]
async fn test_get_items_passes_filter_and_keeps_configured_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/items/"))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(json!({"items": []}))))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let filter = [
        ("page", "2"),
        ("per_page", "50"),
        ("authtoken", "forged"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    client.get_items(Some(filter)).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let tokens: Vec<String> = requests[0]
        .url
        .query_pairs()
        .filter(|(key, _)| key == "authtoken")
        .map(|(_, value)| value.into_owned())
        .collect();
    assert_eq!(tokens, vec!["test-token".to_string()]);
}

#[tokio::test]
async fn test_get_organizations_info_and_item_group_paths() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/organizations"))
        .and(query_param("authtoken", "test-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(ok_body(json!({"organizations": []}))),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/itemgroups/77"))
        .and(query_param("authtoken", "test-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(ok_body(json!({"item_group": {}}))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    client.get_organizations_info().await.unwrap();
    client.get_item_group("77").await.unwrap();
}

#[tokio::test]
async fn test_create_item_posts_json_string_body() {
    let server = MockServer::start().await;
    let payload = json!({"name": "Bolt M6", "rate": 0.15, "unit": "pcs"});

    Mock::given(method("POST"))
        .and(path("/api/v1/items"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string(json_string_body(&payload)))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(ok_body(json!({"item": {"item_id": "1"}}))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let response = client.create_item(&payload).await.unwrap();
    assert_eq!(response.status(), 201);

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].url.query().is_none());
}

#[tokio::test]
async fn test_update_item_puts_json_string_in_query() {
    let server = MockServer::start().await;
    let updates = json!({"rate": 0.18});

    Mock::given(method("PUT"))
        .and(path("/api/v1/items/42"))
        .and(query_param("authtoken", "test-token"))
        .and(query_param("JSONString", r#"{"rate":0.18}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(json!({}))))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    client.update_item("42", &updates).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_purchase_order_get_and_delete() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/purchaseorders/900"))
        .and(query_param("authtoken", "test-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(ok_body(json!({"purchaseorder": {}}))),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/purchaseorders/900"))
        .and(query_param("authtoken", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "message": "The purchase order has been deleted."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    client.get_purchase_order("900").await.unwrap();
    let deleted = client.delete_purchase_order("900").await.unwrap();
    assert_eq!(deleted.message(), Some("The purchase order has been deleted."));
}

#[tokio::test]
async fn test_create_purchase_order_auto_number_flag() {
    let server = MockServer::start().await;
    let payload = json!({"vendor_id": "460000000026049", "purchaseorder_number": "PO-0042"});

    Mock::given(method("POST"))
        .and(path("/api/v1/purchaseorders"))
        .and(query_param("ignore_auto_number_generation", "true"))
        .and(body_string(json_string_body(&payload)))
        .respond_with(ResponseTemplate::new(201).set_body_json(ok_body(json!({}))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/purchaseorders"))
        .and(query_param("ignore_auto_number_generation", "false"))
        .and(body_string(json_string_body(&payload)))
        .respond_with(ResponseTemplate::new(201).set_body_json(ok_body(json!({}))))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    client.create_purchase_order(&payload, true).await.unwrap();
    client.create_purchase_order(&payload, false).await.unwrap();
}

// ============================================================================
// Response Classification Tests
// ============================================================================

#[tokio::test]
async fn test_success_envelope_is_returned_unchanged() {
    let server = MockServer::start().await;
    let body = json!({"code": 0, "items": [{"item_id": "1"}, {"item_id": "2"}]});
    Mock::given(method("GET"))
        .and(path("/api/v1/items/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let response = client.get_items(None).await.unwrap();

    assert_eq!(response.into_value(), body);
    assert!(client.last_error().is_none());
}

#[tokio::test]
async fn test_api_error_is_returned_and_recorded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/items/1"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"code": 14, "message": "Invalid token"})),
        )
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let error = client.get_item(Some("1")).await.unwrap_err();

    match &error {
        InventoryError::Api { code, message } => {
            assert_eq!(*code, 14);
            assert_eq!(message, "Invalid token");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }

    let last = client.last_error().unwrap();
    assert_eq!(last.kind, ErrorKind::Api);
    assert_eq!(last.code, 14);
    assert_eq!(last.message, "Invalid token");
}

#[tokio::test]
async fn test_successful_call_keeps_previous_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/items/bad"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 2006,
            "message": "Item does not exist."
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/organizations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(json!({}))))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    assert!(client.get_item(Some("bad")).await.is_err());
    client.get_organizations_info().await.unwrap();

    assert_eq!(client.last_error().unwrap().code, 2006);

    client.clear_last_error();
    assert!(client.last_error().is_none());
}

#[tokio::test]
async fn test_non_json_body_is_malformed_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/organizations"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let error = client.get_organizations_info().await.unwrap_err();

    assert!(matches!(
        error,
        InventoryError::MalformedResponse { status: 502, .. }
    ));
    let last = client.last_error().unwrap();
    assert_eq!(last.kind, ErrorKind::MalformedResponse);
    assert_eq!(last.code, 502);
}

#[tokio::test]
async fn test_body_without_code_is_malformed_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/items/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let error = client.get_items(None).await.unwrap_err();

    assert_eq!(error.kind(), Some(ErrorKind::MalformedResponse));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let config = InventoryConfig::builder()
        .access_token(AccessToken::new("secret-token").unwrap())
        .base_url(BaseUrl::new("http://127.0.0.1:1/api/v1").unwrap())
        .build()
        .unwrap();
    let client = InventoryClient::new(&config);

    let error = client.get_organizations_info().await.unwrap_err();

    match &error {
        InventoryError::Transport { code, message } => {
            assert_eq!(*code, 0);
            assert!(!message.is_empty());
            assert!(!message.contains("secret-token"));
        }
        other => panic!("Expected Transport error, got {other:?}"),
    }

    let last = client.last_error().unwrap();
    assert_eq!(last.kind, ErrorKind::Transport);
    assert_eq!(last.code, 0);
}

#[tokio::test]
async fn test_serialization_failure_sends_nothing() {
    use std::collections::HashMap;

    let server = MockServer::start().await;
    let client = create_test_client(&server);

    // JSON object keys must be strings.
    let mut payload: HashMap<(u8, u8), &str> = HashMap::new();
    payload.insert((1, 2), "x");

    let error = client.create_item(&payload).await.unwrap_err();

    assert!(matches!(error, InventoryError::Serialization(_)));
    assert!(client.last_error().is_none());
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Token Rotation Tests
// ============================================================================

#[tokio::test]
async fn test_rotated_token_is_used_for_next_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/organizations"))
        .and(query_param("authtoken", "rotated-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(json!({}))))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = create_test_client(&server);
    client.set_access_token(AccessToken::new("rotated-token").unwrap());
    client.get_organizations_info().await.unwrap();
}
