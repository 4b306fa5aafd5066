//! Integration tests for repositories and services over a real client.
//!
//! These tests verify the documents, variables and result extraction used
//! for each entity against a mock Admin API.

use std::sync::Arc;

use serde_json::json;
use vendure_admin::models::{
    ComparisonOperator, CreateCustomerInput, ListOptions, OrderStatusUpdateInput, SortOrder,
    UpdateAdminSettingsInput,
};
use vendure_admin::queries::{DELETE_PRODUCT, GET_PRODUCTS};
use vendure_admin::repositories::{
    CustomerRepository, OrderRepository, ProductRepository, ResourceOperation, SettingsRepository,
};
use vendure_admin::services::{CustomerService, ProductService, SettingsService};
use vendure_admin::{AdminClient, AdminClientConfig, ApiUrl, RepositoryError};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates an authenticated client posting to the mock server's `/admin-api`.
fn client_for(server: &MockServer) -> Arc<AdminClient> {
    let config = AdminClientConfig::builder()
        .api_url(ApiUrl::new(format!("{}/admin-api", server.uri())).unwrap())
        .build()
        .unwrap();
    let client = AdminClient::new(config).unwrap();
    client.set_auth_token("test-token");
    Arc::new(client)
}

async fn respond(server: &MockServer, body: serde_json::Value, data: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/admin-api"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_partial_json(body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": data })))
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// Products
// ============================================================================

#[tokio::test]
async fn test_product_pagination_sends_options() {
    let server = MockServer::start().await;
    respond(
        &server,
        json!({
            "query": GET_PRODUCTS,
            "variables": {"options": {"take": 2, "skip": 0, "sort": {"name": "ASC"}}}
        }),
        json!({"products": {
            "items": [
                {"id": "1", "name": "Laptop", "slug": "laptop", "enabled": true},
                {"id": "2", "name": "Tablet", "slug": "tablet", "enabled": false}
            ],
            "totalItems": 14
        }}),
    )
    .await;

    let repository = ProductRepository::new(client_for(&server));
    let options = ListOptions::default()
        .take(2)
        .skip(0)
        .sort_by("name", SortOrder::Asc);
    let page = repository.find_with_pagination(&options).await.unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total_items, 14);
    assert_eq!(page.items[1].slug, "tablet");
}

#[tokio::test]
async fn test_product_find_by_id_null_is_none() {
    let server = MockServer::start().await;
    respond(&server, json!({"variables": {"id": "404"}}), json!({"product": null})).await;

    let repository = ProductRepository::new(client_for(&server));
    assert!(repository.find_by_id("404").await.unwrap().is_none());
}

#[tokio::test]
async fn test_product_delete_reads_deletion_result() {
    let server = MockServer::start().await;
    respond(
        &server,
        json!({"query": DELETE_PRODUCT, "variables": {"id": "1"}}),
        json!({"deleteProduct": {"result": "DELETED", "message": null}}),
    )
    .await;

    let repository = ProductRepository::new(client_for(&server));
    assert!(repository.delete("1").await.unwrap());
}

#[tokio::test]
async fn test_product_service_search_merges_filters() {
    let server = MockServer::start().await;
    respond(
        &server,
        json!({"variables": {"options": {
            "take": 10,
            "filter": {"enabled": {"eq": true}, "name": {"contains": "lap"}}
        }}}),
        json!({"products": {"items": [], "totalItems": 0}}),
    )
    .await;

    let service = ProductService::from_executor(client_for(&server));
    let options = ListOptions::default()
        .take(10)
        .filter_field("enabled", ComparisonOperator::Eq(json!(true)));
    let page = service.search_products("lap", &options).await.unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.total_items, 0);
}

// ============================================================================
// Orders
// ============================================================================

#[tokio::test]
async fn test_order_create_is_unsupported() {
    let server = MockServer::start().await;
    let repository = OrderRepository::new(client_for(&server));

    let error = repository.create(&json!({})).await.unwrap_err();
    assert!(matches!(
        error,
        RepositoryError::Unsupported {
            resource: "Order",
            operation: ResourceOperation::Create
        }
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_order_status_transition() {
    let server = MockServer::start().await;
    respond(
        &server,
        json!({"variables": {"id": "7", "state": "Shipped"}}),
        json!({"transitionOrderToState": {"id": "7", "code": "X1", "state": "Shipped"}}),
    )
    .await;

    let repository = OrderRepository::new(client_for(&server));
    let order = repository
        .update_order_status(&OrderStatusUpdateInput::new("7", "Shipped"))
        .await
        .unwrap();
    assert_eq!(order.state, "Shipped");
}

#[tokio::test]
async fn test_order_status_transition_error_is_rejected() {
    let server = MockServer::start().await;
    respond(
        &server,
        json!({"variables": {"id": "7"}}),
        json!({"transitionOrderToState": {
            "errorCode": "ORDER_STATE_TRANSITION_ERROR",
            "message": "Cannot transition Order from \"AddingItems\" to \"Shipped\"",
            "transitionError": "",
            "fromState": "AddingItems",
            "toState": "Shipped"
        }}),
    )
    .await;

    let repository = OrderRepository::new(client_for(&server));
    let error = repository
        .update_order_status(&OrderStatusUpdateInput::new("7", "Shipped"))
        .await
        .unwrap_err();

    match error {
        RepositoryError::Rejected { resource, code, .. } => {
            assert_eq!(resource, "Order");
            assert_eq!(code, "ORDER_STATE_TRANSITION_ERROR");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

// ============================================================================
// Customers
// ============================================================================

#[tokio::test]
async fn test_customer_create_conflict_is_rejected() {
    let server = MockServer::start().await;
    respond(
        &server,
        json!({"variables": {"input": {"emailAddress": "ann@example.com"}}}),
        json!({"createCustomer": {
            "errorCode": "EMAIL_ADDRESS_CONFLICT_ERROR",
            "message": "The email address is not available."
        }}),
    )
    .await;

    let repository = CustomerRepository::new(client_for(&server));
    let input = CreateCustomerInput {
        first_name: "Ann".to_string(),
        last_name: "Lee".to_string(),
        email_address: "ann@example.com".to_string(),
        ..CreateCustomerInput::default()
    };
    let error = repository.create(&input).await.unwrap_err();

    assert!(matches!(
        error,
        RepositoryError::Rejected { ref code, .. } if code == "EMAIL_ADDRESS_CONFLICT_ERROR"
    ));
}

#[tokio::test]
async fn test_customer_service_lookup_by_email() {
    let server = MockServer::start().await;
    respond(
        &server,
        json!({"variables": {"options": {"filter": {"emailAddress": {"eq": "ann@example.com"}}}}}),
        json!({"customers": {"items": [
            {"id": "5", "firstName": "Ann", "lastName": "Lee", "emailAddress": "ann@example.com"}
        ], "totalItems": 1}}),
    )
    .await;

    let service = CustomerService::from_executor(client_for(&server));
    let customer = service
        .get_customer_by_email("ann@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(customer.first_name, "Ann");
}

// ============================================================================
// Settings
// ============================================================================

#[tokio::test]
async fn test_settings_get_and_update() {
    let server = MockServer::start().await;
    respond(
        &server,
        json!({"variables": {"input": {"trackInventory": false}}}),
        json!({"updateGlobalSettings": {
            "id": "1", "availableLanguages": ["en"], "trackInventory": false, "outOfStockThreshold": 0
        }}),
    )
    .await;

    let repository = SettingsRepository::new(client_for(&server));
    let input = UpdateAdminSettingsInput {
        track_inventory: Some(false),
        ..UpdateAdminSettingsInput::default()
    };
    let settings = repository.update_settings(&input).await.unwrap();
    assert!(!settings.track_inventory);
}

#[tokio::test]
async fn test_settings_service_threshold() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin-api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"globalSettings": {
            "id": "1", "availableLanguages": ["en", "de"], "trackInventory": true, "outOfStockThreshold": 5
        }}})))
        .mount(&server)
        .await;

    let service = SettingsService::from_executor(client_for(&server));
    assert_eq!(service.get_out_of_stock_threshold().await.unwrap(), 5);
    assert_eq!(
        service.get_available_languages().await.unwrap(),
        vec!["en".to_string(), "de".to_string()]
    );
}
