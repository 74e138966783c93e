use crate::helpers::TestApp;
use admin_smoke::collaborators::{ApiClient, Collaborators, MockDataset, StaticMockData};
use serde_json::json;
use std::sync::Arc;

fn without_products() -> Collaborators {
    let mut dataset = MockDataset::sample();
    dataset.mock_products = Some(json!([]));
    Collaborators::mocked(Arc::new(StaticMockData::new(dataset)))
}

#[tokio::test]
async fn basic_tests_pass_with_well_formed_collaborators() {
    // Arrange
    let app = TestApp::spawn().await;

    // Act
    let body = app.post_json("/api/tests/basic").await;

    // Assert
    assert_eq!(body["passed"], 19);
    assert_eq!(body["failed"], 0);
    assert_eq!(body["total"], 19);
    assert_eq!(body["success"], true);
    assert_eq!(body["results"][0]["type"], "start");
}

#[tokio::test]
async fn basic_tests_leave_an_admin_session_behind() {
    // Arrange
    let app = TestApp::spawn().await;

    // Act
    app.post_json("/api/tests/basic").await;

    // Assert
    assert!(app.is_admin().await);
}

#[tokio::test]
async fn the_final_test_passes_with_well_formed_collaborators() {
    // Arrange
    let app = TestApp::spawn().await;

    // Act
    let body = app.post_json("/api/tests/final").await;

    // Assert
    assert_eq!(body["success"], true);
    assert_eq!(body["summary"]["basicTests"]["total"], 19);
    assert_eq!(body["summary"]["adminCreation"], true);
    assert_eq!(body["summary"]["localStorage"], true);
    assert_eq!(body["summary"]["reduxSimulation"], true);
    assert_eq!(body["summary"]["mockData"], true);
}

#[tokio::test]
async fn an_empty_product_list_only_fails_the_final_test() {
    // Arrange
    let app = TestApp::spawn_with(Some(without_products())).await;

    // Act
    let basic = app.post_json("/api/tests/basic").await;
    let last = app.post_json("/api/tests/final").await;

    // Assert
    assert_eq!(basic["success"], true);
    assert_eq!(basic["total"], 19);
    assert_eq!(last["success"], false);
    assert_eq!(last["error"], "Mock data validation failed: mockProducts");
}

#[tokio::test]
async fn a_missing_admin_api_is_reported_not_raised() {
    // Arrange
    let collaborators = Collaborators::new(
        Arc::new(StaticMockData::default()),
        ApiClient::without_admin_api(),
    );
    let app = TestApp::spawn_with(Some(collaborators)).await;

    // Act
    let basic = app.post_json("/api/tests/basic").await;
    let last = app.post_json("/api/tests/final").await;

    // Assert
    assert_eq!(basic["failed"], 5);
    assert_eq!(basic["success"], false);
    assert_eq!(last["error"], "Basic tests failed");
}

#[tokio::test]
async fn the_html_report_escapes_and_lists_the_log() {
    // Arrange
    let app = TestApp::spawn_with(Some(without_products())).await;

    // Act
    let resp = app.post("/run-final-test").await;

    // Assert
    assert_eq!(resp.status().as_u16(), 200);
    let html = resp.text().await.unwrap();
    assert!(html.contains("Final Test Result: FAILED"));
    assert!(html.contains("Mock data validation failed: mockProducts"));
    assert!(html.contains(r#"<li class="start">"#));

    let html = app.post("/run-tests").await.text().await.unwrap();
    assert!(html.contains("Basic Test Results: PASSED"));
    assert!(html.contains("19 passed, 0 failed, 19 total"));
}
