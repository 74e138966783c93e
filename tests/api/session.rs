use crate::helpers::{self, TestApp};

#[tokio::test]
async fn a_fresh_browser_has_no_admin_access() {
    // Arrange
    let app = TestApp::spawn().await;

    // Act
    let is_admin = app.is_admin().await;

    // Assert
    assert!(!is_admin);
}

#[tokio::test]
async fn simulated_login_stores_the_admin_session() {
    // Arrange
    let app = TestApp::spawn().await;

    // Act
    let body = app.post_json("/api/session/login").await;

    // Assert
    assert_eq!(body["token"], "test-admin-token-123");
    assert_eq!(body["user"]["role"], "admin");
    assert_eq!(body["user"]["email"], "admin@customwear.com");
    assert!(app.is_admin().await);
}

#[tokio::test]
async fn clearing_the_session_revokes_admin_access() {
    // Arrange
    let app = TestApp::spawn().await;
    app.post_json("/api/session/login").await;

    // Act
    let first = app.post("/api/session/clear").await;
    let second = app.post("/api/session/clear").await;

    // Assert
    assert_eq!(first.status().as_u16(), 204);
    assert_eq!(second.status().as_u16(), 204);
    assert!(!app.is_admin().await);
}

#[tokio::test]
async fn the_status_page_follows_the_session() {
    // Arrange
    let app = TestApp::spawn().await;
    assert!(app.get_home_html().await.contains("No admin session"));

    // Act: Login
    let resp = app.post("/simulate-login").await;

    // Assert
    helpers::assert_redirecting(&resp, "/");

    // Act 2: Follow the redirect
    let html = app.get_home_html().await;

    // Assert 2
    assert!(html.contains("Admin session active"));
    assert!(html.contains("<p><i>Logged in as admin@customwear.com.</i></p>"));

    // Act 3: Clear the session
    let resp = app.post("/clear-session").await;
    helpers::assert_redirecting(&resp, "/");
    let html = app.get_home_html().await;

    // Assert 3
    assert!(html.contains("No admin session"));
    assert!(html.contains("<p><i>Session cleared.</i></p>"));
}
