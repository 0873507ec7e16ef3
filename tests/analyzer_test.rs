//! Integration tests for the server-rendered analyzer page.

mod common;

use axum::http::StatusCode;
use common::TestClient;

/// Test that the initial page shows placeholders and the seeded series.
#[tokio::test]
async fn test_initial_page() {
    let client = TestClient::new();
    let (status, body) = client.get("/analyzer").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Savings Rate"));
    assert!(body.contains("Expense Ratio"));
    assert!(body.contains("Investment Potential"));
    assert!(body.contains("\u{2014}"), "placeholder values expected");
    for month in ["Jan", "Feb", "Mar", "Apr", "May", "Jun"] {
        assert!(body.contains(month), "missing seeded period {}", month);
    }
    assert!(body.contains("\u{20b9}5,500"), "seeded June income");
    assert!(body.contains("Needs"));
    assert!(client.session_cookie().is_some(), "session cookie issued");
}

/// Test that the home page redirects to the analyzer.
#[tokio::test]
async fn test_home_redirects_to_analyzer() {
    let client = TestClient::new();
    let (status, _) = client.get("/").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
}

/// Test that an empty form is accepted and ignored.
#[tokio::test]
async fn test_empty_form_redirects_back() {
    let client = TestClient::new();
    let (status, location) = client.post_form("/analyzer", &[]).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/analyzer"));

    let (_, body) = client.get("/analyzer").await;
    assert!(body.contains("\u{2014}"));
}

/// Test a valid submission updates metrics and the last chart point.
#[tokio::test]
async fn test_submit_updates_page() {
    let client = TestClient::new();
    client.get("/analyzer").await;

    assert!(client.analyze("50000", "35000", "10000").await);

    let (status, body) = client.get("/analyzer").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("20.0%"));
    assert!(body.contains("+ Excellent"));
    assert!(body.contains("70.0%"));
    assert!(body.contains("+ High"));
    assert!(body.contains("\u{20b9}5,000"));
    assert!(body.contains("+ Available"));
    // June now carries the submitted figures.
    assert!(body.contains("\u{20b9}50,000"));
    assert!(body.contains("\u{20b9}35,000"));
    assert!(!body.contains("\u{20b9}5,500"));
}

/// Test that invalid input leaves the previous results on the page.
#[tokio::test]
async fn test_invalid_submit_keeps_previous_results() {
    let client = TestClient::new();
    assert!(client.analyze("40000", "38000", "5000").await);
    let (_, before) = client.get("/analyzer").await;
    assert!(before.contains("- Deficit"));
    assert!(before.contains("12.5%"));

    assert!(client.analyze("abc", "38000", "5000").await);
    assert!(client.analyze("", "", "").await);
    assert!(client.analyze("0", "100", "10").await);

    let (_, after) = client.get("/analyzer").await;
    assert_eq!(before, after);
}

/// Test that sessions do not see each other's results.
#[tokio::test]
async fn test_sessions_are_isolated() {
    let client = TestClient::new();
    assert!(client.analyze("50000", "35000", "10000").await);

    let other = client.new_session();
    let (_, body) = other.get("/analyzer").await;
    assert!(!body.contains("20.0%"));
    assert!(body.contains("\u{2014}"));
    assert_eq!(client.state().sessions.len(), 2);
}

/// Test that very large amounts are shown with every digit.
#[tokio::test]
async fn test_large_amount_is_not_truncated() {
    let client = TestClient::new();
    assert!(client.analyze("1e20", "0", "0").await);

    let (status, body) = client.get("/analyzer").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("\u{20b9}10,00,00,00,00,00,00,00,00,000"));
    assert!(!body.contains("92,23,37,20,36,85,47,758"));
}
