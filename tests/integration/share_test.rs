//! Integration tests for shared resume links.

mod helpers;

use http::StatusCode;
use serde_json::{Value, json};

fn share_body(title: &str) -> Value {
    json!({
        "resumeData": { "name": "Ada Lovelace", "skills": ["math"] },
        "title": title,
        "description": "For recruiters"
    })
}

#[tokio::test]
async fn test_create_share_returns_url() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/api/shares", Some(share_body("Ada's CV")))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let data = &response.body["data"];
    let share_id = data["shareId"].as_str().expect("share id");
    assert_eq!(share_id.len(), 12);
    assert_eq!(
        data["shareUrl"],
        format!("https://cv.example.com/share/{share_id}")
    );
    assert_eq!(data["title"], "Ada's CV");
    assert_eq!(data["description"], "For recruiters");
    assert_eq!(data["expiresAt"], Value::Null);
}

#[tokio::test]
async fn test_create_share_requires_title_and_data() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/api/shares", Some(json!({ "resumeData": {"a": 1}, "title": "  " })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request("POST", "/api/shares", Some(json!({ "title": "CV" })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "POST",
            "/api/shares",
            Some(json!({ "resumeData": {"a": 1}, "title": "CV", "expiresInDays": "soon" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_fractional_expiry_days() {
    let app = helpers::TestApp::new();
    let mut body = share_body("Half day");
    body["expiresInDays"] = json!(0.5);
    let share_id = app.create_share(body).await;
    let path = format!("/api/shares/{share_id}");

    app.clock.advance(chrono::Duration::hours(11));
    let response = app.request("GET", &path, None).await;
    assert_eq!(response.status, StatusCode::OK);

    app.clock.advance(chrono::Duration::hours(1));
    let response = app.request("GET", &path, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_each_view_is_counted() {
    let app = helpers::TestApp::new();
    let share_id = app.create_share(share_body("CV")).await;

    for expected in 1..=3 {
        let response = app
            .request("GET", &format!("/api/shares/{share_id}"), None)
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["data"]["viewCount"], expected);
        assert_eq!(response.body["data"]["resumeData"]["name"], "Ada Lovelace");
    }

    let response = app
        .request("GET", &format!("/api/shares/{share_id}/stats"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["viewCount"], 3);
}

#[tokio::test]
async fn test_concurrent_views_are_all_counted() {
    let app = helpers::TestApp::new();
    let share_id = app.create_share(share_body("CV")).await;
    let path = format!("/api/shares/{share_id}");

    let views = (0..20).map(|_| app.request("GET", &path, None));
    for response in futures::future::join_all(views).await {
        assert_eq!(response.status, StatusCode::OK);
    }

    let response = app
        .request("GET", &format!("/api/shares/{share_id}/stats"), None)
        .await;
    assert_eq!(response.body["data"]["viewCount"], 20);
}

#[tokio::test]
async fn test_expired_link_is_not_found_but_has_stats() {
    let app = helpers::TestApp::new();
    let mut body = share_body("Short lived");
    body["expiresInDays"] = json!(1);
    let share_id = app.create_share(body).await;

    let response = app
        .request("GET", &format!("/api/shares/{share_id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    app.clock.advance(chrono::Duration::days(1));

    let response = app
        .request("GET", &format!("/api/shares/{share_id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.body["message"],
        "Shared resume not found or expired"
    );

    let response = app
        .request("GET", &format!("/api/shares/{share_id}/stats"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["isExpired"], true);
    assert_eq!(response.body["data"]["viewCount"], 1);
}

#[tokio::test]
async fn test_private_link_hidden_until_republished() {
    let app = helpers::TestApp::new();
    let share_id = app.create_share(share_body("CV")).await;
    let path = format!("/api/shares/{share_id}");

    let response = app
        .request("PATCH", &path, Some(json!({ "isPublic": false })))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["isPublic"], false);

    let response = app.request("GET", &path, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request(
            "PATCH",
            &path,
            Some(json!({ "isPublic": true, "title": "Updated CV" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["title"], "Updated CV");
    assert_eq!(response.body["data"]["viewCount"], 0);

    let response = app.request("GET", &path, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["title"], "Updated CV");
}

#[tokio::test]
async fn test_update_rejects_blank_title() {
    let app = helpers::TestApp::new();
    let share_id = app.create_share(share_body("CV")).await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/shares/{share_id}"),
            Some(json!({ "title": "" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_share() {
    let app = helpers::TestApp::new();
    let share_id = app.create_share(share_body("CV")).await;
    let path = format!("/api/shares/{share_id}");

    let response = app.request("DELETE", &path, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["message"], "Shared resume deleted successfully");

    let response = app.request("GET", &path, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("DELETE", &path, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_and_malformed_share_ids() {
    let app = helpers::TestApp::new();

    for path in [
        "/api/shares/AAAAAAAAAAAA",
        "/api/shares/bad%20id",
        "/api/shares/AAAAAAAAAAAA/stats",
    ] {
        let response = app.request("GET", path, None).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{path}");
    }
}

#[tokio::test]
async fn test_debug_listing_is_opt_in() {
    let app = helpers::TestApp::new();
    let response = app.request("GET", "/api/debug/shares", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let app = helpers::TestApp::with_debug_endpoints();
    let first = app.create_share(share_body("First")).await;
    app.clock.advance(chrono::Duration::seconds(1));
    let second = app.create_share(share_body("Second")).await;

    let response = app.request("GET", "/api/debug/shares", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let entries = response.body["data"].as_array().expect("entries");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["shareId"], second.as_str());
    assert_eq!(entries[1]["shareId"], first.as_str());
}
