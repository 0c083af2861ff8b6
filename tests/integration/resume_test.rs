//! Integration tests for resume CRUD and section updates.

mod helpers;

use http::StatusCode;
use serde_json::json;


#[tokio::test]
async fn test_create_and_get_resume() {
    let app = helpers::TestApp::new();
    let id = app.create_resume("user-1").await;

    let response = app.request("GET", &format!("/api/resumes/{id}"), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    let data = &response.body["data"];
    assert_eq!(data["id"], id.as_str());
    assert_eq!(data["userId"], "user-1");
    assert_eq!(data["isActive"], true);
    assert_eq!(data["firstName"], "Ada");
    assert_eq!(data["contact"]["email"], "ada@example.com");
    assert_eq!(data["createdAt"], data["updatedAt"]);
}

#[tokio::test]
async fn test_create_with_undated_experience_and_blank_links() {
    let app = helpers::TestApp::new();
    let mut body = helpers::sample_resume("user-1");
    body["helpLink"] = json!("");
    body["locations"] = json!([{ "name": "Remote", "link": "" }]);
    body["experiences"] = json!([{ "company": "Acme", "title": "Dev", "contents": [] }]);
    body["educations"] = json!([{
        "company": "University of London",
        "title": "Mathematics",
        "description": "Self-taught"
    }]);

    let response = app.request("POST", "/api/resumes", Some(body)).await;

    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    let data = &response.body["data"];
    assert_eq!(data["helpLink"], "");
    assert_eq!(data["experiences"][0]["company"], "Acme");
    assert!(data["experiences"][0].get("start").is_none());
    assert!(data["educations"][0].get("start").is_none());
}

#[tokio::test]
async fn test_create_with_invalid_email_is_rejected() {
    let app = helpers::TestApp::new();
    let mut body = helpers::sample_resume("user-1");
    body["contact"]["email"] = json!("not-an-email");

    let response = app.request("POST", "/api/resumes", Some(body)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert_eq!(app.stores.resumes.count().await.expect("count"), 0);
}

#[tokio::test]
async fn test_malformed_body_is_a_validation_error() {
    let app = helpers::TestApp::new();
    let req = http::Request::builder()
        .method("POST")
        .uri("/api/resumes")
        .header("Content-Type", "application/json")
        .body(axum::body::Body::from("{\"userId\": "))
        .expect("request");

    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_get_unknown_and_malformed_ids() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/api/resumes/0195f3a2-7c1d-7000-8000-000000000000", None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");

    let response = app.request("GET", "/api/resumes/not-a-uuid", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_by_user_hides_soft_deleted() {
    let app = helpers::TestApp::new();
    let keep = app.create_resume("user-1").await;
    let gone = app.create_resume("user-1").await;
    app.create_resume("user-2").await;

    let response = app
        .request("DELETE", &format!("/api/resumes/{gone}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["message"], "Resume deleted successfully");

    let response = app.request("GET", "/api/users/user-1/resumes", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let listed = response.body["data"].as_array().expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], keep.as_str());

    let response = app
        .request("GET", "/api/users/user-1/resumes?includeInactive=true", None)
        .await;
    assert_eq!(response.body["data"].as_array().expect("list").len(), 2);

    let response = app.request("GET", "/api/resumes", None).await;
    assert_eq!(response.body["data"].as_array().expect("list").len(), 2);

    // Soft-deleted resumes stay readable by id.
    let response = app.request("GET", &format!("/api/resumes/{gone}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["isActive"], false);
}

#[tokio::test]
async fn test_patch_updates_only_supplied_fields() {
    let app = helpers::TestApp::new();
    let id = app.create_resume("user-1").await;
    app.clock.advance(chrono::Duration::minutes(5));

    let response = app
        .request(
            "PATCH",
            &format!("/api/resumes/{id}"),
            Some(json!({ "nick": "countess", "keywords": ["math", "poetry"] })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    let data = &response.body["data"];
    assert_eq!(data["nick"], "countess");
    assert_eq!(data["keywords"], json!(["math", "poetry"]));
    assert_eq!(data["firstName"], "Ada");
    assert_ne!(data["createdAt"], data["updatedAt"]);
}

#[tokio::test]
async fn test_personal_info_and_contact_merge() {
    let app = helpers::TestApp::new();
    let id = app.create_resume("user-1").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/resumes/{id}/personal-info"),
            Some(json!({ "summary": "Mathematician" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["summary"], "Mathematician");
    assert_eq!(response.body["data"]["name"], "Ada Lovelace");

    let response = app
        .request(
            "PATCH",
            &format!("/api/resumes/{id}/contact"),
            Some(json!({ "linkedin": "ada-l" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let contact = &response.body["data"]["contact"];
    assert_eq!(contact["linkedin"], "ada-l");
    assert_eq!(contact["github"], "ada");
    assert_eq!(contact["email"], "ada@example.com");

    let response = app
        .request(
            "PATCH",
            &format!("/api/resumes/{id}/contact"),
            Some(json!({ "email": "broken" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_section_replacement() {
    let app = helpers::TestApp::new();
    let id = app.create_resume("user-1").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/resumes/{id}/skills"),
            Some(json!([
                { "name": "Analysis", "years": 10 },
                { "name": "Poetry", "years": 3.5 }
            ])),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    let skills = response.body["data"]["skills"].as_array().expect("skills");
    assert_eq!(skills.len(), 2);
    assert_eq!(skills[1]["name"], "Poetry");

    let response = app
        .request(
            "PUT",
            &format!("/api/resumes/{id}/contributions"),
            Some(json!([{ "name": "Notes", "link": "https://example.com/notes" }])),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["contributions"][0]["name"], "Notes");

    let response = app
        .request("PUT", &format!("/api/resumes/{id}/about"), Some(json!([])))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["about"], json!([]));
}

#[tokio::test]
async fn test_invalid_section_item_leaves_resume_untouched() {
    let app = helpers::TestApp::new();
    let id = app.create_resume("user-1").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/resumes/{id}/skills"),
            Some(json!([{ "name": "Ok", "years": 1 }, { "name": "Go", "years": -2 }])),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.request("GET", &format!("/api/resumes/{id}"), None).await;
    let skills = response.body["data"]["skills"].as_array().expect("skills");
    assert_eq!(skills.len(), 1);
    assert_eq!(skills[0]["name"], "Mathematics");
}

#[tokio::test]
async fn test_section_update_on_unknown_resume() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "PUT",
            "/api/resumes/0195f3a2-7c1d-7000-8000-000000000000/projects",
            Some(json!([])),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/nothing-here", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}
