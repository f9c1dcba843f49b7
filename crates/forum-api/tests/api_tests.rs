//! HTTP tests driving the router against the in-memory backend

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use forum_api::{create_app, memory_app_state};
use forum_common::AppConfig;
use forum_core::entities::{Comment, Forum, Post, Report};
use forum_core::value_objects::{AuthorType, DocumentId, ReportLocation};
use forum_db::MemoryStore;

fn test_config() -> AppConfig {
    AppConfig::from_lookup(|key| match key {
        "API_PORT" => Some("0".to_string()),
        "STORE_BACKEND" => Some("memory".to_string()),
        _ => None,
    })
    .unwrap()
}

/// Forum `f1` (members u1, u2) with mallory's post p1 and alice's post p2.
/// `r1` is a post-level report about mallory on p1.
fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();
    let forum_id = DocumentId::new("f1");

    let mut forum = Forum::new(forum_id.clone(), "General".to_string(), "owner".to_string());
    forum.members = vec!["u1".into(), "u2".into()];
    store.insert_forum(forum);

    store.insert_post(Post::new(
        "p1".into(),
        forum_id.clone(),
        "mallory".to_string(),
        "buy now".to_string(),
    ));
    store.insert_post(Post::new(
        "p2".into(),
        forum_id.clone(),
        "alice".to_string(),
        "hello".to_string(),
    ));
    store.insert_comment(Comment::new(
        "c1".into(),
        forum_id.clone(),
        "p2".into(),
        "mallory".to_string(),
        "cheap pills".to_string(),
    ));

    let mut report = Report::new(
        "r1".into(),
        ReportLocation::post(forum_id, "p1".into()),
        "mallory".to_string(),
        AuthorType::User,
        "spam".to_string(),
        "u2".into(),
    );
    report.author_id = Some("u1".into());
    store.insert_report(report);

    store
}

fn test_app(store: &MemoryStore) -> Router {
    create_app(memory_app_state(store, test_config()).unwrap())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_endpoints() {
    let app = test_app(&MemoryStore::new());

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, Method::GET, "/health/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["backend"], "memory");
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let app = test_app(&MemoryStore::new());

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Moderation
// ============================================================================

#[tokio::test]
async fn test_ban_endpoint_runs_cascade() {
    let store = seeded_store();
    let app = test_app(&store);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/forums/f1/reports/r1/ban",
        Some(json!({ "admin_id": "admin-1", "reason": "spam" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["author"]["author_name"], "mallory");
    assert_eq!(body["author"]["source"], "post");
    assert_eq!(body["deleted"]["posts"], 1);
    assert_eq!(body["deleted"]["comments"], 1);
    assert_eq!(body["notified"], true);
    assert_eq!(body["ban"]["status"], "banned");
    assert!(!store.has_content_by(&"f1".into(), "mallory"));

    let (status, body) = send(&app, Method::GET, "/api/v1/forums/f1/bans", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (_, body) = send(&app, Method::GET, "/api/v1/bans", None).await;
    assert_eq!(body[0]["report_id"], "r1");
}

#[tokio::test]
async fn test_ban_rejects_invalid_body() {
    let store = seeded_store();
    let app = test_app(&store);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/forums/f1/reports/r1/ban",
        Some(json!({ "admin_id": "admin-1", "reason": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["details"]["reason"].is_array());

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/forums/f1/reports/r1/ban",
        Some(json!({ "admin_id": "admin-1", "reason": "   " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "REASON_REQUIRED");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/forums/f1/reports/r1/ban",
        Some(json!({ "reason": "spam" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_BODY");

    assert_eq!(store.counts().banned_users, 0);
}

#[tokio::test]
async fn test_suspend_endpoint() {
    let store = seeded_store();
    let app = test_app(&store);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/forums/f1/reports/r1/suspend",
        Some(json!({ "admin_id": "admin-1", "reason": "rude", "days": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["suspension"]["author_name"], "mallory");
    assert_eq!(body["suspension"]["active"], true);
    assert_eq!(store.counts().reports, 0);
    assert_eq!(store.counts().posts, 2);

    let (_, body) = send(&app, Method::GET, "/api/v1/forums/f1/suspensions", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = send(&app, Method::GET, "/api/v1/suspensions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["forum_id"], "f1");
    assert_eq!(body[0]["report_id"], "r1");

    // The report is gone now
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/forums/f1/reports/r1/suspend",
        Some(json!({ "admin_id": "admin-1", "reason": "rude" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "UNKNOWN_REPORT");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/forums/f1/reports/r1/suspend",
        Some(json!({ "admin_id": "admin-1", "reason": "rude", "days": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_report_author_lookup() {
    let app = test_app(&seeded_store());

    let (status, body) = send(&app, Method::GET, "/api/v1/forums/f1/reports/r1/author", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["author_name"], "mallory");
    assert_eq!(body["author_id"], "u1");
    assert_eq!(body["resolved"], true);

    let (status, body) =
        send(&app, Method::GET, "/api/v1/forums/f1/reports/nope/author", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["author_name"], "Unknown");
    assert_eq!(body["resolved"], false);
    assert!(body["source"].is_null());
}

// ============================================================================
// Reports and statistics
// ============================================================================

#[tokio::test]
async fn test_submit_report_and_summaries() {
    let app = test_app(&seeded_store());

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/forums/f1/reports",
        Some(json!({
            "post_id": "p2",
            "comment_id": "c1",
            "author_name": "mallory",
            "reason": "spam link",
            "reported_by": "u2"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["level"], "comment");
    assert_eq!(body["author_type"], "Unknown");

    let (status, body) = send(&app, Method::GET, "/api/v1/forums/f1/reports/summary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["forum_title"], "General");
    assert_eq!(body["post_reports"], 1);
    assert_eq!(body["comment_reports"], 1);
    assert_eq!(body["total"], 2);

    let (_, body) = send(&app, Method::GET, "/api/v1/reports/summary", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = send(&app, Method::GET, "/api/v1/forums/nope/reports/summary", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "UNKNOWN_FORUM");
}

#[tokio::test]
async fn test_weekly_posts() {
    let app = test_app(&seeded_store());

    let (status, body) = send(&app, Method::GET, "/api/v1/stats/weekly-posts", None).await;
    assert_eq!(status, StatusCode::OK);
    // Seeded posts are created now, which is always inside the current week
    assert_eq!(body["count"], 2);
    assert!(body["week_start"].is_string());
}

// ============================================================================
// Forum administration
// ============================================================================

#[tokio::test]
async fn test_kick_member() {
    let store = seeded_store();
    let app = test_app(&store);
    let body = json!({ "admin_id": "admin-1" });

    let (status, _) = send(
        &app,
        Method::DELETE,
        "/api/v1/forums/f1/members/u1",
        Some(body.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(store.counts().notifications, 1);

    let (status, response) = send(
        &app,
        Method::DELETE,
        "/api/v1/forums/f1/members/u1",
        Some(body),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response["error"]["code"], "UNKNOWN_MEMBER");
}

#[tokio::test]
async fn test_unknown_forum_listings() {
    let app = test_app(&seeded_store());

    let (status, body) = send(&app, Method::GET, "/api/v1/forums/nope/bans", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "UNKNOWN_FORUM");

    let (status, _) = send(&app, Method::GET, "/api/v1/forums/nope/suspensions", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::GET, "/api/v1/suspensions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_ban_on_unknown_forum_is_rejected() {
    let store = seeded_store();
    let app = test_app(&store);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/forums/ghost/reports/r1/ban",
        Some(json!({ "admin_id": "admin-1", "reason": "spam" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "UNKNOWN_FORUM");
    assert!(body["error"]["details"].is_null());

    let (_, body) = send(&app, Method::GET, "/api/v1/bans", None).await;
    assert!(body.as_array().unwrap().is_empty());
    assert_eq!(store.counts().posts, 2);
}
