//! Route tests driving the full router against mocked platform endpoints

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use learnboard_domain::constants::{LOGIN_FAILED_MESSAGE, PROFILE_LOAD_FAILED_MESSAGE};
use learnboard_domain::{Config, TokenBackend};
use learnboard_lib::{router, AppContext};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{header as header_eq, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SIGNIN_PATH: &str = "/api/auth/signin";
const GRAPHQL_PATH: &str = "/api/graphql-engine/v1/graphql";

fn config_for(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.platform.auth_url = format!("{}{SIGNIN_PATH}", server.uri());
    config.platform.graphql_url = format!("{}{GRAPHQL_PATH}", server.uri());
    config.platform.timeout_secs = 5;
    config.storage.backend = TokenBackend::Memory;
    config
}

async fn app(server: &MockServer) -> (Arc<AppContext>, Router) {
    let ctx = Arc::new(AppContext::start(config_for(server)).await.unwrap());
    (ctx.clone(), router(ctx))
}

async fn mount_signin(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(SIGNIN_PATH))
        .and(header_eq("Authorization", "Basic YWxpY2U6c2VjcmV0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("\"abc123\""))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path(SIGNIN_PATH))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "error": "User does not exist or password incorrect" })),
        )
        .mount(server)
        .await;
}

fn user_row() -> Value {
    json!({
        "id": 7, "login": "alice", "firstName": "Alice", "lastName": "Otieno",
        "email": "alice@example.com", "campus": "kisumu", "auditRatio": 1.25,
        "totalUp": 1200, "totalDown": 960,
        "xpTotal": { "aggregate": { "sum": { "amount": 1500 } } },
        "events": [{ "level": 4 }],
        "xpTransactions": [
            {
                "createdAt": "2024-01-10T09:00:00+00:00",
                "amount": 500,
                "path": "/kisumu/module/go-reloaded"
            },
            {
                "createdAt": "2024-02-01T09:00:00+00:00",
                "amount": 1000,
                "path": "/kisumu/module/ascii-art"
            }
        ],
        "finishedProjects": [
            { "group": { "path": "/kisumu/module/go-reloaded", "status": "finished" } }
        ],
        "currentProjects": [
            { "group": {
                "path": "/kisumu/module/graphql",
                "status": "working",
                "members": [{ "userLogin": "alice" }, { "userLogin": "bob" }]
            } }
        ],
        "setupProjects": [],
        "skills": [{ "type": "skill_go", "amount": 55 }, { "type": "skill_prog", "amount": 30 }]
    })
}

async fn mount_profile(server: &MockServer, body: Value, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(header_eq("Authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn login_request(username: &str, password: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/login")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(format!("username={username}&password={password}")))
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn health_reports_anonymous_session() {
    let server = MockServer::start().await;
    let (_ctx, app) = app(&server).await;

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["authenticated"], false);
}

#[tokio::test]
async fn anonymous_visit_shows_login_form() {
    let server = MockServer::start().await;
    let (_ctx, app) = app(&server).await;

    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"id="loginForm""#));
    assert!(!html.contains(r#"id="profileSection""#));
}

#[tokio::test]
async fn sign_in_renders_dashboard_and_caches_profile() {
    let server = MockServer::start().await;
    mount_signin(&server).await;
    mount_profile(&server, json!({ "data": { "user": [user_row()] } }), 1).await;
    let (ctx, app) = app(&server).await;

    let response = app.clone().oneshot(login_request("alice", "secret")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"<h1 id="user-name">Alice Otieno (alice)</h1>"#));
    assert!(html.contains(r#"<div id="total-xp" class="value">1,500</div>"#));
    assert!(html.contains(r#"<div id="audit-ratio" class="value">1.25</div>"#));
    assert!(html.contains("graphql (alice, bob)"));
    assert!(html.contains(r#"id="skills-chart-svg""#));
    assert_eq!(ctx.session.token().await.as_deref(), Some("abc123"));

    // Second visit reuses the cached profile; the mock expects one fetch.
    let response = app.oneshot(get("/")).await.unwrap();
    let html = body_text(response).await;
    assert!(html.contains("Alice Otieno (alice)"));
}

#[tokio::test]
async fn wrong_password_keeps_username_and_hides_backend_detail() {
    let server = MockServer::start().await;
    mount_signin(&server).await;
    let (ctx, app) = app(&server).await;

    let response = app.oneshot(login_request("alice", "hunter2")).await.unwrap();

    let html = body_text(response).await;
    assert!(html.contains(LOGIN_FAILED_MESSAGE));
    assert!(html.contains(r#"value="alice""#));
    assert!(!html.contains("password incorrect"));
    assert!(!ctx.session.is_authenticated().await);
}

#[tokio::test]
async fn empty_user_list_ends_session_with_alert() {
    let server = MockServer::start().await;
    mount_signin(&server).await;
    mount_profile(&server, json!({ "data": { "user": [] } }), 1).await;
    let (ctx, app) = app(&server).await;

    let response = app.oneshot(login_request("alice", "secret")).await.unwrap();

    let html = body_text(response).await;
    assert_eq!(html.matches(PROFILE_LOAD_FAILED_MESSAGE).count(), 1);
    assert!(html.contains(r#"id="loginForm""#));
    assert!(!ctx.session.is_authenticated().await);
}

#[tokio::test]
async fn logout_redirects_home_and_forgets_session() {
    let server = MockServer::start().await;
    mount_signin(&server).await;
    mount_profile(&server, json!({ "data": { "user": [user_row()] } }), 1).await;
    let (ctx, app) = app(&server).await;
    app.clone().oneshot(login_request("alice", "secret")).await.unwrap();

    let logout = Request::builder().method("POST").uri("/logout").body(Body::empty()).unwrap();
    let response = app.clone().oneshot(logout).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
    assert!(!ctx.session.is_authenticated().await);
    assert!(ctx.dashboard.current_profile().await.is_none());

    let html = body_text(app.oneshot(get("/")).await.unwrap()).await;
    assert!(html.contains(r#"id="loginForm""#));
}
