use axum::body::Body;
use axum::http::Request;
use http_body_util::BodyExt;
use tower::ServiceExt;

use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn healthz_route_returns_empty_ok() {
    let response = base_routes()
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(body.is_empty());
}

#[tokio::test]
async fn healthz_rejects_post() {
    let response = base_routes()
        .oneshot(Request::post("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = base_routes()
        .oneshot(Request::get("/v1/users").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Server-rendered pages
// =============================================================================

fn test_options() -> LeptosOptions {
    LeptosOptions::builder().output_name("splitter").build()
}

async fn get_page(path: &str) -> (StatusCode, String) {
    let response = app(test_options())
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

/// Every `<input ...>` tag in document order.
fn input_tags(html: &str) -> Vec<&str> {
    html.match_indices("<input")
        .map(|(start, _)| {
            let end = html[start..].find('>').map_or(html.len(), |e| start + e);
            &html[start..end]
        })
        .collect()
}

#[tokio::test]
async fn home_page_links_to_both_forms() {
    let (status, html) = get_page("/").await;

    assert_eq!(status, StatusCode::OK);
    let login = html.find(r#"href="/auth/login""#).expect("login link");
    let register = html.find(r#"href="/auth/register""#).expect("register link");
    assert!(login < register);
    assert!(html.contains("Sign In"));
    assert!(html.contains("Sign Up"));
}

#[tokio::test]
async fn login_page_renders_required_email_input() {
    let (status, html) = get_page("/auth/login").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"<form class="auth-form""#));
    let inputs = input_tags(&html);
    assert_eq!(inputs.len(), 1, "{html}");
    assert!(inputs[0].contains(r#"type="email""#));
    assert!(inputs[0].contains(r#"placeholder="Email""#));
    assert!(inputs[0].contains("required"));
    assert!(html.contains(r#"type="submit""#));
}

#[tokio::test]
async fn register_page_renders_name_then_email() {
    let (status, html) = get_page("/auth/register").await;

    assert_eq!(status, StatusCode::OK);
    let inputs = input_tags(&html);
    assert_eq!(inputs.len(), 2, "{html}");
    assert!(inputs[0].contains(r#"type="text""#));
    assert!(inputs[0].contains(r#"placeholder="Name""#));
    assert!(inputs[1].contains(r#"type="email""#));
    assert!(inputs[1].contains(r#"placeholder="Email""#));
    assert!(inputs.iter().all(|tag| tag.contains("required")));
}

#[tokio::test]
async fn dashboard_is_not_served() {
    let (status, _) = get_page("/dashboard").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn healthz_survives_full_app() {
    let (status, body) = get_page("/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}
